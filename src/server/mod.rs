mod handlers;
mod state;

use axum::routing::get;
use axum::Router;
use state::AppState;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;

use crate::geocode::Geocoder;
use crate::storage::RequestLog;

pub fn build_router(geocoder: Geocoder, log: RequestLog) -> Router {
    let state = Arc::new(AppState {
        geocoder,
        log: Mutex::new(log),
    });

    Router::new()
        .route("/api/geocode", get(handlers::geocode))
        .route("/api/recent", get(handlers::recent))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(host: &str, port: u16, geocoder: Geocoder) {
    let app = build_router(geocoder, RequestLog::open());
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    eprintln!("  Mosgeo server listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    });
}
