use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::geocode::{AddressRecord, GeocodeError, DEFAULT_RESULT_LIMIT};
use crate::storage::LoggedRequest;

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── GET /api/geocode ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GeocodeQuery {
    pub address: Option<String>,
    pub limit: Option<usize>,
}

pub async fn geocode(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GeocodeQuery>,
) -> Result<Json<Vec<AddressRecord>>, ApiError> {
    let start = Instant::now();

    let address = params.address.as_deref().unwrap_or("").trim();
    if address.is_empty() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Missing 'address' parameter",
        ));
    }
    let limit = params.limit.unwrap_or(DEFAULT_RESULT_LIMIT);

    let records = state
        .geocoder
        .geocode(address, limit)
        .map_err(|e| match e {
            GeocodeError::Http(_) | GeocodeError::Network(_) | GeocodeError::InvalidResponse(_) => {
                api_error(StatusCode::BAD_GATEWAY, format!("{}", e))
            }
            GeocodeError::MissingApiKey => {
                api_error(StatusCode::INTERNAL_SERVER_ERROR, format!("{}", e))
            }
        })?;

    // The raw trimmed address is logged regardless of how many records
    // the filter let through.
    state.log.lock().unwrap().save_unique(address);

    let elapsed = start.elapsed();
    eprintln!(
        "[{}] GET /api/geocode?address={} -> {} records ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        address,
        records.len(),
        elapsed.as_secs_f64() * 1000.0,
    );

    Ok(Json(records))
}

// ─── GET /api/recent ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RecentQuery {
    pub n: Option<usize>,
}

pub async fn recent(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecentQuery>,
) -> Json<Vec<LoggedRequest>> {
    let n = params.n.unwrap_or(10);
    let last = state.log.lock().unwrap().get_last(n);
    Json(last)
}
