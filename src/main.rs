use clap::Parser;
use mosgeo::geocode::{Geocoder, DEFAULT_RESULT_LIMIT};
use mosgeo::storage::RequestLog;

/// Mosgeo — Moscow street address resolver.
///
/// Resolves a free-text address through the Yandex geocoder into clean
/// records: full address, district, nearest metro, street, house, and
/// coordinates. Unique queries are logged locally.
///
/// Examples:
///   mosgeo "Москва, Тверская 7"
///   mosgeo "Тверская 7" --limit 3
///   mosgeo --recent 10
///   mosgeo --serve --port 8080
#[derive(Parser)]
#[command(name = "mosgeo", version, about, long_about = None)]
struct Cli {
    /// Address to resolve. Example: mosgeo "Москва, Тверская 7"
    #[arg(index = 1)]
    address: Option<String>,

    /// Maximum number of records to return.
    #[arg(long, short = 'n', default_value_t = DEFAULT_RESULT_LIMIT)]
    limit: usize,

    /// Yandex geocoder API key. Falls back to $YANDEX_API_KEY.
    #[arg(long)]
    api_key: Option<String>,

    /// Print the last N unique queries and exit.
    #[arg(long)]
    recent: Option<usize>,

    /// Run the HTTP API server instead of a one-shot query.
    #[arg(long)]
    serve: bool,

    /// Server bind host.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server bind port.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn main() {
    let cli = Cli::parse();

    // ── Recent queries need no credential ───────────────────────

    if let Some(n) = cli.recent {
        let log = RequestLog::open();
        for entry in log.get_last(n) {
            println!("{}  {}", entry.created_at, entry.address);
        }
        return;
    }

    // ── Construct the geocoder, failing fast on a missing key ───

    let api_key = cli
        .api_key
        .clone()
        .or_else(|| std::env::var("YANDEX_API_KEY").ok())
        .unwrap_or_default();

    let geocoder = Geocoder::new(api_key).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    // ── Server mode ─────────────────────────────────────────────

    if cli.serve {
        let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("Error: Cannot start runtime: {}", e);
            std::process::exit(1);
        });
        runtime.block_on(mosgeo::server::start(&cli.host, cli.port, geocoder));
        return;
    }

    // ── One-shot resolution ─────────────────────────────────────

    let Some(address) = cli.address.as_deref().map(str::trim).filter(|a| !a.is_empty()) else {
        eprintln!("Error: No address specified.");
        eprintln!();
        eprintln!("Usage:");
        eprintln!("  mosgeo \"Москва, Тверская 7\"");
        eprintln!("  mosgeo \"Тверская 7\" --limit 3");
        eprintln!("  mosgeo --recent 10");
        eprintln!("  mosgeo --serve");
        std::process::exit(1);
    };

    let records = geocoder.geocode(address, cli.limit).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    RequestLog::open().save_unique(address);

    for record in &records {
        eprintln!(
            "  {} — район: {}, метро: {}",
            record.full_address,
            record.district.as_deref().unwrap_or("—"),
            record.metro.as_deref().unwrap_or("—"),
        );
    }
    if records.is_empty() {
        eprintln!("  No Moscow results for '{}'", address);
    }

    // JSON to stdout
    println!("{}", serde_json::to_string_pretty(&records).unwrap());
}
