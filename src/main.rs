use std::net::SocketAddr;

use axum::http::{HeaderValue, Method};
use mimalloc::MiMalloc;
use rentdesk::config::AppConfig;
use rentdesk::services::lookup::LookupService;
use rentdesk::services::store::Store;
use rentdesk::AppState;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// M-MIMALLOC-APP: Use mimalloc as global allocator for improved performance.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rentdesk=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = AppConfig::from_env();

    let mut lookups = LookupService::builtin();
    let store = match &config.seed_file {
        Some(path) => {
            let seed = Store::load_seed_file(path).await?;
            let (store, seed_lookups) = Store::from_seed(seed);
            lookups.extend(seed_lookups);
            store
        }
        None => {
            tracing::info!("No SEED_FILE configured, starting with an empty store");
            Store::new()
        }
    };

    let cors = CorsLayer::new()
        .allow_origin(config.frontend_url.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let state = AppState::new(store, lookups, config);
    let app = rentdesk::routes::router(state, cors);

    tracing::info!(host = %addr, "Starting rentdesk API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
