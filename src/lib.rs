pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod views;

use std::sync::Arc;

use services::currency::CurrencyFormatter;
use services::lookup::LookupService;
use services::store::Store;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub lookups: Arc<LookupService>,
    pub currency: CurrencyFormatter,
    pub config: config::AppConfig,
}

impl AppState {
    pub fn new(store: Store, lookups: LookupService, config: config::AppConfig) -> Self {
        Self {
            store: Arc::new(store),
            lookups: Arc::new(lookups),
            currency: CurrencyFormatter::fixed(config.currency_symbol.clone()),
            config,
        }
    }
}
