use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub currency_symbol: String,
    pub seed_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            frontend_url: "http://localhost:5173".to_string(),
            currency_symbol: "$".to_string(),
            seed_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("BACKEND_HOST").unwrap_or(defaults.host),
            port: parse_port(env::var("BACKEND_PORT").ok(), defaults.port),
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            currency_symbol: env::var("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            seed_file: env::var("SEED_FILE").ok().filter(|p| !p.trim().is_empty()),
        }
    }
}

/// Parse `BACKEND_PORT`, warning and keeping `default` when it is not a port.
fn parse_port(raw: Option<String>, default: u16) -> u16 {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(port) => port,
        Err(e) => {
            tracing::warn!(value = %raw, error = %e, default, "Invalid BACKEND_PORT, using default");
            default
        }
    }
}
