//! Application configuration loaded from environment variables.

/// CLI configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `EVENTS_PATH` — event log file (default: `"./events.json"`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub events_path: String,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            events_path: std::env::var("EVENTS_PATH")
                .unwrap_or_else(|_| "./events.json".to_string()),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_path: "./events.json".to_string(),
            log_level: "info".to_string(),
        }
    }
}
