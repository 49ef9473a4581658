use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::error::ConfigError;

/// Load importer configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load importer configuration from environment variables already in the process.
///
/// Unlike [`load_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_config_from_env() -> Result<AppConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build importer configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let server_url = require("SERVER")?;
    let auth_token = lookup("TOKEN").ok();

    let csv_path = PathBuf::from(or_default("POLISHDB_CSV_PATH", "./notion_dumps/kat.csv"));
    let request_timeout_secs = parse_u64("POLISHDB_REQUEST_TIMEOUT_SECS", "30")?;
    let max_concurrent_rows = parse_usize("POLISHDB_MAX_CONCURRENT_ROWS", "1")?;
    let log_level = or_default("POLISHDB_LOG_LEVEL", "info");

    Ok(AppConfig {
        server_url,
        auth_token,
        csv_path,
        request_timeout_secs,
        max_concurrent_rows,
        log_level,
    })
}
