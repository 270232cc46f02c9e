use crate::app_config::{AppConfig, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if an env var override cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if an env var override cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
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

    let log_level = or_default("PRISM_LOG_LEVEL", "info");
    let http_timeout_secs = parse_u64("PRISM_HTTP_TIMEOUT_SECS", "10")?;
    let connect_timeout_secs = parse_u64("PRISM_CONNECT_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("PRISM_USER_AGENT", DEFAULT_USER_AGENT);
    let max_retries = parse_u32("PRISM_MAX_RETRIES", "0")?;
    let retry_backoff_base_secs = parse_u64("PRISM_RETRY_BACKOFF_BASE_SECS", "1")?;
    let image_concurrency = parse_usize("PRISM_IMAGE_CONCURRENCY", "8")?;

    Ok(AppConfig {
        log_level,
        http_timeout_secs,
        connect_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        image_concurrency,
    })
}
