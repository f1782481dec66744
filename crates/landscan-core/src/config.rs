use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
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

    let env = parse_environment(&or_default("LANDSCAN_ENV", "development"))?;
    let log_level = or_default("LANDSCAN_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("LANDSCAN_DATA_DIR", "./data/list"));
    let base_url = optional("LANDSCAN_BASE_URL").map(|u| u.trim_end_matches('/').to_owned());
    let default_dataset = or_default("LANDSCAN_DEFAULT_DATASET", "Feb012026");
    let aliases_path = optional("LANDSCAN_ALIASES_PATH").map(PathBuf::from);
    let require_positive_price = parse_bool(
        "LANDSCAN_REQUIRE_POSITIVE_PRICE",
        &or_default("LANDSCAN_REQUIRE_POSITIVE_PRICE", "false"),
    )?;

    let request_timeout_secs = parse_u64("LANDSCAN_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("LANDSCAN_USER_AGENT", "landscan/0.1 (listing-explorer)");
    let max_retries = parse_u32("LANDSCAN_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("LANDSCAN_RETRY_BACKOFF_BASE_SECS", "2")?;

    if default_dataset.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "LANDSCAN_DEFAULT_DATASET".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        data_dir,
        base_url,
        default_dataset,
        aliases_path,
        require_positive_price,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "production" => Ok(Environment::Production),
        "test" => Ok(Environment::Test),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LANDSCAN_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
