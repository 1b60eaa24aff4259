use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_API_BASE: &str = "https://api.pub.affiliates.one/api/v2";
pub const DEFAULT_LOCALE: &str = "zh-TW";
pub const DEFAULT_USER_AGENT: &str = "afflink/0.1 (link-converter)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid or the state directory cannot
/// be resolved.
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
/// Returns `ConfigError` if a value is invalid or the state directory cannot
/// be resolved.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
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

    let api_base = or_default("AFFLINK_API_BASE", DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string();
    if api_base.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "AFFLINK_API_BASE".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let locale = or_default("AFFLINK_LOCALE", DEFAULT_LOCALE);
    let per_page = parse_u32("AFFLINK_PER_PAGE", "500")?;
    if per_page == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "AFFLINK_PER_PAGE".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let request_timeout_secs = parse_u64("AFFLINK_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("AFFLINK_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("AFFLINK_LOG_LEVEL", "warn");

    let state_dir = match lookup("AFFLINK_STATE_DIR") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => default_state_dir()?,
    };

    Ok(AppConfig {
        api_base,
        locale,
        per_page,
        request_timeout_secs,
        user_agent,
        log_level,
        state_dir,
    })
}

/// XDG data directory for afflink, e.g. `~/.local/share/afflink`.
fn default_state_dir() -> Result<PathBuf, ConfigError> {
    xdg::BaseDirectories::with_prefix("afflink")
        .map(|dirs| dirs.get_data_home())
        .map_err(|e| ConfigError::StateDir(e.to_string()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
