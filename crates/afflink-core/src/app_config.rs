use std::path::PathBuf;

/// Runtime configuration for the affiliate client and CLI.
///
/// Holds no secrets; the API key lives in the key store under `state_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the affiliate publisher API, without a trailing slash.
    pub api_base: String,
    pub locale: String,
    pub per_page: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
    /// Directory holding the stored API key.
    pub state_dir: PathBuf,
}
