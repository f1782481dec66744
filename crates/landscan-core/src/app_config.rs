use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory holding `<dataset>.json` sheet exports.
    pub data_dir: PathBuf,
    /// When set, datasets are fetched from `<base_url>/<dataset>.json`
    /// instead of `data_dir`.
    pub base_url: Option<String>,
    pub default_dataset: String,
    pub aliases_path: Option<PathBuf>,
    /// Drop rows whose price is not strictly positive.
    pub require_positive_price: bool,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
}
