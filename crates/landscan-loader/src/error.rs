use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("rate limited by {url} (retry after {retry_after_secs}s)")]
    RateLimited { url: String, retry_after_secs: u64 },

    #[error("sheet not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("workbook {context} contains no sheets")]
    NoSheets { context: String },

    #[error("row {row_index} of {context} is not a header/value object")]
    InvalidRow { context: String, row_index: usize },

    #[error("invalid dataset name \"{name}\": {reason}")]
    InvalidDatasetName { name: String, reason: String },

    #[error("invalid sheet URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}
