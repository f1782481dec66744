//! HTTP client for sheet exports published as static files.

use std::time::Duration;

use reqwest::Client;

use crate::error::LoadError;
use crate::retry::retry_with_backoff;
use crate::sheet::{decode_sheet, Sheet};

/// Fetches sheet exports over HTTP.
///
/// 404 and other non-2xx responses map to typed [`LoadError`]s. 429 and
/// network failures are retried with exponential backoff up to
/// `max_retries` additional attempts.
pub struct SheetClient {
    client: Client,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl SheetClient {
    /// Creates a client with the given timeout, `User-Agent`, and retry
    /// policy. `max_retries = 0` disables retries.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Builds a client from the shared application config.
    ///
    /// # Errors
    ///
    /// See [`SheetClient::new`].
    pub fn from_config(config: &landscan_core::AppConfig) -> Result<Self, LoadError> {
        Self::new(
            config.request_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_secs,
        )
    }

    /// Downloads and decodes the sheet export at `url`.
    ///
    /// # Errors
    ///
    /// - [`LoadError::InvalidUrl`]: `url` does not parse.
    /// - [`LoadError::RateLimited`]: HTTP 429 after all retries.
    /// - [`LoadError::NotFound`]: HTTP 404 (not retried).
    /// - [`LoadError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`LoadError::Http`]: network failure after all retries.
    /// - decoding errors from [`decode_sheet`] (not retried).
    pub async fn fetch_sheet(&self, url: &str) -> Result<Sheet, LoadError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| LoadError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        let body = retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let parsed = parsed.clone();
            async move {
                let response = self
                    .client
                    .get(parsed)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .header(reqwest::header::CACHE_CONTROL, "no-cache")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(0);
                    return Err(LoadError::RateLimited {
                        url: url.to_owned(),
                        retry_after_secs,
                    });
                }

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(LoadError::NotFound {
                        url: url.to_owned(),
                    });
                }

                if !status.is_success() {
                    return Err(LoadError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: url.to_owned(),
                    });
                }

                Ok(response.text().await?)
            }
        })
        .await?;

        let sheet = decode_sheet(&body, url)?;
        tracing::info!(
            url,
            rows = sheet.rows().len(),
            hyperlinks = sheet.hyperlink_count(),
            "fetched sheet"
        );
        Ok(sheet)
    }
}
