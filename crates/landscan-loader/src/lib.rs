pub mod client;
pub mod error;
pub mod retry;
pub mod sheet;
pub mod source;
pub mod types;

pub use client::SheetClient;
pub use error::LoadError;
pub use sheet::{decode_sheet, read_sheet_file, Sheet};
pub use source::DatasetSource;

/// Loads the first sheet from `source`, reading local files directly and
/// fetching URLs through `client`.
///
/// # Errors
///
/// Returns [`LoadError`] for any I/O, HTTP or decoding failure.
pub async fn load_sheet(source: &DatasetSource, client: &SheetClient) -> Result<Sheet, LoadError> {
    tracing::info!(%source, "loading sheet");
    match source {
        DatasetSource::File(path) => read_sheet_file(path),
        DatasetSource::Url(url) => client.fetch_sheet(url).await,
    }
}
