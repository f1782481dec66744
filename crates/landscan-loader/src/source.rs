//! Where a dataset's sheet export comes from.

use std::path::{Path, PathBuf};

use landscan_core::AppConfig;

use crate::error::LoadError;

const SHEET_EXTENSION: &str = "json";

/// A local file or a remote URL holding one sheet export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Url(String),
}

impl DatasetSource {
    /// Resolves a dataset name such as `"Feb012026"` to
    /// `<base_url>/<name>.json` when a base URL is configured, otherwise to
    /// `<data_dir>/<name>.json`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidDatasetName`] for empty names and names
    /// that could escape the data directory.
    pub fn for_dataset(name: &str, config: &AppConfig) -> Result<Self, LoadError> {
        let file_name = dataset_file_name(name)?;
        Ok(match &config.base_url {
            Some(base) => DatasetSource::Url(format!("{}/{file_name}", base.trim_end_matches('/'))),
            None => DatasetSource::File(config.data_dir.join(file_name)),
        })
    }

    /// Short human label: the file stem or the last URL path segment
    /// without its extension.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            DatasetSource::File(path) => path.file_stem().map_or_else(
                || path.display().to_string(),
                |s| s.to_string_lossy().into_owned(),
            ),
            DatasetSource::Url(url) => {
                let last = url
                    .split(['?', '#'])
                    .next()
                    .unwrap_or(url)
                    .trim_end_matches('/')
                    .rsplit('/')
                    .next()
                    .unwrap_or(url);
                Path::new(last)
                    .file_stem()
                    .map_or_else(|| last.to_owned(), |s| s.to_string_lossy().into_owned())
            }
        }
    }
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Url(url) => f.write_str(url),
        }
    }
}

fn dataset_file_name(name: &str) -> Result<String, LoadError> {
    let name = name.trim();
    let invalid = |reason: &str| LoadError::InvalidDatasetName {
        name: name.to_owned(),
        reason: reason.to_owned(),
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name must not start with '.'"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(invalid(
            "only ASCII letters, digits, '-', '_' and '.' are allowed",
        ));
    }

    let has_extension = Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SHEET_EXTENSION));
    Ok(if has_extension {
        name.to_owned()
    } else {
        format!("{name}.{SHEET_EXTENSION}")
    })
}
