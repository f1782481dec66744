//! Decoding a sheet export into [`RawRow`]s plus its hyperlink table.

use std::collections::HashMap;
use std::path::Path;

use landscan_core::{CellValue, RawRow};
use landscan_normalize::HyperlinkSource;
use serde_json::Value;

use crate::error::LoadError;
use crate::types::{SheetDocument, SheetEntry};

const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// The first sheet of a loaded workbook.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    name: String,
    rows: Vec<RawRow>,
    hyperlinks: HashMap<(usize, String), String>,
}

impl Sheet {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// Number of hyperlink targets carried alongside the rows.
    #[must_use]
    pub fn hyperlink_count(&self) -> usize {
        self.hyperlinks.len()
    }
}

impl HyperlinkSource for Sheet {
    fn hyperlink(&self, row_index: usize, header: &str) -> Option<&str> {
        self.hyperlinks
            .get(&(row_index, header.to_owned()))
            .map(String::as_str)
    }
}

/// Decodes a sheet export held in memory. `context` names the source in
/// error messages.
///
/// # Errors
///
/// - [`LoadError::Deserialize`]: not JSON, or neither accepted shape.
/// - [`LoadError::NoSheets`]: a workbook with an empty `sheets` array.
/// - [`LoadError::InvalidRow`]: a row that is not a JSON object.
pub fn decode_sheet(body: &str, context: &str) -> Result<Sheet, LoadError> {
    let document: SheetDocument =
        serde_json::from_str(body).map_err(|e| LoadError::Deserialize {
            context: context.to_owned(),
            source: e,
        })?;

    let entry = match document {
        SheetDocument::Rows(rows) => SheetEntry {
            name: None,
            rows,
            hyperlinks: Vec::new(),
        },
        SheetDocument::Workbook(workbook) => {
            let sheet_count = workbook.sheets.len();
            let first = workbook
                .sheets
                .into_iter()
                .next()
                .ok_or_else(|| LoadError::NoSheets {
                    context: context.to_owned(),
                })?;
            if sheet_count > 1 {
                tracing::debug!(context, sheet_count, "using first sheet of workbook");
            }
            first
        }
    };

    let rows = entry
        .rows
        .into_iter()
        .enumerate()
        .map(|(row_index, value)| match value {
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(header, cell)| (header, cell_from_json(cell)))
                .collect::<RawRow>()),
            _ => Err(LoadError::InvalidRow {
                context: context.to_owned(),
                row_index,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let hyperlinks = entry
        .hyperlinks
        .into_iter()
        .map(|link| ((link.row, link.column), link.target))
        .collect();

    Ok(Sheet {
        name: entry
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_owned()),
        rows,
        hyperlinks,
    })
}

/// Reads and decodes a sheet export from disk.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise the
/// errors of [`decode_sheet`].
pub fn read_sheet_file(path: &Path) -> Result<Sheet, LoadError> {
    let body = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let sheet = decode_sheet(&body, &path.display().to_string())?;
    tracing::info!(
        path = %path.display(),
        rows = sheet.rows().len(),
        hyperlinks = sheet.hyperlink_count(),
        "read sheet file"
    );
    Ok(sheet)
}

fn cell_from_json(value: Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Bool(b) => CellValue::Text(b.to_string()),
        Value::Number(n) => n.as_f64().map_or(CellValue::Empty, CellValue::Number),
        Value::String(s) => CellValue::Text(s),
        other @ (Value::Array(_) | Value::Object(_)) => CellValue::Text(other.to_string()),
    }
}
