//! Row and record types shared by the loader, the normalizer, and every
//! rendering projection.
//!
//! A [`RawRow`] is exactly what the spreadsheet export produced: headers in
//! column order with loosely-typed cells. A [`PropertyRecord`] is the clean,
//! typed listing the normalizer emits for it.

use std::borrow::Cow;

use serde::Serialize;

/// A single spreadsheet cell as decoded by the loader.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Returns `true` for [`CellValue::Empty`] and for text that is empty
    /// after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
            CellValue::Empty => true,
        }
    }

    /// Renders the cell as text. Numbers use their shortest display form
    /// (`450000.0` becomes `"450000"`). `Empty` yields `None`.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            CellValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
            CellValue::Number(n) => Some(Cow::Owned(n.to_string())),
            CellValue::Empty => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

/// One spreadsheet row: header/value pairs in column order.
///
/// Header strings are kept verbatim; matching against the alias vocabulary
/// happens in the normalizer and never rewrites the row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: Vec<(String, CellValue)>,
}

impl RawRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append, mostly useful for fixtures.
    #[must_use]
    pub fn with_cell(mut self, header: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.push(header, value);
        self
    }

    pub fn push(&mut self, header: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.push((header.into(), value.into()));
    }

    /// Iterates `(header, value)` pairs in column order.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(h, v)| (h.as_str(), v))
    }

    /// Exact (case-sensitive) header lookup.
    #[must_use]
    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v)
    }
}

impl<H, V> FromIterator<(H, V)> for RawRow
where
    H: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (H, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(h, v)| (h.into(), v.into()))
                .collect(),
        }
    }
}

/// A normalized rural property listing, ready for the map, chart and card
/// surfaces.
///
/// `lat`/`lng` are always finite and `price` is never negative; the
/// normalizer drops or defaults anything that would violate that.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    /// Zero-based position of the source row in the sheet.
    pub row_index: usize,
    pub address: String,
    pub city: String,
    pub state: String,
    /// Listing price in dollars.
    pub price: f64,
    pub acres: f64,
    pub score: i64,
    pub lat: f64,
    pub lng: f64,
    /// Drive time (minutes) or drive distance, whichever the sheet carries.
    pub drive_metric: f64,
    /// Outbound listing URL, or `"#"` when none could be resolved.
    pub url: String,
    pub property_type: String,
}

impl PropertyRecord {
    /// Price per acre, treating a zero acreage as one acre.
    #[must_use]
    pub fn price_per_acre(&self) -> f64 {
        let acres = if self.acres > 0.0 { self.acres } else { 1.0 };
        self.price / acres
    }
}
