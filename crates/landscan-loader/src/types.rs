//! On-disk / on-wire shapes of a sheet export.
//!
//! Two shapes are accepted:
//!
//! ### Plain rows
//! A JSON array of objects, one per data row, keyed by header text. This is
//! what a spreadsheet "sheet to JSON" export produces. Blank cells are either
//! omitted or `null`.
//!
//! ```json
//! [{ "Address": "4410 Hollow Rd", "Price": "$450,000", "Lat": 39.13, "Lng": -77.71 }]
//! ```
//!
//! ### Workbook
//! An object with a `sheets` array. Only the first sheet is used. Each sheet
//! may carry the hyperlink targets that sit behind cell display text;
//! `row` is the zero-based data row (the header row is not counted) and
//! `column` is the header text of the cell.
//!
//! ```json
//! { "sheets": [{
//!     "name": "Feb",
//!     "rows": [{ "Listing": "View Listing", "Lat": 39.1, "Lng": -77.7 }],
//!     "hyperlinks": [{ "row": 0, "column": "Listing", "target": "https://www.zillow.com/..." }]
//! }] }
//! ```
//!
//! Rows are kept as raw `serde_json::Value`s here so that a malformed row
//! can be reported with its index instead of as a generic parse error.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SheetDocument {
    Rows(Vec<serde_json::Value>),
    Workbook(WorkbookDocument),
}

#[derive(Debug, Deserialize)]
pub struct WorkbookDocument {
    pub sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SheetEntry {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub rows: Vec<serde_json::Value>,

    #[serde(default)]
    pub hyperlinks: Vec<HyperlinkEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HyperlinkEntry {
    pub row: usize,
    pub column: String,
    pub target: String,
}
