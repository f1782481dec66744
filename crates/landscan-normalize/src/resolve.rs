//! Header resolution: finds the cell that feeds a logical field.
//!
//! A header matches an alias when both reduce to the same
//! [`normalize_header`] key. Aliases are tried in priority order and the
//! first alias with any matching header wins; within one alias, the
//! leftmost matching column wins.

use landscan_core::{normalize_header, CellValue, RawRow};

/// A cell located by [`resolve_field`], with the verbatim header it sat
/// under so callers can ask the loader about that exact column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    pub header: &'a str,
    pub value: &'a CellValue,
}

/// Returns the cell for the highest-priority alias present in `row`, or
/// `None` when no alias matches any header.
///
/// `None` means the column is absent. A matching column holding an empty
/// cell is still returned so callers can tell the two cases apart.
#[must_use]
pub fn resolve_field<'a, S: AsRef<str>>(row: &'a RawRow, aliases: &[S]) -> Option<Resolved<'a>> {
    let headers: Vec<(String, &str, &CellValue)> = row
        .cells()
        .map(|(header, value)| (normalize_header(header), header, value))
        .collect();

    aliases.iter().find_map(|alias| {
        let key = normalize_header(alias.as_ref());
        if key.is_empty() {
            return None;
        }
        headers
            .iter()
            .find(|(normalized, _, _)| *normalized == key)
            .map(|&(_, header, value)| Resolved { header, value })
    })
}
