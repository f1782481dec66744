//! Normalization from raw spreadsheet rows to [`PropertyRecord`]s.
//!
//! Header matching lives in [`crate::resolve`], cell parsing in
//! [`crate::coerce`], link recovery in [`crate::hyperlink`] and the
//! admission rule in [`crate::filter`]; this module applies field defaults
//! and stitches them together.

use landscan_core::{Field, FieldAliases, PropertyRecord, RawRow};

use crate::coerce::{
    coerce_coordinate, coerce_currency, coerce_integer, coerce_number, coerce_text, non_negative,
};
use crate::dataset::Dataset;
use crate::filter::{Rejection, RowPolicy};
use crate::hyperlink::{resolve_url, HyperlinkSource, NoHyperlinks, PLACEHOLDER_URL};
use crate::resolve::resolve_field;

pub const DEFAULT_ADDRESS: &str = "Unknown";
pub const DEFAULT_PROPERTY_TYPE: &str = "Land";
pub const DEFAULT_PRICE: f64 = 0.0;
/// One acre, so price-per-acre never divides by zero downstream.
pub const DEFAULT_ACRES: f64 = 1.0;
pub const DEFAULT_SCORE: i64 = 0;
pub const DEFAULT_DRIVE_METRIC: f64 = 0.0;

/// Converts raw rows into records using an alias table and a row policy.
///
/// Holds no per-run state: the same input always produces the same output.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    aliases: FieldAliases,
    policy: RowPolicy,
}

impl Normalizer {
    #[must_use]
    pub fn new(aliases: FieldAliases, policy: RowPolicy) -> Self {
        Self { aliases, policy }
    }

    #[must_use]
    pub fn aliases(&self) -> &FieldAliases {
        &self.aliases
    }

    #[must_use]
    pub fn policy(&self) -> RowPolicy {
        self.policy
    }

    /// Normalizes every row, keeping source order and skipping rejected rows.
    ///
    /// Never fails: bad cells default and rows without coordinates are
    /// dropped. An empty input yields an empty [`Dataset`].
    pub fn normalize(
        &self,
        label: &str,
        rows: &[RawRow],
        links: &dyn HyperlinkSource,
    ) -> Dataset {
        let records: Vec<PropertyRecord> = rows
            .iter()
            .enumerate()
            .filter_map(|(idx, row)| match self.normalize_row(idx, row, links) {
                Ok(record) => Some(record),
                Err(reason) => {
                    tracing::debug!(dataset = label, row_index = idx, %reason, "row rejected");
                    None
                }
            })
            .collect();

        let dataset = Dataset::new(label, records, rows.len());
        tracing::info!(
            dataset = label,
            rows_read = dataset.rows_read(),
            records = dataset.len(),
            rows_rejected = dataset.rows_rejected(),
            "normalized dataset"
        );
        dataset
    }

    /// Normalizes one row.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] if the row fails the [`RowPolicy`].
    pub fn normalize_row(
        &self,
        row_index: usize,
        row: &RawRow,
        links: &dyn HyperlinkSource,
    ) -> Result<PropertyRecord, Rejection> {
        let find = |field: Field| resolve_field(row, self.aliases.aliases(field));
        let value = |field: Field| find(field).map(|r| r.value);

        let price = non_negative(coerce_currency(value(Field::Price))).unwrap_or(DEFAULT_PRICE);
        let (lat, lng) = self.policy.admit(
            coerce_coordinate(value(Field::Lat)),
            coerce_coordinate(value(Field::Lng)),
            price,
        )?;

        Ok(PropertyRecord {
            row_index,
            address: coerce_text(value(Field::Address))
                .unwrap_or_else(|| DEFAULT_ADDRESS.to_owned()),
            city: coerce_text(value(Field::City)).unwrap_or_default(),
            state: coerce_text(value(Field::State)).unwrap_or_default(),
            price,
            acres: non_negative(coerce_number(value(Field::Acres))).unwrap_or(DEFAULT_ACRES),
            score: coerce_integer(value(Field::Score)).unwrap_or(DEFAULT_SCORE),
            lat,
            lng,
            drive_metric: non_negative(coerce_number(value(Field::DriveMetric)))
                .unwrap_or(DEFAULT_DRIVE_METRIC),
            url: resolve_url(find(Field::Url), row_index, links)
                .unwrap_or_else(|| PLACEHOLDER_URL.to_owned()),
            property_type: coerce_text(value(Field::PropertyType))
                .unwrap_or_else(|| DEFAULT_PROPERTY_TYPE.to_owned()),
        })
    }
}

/// Normalizes `rows` with the built-in aliases, the lenient row policy and
/// no hyperlink capability.
#[must_use]
pub fn normalize_rows(rows: &[RawRow]) -> Vec<PropertyRecord> {
    Normalizer::default()
        .normalize("rows", rows, &NoHyperlinks)
        .into_records()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
