use landscan_core::PropertyRecord;

/// The immutable result of one load-and-normalize pass.
///
/// Rendering surfaces borrow the records; loading a different sheet builds
/// a fresh `Dataset` rather than mutating this one.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    label: String,
    records: Vec<PropertyRecord>,
    rows_read: usize,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, records: Vec<PropertyRecord>, rows_read: usize) -> Self {
        Self {
            label: label.into(),
            records,
            rows_read,
        }
    }

    /// Name of the sheet or dataset this was built from.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Records in source row order.
    #[must_use]
    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    /// Number of raw rows handed to the normalizer.
    #[must_use]
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Number of raw rows that were filtered out.
    #[must_use]
    pub fn rows_rejected(&self) -> usize {
        self.rows_read.saturating_sub(self.records.len())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the dataset, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<PropertyRecord> {
        self.records
    }
}
