//! Bubble chart projection: drive metric against price per acre, sized by
//! score.

use landscan_core::PropertyRecord;
use serde::Serialize;

/// Smallest bubble radius, so low-scoring listings stay visible.
pub const MIN_BUBBLE_RADIUS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BubblePoint {
    /// Drive time or distance.
    pub x: f64,
    /// Price per acre.
    pub y: f64,
    /// Bubble radius: a quarter of the score, at least [`MIN_BUBBLE_RADIUS`].
    pub r: f64,
}

impl From<&PropertyRecord> for BubblePoint {
    #[allow(clippy::cast_precision_loss)]
    fn from(record: &PropertyRecord) -> Self {
        Self {
            x: record.drive_metric,
            y: record.price_per_acre(),
            r: (record.score as f64 / 4.0).max(MIN_BUBBLE_RADIUS),
        }
    }
}

/// One point per record, in record order.
#[must_use]
pub fn bubble_points(records: &[PropertyRecord]) -> Vec<BubblePoint> {
    records.iter().map(BubblePoint::from).collect()
}
