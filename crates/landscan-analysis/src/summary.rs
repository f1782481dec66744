//! Market summary: averages and the top-scoring listings.

use landscan_core::PropertyRecord;
use serde::Serialize;

use crate::format::format_usd;

/// How many listings the summary highlights.
pub const TOP_PICK_COUNT: usize = 3;

/// A highlighted listing, with enough to label it and fly the map to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPick {
    pub row_index: usize,
    pub address: String,
    pub price: f64,
    pub score: i64,
    pub lat: f64,
    pub lng: f64,
}

impl From<&PropertyRecord> for TopPick {
    fn from(record: &PropertyRecord) -> Self {
        Self {
            row_index: record.row_index,
            address: record.address.clone(),
            price: record.price,
            score: record.score,
            lat: record.lat,
            lng: record.lng,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub count: usize,
    pub total_value: f64,
    pub average_price: f64,
    /// Mean of `price / acres` over listings with positive acreage; `None`
    /// when no listing has any.
    pub average_price_per_acre: Option<f64>,
    /// Highest score first; equal scores keep source order.
    pub top_picks: Vec<TopPick>,
}

impl MarketSummary {
    /// Summarizes `records`, or returns `None` when there are none.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_records(records: &[PropertyRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let count = records.len();
        let total_value: f64 = records.iter().map(|r| r.price).sum();

        let per_acre: Vec<f64> = records
            .iter()
            .filter(|r| r.acres > 0.0)
            .map(|r| r.price / r.acres)
            .collect();
        let average_price_per_acre = if per_acre.is_empty() {
            None
        } else {
            Some(per_acre.iter().sum::<f64>() / per_acre.len() as f64)
        };

        let mut ranked: Vec<&PropertyRecord> = records.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        let top_picks = ranked
            .into_iter()
            .take(TOP_PICK_COUNT)
            .map(TopPick::from)
            .collect();

        Some(Self {
            count,
            total_value,
            average_price: total_value / count as f64,
            average_price_per_acre,
            top_picks,
        })
    }

    /// The single highest-scoring listing.
    #[must_use]
    pub fn top_pick(&self) -> Option<&TopPick> {
        self.top_picks.first()
    }

    /// One or two sentences describing the set for the analysis panel.
    #[must_use]
    pub fn narrative(&self) -> String {
        let mut text = match self.top_pick() {
            Some(top) => format!(
                "{} is the highest-scoring listing (score {}) among {} properties.",
                top.address, top.score, self.count
            ),
            None => format!("{} properties loaded.", self.count),
        };
        if let Some(per_acre) = self.average_price_per_acre {
            text.push_str(&format!(
                " Listings average {} per acre.",
                format_usd(per_acre)
            ));
        }
        text
    }
}
