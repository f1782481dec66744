//! Map projection: one marker per listing plus the bounds that frame them.

use landscan_core::PropertyRecord;
use serde::Serialize;

use crate::format::format_usd;

/// Initial map view when nothing is loaded.
pub const DEFAULT_CENTER: (f64, f64) = (38.8, -77.5);
pub const DEFAULT_ZOOM: u8 = 9;
/// Padding ratio applied around the marker bounds when fitting the view.
pub const FIT_PADDING: f64 = 0.2;
/// Listings scoring above this are drawn highlighted.
pub const HIGHLIGHT_SCORE: i64 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerTier {
    Highlight,
    Standard,
}

impl MarkerTier {
    #[must_use]
    pub fn for_score(score: i64) -> Self {
        if score > HIGHLIGHT_SCORE {
            MarkerTier::Highlight
        } else {
            MarkerTier::Standard
        }
    }

    /// Fill colour for the marker.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            MarkerTier::Highlight => "#10b981",
            MarkerTier::Standard => "#64748b",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub row_index: usize,
    pub lat: f64,
    pub lng: f64,
    pub tier: MarkerTier,
    pub color: &'static str,
    /// Popup headline, e.g. `"$450,000"`.
    pub price_label: String,
    pub address: String,
    pub url: String,
}

impl From<&PropertyRecord> for MapMarker {
    fn from(record: &PropertyRecord) -> Self {
        let tier = MarkerTier::for_score(record.score);
        Self {
            row_index: record.row_index,
            lat: record.lat,
            lng: record.lng,
            tier,
            color: tier.color(),
            price_label: format_usd(record.price),
            address: record.address.clone(),
            url: record.url.clone(),
        }
    }
}

#[must_use]
pub fn map_markers(records: &[PropertyRecord]) -> Vec<MapMarker> {
    records.iter().map(MapMarker::from).collect()
}

/// A latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl MapBounds {
    /// Smallest rectangle containing every record, or `None` for no records.
    #[must_use]
    pub fn from_records(records: &[PropertyRecord]) -> Option<Self> {
        let first = records.first()?;
        let start = Self {
            south: first.lat,
            west: first.lng,
            north: first.lat,
            east: first.lng,
        };
        Some(records.iter().skip(1).fold(start, |b, r| Self {
            south: b.south.min(r.lat),
            west: b.west.min(r.lng),
            north: b.north.max(r.lat),
            east: b.east.max(r.lng),
        }))
    }

    /// Grows each side by `ratio` of the rectangle's height/width.
    #[must_use]
    pub fn pad(self, ratio: f64) -> Self {
        let lat_buffer = (self.north - self.south).abs() * ratio;
        let lng_buffer = (self.east - self.west).abs() * ratio;
        Self {
            south: self.south - lat_buffer,
            west: self.west - lng_buffer,
            north: self.north + lat_buffer,
            east: self.east + lng_buffer,
        }
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}
