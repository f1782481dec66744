//! Read-only projections of normalized listings for the map, chart and
//! card surfaces.
//!
//! Every function takes `&[PropertyRecord]` and builds new values; none of
//! them reorder or mutate the records they are given.

pub mod chart;
pub mod format;
pub mod map;
pub mod summary;

pub use chart::{bubble_points, BubblePoint};
pub use format::format_usd;
pub use map::{map_markers, MapBounds, MapMarker, MarkerTier};
pub use summary::{MarketSummary, TopPick};
