pub mod coerce;
pub mod dataset;
pub mod filter;
pub mod hyperlink;
pub mod normalize;
pub mod resolve;

pub use dataset::Dataset;
pub use filter::{Rejection, RowPolicy};
pub use hyperlink::{HyperlinkSource, NoHyperlinks};
pub use normalize::{normalize_rows, Normalizer};
pub use resolve::{resolve_field, Resolved};
