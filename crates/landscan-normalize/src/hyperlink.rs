//! Outbound listing URL resolution.
//!
//! Spreadsheets often store the listing link as a hyperlink behind display
//! text such as `"View Listing"`. The visible text is used when it is
//! already a URL; otherwise the loader is asked for the link target behind
//! that cell, if it can provide one.

use crate::resolve::Resolved;

/// Placeholder URL for listings without a usable link.
pub const PLACEHOLDER_URL: &str = "#";

const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Optional loader capability: the hyperlink target behind a cell.
///
/// `row_index` is the zero-based data row and `header` is the verbatim
/// column header the cell sits under.
pub trait HyperlinkSource {
    fn hyperlink(&self, row_index: usize, header: &str) -> Option<&str>;
}

/// The absent capability: every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHyperlinks;

impl HyperlinkSource for NoHyperlinks {
    fn hyperlink(&self, _row_index: usize, _header: &str) -> Option<&str> {
        None
    }
}

impl<T: HyperlinkSource + ?Sized> HyperlinkSource for &T {
    fn hyperlink(&self, row_index: usize, header: &str) -> Option<&str> {
        (**self).hyperlink(row_index, header)
    }
}

/// Returns `true` if `text` starts with a recognized URL scheme
/// (case-insensitive).
#[must_use]
pub fn looks_like_url(text: &str) -> bool {
    let text = text.trim_start();
    URL_SCHEMES.iter().any(|scheme| {
        text.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Resolves the listing URL for one row, or `None` when neither the cell
/// text nor the hyperlink target is a usable URL.
#[must_use]
pub fn resolve_url(
    resolved: Option<Resolved<'_>>,
    row_index: usize,
    links: &dyn HyperlinkSource,
) -> Option<String> {
    let resolved = resolved?;

    if let Some(text) = resolved.value.as_text() {
        let text = text.trim();
        if looks_like_url(text) {
            return Some(text.to_owned());
        }
    }

    let target = links.hyperlink(row_index, resolved.header)?.trim();
    if looks_like_url(target) {
        Some(target.to_owned())
    } else {
        tracing::debug!(
            row_index,
            header = resolved.header,
            target,
            "ignoring hyperlink target without a recognized scheme"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use landscan_core::CellValue;

    use super::*;

    struct MapLinks(HashMap<(usize, String), String>);

    impl HyperlinkSource for MapLinks {
        fn hyperlink(&self, row_index: usize, header: &str) -> Option<&str> {
            self.0
                .get(&(row_index, header.to_owned()))
                .map(String::as_str)
        }
    }

    fn links(entries: &[(usize, &str, &str)]) -> MapLinks {
        MapLinks(
            entries
                .iter()
                .map(|&(row, header, target)| ((row, header.to_owned()), target.to_owned()))
                .collect(),
        )
    }

    #[test]
    fn looks_like_url_accepts_known_schemes() {
        assert!(looks_like_url("https://www.zillow.com/homedetails/1"));
        assert!(looks_like_url("HTTP://example.com"));
        assert!(!looks_like_url("View Listing"));
        assert!(!looks_like_url("ftp://example.com"));
        assert!(!looks_like_url("http"));
    }

    #[test]
    fn direct_url_text_wins_over_hyperlink() {
        let cell = CellValue::from("https://redfin.com/a");
        let resolved = Resolved {
            header: "Link",
            value: &cell,
        };
        let source = links(&[(0, "Link", "https://zillow.com/b")]);
        assert_eq!(
            resolve_url(Some(resolved), 0, &source).as_deref(),
            Some("https://redfin.com/a")
        );
    }

    #[test]
    fn display_text_falls_back_to_hyperlink_target() {
        let cell = CellValue::from("View Listing");
        let resolved = Resolved {
            header: "Link",
            value: &cell,
        };
        let source = links(&[(4, "Link", "https://zillow.com/b")]);
        assert_eq!(
            resolve_url(Some(resolved), 4, &source).as_deref(),
            Some("https://zillow.com/b")
        );
    }

    #[test]
    fn hyperlink_lookup_is_per_cell() {
        let cell = CellValue::from("View Listing");
        let resolved = Resolved {
            header: "Link",
            value: &cell,
        };
        let source = links(&[(3, "Link", "https://zillow.com/b")]);
        assert!(resolve_url(Some(resolved), 4, &source).is_none());
    }

    #[test]
    fn display_text_without_capability_is_none() {
        let cell = CellValue::from("View Listing");
        let resolved = Resolved {
            header: "Link",
            value: &cell,
        };
        assert!(resolve_url(Some(resolved), 0, &NoHyperlinks).is_none());
    }

    #[test]
    fn non_url_hyperlink_target_is_ignored() {
        let cell = CellValue::from("View Listing");
        let resolved = Resolved {
            header: "Link",
            value: &cell,
        };
        let source = links(&[(0, "Link", "mailto:agent@example.com")]);
        assert!(resolve_url(Some(resolved), 0, &source).is_none());
    }

    #[test]
    fn missing_column_is_none() {
        let source = links(&[(0, "Link", "https://zillow.com/b")]);
        assert!(resolve_url(None, 0, &source).is_none());
    }
}
