use std::collections::HashMap;

use landscan_core::CellValue;

use super::*;

// -----------------------------------------------------------------------
// fixtures
// -----------------------------------------------------------------------

fn listing_row() -> RawRow {
    RawRow::new()
        .with_cell("Address", "4410 Hollow Rd")
        .with_cell("City", "Purcellville")
        .with_cell("State", "VA")
        .with_cell("Price", "$450,000")
        .with_cell("Acres", 12.5)
        .with_cell("LLM Score", 88.0)
        .with_cell("Latitude", 39.13)
        .with_cell("Longitude", -77.71)
        .with_cell("Drive Time", "55")
        .with_cell("URL", "https://www.zillow.com/homedetails/4410")
        .with_cell("Type", "Farm")
}

fn bare_row(lat: &str, lng: &str) -> RawRow {
    RawRow::new()
        .with_cell("lat", lat)
        .with_cell("lng", lng)
}

struct MapLinks(HashMap<(usize, String), String>);

impl HyperlinkSource for MapLinks {
    fn hyperlink(&self, row_index: usize, header: &str) -> Option<&str> {
        self.0
            .get(&(row_index, header.to_owned()))
            .map(String::as_str)
    }
}

// -----------------------------------------------------------------------
// normalize_row
// -----------------------------------------------------------------------

#[test]
fn normalize_row_maps_every_field() {
    let record = Normalizer::default()
        .normalize_row(7, &listing_row(), &NoHyperlinks)
        .unwrap();
    assert_eq!(record.row_index, 7);
    assert_eq!(record.address, "4410 Hollow Rd");
    assert_eq!(record.city, "Purcellville");
    assert_eq!(record.state, "VA");
    assert_eq!(record.price, 450_000.0);
    assert_eq!(record.acres, 12.5);
    assert_eq!(record.score, 88);
    assert_eq!(record.lat, 39.13);
    assert_eq!(record.lng, -77.71);
    assert_eq!(record.drive_metric, 55.0);
    assert_eq!(record.url, "https://www.zillow.com/homedetails/4410");
    assert_eq!(record.property_type, "Farm");
}

#[test]
fn normalize_row_strips_currency_symbols() {
    let row = bare_row("38.9", "-77.4").with_cell("Price", "$450,000");
    let record = Normalizer::default()
        .normalize_row(0, &row, &NoHyperlinks)
        .unwrap();
    assert_eq!(record.price, 450_000.0);
}

#[test]
fn normalize_row_applies_every_default() {
    let record = Normalizer::default()
        .normalize_row(0, &bare_row("38.9", "-77.4"), &NoHyperlinks)
        .unwrap();
    assert_eq!(record.address, DEFAULT_ADDRESS);
    assert_eq!(record.city, "");
    assert_eq!(record.state, "");
    assert_eq!(record.price, DEFAULT_PRICE);
    assert_eq!(record.acres, 1.0);
    assert_eq!(record.score, DEFAULT_SCORE);
    assert_eq!(record.drive_metric, DEFAULT_DRIVE_METRIC);
    assert_eq!(record.url, "#");
    assert_eq!(record.property_type, "Land");
}

#[test]
fn normalize_row_unparseable_values_take_defaults() {
    let row = bare_row("38.9", "-77.4")
        .with_cell("Price", "call agent")
        .with_cell("Acres", "unknown")
        .with_cell("Score", "n/a")
        .with_cell("Minutes", "far")
        .with_cell("Address", "   ");
    let record = Normalizer::default()
        .normalize_row(0, &row, &NoHyperlinks)
        .unwrap();
    assert_eq!(record.price, 0.0);
    assert_eq!(record.acres, 1.0);
    assert_eq!(record.score, 0);
    assert_eq!(record.drive_metric, 0.0);
    assert_eq!(record.address, DEFAULT_ADDRESS);
}

#[test]
fn normalize_row_negative_values_take_defaults() {
    let row = bare_row("38.9", "-77.4")
        .with_cell("Price", "-5")
        .with_cell("Acres", -2.0)
        .with_cell("Drive Time", "-10");
    let record = Normalizer::default()
        .normalize_row(0, &row, &NoHyperlinks)
        .unwrap();
    assert_eq!(record.price, 0.0);
    assert_eq!(record.acres, 1.0);
    assert_eq!(record.drive_metric, 0.0);
}

#[test]
fn normalize_row_keeps_explicit_zero_acres() {
    let row = bare_row("38.9", "-77.4").with_cell("Acreage", 0.0);
    let record = Normalizer::default()
        .normalize_row(0, &row, &NoHyperlinks)
        .unwrap();
    assert_eq!(record.acres, 0.0);
}

#[test]
fn normalize_row_rejects_text_latitude() {
    let err = Normalizer::default()
        .normalize_row(0, &bare_row("N/A", "-77.4"), &NoHyperlinks)
        .unwrap_err();
    assert_eq!(err, Rejection::InvalidLatitude);
}

#[test]
fn normalize_row_rejects_text_longitude() {
    let err = Normalizer::default()
        .normalize_row(0, &bare_row("38.9", "N/A"), &NoHyperlinks)
        .unwrap_err();
    assert_eq!(err, Rejection::InvalidLongitude);
}

#[test]
fn normalize_row_rejects_missing_longitude() {
    let row = RawRow::new().with_cell("Latitude", 38.9);
    let err = Normalizer::default()
        .normalize_row(0, &row, &NoHyperlinks)
        .unwrap_err();
    assert_eq!(err, Rejection::InvalidLongitude);
}

#[test]
fn normalize_row_prefers_first_configured_alias() {
    let row = bare_row("38.9", "-77.4")
        .with_cell("Cost", "$100")
        .with_cell("Price", "$200");
    let record = Normalizer::default()
        .normalize_row(0, &row, &NoHyperlinks)
        .unwrap();
    assert_eq!(record.price, 200.0);
}

#[test]
fn normalize_row_uses_custom_alias_order() {
    let aliases = FieldAliases::builtin()
        .with_aliases(Field::Price, &["cost", "price"])
        .unwrap();
    let row = bare_row("38.9", "-77.4")
        .with_cell("Cost", "$100")
        .with_cell("Price", "$200");
    let record = Normalizer::new(aliases, RowPolicy::default())
        .normalize_row(0, &row, &NoHyperlinks)
        .unwrap();
    assert_eq!(record.price, 100.0);
}

#[test]
fn normalize_row_resolves_drive_distance_header_variants() {
    for header in ["Drive Dist (mi)", "drivedist(mi)", "DRIVE-DIST-MI"] {
        let row = bare_row("38.9", "-77.4").with_cell(header, "23.5");
        let record = Normalizer::default()
            .normalize_row(0, &row, &NoHyperlinks)
            .unwrap();
        assert_eq!(record.drive_metric, 23.5, "header {header}");
    }
}

#[test]
fn normalize_row_score_header_variants() {
    let a = bare_row("38.9", "-77.4").with_cell("LLM Score", "91");
    let b = bare_row("38.9", "-77.4").with_cell("score", 42.0);
    let n = Normalizer::default();
    assert_eq!(n.normalize_row(0, &a, &NoHyperlinks).unwrap().score, 91);
    assert_eq!(n.normalize_row(1, &b, &NoHyperlinks).unwrap().score, 42);
}

#[test]
fn normalize_row_view_listing_without_link_is_placeholder() {
    let row = bare_row("38.9", "-77.4").with_cell("Listing", "View Listing");
    let record = Normalizer::default()
        .normalize_row(0, &row, &NoHyperlinks)
        .unwrap();
    assert_eq!(record.url, "#");
}

#[test]
fn normalize_row_view_listing_uses_cell_hyperlink() {
    let row = bare_row("38.9", "-77.4").with_cell("Listing", "View Listing");
    let links = MapLinks(HashMap::from([(
        (2, "Listing".to_owned()),
        "https://www.redfin.com/VA/home/1".to_owned(),
    )]));
    let record = Normalizer::default()
        .normalize_row(2, &row, &links)
        .unwrap();
    assert_eq!(record.url, "https://www.redfin.com/VA/home/1");
}

#[test]
fn normalize_row_numeric_address_becomes_text() {
    let row = bare_row("38.9", "-77.4").with_cell("Name", CellValue::Number(1200.0));
    let record = Normalizer::default()
        .normalize_row(0, &row, &NoHyperlinks)
        .unwrap();
    assert_eq!(record.address, "1200");
}

// -----------------------------------------------------------------------
// normalize (whole dataset)
// -----------------------------------------------------------------------

#[test]
fn normalize_keeps_source_order_and_drops_bad_rows() {
    let rows = vec![
        bare_row("38.1", "-77.1").with_cell("Score", "10"),
        bare_row("N/A", "-77.2").with_cell("Score", "99"),
        bare_row("38.3", "-77.3").with_cell("Score", "50"),
    ];
    let dataset = Normalizer::default().normalize("Feb012026", &rows, &NoHyperlinks);
    assert_eq!(dataset.label(), "Feb012026");
    assert_eq!(dataset.rows_read(), 3);
    assert_eq!(dataset.rows_rejected(), 1);
    let indices: Vec<usize> = dataset.records().iter().map(|r| r.row_index).collect();
    assert_eq!(indices, vec![0, 2]);
    let scores: Vec<i64> = dataset.records().iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![10, 50]);
}

#[test]
fn normalize_zero_price_rows_survive_lenient_policy() {
    let rows = vec![bare_row("38.1", "-77.1"), listing_row()];
    let dataset = Normalizer::default().normalize("t", &rows, &NoHyperlinks);
    assert_eq!(dataset.len(), 2);
}

#[test]
fn normalize_strict_policy_drops_zero_price_rows() {
    let rows = vec![bare_row("38.1", "-77.1"), listing_row()];
    let normalizer = Normalizer::new(
        FieldAliases::builtin(),
        RowPolicy {
            require_positive_price: true,
        },
    );
    let dataset = normalizer.normalize("t", &rows, &NoHyperlinks);
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].row_index, 1);
}

#[test]
fn normalize_empty_input_is_empty_dataset() {
    let dataset = Normalizer::default().normalize("empty", &[], &NoHyperlinks);
    assert!(dataset.is_empty());
    assert_eq!(dataset.rows_read(), 0);
    assert_eq!(dataset.rows_rejected(), 0);
}

#[test]
fn normalize_is_idempotent() {
    let rows = vec![listing_row(), bare_row("1", "2"), bare_row("x", "2")];
    let first = normalize_rows(&rows);
    let second = normalize_rows(&rows);
    assert_eq!(first, second);
}
