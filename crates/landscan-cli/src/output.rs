//! Terminal and JSON rendering for each subcommand.

use std::fmt::{self, Write as _};

use landscan_analysis::map::{DEFAULT_CENTER, DEFAULT_ZOOM, FIT_PADDING};
use landscan_analysis::{
    bubble_points, format_usd, map_markers, MapBounds, MapMarker, MarketSummary,
};
use landscan_core::{Field, FieldAliases, PropertyRecord};
use landscan_normalize::Dataset;
use serde::Serialize;

const ADDRESS_WIDTH: usize = 32;

pub(crate) fn print_records(dataset: &Dataset, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(dataset.records())?);
    } else {
        print!("{}", records_table(dataset)?);
    }
    Ok(())
}

pub(crate) fn print_summary(dataset: &Dataset, json: bool) -> anyhow::Result<()> {
    let summary = MarketSummary::from_records(dataset.records());
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary_text(dataset, summary.as_ref())?);
    }
    Ok(())
}

pub(crate) fn print_chart(dataset: &Dataset) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&bubble_points(dataset.records()))?
    );
    Ok(())
}

pub(crate) fn print_markers(dataset: &Dataset) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&map_view(dataset.records()))?);
    Ok(())
}

pub(crate) fn print_aliases(aliases: &FieldAliases) -> anyhow::Result<()> {
    print!("{}", aliases_text(aliases)?);
    Ok(())
}

/// Markers plus how the map should frame them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MapView {
    markers: Vec<MapMarker>,
    /// Padded bounds to fit; absent when there is nothing to show.
    bounds: Option<MapBounds>,
    center: (f64, f64),
    zoom: Option<u8>,
}

pub(crate) fn map_view(records: &[PropertyRecord]) -> MapView {
    match MapBounds::from_records(records) {
        Some(bounds) => {
            let padded = bounds.pad(FIT_PADDING);
            MapView {
                markers: map_markers(records),
                bounds: Some(padded),
                center: padded.center(),
                zoom: None,
            }
        }
        None => MapView {
            markers: Vec::new(),
            bounds: None,
            center: DEFAULT_CENTER,
            zoom: Some(DEFAULT_ZOOM),
        },
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        format!("{}...", text.chars().take(width - 3).collect::<String>())
    } else {
        text.to_owned()
    }
}

pub(crate) fn records_table(dataset: &Dataset) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if dataset.is_empty() {
        writeln!(out, "no listings in {}", dataset.label())?;
        return Ok(out);
    }

    writeln!(
        out,
        "{:<5}{:<34}{:>12}{:>9}{:>7}{:>10}  URL",
        "ROW", "ADDRESS", "PRICE", "ACRES", "SCORE", "DRIVE"
    )?;
    for record in dataset.records() {
        writeln!(
            out,
            "{:<5}{:<34}{:>12}{:>9.1}{:>7}{:>10.1}  {}",
            record.row_index,
            truncate(&record.address, ADDRESS_WIDTH),
            format_usd(record.price),
            record.acres,
            record.score,
            record.drive_metric,
            record.url
        )?;
    }
    writeln!(
        out,
        "{} listings ({} rows read, {} skipped)",
        dataset.len(),
        dataset.rows_read(),
        dataset.rows_rejected()
    )?;
    Ok(out)
}

pub(crate) fn summary_text(
    dataset: &Dataset,
    summary: Option<&MarketSummary>,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let Some(summary) = summary else {
        writeln!(out, "{}: 0 listings", dataset.label())?;
        return Ok(out);
    };

    writeln!(out, "{}: {} listings", dataset.label(), summary.count)?;
    writeln!(out, "Average price:    {}", format_usd(summary.average_price))?;
    writeln!(
        out,
        "Average per acre: {}",
        summary
            .average_price_per_acre
            .map_or_else(|| "n/a".to_owned(), format_usd)
    )?;
    writeln!(out)?;
    writeln!(out, "Top picks:")?;
    for (rank, pick) in summary.top_picks.iter().enumerate() {
        writeln!(
            out,
            "  {}. {} ({}, score {})",
            rank + 1,
            pick.address,
            format_usd(pick.price),
            pick.score
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{}", summary.narrative())?;
    Ok(out)
}

pub(crate) fn aliases_text(aliases: &FieldAliases) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for field in Field::ALL {
        let names = aliases.aliases(field).join(", ");
        writeln!(out, "{:<15}{names}", field.to_string())?;
    }
    Ok(out)
}
