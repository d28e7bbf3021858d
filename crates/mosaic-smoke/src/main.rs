//! Mosaic Smoke Harness
//!
//! Exercises the packing engine the way the catalog view does while a
//! container is being resized: the width is swept across a range, and each
//! time the row capacity changes the full entry list is repacked from
//! scratch. Every packing is printed to stdout as one JSON line.

use anyhow::{Context, Result};
use mosaic_layout::{overlay_columns, pack, Entry, GridMetrics, LayoutError};
use serde_json::json;
use tracing::{debug, info, warn};

/// Parse command line arguments
struct Args {
    entries_file: Option<String>,
    config_file: Option<String>,
    item_width: f64,
    percentage: f64,
    min_width: f64,
    max_width: f64,
    step: f64,
    zoom: bool,
}

impl Args {
    fn parse() -> Self {
        let mut args = std::env::args().skip(1);
        let mut parsed = Self {
            entries_file: None,
            config_file: None,
            item_width: 120.0,
            percentage: 100.0,
            min_width: 0.0,
            max_width: 1600.0,
            step: 10.0,
            zoom: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--entries" => parsed.entries_file = args.next(),
                "--config" => parsed.config_file = args.next(),
                "--item-width" => parse_into(args.next(), &mut parsed.item_width),
                "--percentage" => parse_into(args.next(), &mut parsed.percentage),
                "--min-width" => parse_into(args.next(), &mut parsed.min_width),
                "--max-width" => parse_into(args.next(), &mut parsed.max_width),
                "--step" => parse_into(args.next(), &mut parsed.step),
                "--zoom" => parsed.zoom = true,
                other => warn!(arg = other, "Ignoring unknown argument"),
            }
        }

        parsed
    }

    /// Load entries from file or use the built-in demo catalog.
    fn load_entries(&self) -> Result<Vec<Entry>> {
        let Some(ref path) = self.entries_file else {
            return Ok(demo_catalog());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read entries file {path}"))?;
        serde_json::from_str(&content).with_context(|| format!("Invalid entries in {path}"))
    }

    fn load_metrics(&self) -> Result<GridMetrics> {
        let Some(ref path) = self.config_file else {
            return Ok(GridMetrics::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path}"))?;
        GridMetrics::from_json(&content).with_context(|| format!("Invalid metrics in {path}"))
    }
}

/// Keep the current value when the flag value is missing or malformed.
fn parse_into(value: Option<String>, target: &mut f64) {
    if let Some(parsed) = value.and_then(|v| v.parse().ok()) {
        *target = parsed;
    }
}

/// A catalog with featured entries spread unevenly through it.
fn demo_catalog() -> Vec<Entry> {
    (0..40)
        .map(|i| {
            let id = format!("item-{i:02}");
            if i % 7 == 2 || i % 11 == 5 {
                Entry::featured(id)
            } else {
                Entry::normal(id)
            }
        })
        .collect()
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let entries = args.load_entries()?;
    let metrics = args.load_metrics()?;
    info!(
        entries = entries.len(),
        featured = entries.iter().filter(|e| e.featured.is_some()).count(),
        item_width = args.item_width,
        zoom = args.zoom,
        "Starting resize sweep"
    );

    if args.step <= 0.0 {
        anyhow::bail!("--step must be positive, got {}", args.step);
    }

    let mut last_capacity = None;
    let mut width = args.min_width;
    while width <= args.max_width {
        let slots = metrics.capacity(args.percentage, width, args.item_width, args.zoom);
        let items_per_row = if args.zoom {
            overlay_columns(slots)
        } else {
            slots
        };

        // Same capacity, same packing.
        if last_capacity != Some(items_per_row) {
            last_capacity = Some(items_per_row);
            report(&entries, &metrics, width, items_per_row, args.item_width)?;
        }

        width += args.step;
    }

    info!("Sweep complete");
    Ok(())
}

fn report(
    entries: &[Entry],
    metrics: &GridMetrics,
    width: f64,
    items_per_row: usize,
    item_width: f64,
) -> Result<()> {
    let run = match pack(entries, items_per_row) {
        Ok(run) => run,
        Err(LayoutError::NoCapacity) | Err(LayoutError::FeaturedTooWide { .. }) => {
            debug!(width, items_per_row, "Container not ready");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let strategy = run.strategy();
    let rows: Vec<_> = run
        .rows()
        .into_iter()
        .map(|row| {
            json!({
                "filled": row.filled.as_f64(),
                "full": row.is_full(),
                "entries": row.entries.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            })
        })
        .collect();

    println!(
        "{}",
        json!({
            "containerWidth": width,
            "itemsPerRow": items_per_row,
            "gridWidth": metrics.grid_width_px(items_per_row, item_width),
            "strategy": format!("{strategy:?}"),
            "rows": rows,
        })
    );
    Ok(())
}
