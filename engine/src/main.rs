// Demo entry point: stands in for the chart frontend. Generates sample
// candles, computes the configured moving-average overlays, and prints the
// whole payload as JSON.
use std::path::Path;

use anyhow::Context;
use engine::config::settings::ChartSettings;
use engine::data::sample;
use engine::services::compute_overlays;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => ChartSettings::load(Path::new(&path))
            .with_context(|| format!("Failed to load chart settings from '{}'", path))?,
        None => ChartSettings::default(),
    };
    info!(
        bars = settings.bars,
        overlays = settings.overlays.len(),
        "Starting MA chart engine"
    );

    let series = sample::generate_series(settings.bars, settings.seed);
    let overlays = compute_overlays(&series, &settings.overlays);

    let payload = serde_json::json!({
        "candles": series,
        "overlays": overlays,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
