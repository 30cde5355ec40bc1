// Assembles chart-ready moving-average overlays from price data and settings.
use shared::models::{MaOverlay, MaSettings, PricePoint};
use shared::utils::is_chronological;

use crate::indicators::{self, calculator_for};

/// Computes one overlay per settings value, in slot order. Called by the
/// owning application whenever the price series or any settings change; each
/// overlay is rebuilt from scratch, never patched.
pub fn compute_overlays(series: &[PricePoint], settings: &[MaSettings]) -> Vec<MaOverlay> {
    if !is_chronological(series) {
        tracing::warn!(
            candles = series.len(),
            "Price series timestamps are not strictly increasing; overlays may misalign"
        );
    }
    settings
        .iter()
        .map(|slot| compute_overlay(series, slot))
        .collect()
}

/// Computes a single overlay. A disabled slot keeps its identity (name,
/// parameters, color) but carries no points, so the renderer clears the line
/// instead of dropping the series.
pub fn compute_overlay(series: &[PricePoint], settings: &MaSettings) -> MaOverlay {
    let calculator = calculator_for(settings.ma_type, settings.period);
    let points = indicators::compute(series, settings);

    tracing::debug!(
        name = %calculator.name(),
        enabled = settings.enabled,
        candles = series.len(),
        points = points.len(),
        "Computed moving-average overlay"
    );

    MaOverlay {
        name: calculator.name().to_string(),
        parameters: calculator.parameters(),
        color: settings.color.clone(),
        points,
    }
}
