// Moving-average calculators
pub mod ema;
pub mod sma;
pub mod wma;

pub use ema::Ema;
pub use sma::Sma;
pub use wma::Wma;

use serde_json::Value;
use shared::models::{MaPoint, MaSettings, MaType, PricePoint};

// Common trait for all moving-average calculators
pub trait MaCalculator: Send + Sync {
    fn name(&self) -> &str;
    fn parameters(&self) -> Value; // Parameters used for this calculator instance
    /// Output is suffix-aligned with the input: one point per input index
    /// `i >= period - 1`, carrying that candle's timestamp. Empty when the
    /// series cannot fill a single window.
    fn calculate(&self, data: &[PricePoint]) -> Vec<MaPoint>;
}

/// Builds the calculator for a variant/period pair.
pub fn calculator_for(ma_type: MaType, period: usize) -> Box<dyn MaCalculator> {
    match ma_type {
        MaType::Sma => Box::new(Sma::new(period)),
        MaType::Ema => Box::new(Ema::new(period)),
        MaType::Wma => Box::new(Wma::new(period)),
    }
}

/// Computes one moving-average series for a single settings value.
///
/// Total over all inputs: disabled settings, a zero period, or a period the
/// series cannot fill all produce an empty series rather than an error, so no
/// partial window is ever emitted.
pub fn compute(series: &[PricePoint], settings: &MaSettings) -> Vec<MaPoint> {
    if !settings.enabled {
        return Vec::new();
    }
    calculator_for(settings.ma_type, settings.period).calculate(series)
}
