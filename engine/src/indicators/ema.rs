// Exponential Moving Average (EMA) calculator
use super::MaCalculator;
use serde_json::Value;
use shared::models::{MaPoint, PricePoint};

pub struct Ema {
    name: String,
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self {
            name: format!("EMA({})", period),
            period,
        }
    }
}

impl MaCalculator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "period": self.period })
    }

    fn calculate(&self, data: &[PricePoint]) -> Vec<MaPoint> {
        if self.period == 0 || data.len() < self.period {
            return Vec::new();
        }

        let mut results = Vec::with_capacity(data.len() - self.period + 1);
        let multiplier = 2.0 / (self.period as f64 + 1.0);

        // Seed with the SMA of the first window; the recurrence takes over
        // from there. Indices must be processed in increasing order since
        // each value depends on the previous output.
        let initial_sum: f64 = data.iter().take(self.period).map(|p| p.close).sum();
        let mut previous_ema = initial_sum / self.period as f64;
        results.push(MaPoint {
            timestamp: data[self.period - 1].timestamp,
            value: previous_ema,
        });

        for point in data.iter().skip(self.period) {
            let ema = (point.close - previous_ema) * multiplier + previous_ema;
            results.push(MaPoint {
                timestamp: point.timestamp,
                value: ema,
            });
            previous_ema = ema;
        }
        results
    }
}
