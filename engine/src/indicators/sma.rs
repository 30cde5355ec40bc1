// Simple Moving Average (SMA) calculator
use super::MaCalculator;
use serde_json::Value;
use shared::models::{MaPoint, PricePoint};

pub struct Sma {
    name: String,
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self {
            name: format!("SMA({})", period),
            period,
        }
    }
}

impl MaCalculator for Sma {
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

        // Sum the first full window, then slide it.
        let mut sum: f64 = data.iter().take(self.period).map(|p| p.close).sum();
        results.push(MaPoint {
            timestamp: data[self.period - 1].timestamp,
            value: sum / self.period as f64,
        });

        for i in self.period..data.len() {
            sum = sum - data[i - self.period].close + data[i].close;
            results.push(MaPoint {
                timestamp: data[i].timestamp,
                value: sum / self.period as f64,
            });
        }
        results
    }
}
