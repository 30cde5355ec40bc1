// Weighted Moving Average (WMA) calculator
use super::MaCalculator;
use serde_json::Value;
use shared::models::{MaPoint, PricePoint};

pub struct Wma {
    name: String,
    period: usize,
}

impl Wma {
    pub fn new(period: usize) -> Self {
        Self {
            name: format!("WMA({})", period),
            period,
        }
    }
}

impl MaCalculator for Wma {
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

        // Linear weights: the newest close in the window gets weight `period`,
        // the oldest gets 1. Denominator is the closed form of 1 + 2 + ... + period.
        let weight_sum = (self.period * (self.period + 1) / 2) as f64;
        let mut results = Vec::with_capacity(data.len() - self.period + 1);

        for i in (self.period - 1)..data.len() {
            let mut weighted = 0.0;
            for j in 0..self.period {
                weighted += (self.period - j) as f64 * data[i - j].close;
            }
            results.push(MaPoint {
                timestamp: data[i].timestamp,
                value: weighted / weight_sum,
            });
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    fn price_series(closes: &[f64]) -> Vec<PricePoint> {
        let start: DateTime<Utc> = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                timestamp: start + Duration::hours(i as i64),
                open: close,
                high: close,
                low: close,
                close,
            })
            .collect()
    }

    fn assert_near(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_wma_calculation() {
        let series = price_series(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let wma = Wma::new(3);
        let results = wma.calculate(&series);
        // (1*1 + 2*2 + 3*3) / 6, (1*2 + 2*3 + 3*4) / 6, (1*3 + 2*4 + 3*5) / 6
        assert_eq!(results.len(), 3);
        assert_near(results[0].value, 14.0 / 6.0);
        assert_near(results[1].value, 20.0 / 6.0);
        assert_near(results[2].value, 26.0 / 6.0);
        assert_eq!(results[0].timestamp, series[2].timestamp);
    }

    #[test]
    fn test_wma_constant_prices() {
        let series = price_series(&[100.0; 8]);
        let wma = Wma::new(5);
        for point in wma.calculate(&series) {
            assert_near(point.value, 100.0);
        }
    }

    #[test]
    fn test_wma_period_one() {
        let series = price_series(&[1.0, 2.0, 3.0]);
        let wma = Wma::new(1);
        let values: Vec<f64> = wma.calculate(&series).iter().map(|p| p.value).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_wma_insufficient_data() {
        let series = price_series(&[1.0, 2.0]);
        let wma = Wma::new(3);
        assert!(wma.calculate(&series).is_empty());
    }

    #[test]
    fn test_wma_period_zero_is_empty() {
        let series = price_series(&[1.0, 2.0, 3.0]);
        let wma = Wma::new(0);
        assert!(wma.calculate(&series).is_empty());
    }
}
