// Deterministic sample candle generator for the demo binary, benches and tests.
use chrono::{Duration, Utc};
use shared::models::PricePoint;

const BASE_PRICE: f64 = 1.1000;
const DRIFT_RANGE: f64 = 0.0020;
const CLOSE_RANGE: f64 = 0.0015;
const WICK_RANGE: f64 = 0.0010;

/// xorshift64* generator. The demo only needs repeatable, plausible-looking
/// candles, not cryptographic quality.
struct SampleRng(u64);

impl SampleRng {
    fn new(seed: u64) -> Self {
        // State must be non-zero or the sequence degenerates to all zeros.
        Self(seed.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform in [0, 1), from the top 53 bits.
    fn next_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Generates `count` hourly candles ending at the current hour: a random walk
/// around 1.1000 with highs/lows padded beyond the open/close envelope.
/// Output is deterministic for a given seed and always in chronological order.
pub fn generate_series(count: usize, seed: u64) -> Vec<PricePoint> {
    let mut rng = SampleRng::new(seed);
    let start = Utc::now() - Duration::hours(count as i64);
    let mut base_price = BASE_PRICE;
    let mut series = Vec::with_capacity(count);

    for i in 0..count {
        base_price += (rng.next_unit() - 0.5) * DRIFT_RANGE;

        let open = base_price;
        let close = base_price + (rng.next_unit() - 0.5) * CLOSE_RANGE;
        let high = open.max(close) + rng.next_unit() * WICK_RANGE;
        let low = open.min(close) - rng.next_unit() * WICK_RANGE;

        series.push(PricePoint {
            timestamp: start + Duration::hours(i as i64),
            open,
            high,
            low,
            close,
        });
    }

    series
}
