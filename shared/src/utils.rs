use crate::models::PricePoint;

/// True when the series timestamps are strictly increasing, i.e. the series
/// is in chronological order with no duplicate timestamps.
pub fn is_chronological(series: &[PricePoint]) -> bool {
    series.windows(2).all(|pair| pair[0].timestamp < pair[1].timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration};

    fn point_at(offset_hours: i64) -> PricePoint {
        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        PricePoint {
            timestamp: start + Duration::hours(offset_hours),
            open: 1.0,
            high: 1.0,
            low: 1.0,
            close: 1.0,
        }
    }

    #[test]
    fn empty_and_single_series_are_chronological() {
        assert!(is_chronological(&[]));
        assert!(is_chronological(&[point_at(0)]));
    }

    #[test]
    fn increasing_timestamps_are_chronological() {
        let series = vec![point_at(0), point_at(1), point_at(2)];
        assert!(is_chronological(&series));
    }

    #[test]
    fn duplicate_timestamps_are_not_chronological() {
        let series = vec![point_at(0), point_at(1), point_at(1)];
        assert!(!is_chronological(&series));
    }

    #[test]
    fn out_of_order_timestamps_are_not_chronological() {
        let series = vec![point_at(2), point_at(1)];
        assert!(!is_chronological(&series));
    }
}
