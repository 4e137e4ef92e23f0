//! Reductions over velocity segments.
//!
//! Every reduction classifies segments as moving or stationary with the same
//! inclusive `velocity >= min_velocity` test, so the three results always
//! describe the same subset of the track.

use log::debug;

use crate::{DailyBreakdown, DayBoundary, VelocitySegment};

/// Default moving threshold in m/s.
pub const DEFAULT_MIN_VELOCITY: f64 = 0.5;

fn moving(
    segments: &[VelocitySegment],
    min_velocity: f64,
) -> impl Iterator<Item = &VelocitySegment> {
    segments.iter().filter(move |s| s.is_moving(min_velocity))
}

/// Distance-weighted average velocity over moving segments, in m/s.
///
/// Returns 0.0 when no segment qualifies.
///
/// # Example
/// ```
/// use tracestats::{VelocitySegment, average_velocity};
///
/// let segments = vec![
///     VelocitySegment::new(10.0, 10.0, 10.0),
///     VelocitySegment::new(40.0, 20.0, 30.0),
///     VelocitySegment::new(50.0, 0.1, 10.0),
/// ];
/// // (10*10 + 20*30) / (10 + 30)
/// assert_eq!(average_velocity(&segments, 0.5), 17.5);
/// assert_eq!(average_velocity(&[], 0.5), 0.0);
/// ```
pub fn average_velocity(segments: &[VelocitySegment], min_velocity: f64) -> f64 {
    let (distance, time) = moving(segments, min_velocity)
        .fold((0.0, 0.0), |(d, t), s| (d + s.distance(), t + s.elapsed));

    if time > 0.0 { distance / time } else { 0.0 }
}

/// Total moving time in seconds.
pub fn total_driving_time(segments: &[VelocitySegment], min_velocity: f64) -> f64 {
    // Folding from +0.0: an empty f64 `sum()` yields -0.0
    moving(segments, min_velocity).fold(0.0, |acc, s| acc + s.elapsed)
}

/// Moving seconds per calendar date of each segment's end timestamp.
///
/// Dates without moving time are absent from the map.
pub fn daily_summary(
    segments: &[VelocitySegment],
    min_velocity: f64,
    day_boundary: DayBoundary,
) -> DailyBreakdown {
    let mut daily = DailyBreakdown::new();

    for segment in moving(segments, min_velocity) {
        match day_boundary.date_of(segment.timestamp) {
            Some(date) => *daily.entry(date).or_insert(0.0) += segment.elapsed,
            None => debug!(
                "[Aggregation] timestamp {} has no calendar date, skipping",
                segment.timestamp
            ),
        }
    }

    daily
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_stationary_is_zero() {
        let segments = [
            VelocitySegment::new(10.0, 0.1, 10.0),
            VelocitySegment::new(20.0, 0.49, 10.0),
        ];
        assert_eq!(average_velocity(&segments, DEFAULT_MIN_VELOCITY), 0.0);
        assert_eq!(total_driving_time(&segments, DEFAULT_MIN_VELOCITY), 0.0);
        assert!(daily_summary(&segments, DEFAULT_MIN_VELOCITY, DayBoundary::Utc).is_empty());
    }

    #[test]
    fn test_zero_results_are_positive_zero() {
        let stationary = [VelocitySegment::new(10.0, 0.1, 10.0)];
        for segments in [&stationary[..], &stationary[..0]] {
            assert!(total_driving_time(segments, DEFAULT_MIN_VELOCITY).is_sign_positive());
            assert!(average_velocity(segments, DEFAULT_MIN_VELOCITY).is_sign_positive());
        }
    }

    #[test]
    fn test_unrepresentable_timestamp_skipped() {
        let segments = [
            VelocitySegment::new(f64::INFINITY, 5.0, 10.0),
            VelocitySegment::new(60.0, 5.0, 10.0),
        ];
        let daily = daily_summary(&segments, DEFAULT_MIN_VELOCITY, DayBoundary::Utc);
        assert_eq!(daily.len(), 1);
        assert_eq!(daily.values().sum::<f64>(), 10.0);
    }
}
