//! Velocity reconstruction between consecutive samples.

use crate::geo_utils::sample_distance;
use crate::{Sample, VelocitySegment};

/// Velocity segments plus the number of sample pairs that could not form one.
#[derive(Debug, Clone, Default)]
pub struct VelocityTrack {
    pub segments: Vec<VelocitySegment>,
    /// Adjacent pairs with zero or negative elapsed time
    pub skipped_pairs: usize,
}

/// Compute one velocity segment per adjacent sample pair.
///
/// Samples are expected in ascending timestamp order. Pairs whose elapsed
/// time is not strictly positive are skipped, so the result has at most
/// `samples.len() - 1` entries.
///
/// # Example
/// ```
/// use tracestats::{Sample, calculate_velocities};
///
/// let samples = vec![
///     Sample::new(0.0, 48.0, -122.0),
///     Sample::new(10.0, 48.0005, -122.0),
/// ];
/// let segments = calculate_velocities(&samples);
/// assert_eq!(segments.len(), 1);
/// assert!((segments[0].velocity - 5.56).abs() < 0.01);
/// ```
pub fn calculate_velocities(samples: &[Sample]) -> Vec<VelocitySegment> {
    calculate_velocities_with_stats(samples).segments
}

/// Same as [`calculate_velocities`], also counting skipped pairs.
pub fn calculate_velocities_with_stats(samples: &[Sample]) -> VelocityTrack {
    let mut track = VelocityTrack {
        segments: Vec::with_capacity(samples.len().saturating_sub(1)),
        skipped_pairs: 0,
    };

    for pair in samples.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let elapsed = next.timestamp - prev.timestamp;

        if elapsed > 0.0 {
            let velocity = sample_distance(prev, next) / elapsed;
            track
                .segments
                .push(VelocitySegment::new(next.timestamp, velocity, elapsed));
        } else {
            track.skipped_pairs += 1;
        }
    }

    track
}
