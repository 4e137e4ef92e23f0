//! Per-party analysis pipeline and two-party comparison.
//!
//! `records -> samples -> velocity segments -> summary`. Every stage is a pure
//! function of its input, so the two analyses of a comparison share nothing
//! and can run concurrently.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::aggregation::{average_velocity, daily_summary, total_driving_time};
use crate::extraction::extract_points_with_stats;
use crate::velocity::calculate_velocities_with_stats;
use crate::{AnalysisConfig, Diagnostics, PartySummary, RawRecord};

const SECONDS_PER_HOUR: f64 = 3600.0;
const MS_TO_KMH: f64 = 3.6;

/// Summaries of two parties, side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub first: PartySummary,
    pub second: PartySummary,
}

/// Analyze one party's tracking records.
///
/// Always returns a well-formed summary: an empty or fully malformed record
/// set yields [`PartySummary::empty`].
pub fn analyze_party(records: &[RawRecord], config: &AnalysisConfig) -> PartySummary {
    analyze_party_with_diagnostics(records, config).0
}

/// Analyze one party and report what each stage dropped.
pub fn analyze_party_with_diagnostics(
    records: &[RawRecord],
    config: &AnalysisConfig,
) -> (PartySummary, Diagnostics) {
    let extraction = extract_points_with_stats(records);
    let track = calculate_velocities_with_stats(&extraction.samples);
    let segments = &track.segments;
    let min_velocity = config.min_velocity;

    let avg_velocity = average_velocity(segments, min_velocity);
    let driving_time = total_driving_time(segments, min_velocity);
    let daily = daily_summary(segments, min_velocity, config.day_boundary);

    let summary = PartySummary {
        average_velocity_m_s: avg_velocity,
        average_velocity_km_h: avg_velocity * MS_TO_KMH,
        total_driving_time_hours: driving_time / SECONDS_PER_HOUR,
        daily_driving_hours: daily
            .into_iter()
            .map(|(date, seconds)| (date, seconds / SECONDS_PER_HOUR))
            .collect(),
        point_count: extraction.samples.len(),
    };

    let diagnostics = Diagnostics {
        records_seen: records.len(),
        extraction: extraction.stats,
        segments: segments.len(),
        skipped_pairs: track.skipped_pairs,
        moving_segments: segments.iter().filter(|s| s.is_moving(min_velocity)).count(),
    };

    debug!(
        "[Analysis] {} records -> {} points -> {} segments ({} moving), {:.2} h driving",
        diagnostics.records_seen,
        summary.point_count,
        diagnostics.segments,
        diagnostics.moving_segments,
        summary.total_driving_time_hours
    );

    (summary, diagnostics)
}

/// Analyze two parties independently.
///
/// With the `parallel` feature the two analyses run on the rayon pool.
pub fn compare_parties(
    first: &[RawRecord],
    second: &[RawRecord],
    config: &AnalysisConfig,
) -> Comparison {
    compare_parties_with_diagnostics(first, second, config).0
}

/// Same as [`compare_parties`], also returning each party's diagnostics
/// (first, second).
pub fn compare_parties_with_diagnostics(
    first: &[RawRecord],
    second: &[RawRecord],
    config: &AnalysisConfig,
) -> (Comparison, (Diagnostics, Diagnostics)) {
    #[cfg(feature = "parallel")]
    let ((first, first_diag), (second, second_diag)) = rayon::join(
        || analyze_party_with_diagnostics(first, config),
        || analyze_party_with_diagnostics(second, config),
    );

    #[cfg(not(feature = "parallel"))]
    let ((first, first_diag), (second, second_diag)) = (
        analyze_party_with_diagnostics(first, config),
        analyze_party_with_diagnostics(second, config),
    );

    (Comparison { first, second }, (first_diag, second_diag))
}

/// Sequential version of [`compare_parties`].
pub fn compare_parties_sequential(
    first: &[RawRecord],
    second: &[RawRecord],
    config: &AnalysisConfig,
) -> Comparison {
    Comparison {
        first: analyze_party(first, config),
        second: analyze_party(second, config),
    }
}
