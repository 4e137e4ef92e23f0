//! # Trace Stats
//!
//! Motion reconstruction and moving-time statistics for GPS-tracked parties.
//!
//! This library provides:
//! - Extraction of time-ordered samples from loosely structured tracking records
//! - Haversine distance and per-segment velocity computation
//! - Threshold-based aggregation into average velocity, moving time and a daily breakdown
//! - Side-by-side comparison of two parties
//!
//! ## Features
//!
//! - **`parallel`** - Run the two analyses of a comparison concurrently with rayon
//! - **`synthetic`** - Seeded generator of synthetic drive records
//! - **`cli`** - Build the `tracestats-cli` binary
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use tracestats::{AnalysisConfig, DayBoundary, analyze_party};
//!
//! let records = vec![
//!     json!({"timestamp": 1_700_000_000, "lonlat": "POINT (-122.0 48.0)"}),
//!     json!({"timestamp": 1_700_000_010, "lonlat": "POINT (-122.0 48.0005)"}),
//! ];
//!
//! let config = AnalysisConfig {
//!     day_boundary: DayBoundary::Utc,
//!     ..AnalysisConfig::default()
//! };
//!
//! let summary = analyze_party(&records, &config);
//! assert_eq!(summary.point_count, 2);
//! assert!(summary.average_velocity_m_s > 5.0);
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{Result, TraceStatsError};

// Geographic utilities (haversine distance)
pub mod geo_utils;

// Record parsing and sample ordering
pub mod extraction;
pub use extraction::{Extraction, ExtractionStats, extract_points, parse_point};

// Pairwise velocity computation
pub mod velocity;
pub use velocity::calculate_velocities;

// Moving/stationary reductions
pub mod aggregation;
pub use aggregation::{average_velocity, daily_summary, total_driving_time};

// Per-party pipeline and two-party comparison
pub mod analysis;
pub use analysis::{
    Comparison, analyze_party, analyze_party_with_diagnostics, compare_parties,
    compare_parties_sequential, compare_parties_with_diagnostics,
};

// JSON input loading
pub mod input;
pub use input::{load_records, parse_records};

// Synthetic drive records for tests and benchmarks
#[cfg(feature = "synthetic")]
pub mod synthetic;

// ============================================================================
// Core Types
// ============================================================================

/// An untrusted tracking record as it arrives from the data source.
///
/// Usable records are JSON objects carrying a numeric `timestamp` (epoch
/// seconds) and a `lonlat` string such as `"POINT (-122.1759 48.1492)"`.
/// Anything else is tolerated and skipped during extraction.
pub type RawRecord = serde_json::Value;

/// Seconds of moving time (or hours, once converted) keyed by calendar date.
pub type DailyBreakdown = BTreeMap<NaiveDate, f64>;

/// A validated GPS observation.
///
/// # Example
/// ```
/// use tracestats::Sample;
/// let sample = Sample::new(1_700_000_000.0, 48.1492, -122.1759);
/// assert_eq!(sample.latitude, 48.1492);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Seconds since the Unix epoch
    pub timestamp: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Sample {
    /// Create a new sample.
    pub fn new(timestamp: f64, latitude: f64, longitude: f64) -> Self {
        Self {
            timestamp,
            latitude,
            longitude,
        }
    }
}

/// Velocity measured between two consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocitySegment {
    /// Timestamp of the later sample of the pair
    pub timestamp: f64,
    /// Velocity in m/s
    pub velocity: f64,
    /// Elapsed time in seconds (always > 0)
    pub elapsed: f64,
}

impl VelocitySegment {
    /// Create a new segment.
    pub fn new(timestamp: f64, velocity: f64, elapsed: f64) -> Self {
        Self {
            timestamp,
            velocity,
            elapsed,
        }
    }

    /// Distance covered over the segment in meters.
    pub fn distance(&self) -> f64 {
        self.velocity * self.elapsed
    }

    /// Whether the segment counts as moving. The threshold is inclusive.
    pub fn is_moving(&self, min_velocity: f64) -> bool {
        self.velocity >= min_velocity
    }
}

/// Summary statistics for one party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartySummary {
    /// Distance-weighted average velocity over moving segments (m/s)
    pub average_velocity_m_s: f64,
    /// Same as `average_velocity_m_s`, in km/h
    pub average_velocity_km_h: f64,
    /// Total moving time in hours
    pub total_driving_time_hours: f64,
    /// Moving hours per calendar date
    pub daily_driving_hours: DailyBreakdown,
    /// Number of samples that survived extraction
    pub point_count: usize,
}

impl PartySummary {
    /// Summary of a party with no usable samples.
    pub fn empty() -> Self {
        Self {
            average_velocity_m_s: 0.0,
            average_velocity_km_h: 0.0,
            total_driving_time_hours: 0.0,
            daily_driving_hours: DailyBreakdown::new(),
            point_count: 0,
        }
    }
}

/// Counters describing what each pipeline stage dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Records handed to the extractor
    pub records_seen: usize,
    /// Per-reason extraction rejections
    pub extraction: ExtractionStats,
    /// Velocity segments produced
    pub segments: usize,
    /// Adjacent sample pairs with non-positive elapsed time
    pub skipped_pairs: usize,
    /// Segments at or above the velocity threshold
    pub moving_segments: usize,
}

// ============================================================================
// Configuration
// ============================================================================

/// Time-zone policy used to turn epoch seconds into calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayBoundary {
    /// The system time zone of the running process
    #[default]
    Local,
    Utc,
    /// A fixed offset from UTC, in seconds east
    FixedOffset { seconds_east: i32 },
}

impl DayBoundary {
    /// Calendar date of an epoch timestamp under this policy.
    ///
    /// Returns `None` for timestamps chrono cannot represent (non-finite or out of range).
    ///
    /// # Example
    /// ```
    /// use tracestats::DayBoundary;
    /// let date = DayBoundary::Utc.date_of(86_399.5).unwrap();
    /// assert_eq!(date.to_string(), "1970-01-01");
    /// ```
    pub fn date_of(&self, timestamp: f64) -> Option<NaiveDate> {
        if !timestamp.is_finite() {
            return None;
        }
        let secs = timestamp.floor();
        if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
            return None;
        }
        let nanos = ((timestamp - secs) * 1e9) as u32;
        let utc = DateTime::<Utc>::from_timestamp(secs as i64, nanos.min(999_999_999))?;

        Some(match self {
            DayBoundary::Local => utc.with_timezone(&Local).date_naive(),
            DayBoundary::Utc => utc.date_naive(),
            DayBoundary::FixedOffset { seconds_east } => {
                let offset = FixedOffset::east_opt(*seconds_east)?;
                utc.with_timezone(&offset).date_naive()
            }
        })
    }
}

impl std::str::FromStr for DayBoundary {
    type Err = TraceStatsError;

    /// Parse `local`, `utc`, or an offset such as `+02:00` / `-05:30`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(DayBoundary::Local),
            "utc" | "z" => Ok(DayBoundary::Utc),
            other => other
                .parse::<FixedOffset>()
                .map(|offset| DayBoundary::FixedOffset {
                    seconds_east: offset.local_minus_utc(),
                })
                .map_err(|_| {
                    TraceStatsError::InvalidConfig(format!(
                        "unrecognized time zone '{}' (expected local, utc or ±HH:MM)",
                        s
                    ))
                }),
        }
    }
}

/// Configuration for a party analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Velocity at or above which a segment counts as moving (m/s).
    /// Slower segments are treated as stationary GPS jitter.
    /// Default: 0.5 m/s
    pub min_velocity: f64,

    /// Time zone used to bucket moving time by calendar date.
    /// Default: the local system time zone
    pub day_boundary: DayBoundary,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_velocity: aggregation::DEFAULT_MIN_VELOCITY,
            day_boundary: DayBoundary::Local,
        }
    }
}

impl AnalysisConfig {
    /// Check that the threshold is a usable velocity.
    pub fn validate(&self) -> Result<()> {
        if !self.min_velocity.is_finite() || self.min_velocity < 0.0 {
            return Err(TraceStatsError::InvalidConfig(format!(
                "min_velocity must be a finite, non-negative number (got {})",
                self.min_velocity
            )));
        }
        Ok(())
    }
}
