//! Synthetic drive-record generator for testing and benchmarking.
//!
//! Produces tracking records for a party that alternates between driving and
//! parking over several days, together with the ground truth the analysis
//! should recover. Records are emitted shuffled and optionally salted with
//! malformed entries, so the extraction stage has real work to do.
//!
//! Feature-gated behind `synthetic`.
//!
//! # Example
//!
//! ```rust
//! use tracestats::synthetic::DriveScenario;
//! use tracestats::{AnalysisConfig, DayBoundary, analyze_party};
//!
//! let scenario = DriveScenario::default();
//! let dataset = scenario.generate();
//!
//! let config = AnalysisConfig {
//!     day_boundary: DayBoundary::Utc,
//!     ..AnalysisConfig::default()
//! };
//! let summary = analyze_party(&dataset.records, &config);
//! assert_eq!(summary.point_count, dataset.truth.valid_points);
//! ```

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::json;

use crate::geo_utils::meters_to_degrees;
use crate::{DailyBreakdown, DayBoundary, RawRecord};

const SECONDS_PER_DAY: i64 = 86_400;

// ============================================================================
// Types
// ============================================================================

/// Scenario configuration for a synthetic party.
#[derive(Debug, Clone)]
pub struct DriveScenario {
    /// Starting position (latitude, longitude).
    pub origin: (f64, f64),
    /// Epoch seconds of the first sample.
    pub start_timestamp: i64,
    /// Number of consecutive days to generate.
    pub days: u32,
    /// Trips driven per day.
    pub trips_per_day: u32,
    /// Driving time per trip in seconds.
    pub trip_seconds: u32,
    /// Parked time between trips in seconds (sampled, zero velocity).
    pub stop_seconds: u32,
    /// Cruising speed in m/s. Should sit well above the moving threshold.
    pub speed_m_s: f64,
    /// Time between consecutive samples in seconds.
    pub sample_interval_secs: u32,
    /// Extra malformed records per valid record (0.0-1.0).
    pub malformed_fraction: f64,
    /// RNG seed for deterministic reproduction.
    pub seed: u64,
}

impl Default for DriveScenario {
    fn default() -> Self {
        Self {
            origin: (48.1492, -122.1759),
            // 2024-03-04T08:00:00Z
            start_timestamp: 1_709_539_200,
            days: 3,
            trips_per_day: 2,
            trip_seconds: 1_800,
            stop_seconds: 600,
            speed_m_s: 15.0,
            sample_interval_secs: 10,
            malformed_fraction: 0.05,
            seed: 42,
        }
    }
}

/// What an analysis of the generated records should find.
#[derive(Debug, Clone, Default)]
pub struct GroundTruth {
    /// Records that yield a sample.
    pub valid_points: usize,
    /// Malformed records mixed in.
    pub malformed_records: usize,
    /// Seconds spent driving.
    pub moving_seconds: f64,
    /// Driving seconds per UTC calendar date.
    pub daily_moving_seconds: DailyBreakdown,
}

/// Generated records with their ground truth.
pub struct DriveDataset {
    /// Shuffled records, valid and malformed.
    pub records: Vec<RawRecord>,
    pub truth: GroundTruth,
}

// ============================================================================
// Generation
// ============================================================================

struct Cursor {
    timestamp: i64,
    latitude: f64,
    longitude: f64,
    heading: f64,
}

impl Cursor {
    fn record(&self) -> RawRecord {
        json!({
            "timestamp": self.timestamp,
            "lonlat": format!("POINT ({:.6} {:.6})", self.longitude, self.latitude),
        })
    }

    fn advance(&mut self, meters: f64) {
        let (dlat, dlon) = meters_to_degrees(
            meters * self.heading.sin(),
            meters * self.heading.cos(),
            self.latitude,
        );
        self.latitude += dlat;
        self.longitude += dlon;
    }
}

impl DriveScenario {
    /// Generate the dataset.
    pub fn generate(&self) -> DriveDataset {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let interval = i64::from(self.sample_interval_secs.max(1));
        let mut truth = GroundTruth::default();
        let mut records = Vec::new();

        let mut cursor = Cursor {
            timestamp: self.start_timestamp,
            latitude: self.origin.0,
            longitude: self.origin.1,
            heading: rng.gen_range(0.0..(2.0 * PI)),
        };

        for day in 0..i64::from(self.days) {
            // Overnight: jump to the day's start without moving. This leaves a
            // single long stationary segment.
            cursor.timestamp = self.start_timestamp + day * SECONDS_PER_DAY;
            records.push(cursor.record());

            for trip in 0..self.trips_per_day {
                let steps = i64::from(self.trip_seconds) / interval;
                for _ in 0..steps {
                    cursor.heading += rng.gen_range(-0.2..0.2);
                    cursor.advance(self.speed_m_s * interval as f64);
                    cursor.timestamp += interval;
                    records.push(cursor.record());

                    truth.moving_seconds += interval as f64;
                    if let Some(date) = DayBoundary::Utc.date_of(cursor.timestamp as f64) {
                        *truth.daily_moving_seconds.entry(date).or_insert(0.0) +=
                            interval as f64;
                    }
                }

                if trip + 1 < self.trips_per_day {
                    let stop_steps = i64::from(self.stop_seconds) / interval;
                    for _ in 0..stop_steps {
                        cursor.timestamp += interval;
                        records.push(cursor.record());
                    }
                }
            }
        }

        truth.valid_points = records.len();

        let malformed = (records.len() as f64 * self.malformed_fraction.clamp(0.0, 1.0)) as usize;
        for i in 0..malformed {
            records.push(malformed_record(i, &mut rng));
        }
        truth.malformed_records = malformed;

        records.shuffle(&mut rng);

        DriveDataset { records, truth }
    }
}

fn malformed_record(i: usize, rng: &mut StdRng) -> RawRecord {
    let timestamp: i64 = rng.gen_range(1_000_000_000..2_000_000_000);
    match i % 5 {
        0 => json!("not a record"),
        1 => json!({ "lonlat": "POINT (-122.0 48.0)" }),
        2 => json!({ "timestamp": timestamp }),
        3 => json!({ "timestamp": timestamp, "lonlat": "POINT EMPTY" }),
        _ => json!({ "timestamp": 0, "lonlat": "POINT (-122.0 48.0)" }),
    }
}
