//! Sample extraction from raw tracking records.
//!
//! Tracking feeds are noisy: records may not be objects, may lack fields, or
//! may carry geometry we cannot read. None of that is an error here. Such
//! records are dropped and tallied in [`ExtractionStats`].

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{RawRecord, Sample};

/// WKT point geometry, `POINT (<lon> <lat>)`. ASCII digits only.
static POINT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"POINT \(([+-]?[0-9]+\.?[0-9]*) ([+-]?[0-9]+\.?[0-9]*)\)").expect("valid regex")
});

/// Per-reason counts of records rejected during extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Record was not a JSON object
    pub not_an_object: usize,
    /// `timestamp` absent, zero, or not a number
    pub missing_timestamp: usize,
    /// `lonlat` absent, empty, or not a string
    pub missing_lonlat: usize,
    /// `lonlat` present but not a recognizable point
    pub unparsable_lonlat: usize,
}

impl ExtractionStats {
    /// Total number of rejected records.
    pub fn rejected(&self) -> usize {
        self.not_an_object + self.missing_timestamp + self.missing_lonlat + self.unparsable_lonlat
    }
}

/// Samples extracted from a record set, with rejection counts.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Samples sorted ascending by timestamp
    pub samples: Vec<Sample>,
    pub stats: ExtractionStats,
}

/// Why a record did not yield a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    NotAnObject,
    MissingTimestamp,
    MissingLonlat,
    UnparsableLonlat,
}

/// Parse a WKT point string into `(longitude, latitude)`.
///
/// The pattern may appear anywhere in the text. Returns `None` for empty or
/// unrecognized input. Note the order: longitude first.
///
/// # Example
/// ```
/// use tracestats::parse_point;
/// assert_eq!(parse_point("POINT (-122.1759 48.1492)"), Some((-122.1759, 48.1492)));
/// assert_eq!(parse_point("LINESTRING (0 0, 1 1)"), None);
/// ```
pub fn parse_point(text: &str) -> Option<(f64, f64)> {
    if text.is_empty() {
        return None;
    }
    let caps = POINT_PATTERN.captures(text)?;
    let lon = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let lat = caps.get(2)?.as_str().parse::<f64>().ok()?;
    Some((lon, lat))
}

/// Extract samples from records, sorted by timestamp.
///
/// Ties keep their input order.
pub fn extract_points(records: &[RawRecord]) -> Vec<Sample> {
    extract_points_with_stats(records).samples
}

/// Extract samples from records and report what was rejected.
pub fn extract_points_with_stats(records: &[RawRecord]) -> Extraction {
    let mut samples = Vec::with_capacity(records.len());
    let mut stats = ExtractionStats::default();

    for record in records {
        match sample_from_record(record) {
            Ok(sample) => samples.push(sample),
            Err(Rejection::NotAnObject) => stats.not_an_object += 1,
            Err(Rejection::MissingTimestamp) => stats.missing_timestamp += 1,
            Err(Rejection::MissingLonlat) => stats.missing_lonlat += 1,
            Err(Rejection::UnparsableLonlat) => stats.unparsable_lonlat += 1,
        }
    }

    // Stable: equal timestamps stay in input order
    samples.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

    if stats.rejected() > 0 {
        debug!(
            "[Extraction] kept {} of {} records ({:?})",
            samples.len(),
            records.len(),
            stats
        );
    }

    Extraction { samples, stats }
}

fn sample_from_record(record: &RawRecord) -> Result<Sample, Rejection> {
    let fields = record.as_object().ok_or(Rejection::NotAnObject)?;

    let timestamp = fields
        .get("timestamp")
        .and_then(Value::as_f64)
        .filter(|t| *t != 0.0)
        .ok_or(Rejection::MissingTimestamp)?;

    let lonlat = fields
        .get("lonlat")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(Rejection::MissingLonlat)?;

    let (lon, lat) = parse_point(lonlat).ok_or(Rejection::UnparsableLonlat)?;

    Ok(Sample::new(timestamp, lat, lon))
}
