//! Tests for lib.rs core types

use tracestats::{AnalysisConfig, DayBoundary, PartySummary, VelocitySegment};

#[test]
fn test_default_config() {
    let config = AnalysisConfig::default();
    assert_eq!(config.min_velocity, 0.5);
    assert_eq!(config.day_boundary, DayBoundary::Local);
}

#[test]
fn test_segment_threshold_inclusive() {
    let segment = VelocitySegment::new(10.0, 0.5, 10.0);
    assert!(segment.is_moving(0.5));
    assert!(!segment.is_moving(0.500_001));
    assert_eq!(segment.distance(), 5.0);
}

#[test]
fn test_day_boundary_dates() {
    // 2024-03-04T23:30:00Z
    let ts = 1_709_595_000.0;
    assert_eq!(DayBoundary::Utc.date_of(ts).unwrap().to_string(), "2024-03-04");
    assert_eq!(
        DayBoundary::FixedOffset { seconds_east: 3600 }
            .date_of(ts)
            .unwrap()
            .to_string(),
        "2024-03-05"
    );
    assert_eq!(
        DayBoundary::FixedOffset {
            seconds_east: -7200
        }
        .date_of(ts)
        .unwrap()
        .to_string(),
        "2024-03-04"
    );
    assert!(DayBoundary::Local.date_of(ts).is_some());
}

#[test]
fn test_day_boundary_rejects_non_finite() {
    assert!(DayBoundary::Utc.date_of(f64::NAN).is_none());
    assert!(DayBoundary::Utc.date_of(f64::INFINITY).is_none());
    assert!(DayBoundary::Utc.date_of(1e300).is_none());
}

#[test]
fn test_summary_serializes_with_contract_field_names() {
    let summary = PartySummary::empty();
    let value = serde_json::to_value(&summary).unwrap();
    let object = value.as_object().unwrap();

    for key in [
        "average_velocity_m_s",
        "average_velocity_km_h",
        "total_driving_time_hours",
        "daily_driving_hours",
        "point_count",
    ] {
        assert!(object.contains_key(key), "missing {}", key);
    }
    assert_eq!(object.len(), 5);
}
