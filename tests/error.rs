//! Tests for error module

use std::str::FromStr;

use tracestats::{AnalysisConfig, DayBoundary, TraceStatsError};

#[test]
fn test_error_display() {
    let err = TraceStatsError::InvalidTopLevel { found: "an object" };
    assert!(err.to_string().contains("JSON array"));
    assert!(err.to_string().contains("an object"));
}

#[test]
fn test_config_validation() {
    assert!(AnalysisConfig::default().validate().is_ok());

    let zero = AnalysisConfig {
        min_velocity: 0.0,
        ..AnalysisConfig::default()
    };
    assert!(zero.validate().is_ok());

    for bad in [-1.0, f64::NAN, f64::INFINITY] {
        let config = AnalysisConfig {
            min_velocity: bad,
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TraceStatsError::InvalidConfig(_))
        ));
    }
}

#[test]
fn test_day_boundary_from_str() {
    assert_eq!(DayBoundary::from_str("local").unwrap(), DayBoundary::Local);
    assert_eq!(DayBoundary::from_str("UTC").unwrap(), DayBoundary::Utc);
    assert_eq!(
        DayBoundary::from_str("+02:00").unwrap(),
        DayBoundary::FixedOffset { seconds_east: 7200 }
    );
    assert_eq!(
        DayBoundary::from_str("-05:30").unwrap(),
        DayBoundary::FixedOffset {
            seconds_east: -19_800
        }
    );
    assert!(matches!(
        DayBoundary::from_str("mars/olympus"),
        Err(TraceStatsError::InvalidConfig(_))
    ));
}
