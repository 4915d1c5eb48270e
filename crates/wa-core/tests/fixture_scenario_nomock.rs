//! No-mock scenario tests over the nine-hour Saturday fixture.
//!
//! Covers:
//! - Both input shapes parse to the same samples
//! - Every stage of the report against hand-checked values
//! - Byte-for-byte reproducibility under a fixed clock

use std::path::PathBuf;
use wa_common::{
    parse_samples, AnomalyClass, Direction, HourClass, OverallClassification, Sample,
};
use wa_config::AnalysisPolicy;
use wa_core::analysis::CauseTag;
use wa_core::{analyze, FixedClock, Report, ReportStatus};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load(name: &str) -> Vec<Sample> {
    let text = std::fs::read_to_string(fixture_path(name)).expect("read fixture");
    parse_samples(&text).expect("parse fixture")
}

fn report() -> Report {
    let clock = FixedClock::from_timestamp(1_767_434_400);
    analyze(
        &load("wind_fixture.json"),
        &AnalysisPolicy::default(),
        &clock,
    )
}

fn approx(actual: f64, expected: f64, tol: f64) -> bool {
    (actual - expected).abs() <= tol
}

#[test]
fn test_both_shapes_parse_identically() {
    let scraped = load("wind_fixture.json");
    let flat = load("wind_fixture_flat.json");
    assert_eq!(scraped.len(), 9);
    assert_eq!(scraped, flat);
    assert_eq!(scraped[0], Sample::hourly(10, 11.0, "GGD", 6.0));
}

#[test]
fn test_fixture_statistics() {
    let report = report();
    assert_eq!(report.status, ReportStatus::Success);
    assert_eq!(
        report.overall_classification,
        Some(OverallClassification::High)
    );

    let stats = report.details.as_ref().unwrap().stats;
    assert!(approx(stats.mean, 14.11, 0.01));
    assert!(approx(stats.stddev, 3.76, 0.01));
    assert!(approx(stats.upper, 19.74, 0.01));
    assert!(approx(stats.lower, 8.48, 0.01));
    assert!(approx(stats.volatility_pct, 26.6, 0.05));
    assert_eq!(stats.median, 13.0);
    assert_eq!(stats.min, 11.0);
    assert_eq!(stats.max, 22.0);
}

#[test]
fn test_fixture_single_anomaly() {
    let report = report();
    let anomalies = &report.details.as_ref().unwrap().anomalies;
    assert_eq!(anomalies.count, 1);
    assert_eq!(anomalies.ratio_pct, 11.11);

    let rec = &anomalies.records[0];
    assert_eq!(rec.index, 5);
    assert_eq!(rec.time_label, "15:00");
    assert_eq!(rec.speed, 22.0);
    assert_eq!(rec.direction, Direction::SouthEast);
    assert_eq!(rec.classification, AnomalyClass::AnomalyHigh);
    assert!(approx(rec.deviation_pct.unwrap(), 55.9, 0.05));
    assert_eq!(rec.reasons, vec![CauseTag::NearPeriodMaximum]);
}

#[test]
fn test_fixture_trends() {
    let report = report();
    let trends = &report.details.as_ref().unwrap().trends;
    assert_eq!(trends.stable.len(), 1);
    assert_eq!(trends.rising.len(), 1);
    assert_eq!(trends.falling.len(), 1);

    let stable = &trends.stable[0];
    assert_eq!((stable.start_index, stable.end_index), (0, 2));
    assert_eq!((stable.start_speed, stable.end_speed), (11.0, 11.0));
    assert_eq!((stable.start_time.as_str(), stable.end_time.as_str()), ("10:00", "12:00"));

    let rising = &trends.rising[0];
    assert_eq!((rising.start_index, rising.end_index), (3, 5));
    assert_eq!((rising.start_speed, rising.end_speed), (13.0, 22.0));
    assert_eq!(rising.delta, 9.0);

    let falling = &trends.falling[0];
    assert_eq!((falling.start_index, falling.end_index), (6, 8));
    assert_eq!((falling.start_speed, falling.end_speed), (18.0, 12.0));
    assert_eq!(falling.delta, -6.0);
}

#[test]
fn test_fixture_directions() {
    let report = report();
    let direction = &report.details.as_ref().unwrap().direction;
    assert_eq!(direction.dominant.code(), "GGD");

    let buckets: Vec<(&str, usize, f64)> = direction
        .buckets
        .iter()
        .map(|b| (b.direction.code(), b.count, b.percentage))
        .collect();
    assert_eq!(
        buckets,
        vec![("GGD", 5, 55.56), ("GD", 3, 33.33), ("G", 1, 11.11)]
    );
}

#[test]
fn test_fixture_hourly() {
    let report = report();
    let hourly = &report.details.as_ref().unwrap().hourly;
    assert_eq!(hourly.len(), 9);
    for bin in hourly {
        let expected = match bin.hour {
            15 | 16 => HourClass::High,
            _ => HourClass::Normal,
        };
        assert_eq!(bin.classification, expected, "hour {}", bin.hour_label);
    }
    let total: usize = hourly.iter().map(|b| b.sample_count).sum();
    assert_eq!(total, 9);
}

#[test]
fn test_fixture_report_is_reproducible() {
    let a = serde_json::to_string_pretty(&report()).unwrap();
    let b = serde_json::to_string_pretty(&report()).unwrap();
    assert_eq!(a, b);
    assert!(a.contains("\"generated_at\": \"2026-01-03T10:00:00Z\""));
}

#[test]
fn test_report_json_round_trip() {
    let original = report();
    let json = serde_json::to_string(&original).unwrap();
    let back: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(back.status, original.status);
    assert_eq!(back.generated_at, original.generated_at);
    assert_eq!(back.overall_classification, original.overall_classification);

    let (a, b) = (back.details.unwrap(), original.details.unwrap());
    assert_eq!(a.scope, b.scope);
    assert_eq!(a.direction, b.direction);
    assert_eq!(a.trends, b.trends);
    assert_eq!(a.hourly, b.hourly);
    assert_eq!(a.anomalies.count, b.anomalies.count);
}
