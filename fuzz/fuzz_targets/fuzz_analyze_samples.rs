//! Structured fuzz target for the analysis engine.
//!
//! Generates sample windows directly (including NaN, infinities, negative
//! speeds, and out-of-range hours) and a policy with arbitrary tunables.
//! The report must always be produced and must serialize.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wa_common::{Direction, Sample};
use wa_config::{AnalysisPolicy, OrderingPolicy};
use wa_core::{analyze, FixedClock};

#[derive(Debug, Arbitrary)]
struct FuzzSample {
    hour: u8,
    minute: u8,
    speed: f64,
    direction: u8,
    temperature: f64,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    samples: Vec<FuzzSample>,
    anomaly_sigma: f64,
    hourly_sigma: f64,
    trend_step: f64,
    strict: bool,
}

fuzz_target!(|input: FuzzInput| {
    let samples: Vec<Sample> = input
        .samples
        .iter()
        .map(|s| {
            let direction = Direction::all()
                .nth(usize::from(s.direction) % 17)
                .unwrap_or(Direction::Unknown);
            Sample::new(
                format!("{:02}:{:02}", s.hour, s.minute),
                s.hour,
                s.minute,
                s.speed,
                direction,
                s.temperature,
            )
        })
        .collect();

    let ordering = if input.strict {
        OrderingPolicy::Strict
    } else {
        OrderingPolicy::Trust
    };
    let policy = AnalysisPolicy {
        anomaly_sigma: input.anomaly_sigma,
        hourly_sigma: input.hourly_sigma,
        trend_step: input.trend_step,
        ..AnalysisPolicy::default()
    }
    .with_ordering(ordering);

    let report = analyze(&samples, &policy, &FixedClock::from_timestamp(0));
    let _ = serde_json::to_string(&report);
});
