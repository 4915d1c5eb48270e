//! Fuzz target for observation file parsing and analysis.
//!
//! Arbitrary text goes through the same path as `wa-core analyze`: parse
//! either input shape, then assemble a report. Neither step may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wa_common::parse_samples;
use wa_config::AnalysisPolicy;
use wa_core::{analyze, FixedClock};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(samples) = parse_samples(text) {
        let _ = analyze(&samples, &AnalysisPolicy::default(), &FixedClock::from_timestamp(0));
    }
});
