//! Fuzz target for policy.json configuration parsing.
//!
//! Parsing and validating arbitrary policy JSON must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wa_config::{validate_policy, AnalysisPolicy};

fuzz_target!(|data: &[u8]| {
    if let Ok(policy) = serde_json::from_slice::<AnalysisPolicy>(data) {
        let _ = validate_policy(&policy);
    }
});
