//! Strict parser for the benchmark executable's stdout contract
//!
//! A usable trial prints the verification marker `Verify RVV: OK` plus two
//! cycle-count lines, `Cycles ref: <n>` and `Cycles RVV: <n>`. Anything
//! else is a typed parse error; the trial loop decides what to do with it.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Literal marker the benchmark prints after verifying the accelerated result.
pub const VERIFY_MARKER: &str = "Verify RVV: OK";

const REF_PATTERN: &str = r"Cycles ref: (\d+)";
const RVV_PATTERN: &str = r"Cycles RVV: (\d+)";

/// Cycle counts extracted from one successful trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialMeasurement {
    /// Cycles of the scalar baseline implementation.
    pub ref_cycles: u64,
    /// Cycles of the vectorized implementation.
    pub rvv_cycles: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("output does not contain 'Verify RVV: OK'")]
    MissingMarker,
    #[error("no '{pattern}' line in benchmark output")]
    MissingCycles { pattern: &'static str },
    #[error("cycle count out of range: '{digits}'")]
    CyclesOutOfRange { digits: String },
}

fn ref_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(REF_PATTERN).expect("hardcoded pattern"))
}

fn rvv_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(RVV_PATTERN).expect("hardcoded pattern"))
}

/// Parse one trial's stdout into a measurement.
///
/// The marker is checked first; a run that failed verification never
/// contributes cycle counts no matter what else it printed.
pub fn parse_trial_output(text: &str) -> Result<TrialMeasurement, ParseError> {
    if !text.contains(VERIFY_MARKER) {
        return Err(ParseError::MissingMarker);
    }

    let ref_cycles = extract(ref_regex(), "Cycles ref", text)?;
    let rvv_cycles = extract(rvv_regex(), "Cycles RVV", text)?;

    Ok(TrialMeasurement {
        ref_cycles,
        rvv_cycles,
    })
}

fn extract(re: &Regex, pattern: &'static str, text: &str) -> Result<u64, ParseError> {
    let caps = re
        .captures(text)
        .ok_or(ParseError::MissingCycles { pattern })?;
    let digits = &caps[1];
    digits
        .parse::<u64>()
        .map_err(|_| ParseError::CyclesOutOfRange {
            digits: digits.to_string(),
        })
}
