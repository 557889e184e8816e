//! Build step, per-size trial loop, and the top-level driver
//!
//! Control flows top-down and once: build, then for each problem size run
//! K trials and average, then hand the results map to the chart renderers.
//! Every per-trial failure is swallowed into a tally; only a build failure
//! aborts the run.

use std::collections::BTreeMap;
use std::io::Write;
use std::process::Command;

use anyhow::{bail, Context, Result};

use crate::config::BenchConfig;
use crate::invoke::Invoker;
use crate::parser::{self, ParseError};
use crate::stats::SizeSummary;

/// Per-reason tallies for trials that produced no usable measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailureCounts {
    /// The benchmark process could not be started.
    pub spawn_error: usize,
    /// The process ran but exited with a non-zero status.
    pub non_zero_exit: usize,
    /// The output lacked the `Verify RVV: OK` marker.
    pub missing_marker: usize,
    /// The marker was present but a cycle-count line was absent or malformed.
    pub parse_failure: usize,
}

impl FailureCounts {
    pub fn total(&self) -> usize {
        self.spawn_error + self.non_zero_exit + self.missing_marker + self.parse_failure
    }
}

/// Raw samples for one problem size.
///
/// The two cycle lists are index-aligned: a trial records both values or
/// neither, so their lengths are always equal.
#[derive(Debug, Clone, Default)]
pub struct TrialBatch {
    pub ref_cycles: Vec<u64>,
    pub rvv_cycles: Vec<u64>,
    pub failures: FailureCounts,
}

impl TrialBatch {
    pub fn successes(&self) -> usize {
        self.ref_cycles.len()
    }

    pub fn has_samples(&self) -> bool {
        !self.ref_cycles.is_empty() && !self.rvv_cycles.is_empty()
    }
}

/// Run the external build command once. Any failure here is fatal: no
/// trial may run against a stale or missing binary.
pub fn build(config: &BenchConfig) -> Result<()> {
    let (program, args) = config
        .build_command
        .split_first()
        .context("build command is empty")?;

    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("failed to run build command '{}'", program))?;

    if !status.success() {
        bail!("build command '{}' exited with {}", program, status);
    }

    Ok(())
}

/// Run `iterations` trials for one problem size.
///
/// Trials that fail to spawn, exit non-zero, or violate the output contract
/// are skipped with no retry; the discard reason is tallied on the batch.
pub fn run_benchmark_for_n(invoker: &dyn Invoker, size: u64, iterations: usize) -> TrialBatch {
    let mut batch = TrialBatch::default();

    for _ in 0..iterations {
        match invoker.invoke(size) {
            Err(_) => batch.failures.spawn_error += 1,
            Ok(invocation) if !invocation.success => batch.failures.non_zero_exit += 1,
            Ok(invocation) => match parser::parse_trial_output(&invocation.stdout) {
                Ok(measurement) => {
                    batch.ref_cycles.push(measurement.ref_cycles);
                    batch.rvv_cycles.push(measurement.rvv_cycles);
                }
                Err(ParseError::MissingMarker) => batch.failures.missing_marker += 1,
                Err(_) => batch.failures.parse_failure += 1,
            },
        }
    }

    batch
}

/// Drive the whole run: build once, then benchmark and summarize every
/// configured size. Sizes with zero usable trials are omitted from the
/// returned map and reported as failed on the console.
pub fn run(config: &BenchConfig, invoker: &dyn Invoker) -> Result<BTreeMap<u64, SizeSummary>> {
    println!("Compiling the code\n");
    build(config)?;

    let mut results = BTreeMap::new();

    for &size in &config.sizes {
        print!("Benchmarking N={}... ", size);
        let _ = std::io::stdout().flush();

        let batch = run_benchmark_for_n(invoker, size, config.iterations);

        match SizeSummary::from_batch(size, &batch) {
            Some(summary) => {
                println!("Speedup: {:.2}", summary.speedup);
                results.insert(size, summary);
            }
            None => {
                println!("Failed, try again");
                let f = batch.failures;
                eprintln!(
                    "N={}: 0/{} usable trials (spawn errors: {}, non-zero exits: {}, missing marker: {}, parse failures: {})",
                    size,
                    config.iterations,
                    f.spawn_error,
                    f.non_zero_exit,
                    f.missing_marker,
                    f.parse_failure
                );
            }
        }
    }

    Ok(results)
}
