//! Aggregation of raw trial samples into per-size summaries

use serde::{Deserialize, Serialize};

use crate::runner::TrialBatch;

/// Arithmetic mean of the collected cycle counts.
pub fn mean(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Averaged measurements for one problem size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeSummary {
    pub size: u64,
    /// Mean cycles of the scalar baseline.
    pub mean_ref: f64,
    /// Mean cycles of the vectorized implementation.
    pub mean_rvv: f64,
    /// mean_ref / mean_rvv; above 1.0 the accelerated path is faster.
    pub speedup: f64,
}

impl SizeSummary {
    /// Summarize a batch, or `None` when the size produced no usable trials.
    ///
    /// A zero accelerated mean is not guarded; the f64 division yields
    /// infinity rather than an error.
    pub fn from_batch(size: u64, batch: &TrialBatch) -> Option<Self> {
        if !batch.has_samples() {
            return None;
        }

        let mean_ref = mean(&batch.ref_cycles);
        let mean_rvv = mean(&batch.rvv_cycles);

        Some(Self {
            size,
            mean_ref,
            mean_rvv,
            speedup: mean_ref / mean_rvv,
        })
    }
}
