//! Fixed run configuration for the benchmark harness
//!
//! The size list, iteration count, and command lines are deliberate
//! constants: the measurement contract carries no flags and no environment
//! variables. Tests repoint the commands through the `with_*` setters.

use std::path::PathBuf;

/// Problem sizes driven through the external benchmark, in run order.
pub const DEFAULT_SIZES: [u64; 8] = [256, 512, 1024, 2048, 4096, 8192, 16384, 32768];

/// Trials per problem size. Failed trials are dropped rather than retried,
/// so the fixed count doubles as redundancy.
pub const DEFAULT_ITERATIONS: usize = 30;

#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Problem sizes, benchmarked in this order.
    pub sizes: Vec<u64>,
    /// Trials per size.
    pub iterations: usize,
    /// Build command, run once before any trial. Non-zero exit aborts the run.
    pub build_command: Vec<String>,
    /// Benchmark command; the problem size is appended as the sole extra argument.
    pub benchmark_command: Vec<String>,
    /// Directory the chart images are written to. Must already exist.
    pub output_dir: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            iterations: DEFAULT_ITERATIONS,
            build_command: vec!["bash".to_string(), "compile.bash".to_string()],
            benchmark_command: vec!["bash".to_string(), "run.bash".to_string()],
            output_dir: PathBuf::from("results"),
        }
    }
}

impl BenchConfig {
    /// Replace the problem-size list
    pub fn with_sizes(mut self, sizes: Vec<u64>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Replace the per-size trial count
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Replace the build command line
    pub fn with_build_command(mut self, command: Vec<String>) -> Self {
        self.build_command = command;
        self
    }

    /// Replace the benchmark command line
    pub fn with_benchmark_command(mut self, command: Vec<String>) -> Self {
        self.benchmark_command = command;
        self
    }

    /// Replace the chart output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
