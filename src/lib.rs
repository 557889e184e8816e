// Library interface for the rvvbench harness
// This allows integration tests to access internal modules

pub mod config;
pub mod invoke;
pub mod parser;
pub mod report;
pub mod runner;
pub mod stats;
