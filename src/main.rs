use anyhow::Result;

use rvvbench::config::BenchConfig;
use rvvbench::invoke::ProcessInvoker;
use rvvbench::report;
use rvvbench::runner;

fn main() -> Result<()> {
    let config = BenchConfig::default();
    let invoker = ProcessInvoker::new(config.benchmark_command.clone());

    let results = runner::run(&config, &invoker)?;

    report::render_scaling_chart(&results, &config.output_dir)?;
    report::render_pairwise_chart(&results, &config.output_dir)?;

    Ok(())
}
