//! Chart rendering for aggregated benchmark results
//!
//! Two artifacts, both written into the pre-existing output directory:
//! a speedup-vs-size line chart (log2 size axis, dashed parity line at 1.0)
//! and a grouped bar chart of the raw cycle means (log cycle axis).

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::full_palette::ORANGE;

use crate::stats::SizeSummary;

pub const SCALING_CHART: &str = "scaling_results.png";
pub const PAIRWISE_CHART: &str = "pairwise_comparison.png";

const CHART_SIZE: (u32, u32) = (1000, 600);

/// Line chart of speedup versus problem size, with the scalar baseline
/// marked at 1.0. An empty results map still produces a blank canvas.
pub fn render_scaling_chart(
    results: &BTreeMap<u64, SizeSummary>,
    output_dir: &Path,
) -> Result<()> {
    let path = output_dir.join(SCALING_CHART);
    let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    if results.is_empty() {
        root.present()
            .with_context(|| format!("failed to write {}", path.display()))?;
        return Ok(());
    }

    // BTreeMap iteration is already ascending by size
    let points: Vec<(f64, f64)> = results
        .values()
        .map(|s| (s.size as f64, s.speedup))
        .collect();

    let x_min = points[0].0;
    let x_max = {
        let last = points[points.len() - 1].0;
        if last > x_min {
            last
        } else {
            x_min * 2.0
        }
    };
    let y_max = points
        .iter()
        .map(|&(_, s)| s)
        .fold(1.0f64, f64::max)
        * 1.2;

    let mut chart = ChartBuilder::on(&root)
        .caption("RVV Performance Scaling vs Array Size", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min..x_max).log_scale().base(2.0), 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Array Size (N)")
        .y_desc("Speedup Factor (Scalar / RVV)")
        .x_label_formatter(&|v| format!("{:.0}", v))
        .draw()?;

    chart
        .draw_series(LineSeries::new(points.clone(), GREEN.stroke_width(2)))?
        .label("RVV speedup")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(2)));

    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, GREEN.filled())),
    )?;

    // Parity with the scalar baseline
    chart
        .draw_series(DashedLineSeries::new(
            vec![(x_min, 1.0), (x_max, 1.0)],
            8,
            4,
            RED.stroke_width(1),
        ))?
        .label("Scalar Baseline")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Grouped bar chart of mean cycle counts, two bars per size, on a log
/// cycle axis. An empty results map still produces a blank canvas.
pub fn render_pairwise_chart(
    results: &BTreeMap<u64, SizeSummary>,
    output_dir: &Path,
) -> Result<()> {
    let path = output_dir.join(PAIRWISE_CHART);
    let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    if results.is_empty() {
        root.present()
            .with_context(|| format!("failed to write {}", path.display()))?;
        return Ok(());
    }

    let summaries: Vec<&SizeSummary> = results.values().collect();
    let y_max = summaries
        .iter()
        .map(|s| s.mean_ref.max(s.mean_rvv))
        .fold(1.0f64, f64::max)
        * 2.0;

    let mut chart = ChartBuilder::on(&root)
        .caption("Cycle Comparison: Scalar vs RVV", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(
            -0.5f64..summaries.len() as f64 - 0.5,
            (1f64..y_max).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc("Array Size (N)")
        .y_desc("Cycles (log scale)")
        .x_labels(summaries.len())
        .x_label_formatter(&|x| {
            // One tick group per size, labeled with the literal size value
            let idx = x.round();
            if (x - idx).abs() < 1e-6 && idx >= 0.0 && (idx as usize) < summaries.len() {
                summaries[idx as usize].size.to_string()
            } else {
                String::new()
            }
        })
        .draw()?;

    const BAR_HALF: f64 = 0.35;

    chart
        .draw_series(summaries.iter().enumerate().map(|(i, s)| {
            let x = i as f64;
            Rectangle::new([(x - BAR_HALF, 1.0), (x, s.mean_ref)], BLUE.filled())
        }))?
        .label("Scalar Ref")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], BLUE.filled()));

    chart
        .draw_series(summaries.iter().enumerate().map(|(i, s)| {
            let x = i as f64;
            Rectangle::new([(x, 1.0), (x + BAR_HALF, s.mean_rvv)], ORANGE.filled())
        }))?
        .label("RVV")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], ORANGE.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
