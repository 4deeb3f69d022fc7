// region:    --- Imports
use crate::error::{BenchError, Result};
use crate::network::NetworkVariant;
use crate::report::Report;
use crate::stats::Operation;
use plotters::prelude::*;
use std::fs;
use std::path::Path;
use tracing::info;

// endregion: --- Imports

const CHART_SIZE: (u32, u32) = (960, 600);
const GROUP_WIDTH: f64 = 0.8;

fn variant_color(variant: NetworkVariant) -> RGBColor {
    match variant {
        NetworkVariant::NonOptimized => RGBColor(214, 96, 77),
        NetworkVariant::Optimized => RGBColor(67, 147, 195),
    }
}

fn chart_err<E: std::fmt::Display>(e: E) -> BenchError {
    BenchError::Chart(e.to_string())
}

// region:    --- Plot
/// 연산별 평균 지연 시간을 네트워크 구성별 막대로 비교 (SVG)
pub fn plot_comparison(report: &Report, path: &Path) -> Result<()> {
    if report.runs.is_empty() {
        return Err(BenchError::Chart("측정 결과가 없습니다".to_string()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let ops = Operation::ALL;
    let y_max = report
        .runs
        .iter()
        .map(|run| run.stats.max())
        .fold(0.0, f64::max);
    // 모든 값이 0 이어도 축이 그려지도록
    let y_max = if y_max > 0.0 { y_max * 1.15 } else { 1.0 };

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "Average latency per operation ({} resources, {} bids each)",
                report.resources, report.bids
            ),
            ("sans-serif", 22),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..(ops.len() as f64 - 0.5), 0f64..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(ops.len())
        .x_label_formatter(&|x| {
            let idx = x.round();
            if (x - idx).abs() < 1e-6 && idx >= 0.0 && (idx as usize) < ops.len() {
                ops[idx as usize].name().to_string()
            } else {
                String::new()
            }
        })
        .y_desc("seconds / operation")
        .y_label_formatter(&|y| format!("{:.3}", y))
        .draw()
        .map_err(chart_err)?;

    let bar_width = GROUP_WIDTH / report.runs.len() as f64;
    for (slot, run) in report.runs.iter().enumerate() {
        let color = variant_color(run.variant);
        let bars = ops.iter().enumerate().map(|(i, op)| {
            let left = i as f64 - GROUP_WIDTH / 2.0 + slot as f64 * bar_width;
            Rectangle::new(
                [(left, 0.0), (left + bar_width, run.stats.get(*op))],
                color.filled(),
            )
        });
        chart
            .draw_series(bars)
            .map_err(chart_err)?
            .label(run.variant.label())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    info!("{:<12} --> 차트 저장: {}", "Chart", path.display());
    Ok(())
}
// endregion: --- Plot

// endregion: --- Tests
