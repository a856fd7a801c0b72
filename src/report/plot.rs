//! # 径向剖面图
//!
//! 使用 `plotters` 绘制能流密度随横向偏移的变化，支持 PNG 与 SVG 输出。
//!
//! ## 依赖关系
//! - 被 `commands/profile.rs` 调用
//! - 使用 `laser/profile.rs` 的 ProfilePoint

use crate::error::{ChromoError, Result};
use crate::laser::ProfilePoint;
use crate::units::{J_PER_M2_TO_MJ_PER_CM2, MICROMETER, NANOMETER};

use plotters::prelude::*;
use std::path::Path;

/// 图表样式与标注
#[derive(Debug, Clone)]
pub struct ProfileChart<'a> {
    pub title: &'a str,
    /// 波长 (m)，用于图中标注
    pub wavelength: f64,
    /// 1/e² 半径 (m)，绘制竖直参考线
    pub radius_1e2: f64,
    pub width: u32,
    pub height: u32,
}

/// 生成剖面图
pub fn generate_profile_plot(
    points: &[ProfilePoint],
    chart: &ProfileChart<'_>,
    output_path: &Path,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (chart.width, chart.height)).into_drawing_area();
        draw_profile_chart(&root, points, chart)?;
        root.present()
            .map_err(|e| ChromoError::Other(e.to_string()))?;
    } else {
        let root =
            BitMapBackend::new(output_path, (chart.width, chart.height)).into_drawing_area();
        draw_profile_chart(&root, points, chart)?;
        root.present()
            .map_err(|e| ChromoError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制剖面图的核心逻辑
fn draw_profile_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    points: &[ProfilePoint],
    chart: &ProfileChart<'_>,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| ChromoError::Other(format!("{:?}", e)))?;

    let data: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.offset / MICROMETER, p.fluence * J_PER_M2_TO_MJ_PER_CM2))
        .collect();

    let x_max = data.last().map(|(x, _)| *x).unwrap_or(1.0).max(1e-3);
    let y_max = data.iter().map(|(_, y)| *y).fold(0.0_f64, f64::max).max(1e-12) * 1.1;

    let mut cc = ChartBuilder::on(root)
        .caption(chart.title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(|e| ChromoError::Other(format!("{:?}", e)))?;

    cc.configure_mesh()
        .x_desc("Offset from beam center (µm)")
        .y_desc("Fluence (mJ/cm²)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| ChromoError::Other(format!("{:?}", e)))?;

    let line_color = RGBColor(0, 102, 204);
    cc.draw_series(LineSeries::new(
        data.iter().copied(),
        line_color.stroke_width(2),
    ))
    .map_err(|e| ChromoError::Other(format!("{:?}", e)))?;

    let fill_color = RGBColor(0, 102, 204).mix(0.2);
    cc.draw_series(AreaSeries::new(data.iter().copied(), 0.0, fill_color))
        .map_err(|e| ChromoError::Other(format!("{:?}", e)))?;

    // 1/e² 半径参考线
    let r_um = chart.radius_1e2 / MICROMETER;
    if r_um <= x_max {
        cc.draw_series(std::iter::once(PathElement::new(
            vec![(r_um, 0.0), (r_um, y_max)],
            RGBColor(204, 51, 0).stroke_width(1),
        )))
        .map_err(|e| ChromoError::Other(format!("{:?}", e)))?;
    }

    let annotation = format!("λ = {:.1} nm", chart.wavelength / NANOMETER);
    cc.draw_series(std::iter::once(Text::new(
        annotation,
        (x_max * 0.75, y_max * 0.95),
        ("sans-serif", 14).into_font().color(&BLACK),
    )))
    .map_err(|e| ChromoError::Other(format!("{:?}", e)))?;

    Ok(())
}
