//! # profile 命令实现
//!
//! 计算径向光束剖面并导出为 CSV / XY 数据或 PNG / SVG 图表。
//!
//! ## 依赖关系
//! - 使用 `cli/profile.rs` 定义的参数
//! - 使用 `laser/profile.rs`, `report/export.rs`, `report/plot.rs`

use crate::cli::profile::{ProfileArgs, ProfileOutputFormat};
use crate::config::FileConfig;
use crate::error::Result;
use crate::laser::{self, beam, ProfileRange};
use crate::report::{export, plot};
use crate::units::MICROMETER;
use crate::utils::output;

use std::path::Path;

/// 执行 profile 命令
pub fn execute(args: ProfileArgs, config: &FileConfig) -> Result<()> {
    output::print_header("Radial Beam Profile");

    let params = args.laser.resolve(&config.laser);
    let range = ProfileRange {
        max_offset: args.max_offset,
        step: args.step,
    };

    let points = laser::radial_profile(&params, &range)?;
    if let Some(last) = points.last() {
        output::print_info(&format!(
            "{} points from 0 to {:.1} µm (step {:.2} µm)",
            points.len(),
            last.offset / MICROMETER,
            args.step / MICROMETER
        ));
    }

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));

    match format {
        ProfileOutputFormat::Csv => export::profile_to_csv(&points, &args.output)?,
        ProfileOutputFormat::Xy => export::profile_to_xy(&points, &args.output)?,
        ProfileOutputFormat::Png | ProfileOutputFormat::Svg => {
            let chart = plot::ProfileChart {
                title: &args.title,
                wavelength: params.wavelength,
                radius_1e2: beam::one_over_e_squared_diameter(params.beam_diameter) / 2.0,
                width: args.width,
                height: args.height,
            };
            plot::generate_profile_plot(
                &points,
                &chart,
                &args.output,
                format == ProfileOutputFormat::Svg,
            )?;
        }
    }

    output::print_success(&format!("Profile saved to '{}'", args.output.display()));
    Ok(())
}

/// 根据扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> ProfileOutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("png") => ProfileOutputFormat::Png,
        Some("svg") => ProfileOutputFormat::Svg,
        Some("xy") | Some("dat") | Some("txt") => ProfileOutputFormat::Xy,
        _ => ProfileOutputFormat::Csv,
    }
}
