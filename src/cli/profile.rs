//! # profile 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/profile.rs`

use super::common::LaserArgs;
use crate::units::cli_length_micrometer;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 剖面输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ProfileOutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file (all quantities)
    Csv,
    /// XY data file (offset, fluence)
    Xy,
}

/// profile 子命令参数
#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub laser: LaserArgs,

    /// Largest offset to sample (µm) [default: the 1/e² diameter]
    #[arg(long, value_parser = cli_length_micrometer)]
    pub max_offset: Option<f64>,

    /// Offset step (µm)
    #[arg(long, value_parser = cli_length_micrometer, default_value = "1")]
    pub step: f64,

    /// Output file
    #[arg(short, long, default_value = "beam_profile.csv")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ProfileOutputFormat>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot
    #[arg(long, default_value = "Radial Fluence Profile")]
    pub title: String,
}
