//! # interact / workflow 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/interact.rs`

use super::common::{LaserArgs, LatticeArgs};
use clap::Args;
use std::path::PathBuf;

/// interact 子命令参数
#[derive(Args, Debug)]
pub struct InteractArgs {
    #[command(flatten)]
    pub laser: LaserArgs,

    /// Cross-check the concentration against crystal parameters
    #[arg(long, default_value_t = false)]
    pub verify: bool,

    #[command(flatten, next_help_heading = "Crystal verification")]
    pub lattice: LatticeArgs,

    /// Also write the full result as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// workflow 子命令参数
#[derive(Args, Debug)]
pub struct WorkflowArgs {
    #[command(flatten, next_help_heading = "Crystal parameters")]
    pub lattice: LatticeArgs,

    /// Laser and sample parameters (--concentration is replaced by the crystal value)
    #[command(flatten, next_help_heading = "Laser and sample")]
    pub laser: LaserArgs,

    /// Also write the full result as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
}
