//! # concentration 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/concentration.rs`

use super::common::LatticeArgs;
use clap::Args;

/// concentration 子命令参数
#[derive(Args, Debug)]
pub struct ConcentrationArgs {
    #[command(flatten)]
    pub lattice: LatticeArgs,
}
