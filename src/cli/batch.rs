//! # batch 子命令 CLI 定义
//!
//! 输入 CSV 列: `name,a,b,c,alpha,beta,gamma,z`（Å 与度）
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// CSV file with columns name,a,b,c,alpha,beta,gamma,z (Å and degrees)
    pub input: PathBuf,

    /// Output CSV with the computed concentrations
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
