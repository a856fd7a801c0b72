//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `concentration`: 由晶胞参数计算吸光分子浓度
//! - `interact`: 激光-样品相互作用计算（可选晶体校验）
//! - `workflow`: 晶胞浓度 → 相互作用的完整流程
//! - `profile`: 径向光束剖面扫描与导出
//! - `batch`: 从 CSV 批量计算晶胞浓度
//! - `interactive`: 交互式菜单
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: common, concentration, interact, profile, batch

pub mod batch;
pub mod common;
pub mod concentration;
pub mod interact;
pub mod profile;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// chromolaser - 晶体光谱实验的浓度与激光相互作用计算器
#[derive(Parser, Debug)]
#[command(name = "chromolaser")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Chromophore concentration and laser-sample interaction calculator",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON file with lattice and laser defaults
    #[arg(long, global = true, env = "CHROMOLASER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a unit cell and derive the chromophore concentration
    Concentration(concentration::ConcentrationArgs),

    /// Compute laser-sample interaction quantities
    Interact(interact::InteractArgs),

    /// Concentration from crystal parameters, then laser-sample interaction
    Workflow(interact::WorkflowArgs),

    /// Sweep the lateral offset across the beam and export the profile
    Profile(profile::ProfileArgs),

    /// Compute concentrations for every lattice listed in a CSV file
    Batch(batch::BatchArgs),

    /// Menu-driven prompts with defaults
    Interactive,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_concentration_with_units() {
        let cli = Cli::try_parse_from([
            "chromolaser",
            "concentration",
            "--a",
            "6.2nm",
            "--gamma",
            "120deg",
            "-z",
            "4",
        ])
        .unwrap();
        match cli.command {
            Commands::Concentration(args) => {
                assert!((args.lattice.a.unwrap() - 6.2e-9).abs() < 1e-20);
                assert_eq!(args.lattice.z, Some(4));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_interact_beam_type() {
        let cli = Cli::try_parse_from([
            "chromolaser",
            "interact",
            "--beam-diameter",
            "80",
            "--beam-type",
            "1e2",
            "--verify",
        ])
        .unwrap();
        match cli.command {
            Commands::Interact(args) => {
                assert_eq!(args.laser.beam_type, Some(common::BeamType::OneOverESquared));
                assert!(args.verify);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_quantity() {
        let err = Cli::try_parse_from(["chromolaser", "interact", "--wavelength", "532 parsec"]);
        assert!(err.is_err());
    }
}
