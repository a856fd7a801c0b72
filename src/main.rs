//! # chromolaser - 吸光分子浓度与激光-样品相互作用计算器
//!
//! ## 子命令
//! - `concentration` - 晶胞参数 → 晶系、体积、浓度
//! - `interact` - 激光-样品相互作用（可选晶体校验）
//! - `workflow` - 浓度计算后接相互作用计算
//! - `profile` - 径向光束剖面
//! - `batch` - CSV 批量浓度计算
//! - `interactive` - 交互式菜单
//!
//! 诊断日志由 `-v` / `-vv` 或 `RUST_LOG` 控制。

use chromolaser::cli::Cli;
use chromolaser::{commands, utils};

use clap::Parser;
use log::LevelFilter;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    commands::run(cli)?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    // RUST_LOG 优先于 -v
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
