//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `config.rs`, `crystal/`, `laser/`, `report/`, `utils/`
//! - 子模块: concentration, interact, profile, batch, interactive

pub mod batch;
pub mod concentration;
pub mod interact;
pub mod interactive;
pub mod profile;

use crate::cli::{Cli, Commands};
use crate::config::FileConfig;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let config = FileConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Concentration(args) => concentration::execute(args, &config),
        Commands::Interact(args) => interact::execute(args, &config),
        Commands::Workflow(args) => interact::execute_workflow(args, &config),
        Commands::Profile(args) => profile::execute(args, &config),
        Commands::Batch(args) => batch::execute(args),
        Commands::Interactive => interactive::execute(&config),
    }
}
