//! # interact / workflow 命令实现
//!
//! - `interact`: 使用给定浓度计算激光-样品相互作用，可选晶体校验
//! - `workflow`: 先由晶胞参数得到浓度，再计算相互作用
//!
//! ## 依赖关系
//! - 使用 `cli/interact.rs` 定义的参数
//! - 使用 `crystal/`, `laser/`, `report/`, `utils/output.rs`

use crate::cli::interact::{InteractArgs, WorkflowArgs};
use crate::config::FileConfig;
use crate::crystal;
use crate::error::Result;
use crate::laser::{self, VerificationInput};
use crate::models::InteractionResult;
use crate::report;
use crate::utils::output;

use std::path::Path;

/// 执行 interact 命令
pub fn execute(args: InteractArgs, config: &FileConfig) -> Result<()> {
    output::print_header("Laser-Sample Interaction");

    let params = args.laser.resolve(&config.laser);

    let verification = if args.verify {
        let (lattice, z) = args.lattice.resolve(&config.lattice)?;
        Some(VerificationInput { lattice, z })
    } else {
        None
    };

    let result = laser::interact(&params, verification.as_ref())?;
    present(&result, args.json.as_deref())
}

/// 执行 workflow 命令
pub fn execute_workflow(args: WorkflowArgs, config: &FileConfig) -> Result<()> {
    output::print_header("Chromophore Concentration");

    let (lattice, z) = args.lattice.resolve(&config.lattice)?;
    let conc = crystal::concentration(&lattice, z)?;
    super::concentration::print_concentration(&conc);

    if args.laser.concentration.is_some() {
        output::print_warning(
            "--concentration is ignored in workflow mode; using the crystal-derived value",
        );
    }

    output::print_header("Laser-Sample Interaction");
    let params = args
        .laser
        .resolve(&config.laser)
        .with_concentration(conc.mol_per_liter);

    let result = laser::interact(&params, None)?;
    present(&result, args.json.as_deref())
}

fn present(result: &InteractionResult, json: Option<&Path>) -> Result<()> {
    output::print_report(&report::format_interaction(result));
    println!();

    if let Some(path) = json {
        report::export::interaction_to_json(result, path)?;
        output::print_success(&format!("Result saved to '{}'", path.display()));
    }

    Ok(())
}
