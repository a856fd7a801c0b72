//! # concentration 命令实现
//!
//! 由晶胞参数判定晶系、计算体积并换算浓度。
//!
//! ## 依赖关系
//! - 使用 `cli/concentration.rs` 定义的参数
//! - 使用 `crystal/`, `report/text.rs`, `utils/output.rs`

use crate::cli::concentration::ConcentrationArgs;
use crate::config::FileConfig;
use crate::crystal;
use crate::error::Result;
use crate::models::ConcentrationResult;
use crate::report;
use crate::utils::output;

/// 执行 concentration 命令
pub fn execute(args: ConcentrationArgs, config: &FileConfig) -> Result<()> {
    output::print_header("Chromophore Concentration");

    let (lattice, z) = args.lattice.resolve(&config.lattice)?;
    let result = crystal::concentration(&lattice, z)?;

    print_concentration(&result);
    Ok(())
}

/// 打印浓度结果
pub fn print_concentration(result: &ConcentrationResult) {
    let (a, b, c) = result.unit_cell.parameters.lengths();
    let (alpha, beta, gamma) = result.unit_cell.parameters.angles();
    output::print_info(&format!(
        "a = {:.3} Å, b = {:.3} Å, c = {:.3} Å, α = {:.2}°, β = {:.2}°, γ = {:.2}°, Z = {}",
        a / crate::units::ANGSTROM,
        b / crate::units::ANGSTROM,
        c / crate::units::ANGSTROM,
        alpha.to_degrees(),
        beta.to_degrees(),
        gamma.to_degrees(),
        result.z
    ));
    output::print_report(&report::format_concentration(result));
}
