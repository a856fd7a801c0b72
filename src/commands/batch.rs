//! # batch 命令实现
//!
//! 从 CSV 读取多组晶胞参数，逐行计算浓度。
//! 单行失败只记录并跳过，不影响其余行。
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的参数
//! - 使用 `crystal/`, `report/export.rs`, `utils/output.rs`
//! - 使用 `csv` 读取输入，`tabled` 打印结果表

use crate::cli::batch::BatchArgs;
use crate::crystal;
use crate::error::{ChromoError, Result};
use crate::models::{ConcentrationResult, LatticeParameters};
use crate::report::export;
use crate::units::CUBIC_METER_TO_CUBIC_ANGSTROM;
use crate::utils::output;

use serde::Deserialize;
use std::io::Read;
use tabled::{Table, Tabled};

/// 输入 CSV 的一行（Å 与度）
#[derive(Debug, Clone, Deserialize)]
struct LatticeRow {
    name: String,
    a: f64,
    b: f64,
    c: f64,
    alpha: f64,
    beta: f64,
    gamma: f64,
    z: u32,
}

impl LatticeRow {
    fn compute(&self) -> Result<ConcentrationResult> {
        let params = LatticeParameters::from_angstrom_degrees(
            self.a, self.b, self.c, self.alpha, self.beta, self.gamma,
        )?;
        crystal::concentration(&params, self.z)
    }
}

/// 批处理结果
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub succeeded: Vec<(String, ConcentrationResult)>,
    /// (行标识, 错误信息)
    pub failed: Vec<(String, String)>,
}

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Batch Concentration Calculation");
    output::print_info(&format!("Reading '{}'", args.input.display()));

    let file = std::fs::File::open(&args.input).map_err(|e| ChromoError::FileReadError {
        path: args.input.display().to_string(),
        source: e,
    })?;
    let outcome = process(file)?;

    for (row, err) in &outcome.failed {
        output::print_warning(&format!("{}: {}", row, err));
    }

    if outcome.succeeded.is_empty() {
        output::print_warning("No lattice set could be evaluated");
        return Ok(());
    }

    print_table(&outcome.succeeded);
    output::print_separator();

    output::print_info(&format!(
        "{} succeeded, {} failed",
        outcome.succeeded.len(),
        outcome.failed.len()
    ));

    if let Some(ref path) = args.output {
        export::concentrations_to_csv(&outcome.succeeded, path)?;
        output::print_success(&format!("Results saved to '{}'", path.display()));
    }

    Ok(())
}

/// 逐行处理 CSV 输入
pub fn process<R: Read>(input: R) -> Result<BatchOutcome> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    let mut outcome = BatchOutcome::default();

    for (i, record) in reader.deserialize::<LatticeRow>().enumerate() {
        // 表头占第 1 行
        let line = i + 2;
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                outcome.failed.push((format!("line {}", line), e.to_string()));
                continue;
            }
        };

        match row.compute() {
            Ok(result) => {
                log::debug!("{}: {:.6} mol/L", row.name, result.mol_per_liter);
                outcome.succeeded.push((row.name, result));
            }
            Err(e) => outcome
                .failed
                .push((format!("line {} ({})", line, row.name), e.to_string())),
        }
    }

    Ok(outcome)
}

/// 打印结果表
fn print_table(rows: &[(String, ConcentrationResult)]) {
    #[derive(Tabled)]
    struct ConcentrationRow {
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "System")]
        system: String,
        #[tabled(rename = "Z")]
        z: u32,
        #[tabled(rename = "V (Å³)")]
        volume: String,
        #[tabled(rename = "C (mol/L)")]
        mol_per_liter: String,
    }

    let table_rows: Vec<ConcentrationRow> = rows
        .iter()
        .map(|(name, r)| ConcentrationRow {
            name: name.clone(),
            system: r.system().to_string(),
            z: r.z,
            volume: format!("{:.2}", r.volume() * CUBIC_METER_TO_CUBIC_ANGSTROM),
            mol_per_liter: format!("{:.6}", r.mol_per_liter),
        })
        .collect();

    println!("{}", Table::new(&table_rows));
}
