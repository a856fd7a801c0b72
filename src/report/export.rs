//! # 数据导出
//!
//! 导出计算结果到 CSV、XY 与 JSON 格式。
//!
//! ## 支持格式
//! - CSV: 剖面数据（偏移、强度、能流、功率、光子数），批量浓度表
//! - XY: 偏移 (µm) 与能流密度 (mJ/cm²) 两列，`#` 注释头
//! - JSON: 完整的相互作用结果
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `csv` 与 `serde_json` 写文件

use crate::error::{ChromoError, Result};
use crate::laser::ProfilePoint;
use crate::models::{ConcentrationResult, InteractionResult};
use crate::units::{J_PER_M2_TO_MJ_PER_CM2, MICROMETER, W_PER_M2_TO_GW_PER_CM2};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn write_error(path: &Path, source: std::io::Error) -> ChromoError {
    ChromoError::FileWriteError {
        path: path.display().to_string(),
        source,
    }
}

/// 导出径向剖面为 CSV
pub fn profile_to_csv(points: &[ProfilePoint], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record([
        "offset_um",
        "intensity_percent",
        "fluence_mJ_cm2",
        "power_density_GW_cm2",
        "photon_density_m2",
        "absorbed_photons_per_molecule",
    ])?;

    for p in points {
        wtr.write_record(&[
            format!("{:.4}", p.offset / MICROMETER),
            format!("{:.4}", p.intensity_percent),
            format!("{:.6e}", p.fluence * J_PER_M2_TO_MJ_PER_CM2),
            format!("{:.6e}", p.power_density * W_PER_M2_TO_GW_PER_CM2),
            format!("{:.6e}", p.photon_density),
            format!("{:.6}", p.absorbed_photons_per_molecule),
        ])?;
    }

    wtr.flush().map_err(|e| write_error(output_path, e))?;

    Ok(())
}

/// 导出径向剖面为 XY 格式
pub fn profile_to_xy(points: &[ProfilePoint], output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| write_error(output_path, e))?;
    let mut file = BufWriter::new(file);

    let mut write_all = || -> std::io::Result<()> {
        writeln!(file, "# Radial fluence profile")?;
        writeln!(file, "# Columns: offset (um), fluence (mJ/cm2)")?;
        writeln!(file, "#")?;
        for p in points {
            writeln!(
                file,
                "{:.4}\t{:.6e}",
                p.offset / MICROMETER,
                p.fluence * J_PER_M2_TO_MJ_PER_CM2
            )?;
        }
        file.flush()
    };

    write_all().map_err(|e| write_error(output_path, e))
}

/// 导出相互作用结果为 JSON
pub fn interaction_to_json(result: &InteractionResult, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| write_error(output_path, e))?;
    serde_json::to_writer_pretty(BufWriter::new(file), result)?;
    Ok(())
}

/// 导出批量浓度表为 CSV
pub fn concentrations_to_csv(
    rows: &[(String, ConcentrationResult)],
    output_path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record([
        "name",
        "crystal_system",
        "z",
        "volume_A3",
        "mol_per_L",
        "mol_per_m3",
    ])?;

    for (name, r) in rows {
        wtr.write_record(&[
            name.clone(),
            r.system().to_string(),
            r.z.to_string(),
            format!("{:.4}", r.volume() * crate::units::CUBIC_METER_TO_CUBIC_ANGSTROM),
            format!("{:.9}", r.mol_per_liter),
            format!("{:.6}", r.mol_per_cubic_meter),
        ])?;
    }

    wtr.flush().map_err(|e| write_error(output_path, e))?;

    Ok(())
}
