//! # 晶胞体积计算
//!
//! 先判定晶系，再使用对应晶系的解析公式计算体积：
//!
//! | 晶系 | 体积 |
//! |------|------|
//! | 立方 | a³ |
//! | 四方 | a²c |
//! | 正交 | abc |
//! | 六方 | a²c·sin(120°) |
//! | 三方 | a³√(1 − 3cos²α + 2cos³α) |
//! | 单斜 | abc·sin β |
//! | 三斜 | abc√(1 + 2cosα cosβ cosγ − cos²α − cos²β − cos²γ) |
//!
//! 根号下为负表示角度组合无法构成晶胞，返回 `InvalidGeometry`。
//!
//! ## 依赖关系
//! - 被 `crystal/concentration.rs` 使用
//! - 使用 `crystal/classify.rs`

use crate::crystal::classify::classify;
use crate::error::{ChromoError, Result};
use crate::models::{CrystalSystem, LatticeParameters, UnitCell};

use std::f64::consts::PI;

/// 计算晶胞体积 (m³)
pub fn cell_volume(params: &LatticeParameters) -> Result<f64> {
    volume_for_system(params, classify(params))
}

/// 判定晶系并计算体积
pub fn unit_cell(params: &LatticeParameters) -> Result<UnitCell> {
    let system = classify(params);
    let volume = volume_for_system(params, system)?;
    Ok(UnitCell {
        parameters: *params,
        system,
        volume,
    })
}

fn volume_for_system(params: &LatticeParameters, system: CrystalSystem) -> Result<f64> {
    let (a, b, c) = params.lengths();
    let (alpha, beta, gamma) = params.angles();

    let volume = match system {
        CrystalSystem::Cubic => a.powi(3),
        CrystalSystem::Tetragonal => a * a * c,
        CrystalSystem::Orthorhombic => a * b * c,
        // 使用结构定义的 120°，而非输入的 γ
        CrystalSystem::Hexagonal => a * a * c * (2.0 * PI / 3.0).sin(),
        CrystalSystem::Rhombohedral => {
            let cos_alpha = alpha.cos();
            let radicand = 1.0 - 3.0 * cos_alpha.powi(2) + 2.0 * cos_alpha.powi(3);
            a.powi(3) * checked_sqrt(radicand, system)?
        }
        CrystalSystem::Monoclinic => a * b * c * beta.sin(),
        CrystalSystem::Triclinic => {
            let (ca, cb, cg) = (alpha.cos(), beta.cos(), gamma.cos());
            let radicand = 1.0 + 2.0 * ca * cb * cg - ca * ca - cb * cb - cg * cg;
            a * b * c * checked_sqrt(radicand, system)?
        }
    };

    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "{} cell volume = {:.6e} m³ (lattice-vector determinant {:.6e} m³)",
            system,
            volume,
            params.vectors().volume().abs()
        );
    }

    Ok(volume)
}

fn checked_sqrt(radicand: f64, system: CrystalSystem) -> Result<f64> {
    if radicand < 0.0 {
        return Err(ChromoError::InvalidGeometry(format!(
            "angles do not form a valid {} cell (volume radicand {:.6} < 0)",
            system.name().to_lowercase(),
            radicand
        )));
    }
    Ok(radicand.sqrt())
}
