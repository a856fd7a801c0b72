//! # 吸光分子浓度
//!
//! C (mol/m³) = Z / (N_A · V)，C (mol/L) = C (mol/m³) × 10⁻³。
//!
//! ## 依赖关系
//! - 被 `laser/interaction.rs`（晶体校验）和 `commands/` 使用
//! - 使用 `crystal/volume.rs`

use crate::constants::{AVOGADRO, LITERS_PER_CUBIC_METER};
use crate::crystal::volume::unit_cell;
use crate::error::{ChromoError, Result};
use crate::models::{ConcentrationResult, LatticeParameters};

/// 由晶胞参数与每晶胞分子数 Z 计算浓度
pub fn concentration(params: &LatticeParameters, z: u32) -> Result<ConcentrationResult> {
    let cell = unit_cell(params)?;

    if cell.volume.is_nan() || cell.volume <= 0.0 {
        return Err(ChromoError::DomainError(format!(
            "unit cell volume must be positive to derive a concentration, got {:e} m³",
            cell.volume
        )));
    }

    let mol_per_cubic_meter = f64::from(z) / (AVOGADRO * cell.volume);
    let mol_per_liter = mol_per_cubic_meter / LITERS_PER_CUBIC_METER;

    log::debug!(
        "Z={} in {} cell -> {:.9} mol/L",
        z,
        cell.system,
        mol_per_liter
    );

    Ok(ConcentrationResult {
        mol_per_liter,
        mol_per_cubic_meter,
        unit_cell: cell,
        z,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CrystalSystem;
    use approx::assert_relative_eq;

    fn default_cell() -> LatticeParameters {
        LatticeParameters::from_angstrom_degrees(62.0, 62.0, 111.0, 90.0, 90.0, 120.0).unwrap()
    }

    #[test]
    fn test_default_hexagonal_regression() {
        let result = concentration(&default_cell(), 6).unwrap();
        assert_eq!(result.system(), CrystalSystem::Hexagonal);
        assert_relative_eq!(result.mol_per_liter, 0.026_962_698_693, max_relative = 1e-9);
        assert_relative_eq!(result.mol_per_cubic_meter, 26.962_698_693, max_relative = 1e-9);
        assert_eq!(result.z, 6);
    }

    #[test]
    fn test_linear_in_z() {
        let p = default_cell();
        let one = concentration(&p, 3).unwrap();
        let two = concentration(&p, 6).unwrap();
        assert_relative_eq!(two.mol_per_liter, 2.0 * one.mol_per_liter, max_relative = 1e-12);
    }

    #[test]
    fn test_decreasing_in_volume() {
        let small =
            LatticeParameters::from_angstrom_degrees(10.0, 10.0, 10.0, 90.0, 90.0, 90.0).unwrap();
        let large =
            LatticeParameters::from_angstrom_degrees(20.0, 20.0, 20.0, 90.0, 90.0, 90.0).unwrap();
        let c_small = concentration(&small, 4).unwrap();
        let c_large = concentration(&large, 4).unwrap();
        assert!(c_large.volume() > c_small.volume());
        assert!(c_large.mol_per_liter < c_small.mol_per_liter);
        assert_relative_eq!(
            c_small.mol_per_liter,
            8.0 * c_large.mol_per_liter,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_z_gives_zero_concentration() {
        let result = concentration(&default_cell(), 0).unwrap();
        assert_eq!(result.mol_per_liter, 0.0);
    }

    #[test]
    fn test_degenerate_rhombohedral_is_domain_error() {
        // α = 120° 时菱面体体积恰为零
        let p = LatticeParameters::from_angstrom_degrees(5.0, 5.0, 5.0, 120.0, 120.0, 120.0)
            .unwrap();
        let err = concentration(&p, 1).unwrap_err();
        assert!(matches!(
            err,
            ChromoError::DomainError(_) | ChromoError::InvalidGeometry(_)
        ));
    }

    #[test]
    fn test_invalid_geometry_propagates() {
        let p = LatticeParameters::from_angstrom_degrees(4.0, 5.0, 6.0, 30.0, 40.0, 150.0).unwrap();
        assert!(matches!(
            concentration(&p, 2),
            Err(ChromoError::InvalidGeometry(_))
        ));
    }
}
