//! # Beer–Lambert 吸收
//!
//! 十进制 Beer–Lambert 定律：I/I₀ = 10^(−ε·C·l)。
//! ε 以 L·mol⁻¹·cm⁻¹、C 以 mol/L、l 以米给出时，指数为 ε·100·C·l。
//!
//! ## 依赖关系
//! - 被 `laser/interaction.rs`, `laser/profile.rs` 使用

use crate::constants::{AVOGADRO, EXTINCTION_TO_SI, LITERS_PER_CUBIC_METER};
use crate::error::{ChromoError, Result};

use std::f64::consts::E;

/// 强度衰减到 1/e 的穿透深度 (m)
pub fn penetration_depth(extinction_coefficient: f64, concentration: f64) -> Result<f64> {
    let attenuation = concentration * extinction_coefficient * EXTINCTION_TO_SI;
    if attenuation <= 0.0 {
        return Err(ChromoError::DomainError(format!(
            "penetration depth is unbounded for concentration {} mol/L",
            concentration
        )));
    }
    Ok(-(1.0 / E).log10() / attenuation)
}

/// 厚度 `thickness` 内被吸收的光强比例，落在 [0, 1)
pub fn absorption_fraction(extinction_coefficient: f64, concentration: f64, thickness: f64) -> f64 {
    let absorbance = extinction_coefficient * EXTINCTION_TO_SI * concentration * thickness;
    1.0 - 10f64.powf(-absorbance)
}

/// 吸光分子体密度 (molecules/m³)
pub fn chromophore_density(concentration: f64) -> f64 {
    concentration * AVOGADRO * LITERS_PER_CUBIC_METER
}

/// 每个分子平均吸收的光子数
pub fn absorbed_photons_per_molecule(
    fraction: f64,
    photon_density: f64,
    molecules_per_area: f64,
) -> Result<f64> {
    if molecules_per_area <= 0.0 {
        return Err(ChromoError::DomainError(
            "no absorbing molecules along the beam path (zero concentration or thickness)"
                .to_string(),
        ));
    }
    Ok(fraction * photon_density / molecules_per_area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_penetration_depth_default() {
        let depth = penetration_depth(45_600.0, 0.02).unwrap();
        assert_relative_eq!(depth, 4.762_000_898e-6, max_relative = 1e-8);
    }

    #[test]
    fn test_intensity_at_depth_is_one_over_e() {
        let eps = 45_600.0;
        let conc = 0.02;
        let depth = penetration_depth(eps, conc).unwrap();
        let transmitted = 1.0 - absorption_fraction(eps, conc, depth);
        assert_relative_eq!(transmitted, 1.0 / E, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_concentration_depth_is_domain_error() {
        assert!(matches!(
            penetration_depth(45_600.0, 0.0),
            Err(ChromoError::DomainError(_))
        ));
    }

    #[test]
    fn test_absorption_fraction_bounds() {
        assert_eq!(absorption_fraction(45_600.0, 0.02, 0.0), 0.0);
        let f = absorption_fraction(45_600.0, 0.02, 5e-6);
        assert!(f > 0.0 && f < 1.0);
        assert_relative_eq!(f, 0.650_054_833, max_relative = 1e-8);
    }

    #[test]
    fn test_chromophore_density() {
        assert_relative_eq!(
            chromophore_density(1.0),
            6.022_140_76e26,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_absorbed_photons_zero_molecules() {
        assert!(matches!(
            absorbed_photons_per_molecule(0.0, 1e19, 0.0),
            Err(ChromoError::DomainError(_))
        ));
    }
}
