//! # 激光-样品相互作用计算
//!
//! 单次纯计算，依次得到：
//! 1. 1/e 穿透深度
//! 2. 1/e² 光束直径与半径
//! 3. 峰值能流密度及相互作用点 (IP) 的衰减
//! 4. 功率密度、光子能量、IP 光子面密度
//! 5. 吸收比例、单位面积分子数、每分子吸收光子数
//! 6. 可选：用第二组晶胞参数校验输入浓度
//!
//! 校验失败只记录在结果中，不影响主计算。
//!
//! ## 依赖关系
//! - 被 `laser/profile.rs` 和 `commands/` 使用
//! - 使用 `laser/beam.rs`, `laser/absorption.rs`, `crystal/concentration.rs`

use crate::crystal;
use crate::error::{ChromoError, Result};
use crate::laser::{absorption, beam};
use crate::models::{
    CrystalVerification, InteractionResult, LaserSampleParameters, LatticeParameters, PeakAndIp,
    VerificationOutcome,
};

/// 校验输入：第二组晶胞参数与 Z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerificationInput {
    pub lattice: LatticeParameters,
    pub z: u32,
}

/// 计算激光-样品相互作用
pub fn interact(
    params: &LaserSampleParameters,
    verification: Option<&VerificationInput>,
) -> Result<InteractionResult> {
    params.validate()?;

    let conc = params.concentration;
    let eps = params.extinction_coefficient;

    let penetration_depth = absorption::penetration_depth(eps, conc)?;

    let beam_diameter_1e2 = beam::one_over_e_squared_diameter(params.beam_diameter);
    let radius = beam_diameter_1e2 / 2.0;

    let fluence_peak = beam::peak_fluence(params.pulse_energy, radius);
    let reduction_factor = beam::reduction_factor(params.offset, radius);
    let fluence_at_ip = fluence_peak * reduction_factor;

    let power_density_peak = fluence_peak / params.pulse_duration;
    let power_density_at_ip = power_density_peak * reduction_factor;

    let photon_energy = beam::photon_energy(params.wavelength);
    let photon_density_at_ip = fluence_at_ip / photon_energy;

    let chromophore_density = absorption::chromophore_density(conc);
    let absorption_fraction =
        absorption::absorption_fraction(eps, conc, params.sample_thickness);
    let molecules_per_area = chromophore_density * params.sample_thickness;
    let absorbed_photons_per_molecule = absorption::absorbed_photons_per_molecule(
        absorption_fraction,
        photon_density_at_ip,
        molecules_per_area,
    )?;

    log::debug!(
        "interaction: F_peak={:.3e} J/m², reduction={:.4}, absorbed/molecule={:.3}",
        fluence_peak,
        reduction_factor,
        absorbed_photons_per_molecule
    );

    let crystal_verification = verification.map(|input| verify_concentration(conc, input));

    Ok(InteractionResult {
        concentration: conc,
        penetration_depth,
        beam_diameter_1e2,
        reduction_factor,
        intensity_percent_at_ip: reduction_factor * 100.0,
        fluence: PeakAndIp {
            peak: fluence_peak,
            at_ip: fluence_at_ip,
        },
        power_density: PeakAndIp {
            peak: power_density_peak,
            at_ip: power_density_at_ip,
        },
        photon_energy,
        photon_density_at_ip,
        chromophore_density,
        absorption_fraction,
        molecules_per_area,
        absorbed_photons_per_molecule,
        crystal_verification,
    })
}

/// 用晶胞参数重新计算浓度并与输入比较
pub fn verify_concentration(
    input_concentration: f64,
    input: &VerificationInput,
) -> VerificationOutcome {
    let computed = crystal::concentration(&input.lattice, input.z).map_err(|e| {
        log::warn!("crystal verification failed: {}", e);
        ChromoError::verification(e)
    })?;

    Ok(CrystalVerification {
        calculated_concentration: computed.mol_per_liter,
        input_concentration,
        difference: (computed.mol_per_liter - input_concentration).abs(),
        crystal_system: computed.system(),
        unit_cell_volume: computed.volume(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BeamDiameter, CrystalSystem};
    use approx::assert_relative_eq;

    fn default_lattice() -> LatticeParameters {
        LatticeParameters::from_angstrom_degrees(62.0, 62.0, 111.0, 90.0, 90.0, 120.0).unwrap()
    }

    #[test]
    fn test_default_scenario() {
        let result = interact(&LaserSampleParameters::default(), None).unwrap();

        assert_relative_eq!(result.penetration_depth, 4.762_000_898e-6, max_relative = 1e-8);
        assert_relative_eq!(result.beam_diameter_1e2, 169.9e-6, max_relative = 1e-12);
        assert_eq!(result.intensity_percent_at_ip, 100.0);
        assert_relative_eq!(result.fluence.peak, 22.054_304_435, max_relative = 1e-8);
        assert_eq!(result.fluence.peak, result.fluence.at_ip);
        assert_relative_eq!(result.power_density.peak, 1.520_986_512_8e14, max_relative = 1e-8);
        assert_relative_eq!(result.photon_energy, 3.733_920_722e-19, max_relative = 1e-8);
        assert_relative_eq!(result.absorption_fraction, 0.650_054_833, max_relative = 1e-8);
        assert_relative_eq!(
            result.absorbed_photons_per_molecule,
            0.637_569_248,
            max_relative = 1e-7
        );
        assert!(result.crystal_verification.is_none());
    }

    #[test]
    fn test_offset_reduces_fluence() {
        let params = LaserSampleParameters {
            beam_diameter: BeamDiameter::one_over_e_squared(100e-6),
            ..Default::default()
        }
        .with_offset(50e-6);
        let result = interact(&params, None).unwrap();
        assert_relative_eq!(result.reduction_factor, (-2.0_f64).exp(), max_relative = 1e-12);
        assert_relative_eq!(
            result.fluence.at_ip,
            result.fluence.peak * (-2.0_f64).exp(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.power_density.at_ip,
            result.fluence.at_ip / params.pulse_duration,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_thickness_is_domain_error() {
        let params = LaserSampleParameters::default().with_thickness(0.0);
        assert!(matches!(
            interact(&params, None),
            Err(ChromoError::DomainError(_))
        ));
    }

    #[test]
    fn test_zero_concentration_is_domain_error() {
        let params = LaserSampleParameters::default().with_concentration(0.0);
        assert!(matches!(
            interact(&params, None),
            Err(ChromoError::DomainError(_))
        ));
    }

    #[test]
    fn test_invalid_input_rejected() {
        let params = LaserSampleParameters {
            pulse_duration: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            interact(&params, None),
            Err(ChromoError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_verification_round_trip() {
        let lattice = default_lattice();
        let conc = crystal::concentration(&lattice, 6).unwrap().mol_per_liter;
        let params = LaserSampleParameters::default().with_concentration(conc);
        let input = VerificationInput { lattice, z: 6 };

        let result = interact(&params, Some(&input)).unwrap();
        let v = result.verification().unwrap();
        assert!(v.difference < 1e-15);
        assert_eq!(v.crystal_system, CrystalSystem::Hexagonal);
        assert_relative_eq!(v.unit_cell_volume, 3.695_191_834e-25, max_relative = 1e-9);
    }

    #[test]
    fn test_verification_difference() {
        let input = VerificationInput {
            lattice: default_lattice(),
            z: 6,
        };
        let result = interact(&LaserSampleParameters::default(), Some(&input)).unwrap();
        let v = result.verification().unwrap();
        assert_relative_eq!(v.difference, 0.026_962_698_693 - 0.02, max_relative = 1e-8);
        assert_eq!(v.input_concentration, 0.02);
    }

    #[test]
    fn test_verification_failure_does_not_abort() {
        let bad = LatticeParameters::from_angstrom_degrees(4.0, 5.0, 6.0, 30.0, 40.0, 150.0)
            .unwrap();
        let input = VerificationInput { lattice: bad, z: 2 };
        let result = interact(&LaserSampleParameters::default(), Some(&input)).unwrap();

        assert!(result.verification().is_none());
        assert!(matches!(
            result.verification_error(),
            Some(ChromoError::Verification { .. })
        ));
        assert!(result.absorbed_photons_per_molecule > 0.0);
    }
}
