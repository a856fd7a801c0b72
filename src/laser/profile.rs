//! # 径向光束剖面
//!
//! 沿横向偏移等间距取点，在每个点上重复相互作用计算，
//! 得到强度、能流密度、功率密度与每分子吸收光子数随偏移的变化。
//!
//! ## 依赖关系
//! - 被 `commands/profile.rs` 调用
//! - 使用 `laser/interaction.rs`, `laser/beam.rs`

use crate::constants::MAX_PROFILE_POINTS;
use crate::error::{require_non_negative, require_positive, ChromoError, Result};
use crate::laser::{beam, interaction};
use crate::models::LaserSampleParameters;

use serde::Serialize;

/// 剖面采样范围
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileRange {
    /// 最大偏移 (m)，为空时取 1/e² 半径的两倍
    pub max_offset: Option<f64>,
    /// 步长 (m)
    pub step: f64,
}

/// 剖面上的一个采样点
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfilePoint {
    /// m
    pub offset: f64,
    /// %
    pub intensity_percent: f64,
    /// J/m²
    pub fluence: f64,
    /// W/m²
    pub power_density: f64,
    /// photons/m²
    pub photon_density: f64,
    pub absorbed_photons_per_molecule: f64,
}

/// 计算径向剖面
pub fn radial_profile(
    params: &LaserSampleParameters,
    range: &ProfileRange,
) -> Result<Vec<ProfilePoint>> {
    params.validate()?;
    let step = require_positive("profile step", range.step)?;

    let max_offset = match range.max_offset {
        Some(max) => require_non_negative("profile maximum offset", max)?,
        None => beam::one_over_e_squared_diameter(params.beam_diameter),
    };

    // 容许浮点误差，使恰好整除时包含终点
    let intervals = (max_offset / step + 1e-9).floor();
    if intervals.is_nan() || intervals >= MAX_PROFILE_POINTS as f64 {
        return Err(ChromoError::InvalidInput(format!(
            "profile step {:e} m over {:e} m needs more than {} points",
            step, max_offset, MAX_PROFILE_POINTS
        )));
    }
    let n_points = (intervals as usize)
        .checked_add(1)
        .ok_or_else(|| ChromoError::InvalidInput("profile has too many points".to_string()))?;

    let mut points = Vec::with_capacity(n_points);
    for i in 0..n_points {
        let offset = i as f64 * step;
        let result = interaction::interact(&params.with_offset(offset), None)?;
        points.push(ProfilePoint {
            offset,
            intensity_percent: result.intensity_percent_at_ip,
            fluence: result.fluence.at_ip,
            power_density: result.power_density.at_ip,
            photon_density: result.photon_density_at_ip,
            absorbed_photons_per_molecule: result.absorbed_photons_per_molecule,
        });
    }

    log::debug!(
        "radial profile: {} points up to {:.3e} m",
        points.len(),
        max_offset
    );

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BeamDiameter;

    #[test]
    fn test_profile_point_count_and_endpoints() {
        let params = LaserSampleParameters {
            beam_diameter: BeamDiameter::one_over_e_squared(100e-6),
            ..Default::default()
        };
        let range = ProfileRange {
            max_offset: Some(50e-6),
            step: 10e-6,
        };
        let points = radial_profile(&params, &range).unwrap();
        assert_eq!(points.len(), 6);
        assert_eq!(points[0].offset, 0.0);
        assert!((points[0].intensity_percent - 100.0).abs() < 1e-12);
        assert!((points[5].intensity_percent - 100.0 * (-2.0_f64).exp()).abs() < 1e-9);
    }

    #[test]
    fn test_profile_decays_monotonically() {
        let range = ProfileRange {
            max_offset: None,
            step: 5e-6,
        };
        let points = radial_profile(&LaserSampleParameters::default(), &range).unwrap();
        assert!(points.len() > 2);
        for pair in points.windows(2) {
            assert!(pair[1].fluence < pair[0].fluence);
            assert!(pair[1].absorbed_photons_per_molecule < pair[0].absorbed_photons_per_molecule);
        }
    }

    #[test]
    fn test_profile_rejects_vanishing_step() {
        let range = ProfileRange {
            max_offset: Some(1e-4),
            step: 1e-300,
        };
        assert!(matches!(
            radial_profile(&LaserSampleParameters::default(), &range),
            Err(ChromoError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_profile_point_limit() {
        let params = LaserSampleParameters::default();
        let at_limit = ProfileRange {
            max_offset: Some((MAX_PROFILE_POINTS - 10) as f64 * 1e-9),
            step: 1e-9,
        };
        assert!(radial_profile(&params, &at_limit).is_ok());

        let over = ProfileRange {
            max_offset: Some((MAX_PROFILE_POINTS + 10) as f64 * 1e-9),
            step: 1e-9,
        };
        assert!(radial_profile(&params, &over).is_err());
    }

    #[test]
    fn test_profile_rejects_zero_step() {
        let range = ProfileRange {
            max_offset: Some(1e-4),
            step: 0.0,
        };
        assert!(matches!(
            radial_profile(&LaserSampleParameters::default(), &range),
            Err(ChromoError::InvalidInput(_))
        ));
    }
}
