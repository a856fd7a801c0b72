//! # Gaussian 光束几何
//!
//! 1/e² 半径 r 的 Gaussian 光束有效面积为 πr²/2，
//! 距中心 x 处强度衰减为 exp(−2x²/r²)。
//!
//! ## 依赖关系
//! - 被 `laser/interaction.rs`, `laser/profile.rs` 使用

use crate::constants::{FWHM_TO_1E2, PLANCK, SPEED_OF_LIGHT};
use crate::models::{BeamDiameter, BeamWidthKind};

use std::f64::consts::PI;

/// 换算为 1/e² 直径 (m)
pub fn one_over_e_squared_diameter(diameter: BeamDiameter) -> f64 {
    match diameter.kind {
        BeamWidthKind::Fwhm => diameter.value * FWHM_TO_1E2,
        BeamWidthKind::OneOverESquared => diameter.value,
    }
}

/// Gaussian 光束有效面积 (m²)
pub fn effective_area(radius_1e2: f64) -> f64 {
    0.5 * PI * radius_1e2 * radius_1e2
}

/// 峰值能流密度 (J/m²)
pub fn peak_fluence(pulse_energy: f64, radius_1e2: f64) -> f64 {
    pulse_energy / effective_area(radius_1e2)
}

/// 偏离中心 `offset` 处相对峰值的强度比例
pub fn reduction_factor(offset: f64, radius_1e2: f64) -> f64 {
    (-2.0 * offset * offset / (radius_1e2 * radius_1e2)).exp()
}

/// 单光子能量 (J)
pub fn photon_energy(wavelength: f64) -> f64 {
    PLANCK * SPEED_OF_LIGHT / wavelength
}
