//! # 激光与样品参数数据模型
//!
//! 所有字段使用 SI 单位；浓度为 mol/L，消光系数为 L·mol⁻¹·cm⁻¹。
//!
//! ## 依赖关系
//! - 被 `laser/` 和 `commands/` 使用
//! - 默认值来自 `constants.rs`

use crate::constants::*;
use crate::error::{require_non_negative, require_positive, Result};

use serde::{Deserialize, Serialize};

/// 光束直径的定义方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeamWidthKind {
    /// 半高全宽
    Fwhm,
    /// 强度降至峰值 1/e² 处的直径
    OneOverESquared,
}

impl std::fmt::Display for BeamWidthKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BeamWidthKind::Fwhm => write!(f, "FWHM"),
            BeamWidthKind::OneOverESquared => write!(f, "1/e²"),
        }
    }
}

/// 带定义标签的光束直径
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamDiameter {
    /// 直径 (m)
    pub value: f64,
    pub kind: BeamWidthKind,
}

impl BeamDiameter {
    pub fn fwhm(value: f64) -> Self {
        BeamDiameter {
            value,
            kind: BeamWidthKind::Fwhm,
        }
    }

    pub fn one_over_e_squared(value: f64) -> Self {
        BeamDiameter {
            value,
            kind: BeamWidthKind::OneOverESquared,
        }
    }
}

/// 激光-样品相互作用输入参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaserSampleParameters {
    /// 摩尔消光系数 (L·mol⁻¹·cm⁻¹)
    pub extinction_coefficient: f64,

    /// 样品厚度 (m)
    pub sample_thickness: f64,

    /// 吸光分子浓度 (mol/L)
    pub concentration: f64,

    /// 脉冲能量 (J)
    pub pulse_energy: f64,

    /// 光束直径
    pub beam_diameter: BeamDiameter,

    /// 脉宽 (s)
    pub pulse_duration: f64,

    /// 波长 (m)
    pub wavelength: f64,

    /// 相互作用点相对光束中心的横向偏移 (m)
    pub offset: f64,
}

impl Default for LaserSampleParameters {
    fn default() -> Self {
        LaserSampleParameters {
            extinction_coefficient: DEFAULT_EXTINCTION_COEFFICIENT,
            sample_thickness: DEFAULT_SAMPLE_THICKNESS_M,
            concentration: DEFAULT_CONCENTRATION,
            pulse_energy: DEFAULT_PULSE_ENERGY_J,
            beam_diameter: BeamDiameter::fwhm(DEFAULT_BEAM_DIAMETER_M),
            pulse_duration: DEFAULT_PULSE_DURATION_S,
            wavelength: DEFAULT_WAVELENGTH_M,
            offset: DEFAULT_OFFSET_M,
        }
    }
}

impl LaserSampleParameters {
    pub fn with_concentration(mut self, concentration: f64) -> Self {
        self.concentration = concentration;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.sample_thickness = thickness;
        self
    }

    /// 校验输入约束
    ///
    /// 消光系数、脉宽、波长与光束直径作为除数必须为正；其余量非负。
    pub fn validate(&self) -> Result<()> {
        require_positive("extinction coefficient", self.extinction_coefficient)?;
        require_non_negative("sample thickness", self.sample_thickness)?;
        require_non_negative("concentration", self.concentration)?;
        require_non_negative("pulse energy", self.pulse_energy)?;
        require_positive("beam diameter", self.beam_diameter.value)?;
        require_positive("pulse duration", self.pulse_duration)?;
        require_positive("wavelength", self.wavelength)?;
        require_non_negative("laser offset", self.offset)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChromoError;

    #[test]
    fn test_defaults_are_valid() {
        let p = LaserSampleParameters::default();
        assert!(p.validate().is_ok());
        assert_eq!(p.beam_diameter.kind, BeamWidthKind::Fwhm);
    }

    #[test]
    fn test_validate_rejects_zero_wavelength() {
        let p = LaserSampleParameters {
            wavelength: 0.0,
            ..Default::default()
        };
        assert!(matches!(p.validate(), Err(ChromoError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_rejects_negative_offset() {
        let p = LaserSampleParameters::default().with_offset(-1e-6);
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_allows_zero_concentration() {
        // 零浓度属于定义域问题，在计算阶段报告
        let p = LaserSampleParameters::default().with_concentration(0.0);
        assert!(p.validate().is_ok());
    }
}
