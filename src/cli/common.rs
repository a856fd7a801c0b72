//! # 共用参数组
//!
//! 晶胞参数与激光/样品参数在多个子命令中复用。
//! 数值可带单位后缀，不带单位时使用帮助信息中标注的单位；
//! 解析后统一为 SI 值，再与配置文件、内置默认值逐项合并。
//!
//! ## 依赖关系
//! - 被 `cli/` 各子命令使用
//! - 使用 `units.rs` 的 value_parser，`config.rs` 的配置结构

use crate::config::{LaserConfig, LatticeConfig};
use crate::constants::*;
use crate::error::Result;
use crate::models::{Angle, BeamDiameter, BeamWidthKind, LaserSampleParameters, LatticeParameters};
use crate::units::{
    cli_angle, cli_duration, cli_energy, cli_length_angstrom, cli_length_micrometer,
    cli_length_nanometer, ANGSTROM, FEMTOSECOND, MICROJOULE, MICROMETER, NANOMETER,
};

use clap::{Args, ValueEnum};

// ─────────────────────────────────────────────────────────────
// 晶胞参数
// ─────────────────────────────────────────────────────────────

/// 晶胞参数
#[derive(Args, Debug, Clone, Default)]
pub struct LatticeArgs {
    /// Cell length a (Å unless a unit is given, e.g. "6.2nm") [default: 62]
    #[arg(long = "a", env = "CHROMOLASER_A", value_parser = cli_length_angstrom)]
    pub a: Option<f64>,

    /// Cell length b (Å) [default: 62]
    #[arg(long = "b", env = "CHROMOLASER_B", value_parser = cli_length_angstrom)]
    pub b: Option<f64>,

    /// Cell length c (Å) [default: 111]
    #[arg(long = "c", env = "CHROMOLASER_C", value_parser = cli_length_angstrom)]
    pub c: Option<f64>,

    /// Cell angle α (degrees unless "rad" is given) [default: 90]
    #[arg(long, env = "CHROMOLASER_ALPHA", value_parser = cli_angle)]
    pub alpha: Option<Angle>,

    /// Cell angle β (degrees) [default: 90]
    #[arg(long, env = "CHROMOLASER_BETA", value_parser = cli_angle)]
    pub beta: Option<Angle>,

    /// Cell angle γ (degrees) [default: 120]
    #[arg(long, env = "CHROMOLASER_GAMMA", value_parser = cli_angle)]
    pub gamma: Option<Angle>,

    /// Number of absorbing molecules per unit cell [default: 6]
    #[arg(short = 'z', long = "z", env = "CHROMOLASER_Z")]
    pub z: Option<u32>,
}

impl LatticeArgs {
    /// 与配置文件和默认值合并，得到校验后的晶胞参数与 Z
    pub fn resolve(&self, config: &LatticeConfig) -> Result<(LatticeParameters, u32)> {
        let length = |arg: Option<f64>, cfg: Option<f64>, default: f64| {
            arg.unwrap_or_else(|| cfg.unwrap_or(default) * ANGSTROM)
        };
        let angle = |arg: Option<Angle>, cfg: Option<f64>, default: f64| {
            arg.unwrap_or_else(|| Angle::Degrees(cfg.unwrap_or(default)))
        };

        let params = LatticeParameters::new(
            length(self.a, config.a, DEFAULT_A_ANGSTROM),
            length(self.b, config.b, DEFAULT_B_ANGSTROM),
            length(self.c, config.c, DEFAULT_C_ANGSTROM),
            angle(self.alpha, config.alpha, DEFAULT_ALPHA_DEG),
            angle(self.beta, config.beta, DEFAULT_BETA_DEG),
            angle(self.gamma, config.gamma, DEFAULT_GAMMA_DEG),
        )?;
        let z = self.z.or(config.z).unwrap_or(DEFAULT_Z);

        Ok((params, z))
    }
}

// ─────────────────────────────────────────────────────────────
// 激光/样品参数
// ─────────────────────────────────────────────────────────────

/// 光束直径定义
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum BeamType {
    /// Full width at half maximum
    Fwhm,
    /// 1/e² diameter
    #[value(name = "1e2", alias = "1/e2")]
    OneOverESquared,
}

impl From<BeamType> for BeamWidthKind {
    fn from(value: BeamType) -> Self {
        match value {
            BeamType::Fwhm => BeamWidthKind::Fwhm,
            BeamType::OneOverESquared => BeamWidthKind::OneOverESquared,
        }
    }
}

/// 激光与样品参数
#[derive(Args, Debug, Clone, Default)]
pub struct LaserArgs {
    /// Molar extinction coefficient in L/(mol·cm) [default: 45600]
    #[arg(long, env = "CHROMOLASER_EXTINCTION")]
    pub extinction: Option<f64>,

    /// Sample thickness (µm unless a unit is given) [default: 5]
    #[arg(long, env = "CHROMOLASER_THICKNESS", value_parser = cli_length_micrometer)]
    pub thickness: Option<f64>,

    /// Chromophore concentration in mol/L [default: 0.02]
    #[arg(long, env = "CHROMOLASER_CONCENTRATION")]
    pub concentration: Option<f64>,

    /// Pulse energy (µJ unless a unit is given) [default: 0.25]
    #[arg(long, env = "CHROMOLASER_ENERGY", value_parser = cli_energy)]
    pub energy: Option<f64>,

    /// Beam diameter (µm unless a unit is given) [default: 100]
    #[arg(long, env = "CHROMOLASER_BEAM_DIAMETER", value_parser = cli_length_micrometer)]
    pub beam_diameter: Option<f64>,

    /// How the beam diameter is defined [default: fwhm]
    #[arg(long, value_enum, env = "CHROMOLASER_BEAM_TYPE")]
    pub beam_type: Option<BeamType>,

    /// Pulse duration (fs unless a unit is given) [default: 145]
    #[arg(long, env = "CHROMOLASER_DURATION", value_parser = cli_duration)]
    pub duration: Option<f64>,

    /// Laser wavelength (nm unless a unit is given) [default: 532]
    #[arg(long, env = "CHROMOLASER_WAVELENGTH", value_parser = cli_length_nanometer)]
    pub wavelength: Option<f64>,

    /// Lateral offset of the interaction point from the beam center (µm) [default: 0]
    #[arg(long, env = "CHROMOLASER_OFFSET", value_parser = cli_length_micrometer)]
    pub offset: Option<f64>,
}

impl LaserArgs {
    /// 与配置文件和默认值合并
    ///
    /// 返回值尚未校验，由计算入口统一校验。
    pub fn resolve(&self, config: &LaserConfig) -> LaserSampleParameters {
        let scaled = |arg: Option<f64>, cfg: Option<f64>, factor: f64, default: f64| {
            arg.or_else(|| cfg.map(|v| v * factor)).unwrap_or(default)
        };

        let kind = self
            .beam_type
            .map(BeamWidthKind::from)
            .or(config.beam_type)
            .unwrap_or(BeamWidthKind::Fwhm);

        LaserSampleParameters {
            extinction_coefficient: self
                .extinction
                .or(config.extinction_coefficient)
                .unwrap_or(DEFAULT_EXTINCTION_COEFFICIENT),
            sample_thickness: scaled(
                self.thickness,
                config.sample_thickness_um,
                MICROMETER,
                DEFAULT_SAMPLE_THICKNESS_M,
            ),
            concentration: self
                .concentration
                .or(config.concentration)
                .unwrap_or(DEFAULT_CONCENTRATION),
            pulse_energy: scaled(
                self.energy,
                config.pulse_energy_uj,
                MICROJOULE,
                DEFAULT_PULSE_ENERGY_J,
            ),
            beam_diameter: BeamDiameter {
                value: scaled(
                    self.beam_diameter,
                    config.beam_diameter_um,
                    MICROMETER,
                    DEFAULT_BEAM_DIAMETER_M,
                ),
                kind,
            },
            pulse_duration: scaled(
                self.duration,
                config.pulse_duration_fs,
                FEMTOSECOND,
                DEFAULT_PULSE_DURATION_S,
            ),
            wavelength: scaled(
                self.wavelength,
                config.wavelength_nm,
                NANOMETER,
                DEFAULT_WAVELENGTH_M,
            ),
            offset: scaled(self.offset, config.offset_um, MICROMETER, DEFAULT_OFFSET_M),
        }
    }
}
