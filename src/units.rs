//! # 单位换算与带单位数值解析
//!
//! 计算核心只接受 SI 单位；所有换算在边界（命令行、交互输入、报告）完成。
//!
//! ## 支持的写法
//! - 长度: `m`, `mm`, `um`/`µm`, `nm`, `A`/`Å`, `pm`
//! - 能量: `J`, `mJ`, `uJ`/`µJ`, `nJ`
//! - 时间: `s`, `ms`, `us`, `ns`, `ps`, `fs`
//! - 角度: `deg`/`°`, `rad`
//!
//! 不带单位的数值按调用方给定的默认单位解释。
//!
//! ## 依赖关系
//! - 被 `cli/`, `commands/`, `report/` 使用
//! - 使用 `regex` 拆分数值与单位

use crate::error::{ChromoError, Result};
use crate::models::Angle;

use regex::Regex;
use std::sync::OnceLock;

// ─────────────────────────────────────────────────────────────
// 换算因子（乘以该因子得到 SI）
// ─────────────────────────────────────────────────────────────

pub const ANGSTROM: f64 = 1e-10;
pub const NANOMETER: f64 = 1e-9;
pub const MICROMETER: f64 = 1e-6;
pub const MILLIMETER: f64 = 1e-3;
pub const PICOMETER: f64 = 1e-12;

pub const MICROJOULE: f64 = 1e-6;
pub const MILLIJOULE: f64 = 1e-3;
pub const NANOJOULE: f64 = 1e-9;

pub const FEMTOSECOND: f64 = 1e-15;
pub const PICOSECOND: f64 = 1e-12;
pub const NANOSECOND: f64 = 1e-9;
pub const MICROSECOND: f64 = 1e-6;
pub const MILLISECOND: f64 = 1e-3;

/// m³ → Å³
pub const CUBIC_METER_TO_CUBIC_ANGSTROM: f64 = 1e30;

/// J/m² → mJ/cm²
pub const J_PER_M2_TO_MJ_PER_CM2: f64 = 1e-1;

/// W/m² → GW/cm²
pub const W_PER_M2_TO_GW_PER_CM2: f64 = 1e-13;

/// 长度单位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Micrometer,
    Nanometer,
    Angstrom,
    Picometer,
}

impl LengthUnit {
    fn factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Millimeter => MILLIMETER,
            LengthUnit::Micrometer => MICROMETER,
            LengthUnit::Nanometer => NANOMETER,
            LengthUnit::Angstrom => ANGSTROM,
            LengthUnit::Picometer => PICOMETER,
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "m" => Some(LengthUnit::Meter),
            "mm" => Some(LengthUnit::Millimeter),
            "um" | "µm" | "μm" | "micron" => Some(LengthUnit::Micrometer),
            "nm" => Some(LengthUnit::Nanometer),
            "a" | "å" | "ang" | "angstrom" => Some(LengthUnit::Angstrom),
            "pm" => Some(LengthUnit::Picometer),
            _ => None,
        }
    }
}

/// 拆分数值与单位后缀
///
/// 返回 `(数值, 小写后缀)`，后缀为空表示未指定单位。
fn split_quantity(input: &str) -> Result<(f64, String)> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| {
        Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*([^\s\d.+-][^\s]*)?\s*$")
            .expect("quantity pattern is valid")
    });

    let caps = re.captures(input).ok_or_else(|| ChromoError::InvalidQuantity {
        input: input.to_string(),
        reason: "expected a number optionally followed by a unit".to_string(),
    })?;

    let value: f64 = caps[1].parse().map_err(|_| ChromoError::InvalidQuantity {
        input: input.to_string(),
        reason: "malformed number".to_string(),
    })?;

    let suffix = caps
        .get(2)
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default();

    Ok((value, suffix))
}

fn unknown_unit(input: &str, kind: &str) -> ChromoError {
    ChromoError::InvalidQuantity {
        input: input.to_string(),
        reason: format!("unknown {} unit", kind),
    }
}

/// 解析长度，返回米
pub fn parse_length(input: &str, default_unit: LengthUnit) -> Result<f64> {
    let (value, suffix) = split_quantity(input)?;
    let unit = if suffix.is_empty() {
        default_unit
    } else {
        LengthUnit::from_suffix(&suffix).ok_or_else(|| unknown_unit(input, "length"))?
    };
    Ok(value * unit.factor())
}

/// 解析能量，返回焦耳；无单位时按 µJ
pub fn parse_energy(input: &str) -> Result<f64> {
    let (value, suffix) = split_quantity(input)?;
    let factor = match suffix.as_str() {
        "" | "uj" | "µj" | "μj" => MICROJOULE,
        "j" => 1.0,
        "mj" => MILLIJOULE,
        "nj" => NANOJOULE,
        _ => return Err(unknown_unit(input, "energy")),
    };
    Ok(value * factor)
}

/// 解析时间，返回秒；无单位时按 fs
pub fn parse_duration(input: &str) -> Result<f64> {
    let (value, suffix) = split_quantity(input)?;
    let factor = match suffix.as_str() {
        "" | "fs" => FEMTOSECOND,
        "s" => 1.0,
        "ms" => MILLISECOND,
        "us" | "µs" | "μs" => MICROSECOND,
        "ns" => NANOSECOND,
        "ps" => PICOSECOND,
        _ => return Err(unknown_unit(input, "time")),
    };
    Ok(value * factor)
}

/// 解析角度；无单位时按度
pub fn parse_angle(input: &str) -> Result<Angle> {
    let (value, suffix) = split_quantity(input)?;
    match suffix.as_str() {
        "" | "deg" | "°" | "degree" | "degrees" => Ok(Angle::Degrees(value)),
        "rad" | "radian" | "radians" => Ok(Angle::Radians(value)),
        _ => Err(unknown_unit(input, "angle")),
    }
}

// ─────────────────────────────────────────────────────────────
// clap value_parser 适配
// ─────────────────────────────────────────────────────────────

/// 晶胞长度（默认 Å）
pub fn cli_length_angstrom(input: &str) -> std::result::Result<f64, String> {
    parse_length(input, LengthUnit::Angstrom).map_err(|e| e.to_string())
}

/// 光束与样品尺寸（默认 µm）
pub fn cli_length_micrometer(input: &str) -> std::result::Result<f64, String> {
    parse_length(input, LengthUnit::Micrometer).map_err(|e| e.to_string())
}

/// 波长（默认 nm）
pub fn cli_length_nanometer(input: &str) -> std::result::Result<f64, String> {
    parse_length(input, LengthUnit::Nanometer).map_err(|e| e.to_string())
}

/// 脉冲能量（默认 µJ）
pub fn cli_energy(input: &str) -> std::result::Result<f64, String> {
    parse_energy(input).map_err(|e| e.to_string())
}

/// 脉宽（默认 fs）
pub fn cli_duration(input: &str) -> std::result::Result<f64, String> {
    parse_duration(input).map_err(|e| e.to_string())
}

/// 晶胞角度（默认度）
pub fn cli_angle(input: &str) -> std::result::Result<Angle, String> {
    parse_angle(input).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_length_default_unit() {
        let a = parse_length("62", LengthUnit::Angstrom).unwrap();
        assert_relative_eq!(a, 62e-10, max_relative = 1e-12);
    }

    #[test]
    fn test_parse_length_with_suffix() {
        assert_relative_eq!(
            parse_length("6.2nm", LengthUnit::Angstrom).unwrap(),
            6.2e-9,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            parse_length("62 Å", LengthUnit::Micrometer).unwrap(),
            62e-10,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            parse_length("100um", LengthUnit::Nanometer).unwrap(),
            100e-6,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            parse_length("1e-3 m", LengthUnit::Angstrom).unwrap(),
            1e-3,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_parse_length_rejects_unknown_unit() {
        let err = parse_length("5 furlong", LengthUnit::Meter).unwrap_err();
        assert!(matches!(err, ChromoError::InvalidQuantity { .. }));
    }

    #[test]
    fn test_parse_length_rejects_garbage() {
        assert!(parse_length("abc", LengthUnit::Meter).is_err());
        assert!(parse_length("", LengthUnit::Meter).is_err());
    }

    #[test]
    fn test_parse_energy_and_duration() {
        assert_relative_eq!(parse_energy("0.25").unwrap(), 0.25e-6, max_relative = 1e-12);
        assert_relative_eq!(parse_energy("2mJ").unwrap(), 2e-3, max_relative = 1e-12);
        assert_relative_eq!(parse_duration("145").unwrap(), 145e-15, max_relative = 1e-12);
        assert_relative_eq!(parse_duration("1.5 ps").unwrap(), 1.5e-12, max_relative = 1e-12);
    }

    #[test]
    fn test_parse_angle() {
        assert_eq!(parse_angle("120").unwrap(), Angle::Degrees(120.0));
        assert_eq!(parse_angle("90deg").unwrap(), Angle::Degrees(90.0));
        assert_eq!(parse_angle("1.5 rad").unwrap(), Angle::Radians(1.5));
        assert!(parse_angle("90 grad").is_err());
    }

    #[test]
    fn test_report_conversions() {
        // 1 J/m² = 0.1 mJ/cm²
        assert_relative_eq!(10.0 * J_PER_M2_TO_MJ_PER_CM2, 1.0);
        // 1e13 W/m² = 1 GW/cm²
        assert_relative_eq!(1e13 * W_PER_M2_TO_GW_PER_CM2, 1.0);
    }
}
