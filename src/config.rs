//! # 配置文件
//!
//! 可选的 JSON 配置文件，为晶胞与激光参数提供默认值。
//! 所有字段均可省略，使用命令行单位（Å、度、µm、µJ、fs、nm）。
//!
//! 参数优先级：命令行/环境变量 > 配置文件 > 内置默认值。
//!
//! ```json
//! {
//!   "lattice": { "a": 62.0, "b": 62.0, "c": 111.0, "gamma": 120.0, "z": 6 },
//!   "laser": { "wavelength_nm": 800.0, "beam_type": "OneOverESquared" }
//! }
//! ```
//!
//! ## 依赖关系
//! - 被 `cli/common.rs` 和 `commands/` 使用
//! - 使用 `serde_json` 解析

use crate::error::{ChromoError, Result};
use crate::models::BeamWidthKind;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 配置文件根结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub lattice: LatticeConfig,
    pub laser: LaserConfig,
}

/// 晶胞参数默认值（Å 与度）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LatticeConfig {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
    pub z: Option<u32>,
}

/// 激光与样品参数默认值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaserConfig {
    /// L·mol⁻¹·cm⁻¹
    pub extinction_coefficient: Option<f64>,
    pub sample_thickness_um: Option<f64>,
    /// mol/L
    pub concentration: Option<f64>,
    pub pulse_energy_uj: Option<f64>,
    pub beam_diameter_um: Option<f64>,
    pub beam_type: Option<BeamWidthKind>,
    pub pulse_duration_fs: Option<f64>,
    pub wavelength_nm: Option<f64>,
    pub offset_um: Option<f64>,
}

impl FileConfig {
    /// 从 JSON 文件读取配置
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ChromoError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// 从 JSON 字符串解析配置
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// 有路径时读取，否则使用空配置
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let config = Self::load(p)?;
                log::info!("Loaded configuration from '{}'", p.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let cfg = FileConfig::from_json(r#"{ "lattice": { "a": 40.0, "z": 4 } }"#).unwrap();
        assert_eq!(cfg.lattice.a, Some(40.0));
        assert_eq!(cfg.lattice.z, Some(4));
        assert_eq!(cfg.lattice.b, None);
        assert_eq!(cfg.laser, LaserConfig::default());
    }

    #[test]
    fn test_beam_type_in_config() {
        let cfg =
            FileConfig::from_json(r#"{ "laser": { "beam_type": "OneOverESquared" } }"#).unwrap();
        assert_eq!(cfg.laser.beam_type, Some(BeamWidthKind::OneOverESquared));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = FileConfig::from_json(r#"{ "laser": { "power": 1.0 } }"#).unwrap_err();
        assert!(matches!(err, ChromoError::JsonError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = FileConfig::load(Path::new("/nonexistent/chromolaser.json")).unwrap_err();
        assert!(matches!(err, ChromoError::FileReadError { .. }));
    }

    #[test]
    fn test_no_path_gives_default() {
        assert_eq!(FileConfig::load_or_default(None).unwrap(), FileConfig::default());
    }
}
