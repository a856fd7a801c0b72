//! # 计算结果数据模型
//!
//! 晶胞、浓度、相互作用结果均为不可变值类型，每次计算重新生成。
//!
//! ## 依赖关系
//! - 由 `crystal/` 与 `laser/` 构造
//! - 被 `report/` 与 `commands/` 读取

use crate::error::ChromoError;
use crate::models::{CrystalSystem, LatticeParameters};

use serde::{Serialize, Serializer};

/// 晶胞：参数、晶系与体积 (m³)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitCell {
    pub parameters: LatticeParameters,
    pub system: CrystalSystem,
    pub volume: f64,
}

/// 由晶胞参数得到的吸光分子浓度
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConcentrationResult {
    /// mol/L
    pub mol_per_liter: f64,
    /// mol/m³
    pub mol_per_cubic_meter: f64,
    /// 产生该浓度的晶胞
    pub unit_cell: UnitCell,
    /// 每个晶胞中的吸光分子数
    pub z: u32,
}

impl ConcentrationResult {
    pub fn system(&self) -> CrystalSystem {
        self.unit_cell.system
    }

    pub fn volume(&self) -> f64 {
        self.unit_cell.volume
    }
}

/// 晶体参数校验结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrystalVerification {
    /// 由晶胞参数算得的浓度 (mol/L)
    pub calculated_concentration: f64,
    /// 输入的浓度 (mol/L)
    pub input_concentration: f64,
    /// 两者之差的绝对值 (mol/L)
    pub difference: f64,
    pub crystal_system: CrystalSystem,
    /// m³
    pub unit_cell_volume: f64,
}

/// 校验子计算的结果，失败时为 `ChromoError::Verification`
pub type VerificationOutcome = std::result::Result<CrystalVerification, ChromoError>;

/// 峰值与相互作用点处的一对数值
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeakAndIp {
    pub peak: f64,
    pub at_ip: f64,
}

/// 激光-样品相互作用结果
#[derive(Debug, Serialize)]
pub struct InteractionResult {
    /// 输入浓度 (mol/L)
    pub concentration: f64,
    /// 1/e 穿透深度 (m)
    pub penetration_depth: f64,
    /// 1/e² 光束直径 (m)
    pub beam_diameter_1e2: f64,
    /// 相互作用点强度相对峰值的比例
    pub reduction_factor: f64,
    /// 相互作用点强度百分比
    pub intensity_percent_at_ip: f64,
    /// 能流密度 (J/m²)
    pub fluence: PeakAndIp,
    /// 功率密度 (W/m²)
    pub power_density: PeakAndIp,
    /// 单光子能量 (J)
    pub photon_energy: f64,
    /// 相互作用点光子面密度 (photons/m²)
    pub photon_density_at_ip: f64,
    /// 吸光分子体密度 (molecules/m³)
    pub chromophore_density: f64,
    /// 样品厚度内的吸收比例
    pub absorption_fraction: f64,
    /// 样品厚度内单位面积分子数 (molecules/m²)
    pub molecules_per_area: f64,
    /// 每个吸光分子平均吸收光子数
    pub absorbed_photons_per_molecule: f64,
    #[serde(serialize_with = "serialize_verification")]
    pub crystal_verification: Option<VerificationOutcome>,
}

impl InteractionResult {
    /// 成功的校验结果
    pub fn verification(&self) -> Option<&CrystalVerification> {
        self.crystal_verification
            .as_ref()
            .and_then(|outcome| outcome.as_ref().ok())
    }

    /// 校验失败时的错误
    pub fn verification_error(&self) -> Option<&ChromoError> {
        self.crystal_verification
            .as_ref()
            .and_then(|outcome| outcome.as_ref().err())
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum VerificationRecord<'a> {
    Ok(&'a CrystalVerification),
    Err { error: String },
}

fn serialize_verification<S: Serializer>(
    outcome: &Option<VerificationOutcome>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let record = outcome.as_ref().map(|o| match o {
        Ok(v) => VerificationRecord::Ok(v),
        Err(e) => VerificationRecord::Err {
            error: e.to_string(),
        },
    });
    record.serialize(serializer)
}
