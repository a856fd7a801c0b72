//! # 数据模型模块
//!
//! 定义晶胞参数、晶系、激光参数与计算结果的值类型。
//!
//! ## 依赖关系
//! - 被 `crystal/`, `laser/`, `report/` 和 `commands/` 使用
//! - 子模块: lattice, crystal_system, laser, results

pub mod crystal_system;
pub mod laser;
pub mod lattice;
pub mod results;

pub use crystal_system::CrystalSystem;
pub use laser::{BeamDiameter, BeamWidthKind, LaserSampleParameters};
pub use lattice::{Angle, LatticeParameters, LatticeVectors};
pub use results::{
    ConcentrationResult, CrystalVerification, InteractionResult, PeakAndIp, UnitCell,
    VerificationOutcome,
};
