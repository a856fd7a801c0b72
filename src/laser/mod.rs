//! # 激光-样品相互作用引擎
//!
//! 由浓度与激光/样品参数计算能流密度、功率密度、穿透深度和光子统计量。
//!
//! ## 子模块
//! - `beam`: Gaussian 光束几何与光子能量
//! - `absorption`: Beer–Lambert 吸收
//! - `interaction`: 完整相互作用计算与晶体校验
//! - `profile`: 径向剖面扫描
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`, `crystal/`

pub mod absorption;
pub mod beam;
pub mod interaction;
pub mod profile;

pub use interaction::{interact, verify_concentration, VerificationInput};
pub use profile::{radial_profile, ProfilePoint, ProfileRange};
