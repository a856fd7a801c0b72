//! # 晶体几何引擎
//!
//! 由六个晶胞参数判定晶系、计算晶胞体积，并由每晶胞分子数 Z 得到吸光分子浓度。
//!
//! ## 子模块
//! - `classify`: 晶系判定
//! - `volume`: 晶胞体积
//! - `concentration`: 浓度换算
//!
//! ## 依赖关系
//! - 被 `laser/interaction.rs` 与 `commands/` 使用
//! - 使用 `models/`

pub mod classify;
pub mod concentration;
pub mod volume;

pub use classify::{classify, classify_with, Tolerance};
pub use concentration::concentration;
pub use volume::{cell_volume, unit_cell};
