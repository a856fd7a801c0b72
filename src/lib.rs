//! # chromolaser
//!
//! 晶体光谱实验的计算库：
//! - 由晶胞参数判定晶系、计算晶胞体积与吸光分子浓度
//! - 由激光与样品参数计算穿透深度、能流密度、功率密度与每分子吸收光子数
//! - 可选用晶胞参数校验给定浓度
//!
//! 所有计算函数均为纯函数，输入输出使用 SI 单位。
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── crystal/    (晶系判定、体积、浓度)
//!   ├── laser/      (光束几何、吸收、相互作用、径向剖面)
//!   ├── models/     (数据模型)
//!   ├── report/     (文本报告、导出、绘图)
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── config.rs   (JSON 配置文件)
//!   ├── units.rs    (带单位数值解析)
//!   ├── constants.rs(物理常数与默认值)
//!   └── error.rs    (错误处理)
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod crystal;
pub mod error;
pub mod laser;
pub mod models;
pub mod report;
pub mod units;
pub mod utils;

pub use crystal::{cell_volume, classify, concentration, unit_cell};
pub use error::{ChromoError, Result};
pub use laser::{interact, radial_profile};
