//! # 报告模块
//!
//! 将计算结果渲染为文本、导出为数据文件或绘制为图表。
//!
//! ## 子模块
//! - `text`: 固定精度文本报告
//! - `export`: CSV / XY / JSON 导出
//! - `plot`: 径向剖面图
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`, `laser/profile.rs`

pub mod export;
pub mod plot;
pub mod text;

pub use text::{format_concentration, format_interaction};
