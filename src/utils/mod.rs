//! # 工具函数模块
//!
//! 提供美化输出与交互输入工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: output, prompt

pub mod output;
pub mod prompt;
