//! # 统一错误处理模块
//!
//! 定义 chromolaser 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 输入错误：长度、波长、脉宽、消光系数等不满足约束
//! - 几何错误：晶胞角度组合无法构成实际晶胞
//! - 定义域错误：除零、零体积
//! - 校验错误：可选的晶体参数校验失败（附着在结果上，不中断主计算）
//! - I/O / 导出错误：仅命令行层使用
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// chromolaser 统一错误类型
#[derive(Error, Debug)]
pub enum ChromoError {
    // ─────────────────────────────────────────────────────────────
    // 计算错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid unit cell geometry: {0}")]
    InvalidGeometry(String),

    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Crystal verification failed: {source}")]
    Verification {
        #[source]
        source: Box<ChromoError>,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid quantity '{input}': {reason}")]
    InvalidQuantity { input: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file {path}: {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 序列化错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // 交互输入
    // ─────────────────────────────────────────────────────────────
    #[error("Input closed")]
    InputClosed,

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl ChromoError {
    /// 将任意错误包装为校验错误
    pub fn verification(source: ChromoError) -> Self {
        ChromoError::Verification {
            source: Box::new(source),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ChromoError>;

/// 检查数值为有限正数
pub(crate) fn require_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ChromoError::InvalidInput(format!(
            "{} must be a finite positive number, got {}",
            name, value
        )))
    }
}

/// 检查数值为有限非负数
pub(crate) fn require_non_negative(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ChromoError::InvalidInput(format!(
            "{} must be a finite non-negative number, got {}",
            name, value
        )))
    }
}
