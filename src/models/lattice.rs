//! # 晶胞参数数据模型
//!
//! 定义带单位标签的角度、经过校验的晶胞参数，以及由参数构造的晶格向量。
//!
//! ## 依赖关系
//! - 被 `crystal/` 和 `laser/interaction.rs` 使用
//! - 使用 `error.rs`

use crate::error::{require_positive, ChromoError, Result};

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// 带单位的角度
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Angle {
    Degrees(f64),
    Radians(f64),
}

impl Angle {
    /// 转换为弧度
    pub fn to_radians(self) -> f64 {
        match self {
            Angle::Degrees(deg) => deg.to_radians(),
            Angle::Radians(rad) => rad,
        }
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Angle::Degrees(deg) => write!(f, "{}°", deg),
            Angle::Radians(rad) => write!(f, "{} rad", rad),
        }
    }
}

/// 晶胞参数
///
/// 长度单位为米，角度在构造时统一转换为弧度并限制在 (0, π) 内。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatticeParameters {
    a: f64,
    b: f64,
    c: f64,
    alpha: f64,
    beta: f64,
    gamma: f64,
}

impl LatticeParameters {
    /// 创建并校验晶胞参数
    pub fn new(a: f64, b: f64, c: f64, alpha: Angle, beta: Angle, gamma: Angle) -> Result<Self> {
        Ok(LatticeParameters {
            a: require_positive("lattice length a", a)?,
            b: require_positive("lattice length b", b)?,
            c: require_positive("lattice length c", c)?,
            alpha: checked_angle("alpha", alpha)?,
            beta: checked_angle("beta", beta)?,
            gamma: checked_angle("gamma", gamma)?,
        })
    }

    /// 长度以 Å、角度以度给出的便捷构造
    pub fn from_angstrom_degrees(
        a: f64,
        b: f64,
        c: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> Result<Self> {
        Self::new(
            a * crate::units::ANGSTROM,
            b * crate::units::ANGSTROM,
            c * crate::units::ANGSTROM,
            Angle::Degrees(alpha),
            Angle::Degrees(beta),
            Angle::Degrees(gamma),
        )
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    /// α (rad)
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// β (rad)
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// γ (rad)
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// 长度元组 (a, b, c)
    pub fn lengths(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// 角度元组 (α, β, γ)，单位 rad
    pub fn angles(&self) -> (f64, f64, f64) {
        (self.alpha, self.beta, self.gamma)
    }

    /// 由参数构造晶格向量
    pub fn vectors(&self) -> LatticeVectors {
        LatticeVectors::from_parameters(self)
    }
}

fn checked_angle(name: &str, angle: Angle) -> Result<f64> {
    let rad = angle.to_radians();
    if rad.is_finite() && rad > 0.0 && rad < PI {
        Ok(rad)
    } else {
        Err(ChromoError::InvalidInput(format!(
            "angle {} must lie strictly between 0° and 180°, got {}",
            name, angle
        )))
    }
}

/// 晶格向量表示
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeVectors {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    pub matrix: [[f64; 3]; 3],
}

impl LatticeVectors {
    /// a 沿 x 轴、b 位于 xy 平面的标准取向
    ///
    /// 角度组合不构成实际晶胞时，c 向量的 z 分量为 NaN。
    pub fn from_parameters(params: &LatticeParameters) -> Self {
        let (a, b, c) = params.lengths();
        let (alpha, beta, gamma) = params.angles();

        let cos_alpha = alpha.cos();
        let cos_beta = beta.cos();
        let cos_gamma = gamma.cos();
        let sin_gamma = gamma.sin();

        let a_vec = [a, 0.0, 0.0];
        let b_vec = [b * cos_gamma, b * sin_gamma, 0.0];

        let c1 = c * cos_beta;
        let c2 = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        let c3 = (c * c - c1 * c1 - c2 * c2).sqrt();

        LatticeVectors {
            matrix: [a_vec, b_vec, [c1, c2, c3]],
        }
    }

    /// 行列式体积
    pub fn volume(&self) -> f64 {
        let [a, b, c] = self.matrix;
        a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0])
    }
}
