//! # 晶系判定
//!
//! 按优先级依次检验七大晶系的等式条件，第一个满足的即为结果：
//! 立方 → 六方 → 三方(菱面体) → 四方 → 正交 → 单斜 → 三斜。
//!
//! 长度比较使用相对容差，角度比较使用绝对容差（弧度）。
//!
//! ## 依赖关系
//! - 被 `crystal/volume.rs`, `crystal/concentration.rs` 使用
//! - 使用 `models/lattice.rs`, `models/crystal_system.rs`

use crate::constants::{ANGLE_ABS_TOLERANCE, LENGTH_REL_TOLERANCE};
use crate::models::{CrystalSystem, LatticeParameters};

use std::f64::consts::{FRAC_PI_2, PI};

/// 晶系判定容差
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// 长度相等的相对容差
    pub length_rel: f64,
    /// 角度相等的绝对容差 (rad)
    pub angle_abs: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            length_rel: LENGTH_REL_TOLERANCE,
            angle_abs: ANGLE_ABS_TOLERANCE,
        }
    }
}

impl Tolerance {
    fn same_length(&self, x: f64, y: f64) -> bool {
        (x - y).abs() < self.length_rel * x.abs().max(y.abs())
    }

    fn same_angle(&self, x: f64, y: f64) -> bool {
        (x - y).abs() < self.angle_abs
    }

    fn right(&self, angle: f64) -> bool {
        self.same_angle(angle, FRAC_PI_2)
    }
}

/// 使用默认容差判定晶系
pub fn classify(params: &LatticeParameters) -> CrystalSystem {
    classify_with(params, &Tolerance::default())
}

/// 使用指定容差判定晶系
pub fn classify_with(params: &LatticeParameters, tol: &Tolerance) -> CrystalSystem {
    let (a, b, c) = params.lengths();
    let (alpha, beta, gamma) = params.angles();

    let ab = tol.same_length(a, b);
    let bc = tol.same_length(b, c);
    let all_right = tol.right(alpha) && tol.right(beta) && tol.right(gamma);

    let system = if ab && bc && all_right {
        CrystalSystem::Cubic
    } else if ab
        && !bc
        && tol.right(alpha)
        && tol.right(beta)
        && tol.same_angle(gamma, 2.0 * PI / 3.0)
    {
        CrystalSystem::Hexagonal
    } else if ab
        && bc
        && tol.same_angle(alpha, beta)
        && tol.same_angle(beta, gamma)
        && !tol.right(alpha)
    {
        CrystalSystem::Rhombohedral
    } else if ab && !bc && all_right {
        CrystalSystem::Tetragonal
    } else if all_right {
        CrystalSystem::Orthorhombic
    } else if tol.right(alpha) && tol.right(gamma) && !tol.right(beta) {
        CrystalSystem::Monoclinic
    } else {
        CrystalSystem::Triclinic
    };

    log::debug!(
        "classified a={:.4e} b={:.4e} c={:.4e} α={:.4} β={:.4} γ={:.4} as {}",
        a,
        b,
        c,
        alpha,
        beta,
        gamma,
        system
    );

    system
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> LatticeParameters {
        LatticeParameters::from_angstrom_degrees(a, b, c, alpha, beta, gamma).unwrap()
    }

    #[test]
    fn test_cubic() {
        assert_eq!(classify(&cell(5.0, 5.0, 5.0, 90.0, 90.0, 90.0)), CrystalSystem::Cubic);
    }

    #[test]
    fn test_cubic_wins_over_rhombohedral_and_orthorhombic() {
        // a=b=c 且三个角均为 90° 同时满足正交条件，优先级必须给出立方
        let p = cell(4.2, 4.2, 4.2, 90.0, 90.0, 90.0);
        assert_eq!(classify(&p), CrystalSystem::Cubic);
    }

    #[test]
    fn test_hexagonal() {
        assert_eq!(
            classify(&cell(62.0, 62.0, 111.0, 90.0, 90.0, 120.0)),
            CrystalSystem::Hexagonal
        );
    }

    #[test]
    fn test_rhombohedral() {
        assert_eq!(
            classify(&cell(5.0, 5.0, 5.0, 75.0, 75.0, 75.0)),
            CrystalSystem::Rhombohedral
        );
    }

    #[test]
    fn test_tetragonal() {
        assert_eq!(
            classify(&cell(4.0, 4.0, 7.0, 90.0, 90.0, 90.0)),
            CrystalSystem::Tetragonal
        );
    }

    #[test]
    fn test_orthorhombic() {
        assert_eq!(
            classify(&cell(4.0, 5.0, 6.0, 90.0, 90.0, 90.0)),
            CrystalSystem::Orthorhombic
        );
    }

    #[test]
    fn test_monoclinic() {
        assert_eq!(
            classify(&cell(4.0, 5.0, 6.0, 90.0, 105.0, 90.0)),
            CrystalSystem::Monoclinic
        );
    }

    #[test]
    fn test_triclinic_fallback() {
        assert_eq!(
            classify(&cell(4.0, 5.0, 6.0, 80.0, 95.0, 100.0)),
            CrystalSystem::Triclinic
        );
    }

    #[test]
    fn test_equal_lengths_with_hexagonal_angles_is_triclinic() {
        // a=b=c, γ=120°：六方要求 c≠a，菱面体要求三角相等，均不满足
        assert_eq!(
            classify(&cell(5.0, 5.0, 5.0, 90.0, 90.0, 120.0)),
            CrystalSystem::Triclinic
        );
    }

    #[test]
    fn test_length_tolerance_is_relative() {
        // 米制下 1e-4 绝对容差会把所有长度判为相等；相对容差应区分 4 Å 与 7 Å
        let p = cell(4.0, 4.0, 7.0, 90.0, 90.0, 90.0);
        assert_ne!(classify(&p), CrystalSystem::Cubic);

        // 在相对容差内的微小差异仍视为相等
        let q = cell(5.0, 5.0001, 4.99995, 90.0, 90.0, 90.0);
        assert_eq!(classify(&q), CrystalSystem::Cubic);
    }

    #[test]
    fn test_angle_tolerance() {
        let p = cell(4.0, 5.0, 6.0, 90.003, 90.0, 90.0);
        assert_eq!(classify(&p), CrystalSystem::Orthorhombic);

        let q = cell(4.0, 5.0, 6.0, 90.1, 90.0, 90.0);
        assert_eq!(classify(&q), CrystalSystem::Triclinic);
    }

    #[test]
    fn test_custom_tolerance() {
        let p = cell(4.0, 4.1, 4.05, 90.0, 90.0, 90.0);
        assert_eq!(classify(&p), CrystalSystem::Orthorhombic);

        let loose = Tolerance {
            length_rel: 0.05,
            angle_abs: 1e-4,
        };
        assert_eq!(classify_with(&p, &loose), CrystalSystem::Cubic);
    }
}
