//! # 物理常数与默认参数
//!
//! 所有常数在编译期确定，计算核心内部一律使用 SI 单位。
//!
//! ## 依赖关系
//! - 被 `crystal/`, `laser/`, `config.rs`, `cli/` 使用
//! - 无外部模块依赖

// ─────────────────────────────────────────────────────────────
// 自然常数
// ─────────────────────────────────────────────────────────────

/// Avogadro 常数 (mol⁻¹)
pub const AVOGADRO: f64 = 6.022_140_76e23;

/// Planck 常数 (J·s)
pub const PLANCK: f64 = 6.626_070_04e-34;

/// 真空光速 (m/s)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

// ─────────────────────────────────────────────────────────────
// 光束与吸收
// ─────────────────────────────────────────────────────────────

/// Gaussian 光束 FWHM → 1/e² 直径换算因子 (√(2/ln2) ≈ 1.6986，截断为 1.699)
pub const FWHM_TO_1E2: f64 = 1.699;

/// 消光系数 L·mol⁻¹·cm⁻¹ 与 mol/L 浓度、米制长度相乘时的换算因子
pub const EXTINCTION_TO_SI: f64 = 100.0;

/// 每升对应的立方米数
pub const LITERS_PER_CUBIC_METER: f64 = 1000.0;

// ─────────────────────────────────────────────────────────────
// 晶系判定容差
// ─────────────────────────────────────────────────────────────

/// 长度相等判定的相对容差
pub const LENGTH_REL_TOLERANCE: f64 = 1e-4;

/// 角度相等判定的绝对容差 (rad)
pub const ANGLE_ABS_TOLERANCE: f64 = 1e-4;

// ─────────────────────────────────────────────────────────────
// 径向剖面
// ─────────────────────────────────────────────────────────────

/// 径向剖面的最大采样点数
pub const MAX_PROFILE_POINTS: usize = 100_000;

// ─────────────────────────────────────────────────────────────
// 默认晶胞参数（命令行单位：Å 与度）
// ─────────────────────────────────────────────────────────────

pub const DEFAULT_A_ANGSTROM: f64 = 62.0;
pub const DEFAULT_B_ANGSTROM: f64 = 62.0;
pub const DEFAULT_C_ANGSTROM: f64 = 111.0;
pub const DEFAULT_ALPHA_DEG: f64 = 90.0;
pub const DEFAULT_BETA_DEG: f64 = 90.0;
pub const DEFAULT_GAMMA_DEG: f64 = 120.0;
/// 每个晶胞中的吸光分子数
pub const DEFAULT_Z: u32 = 6;

// ─────────────────────────────────────────────────────────────
// 默认激光/样品参数（SI）
// ─────────────────────────────────────────────────────────────

/// L·mol⁻¹·cm⁻¹
pub const DEFAULT_EXTINCTION_COEFFICIENT: f64 = 45_600.0;
pub const DEFAULT_SAMPLE_THICKNESS_M: f64 = 5e-6;
/// mol/L
pub const DEFAULT_CONCENTRATION: f64 = 0.02;
pub const DEFAULT_PULSE_ENERGY_J: f64 = 0.25e-6;
pub const DEFAULT_BEAM_DIAMETER_M: f64 = 100e-6;
pub const DEFAULT_PULSE_DURATION_S: f64 = 145e-15;
pub const DEFAULT_WAVELENGTH_M: f64 = 532e-9;
pub const DEFAULT_OFFSET_M: f64 = 0.0;
