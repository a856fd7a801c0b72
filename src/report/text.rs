//! # 文本报告
//!
//! 将计算结果格式化为固定精度的可读文本：
//! - 浓度、穿透深度: 9 位小数
//! - 百分比: 1 位小数
//! - 能流密度 (mJ/cm²)、功率密度 (GW/cm²): 2 位小数科学计数法
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `units.rs` 的报告单位换算

use crate::models::{ConcentrationResult, InteractionResult};
use crate::units::{
    CUBIC_METER_TO_CUBIC_ANGSTROM, J_PER_M2_TO_MJ_PER_CM2, MICROMETER, W_PER_M2_TO_GW_PER_CM2,
};

/// 科学计数法，指数至少两位并带符号，例如 `2.21E+00`
pub fn scientific(value: f64, precision: usize, uppercase: bool) -> String {
    let raw = format!("{:.*e}", precision, value);
    let (mantissa, exponent) = match raw.split_once('e') {
        Some(parts) => parts,
        None => return raw,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let marker = if uppercase { 'E' } else { 'e' };
    format!("{}{}{:+03}", mantissa, marker, exponent)
}

/// 晶胞浓度报告
pub fn format_concentration(result: &ConcentrationResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("Crystal system: {}\n", result.system()));
    out.push_str(&format!(
        "Unit cell volume: {:.2} Å³\n",
        result.volume() * CUBIC_METER_TO_CUBIC_ANGSTROM
    ));
    out.push_str(&format!(
        "Chromophore concentration: {:.6} mol/L\n",
        result.mol_per_liter
    ));
    out.push_str(&format!(
        "Chromophore concentration: {:.2} mol/m³",
        result.mol_per_cubic_meter
    ));

    out
}

/// 相互作用结果报告
pub fn format_interaction(result: &InteractionResult) -> String {
    let mut out = String::new();

    out.push_str("Concentration of absorbing molecules:\n");
    out.push_str(&format!("    {:.9}\tmol/l\n", result.concentration));
    out.push_str("1/e penetration depth of sample:\n");
    out.push_str(&format!(
        "    {:.9}\tµm\n\n",
        result.penetration_depth / MICROMETER
    ));

    out.push_str("Pump intensity at interaction point (IP) [% of peak value]:\n");
    out.push_str(&format!("    {:.1}\t%\n", result.intensity_percent_at_ip));
    out.push_str(&format!(
        "{:.1}\tµm\tbeam diameter (1/e²)\n\n",
        result.beam_diameter_1e2 / MICROMETER
    ));

    out.push_str("Laser fluence:\n");
    out.push_str(&format!(
        "    at IP\t{}\tmJ/cm²\n",
        scientific(result.fluence.at_ip * J_PER_M2_TO_MJ_PER_CM2, 2, true)
    ));
    out.push_str(&format!(
        "    peak\t{}\tmJ/cm²\n\n",
        scientific(result.fluence.peak * J_PER_M2_TO_MJ_PER_CM2, 2, true)
    ));

    out.push_str("Laser power density:\n");
    out.push_str(&format!(
        "    at IP\t{}\tGW/cm²\n",
        scientific(result.power_density.at_ip * W_PER_M2_TO_GW_PER_CM2, 2, true)
    ));
    out.push_str(&format!(
        "    peak\t{}\tGW/cm²\n\n",
        scientific(result.power_density.peak * W_PER_M2_TO_GW_PER_CM2, 2, true)
    ));

    out.push_str("Average number of absorbed photons/absorbing molecule:\n");
    out.push_str(&format!(
        "    {:.1}\tphotons/molecule",
        result.absorbed_photons_per_molecule
    ));

    if let Some(v) = result.verification() {
        out.push_str("\n\nCrystal verification:\n");
        out.push_str(&format!(
            "    Calculated concentration: {:.6} mol/L\n",
            v.calculated_concentration
        ));
        out.push_str(&format!("    Difference: {:.6} mol/L\n", v.difference));
        out.push_str(&format!("    Crystal system: {}\n", v.crystal_system));
        out.push_str(&format!(
            "    Unit cell volume: {} m³",
            scientific(v.unit_cell_volume, 3, false)
        ));
    } else if let Some(err) = result.verification_error() {
        out.push_str(&format!("\n\n{}", err));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laser::{interact, VerificationInput};
    use crate::models::{LaserSampleParameters, LatticeParameters};

    #[test]
    fn test_scientific_format() {
        assert_eq!(scientific(2.2054, 2, true), "2.21E+00");
        assert_eq!(scientific(15.2098, 2, true), "1.52E+01");
        assert_eq!(scientific(3.695e-25, 3, false), "3.695e-25");
        assert_eq!(scientific(0.0, 2, true), "0.00E+00");
    }

    #[test]
    fn test_format_interaction_default() {
        let result = interact(&LaserSampleParameters::default(), None).unwrap();
        let text = format_interaction(&result);

        assert!(text.contains("    0.020000000\tmol/l"));
        assert!(text.contains("    4.762000898\tµm"));
        assert!(text.contains("    100.0\t%"));
        assert!(text.contains("169.9\tµm\tbeam diameter (1/e²)"));
        assert!(text.contains("    peak\t2.21E+00\tmJ/cm²"));
        assert!(text.contains("    peak\t1.52E+01\tGW/cm²"));
        assert!(text.contains("    0.6\tphotons/molecule"));
        assert!(!text.contains("Crystal verification"));
    }

    #[test]
    fn test_format_interaction_with_verification() {
        let lattice =
            LatticeParameters::from_angstrom_degrees(62.0, 62.0, 111.0, 90.0, 90.0, 120.0)
                .unwrap();
        let input = VerificationInput { lattice, z: 6 };
        let result = interact(&LaserSampleParameters::default(), Some(&input)).unwrap();
        let text = format_interaction(&result);

        assert!(text.contains("Crystal verification:"));
        assert!(text.contains("Calculated concentration: 0.026963 mol/L"));
        assert!(text.contains("Difference: 0.006963 mol/L"));
        assert!(text.contains("Crystal system: HEXAGONAL"));
        assert!(text.contains("Unit cell volume: 3.695e-25 m³"));
    }

    #[test]
    fn test_format_interaction_sections() {
        let result = interact(&LaserSampleParameters::default(), None).unwrap();
        let text = format_interaction(&result);

        assert!(text.contains("\tµm\n\nPump intensity at interaction point"));
        assert!(text.contains("mJ/cm²\n\nLaser power density:\n"));
        assert!(text.ends_with("\tphotons/molecule"));
    }

    #[test]
    fn test_format_concentration() {
        let lattice =
            LatticeParameters::from_angstrom_degrees(62.0, 62.0, 111.0, 90.0, 90.0, 120.0)
                .unwrap();
        let result = crate::crystal::concentration(&lattice, 6).unwrap();
        let text = format_concentration(&result);

        assert!(text.contains("Crystal system: HEXAGONAL"));
        assert!(text.contains("Unit cell volume: 369519.18 Å³"));
        assert!(text.contains("Chromophore concentration: 0.026963 mol/L"));
        assert!(text.contains("Chromophore concentration: 26.96 mol/m³"));
    }
}
