//! # interactive 命令实现
//!
//! 菜单驱动的交互式会话：
//! 1. 由晶胞参数计算浓度
//! 2. 计算激光-样品相互作用
//! 3. 完整流程（1 的结果作为 2 的浓度）
//! 4. 退出
//!
//! 每个提示都带默认值（来自配置文件或内置默认值），直接回车即采用。
//! 计算出错时打印错误并回到菜单；输入流结束时结束会话。
//!
//! ## 依赖关系
//! - 使用 `utils/prompt.rs` 读取输入
//! - 使用 `crystal/`, `laser/`, `report/`

use crate::cli::common::{LaserArgs, LatticeArgs};
use crate::config::FileConfig;
use crate::crystal;
use crate::error::{ChromoError, Result};
use crate::laser::{self, VerificationInput};
use crate::models::{
    Angle, BeamDiameter, BeamWidthKind, ConcentrationResult, LaserSampleParameters,
    LatticeParameters,
};
use crate::report;
use crate::units::{ANGSTROM, FEMTOSECOND, MICROJOULE, MICROMETER, NANOMETER};
use crate::utils::output;
use crate::utils::prompt::Prompter;

const BEAM_FWHM: &str = "FWHM";
const BEAM_1E2: &str = "1/e²";

/// 执行 interactive 命令
pub fn execute(config: &FileConfig) -> Result<()> {
    run(Prompter::new(), config)
}

/// 以给定提示器运行会话，输入流结束时正常退出
pub fn run(prompter: Prompter, config: &FileConfig) -> Result<()> {
    let mut session = Session::new(prompter, config)?;

    match session.menu_loop() {
        Err(ChromoError::InputClosed) => {
            output::print_info("Input closed, exiting...");
            Ok(())
        }
        other => other,
    }
}

/// 计算或输入失败只打印，不退出会话；输入流结束则继续向上传递
fn report_failure<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(ChromoError::InputClosed) => Err(ChromoError::InputClosed),
        Err(e) => {
            output::print_error(&e.to_string());
            Ok(None)
        }
    }
}

/// 会话状态：提示器与各参数的默认值
struct Session {
    prompter: Prompter,
    lattice: LatticeParameters,
    z: u32,
    laser: LaserSampleParameters,
}

impl Session {
    fn new(prompter: Prompter, config: &FileConfig) -> Result<Self> {
        let (lattice, z) = LatticeArgs::default().resolve(&config.lattice)?;
        let laser = LaserArgs::default().resolve(&config.laser);
        Ok(Session {
            prompter,
            lattice,
            z,
            laser,
        })
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            output::print_header("Main Menu");
            println!("  1. Calculate chromophore concentration from crystal parameters");
            println!("  2. Calculate laser-sample interaction parameters");
            println!("  3. Full workflow (both calculations)");
            println!("  4. Exit");
            println!();

            let choice = self.prompter.menu("Enter your choice (1-4): ")?;
            match choice.as_str() {
                "1" => {
                    report_failure(self.concentration())?;
                    self.prompter.pause("\nPress Enter to continue...")?;
                }
                "2" => {
                    report_failure(self.interaction(None))?;
                    self.prompter.pause("\nPress Enter to continue...")?;
                }
                "3" => {
                    if let Some(conc) = report_failure(self.concentration())? {
                        self.prompter
                            .pause("\nPress Enter to continue to laser-sample interaction...")?;
                        report_failure(self.interaction(Some(conc.mol_per_liter)))?;
                    }
                    self.prompter.pause("\nPress Enter to continue...")?;
                }
                "4" => {
                    output::print_info("Exiting program...");
                    return Ok(());
                }
                _ => output::print_warning("Invalid choice. Please enter 1-4."),
            }
        }
    }

    /// 读取晶胞参数
    fn read_lattice(&mut self) -> Result<(f64, f64, f64, f64, f64, f64, u32)> {
        let (a, b, c) = self.lattice.lengths();
        let (alpha, beta, gamma) = self.lattice.angles();
        let z = self.z;
        let p = &mut self.prompter;
        Ok((
            p.number("a (Å)", a / ANGSTROM)?,
            p.number("b (Å)", b / ANGSTROM)?,
            p.number("c (Å)", c / ANGSTROM)?,
            p.number("α (degrees)", alpha.to_degrees())?,
            p.number("β (degrees)", beta.to_degrees())?,
            p.number("γ (degrees)", gamma.to_degrees())?,
            p.number("Number of absorbing molecules per unit cell", z)?,
        ))
    }

    fn lattice_from_input(&mut self) -> Result<(LatticeParameters, u32)> {
        let (a, b, c, alpha, beta, gamma, z) = self.read_lattice()?;
        let params = LatticeParameters::new(
            a * ANGSTROM,
            b * ANGSTROM,
            c * ANGSTROM,
            Angle::Degrees(alpha),
            Angle::Degrees(beta),
            Angle::Degrees(gamma),
        )?;
        Ok((params, z))
    }

    /// 浓度计算
    fn concentration(&mut self) -> Result<ConcentrationResult> {
        output::print_header("Chromophore Concentration Calculator");
        output::print_info("Enter the crystal cell parameters (press Enter for defaults)");

        let (lattice, z) = self.lattice_from_input()?;
        let result = crystal::concentration(&lattice, z)?;

        output::print_header("Results");
        output::print_report(&report::format_concentration(&result));
        Ok(result)
    }

    /// 相互作用计算；`concentration` 给定时不再询问浓度
    fn interaction(&mut self, concentration: Option<f64>) -> Result<()> {
        output::print_header("Laser-Sample Interaction Calculator");
        output::print_info("Enter values or press Enter to use defaults");

        let d = self.laser;
        let p = &mut self.prompter;

        let extinction_coefficient =
            p.number("Extinction coefficient (L/(mol·cm))", d.extinction_coefficient)?;
        let sample_thickness =
            p.number("Sample thickness (µm)", d.sample_thickness / MICROMETER)? * MICROMETER;
        let concentration = match concentration {
            Some(c) => {
                output::print_info(&format!("Chromophore concentration: {:.6} mol/L", c));
                c
            }
            None => p.number("Chromophore concentration (mol/L)", d.concentration)?,
        };
        let pulse_energy = p.number("Pulse energy (µJ)", d.pulse_energy / MICROJOULE)? * MICROJOULE;
        let beam_value =
            p.number("Beam diameter (µm)", d.beam_diameter.value / MICROMETER)? * MICROMETER;
        let default_kind = match d.beam_diameter.kind {
            BeamWidthKind::Fwhm => BEAM_FWHM,
            BeamWidthKind::OneOverESquared => BEAM_1E2,
        };
        let kind = match p
            .choice(
                "Beam diameter type (FWHM/1/e²)",
                default_kind,
                &[BEAM_FWHM, BEAM_1E2],
            )?
            .as_str()
        {
            BEAM_1E2 => BeamWidthKind::OneOverESquared,
            _ => BeamWidthKind::Fwhm,
        };
        let pulse_duration =
            p.number("Pulse duration (fs)", d.pulse_duration / FEMTOSECOND)? * FEMTOSECOND;
        let wavelength = p.number("Wavelength (nm)", d.wavelength / NANOMETER)? * NANOMETER;
        let offset = p.number("Laser offset (µm)", d.offset / MICROMETER)? * MICROMETER;

        let params = LaserSampleParameters {
            extinction_coefficient,
            sample_thickness,
            concentration,
            pulse_energy,
            beam_diameter: BeamDiameter {
                value: beam_value,
                kind,
            },
            pulse_duration,
            wavelength,
            offset,
        };

        let verify = p.choice(
            "Use crystal parameters to verify concentration? (y/n)",
            "n",
            &["y", "n"],
        )? == "y";

        let verification = if verify {
            output::print_header("Crystal Parameters");
            let (lattice, z) = self.lattice_from_input()?;
            Some(VerificationInput { lattice, z })
        } else {
            None
        };

        let result = laser::interact(&params, verification.as_ref())?;
        println!();
        output::print_report(&report::format_interaction(&result));
        Ok(())
    }
}
