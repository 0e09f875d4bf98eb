use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::fluid_db;
use crate::i18n::{keys, Translator};
use crate::material_db;
use crate::pipe::{
    flow_rate_with_options, flow_regime, pressure_drop_with_options, FlowRateInput, FlowRegime,
    PressureDropInput,
};
use crate::quantity::QuantityKind;
use crate::units::{convert_pressure, convert_volume_flow, PressureUnit, VolumeFlowUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PressureDrop,
    FlowRate,
    UnitConversion,
    Reference,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_PRESSURE_DROP));
    println!("{}", tr.t(keys::MAIN_MENU_FLOW_RATE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_REFERENCE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::PressureDrop),
            "2" => return Ok(MenuChoice::FlowRate),
            "3" => return Ok(MenuChoice::UnitConversion),
            "4" => return Ok(MenuChoice::Reference),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 압력강하 계산 메뉴를 처리한다.
pub fn handle_pressure_drop(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PRESSURE_DROP_HEADING));
    let (length, diameter, roughness, density, viscosity) = read_pipe_and_fluid(tr)?;
    let velocity = read_f64(tr, tr.t(keys::PROMPT_VELOCITY))?;

    let input = PressureDropInput {
        length_m: length,
        diameter_m: diameter,
        roughness_m: roughness,
        density_kg_per_m3: density,
        dynamic_viscosity_pa_s: viscosity,
        velocity_m_per_s: velocity,
    };
    let result = pressure_drop_with_options(input, &cfg.solver.options())?;

    let dp_unit = cfg.default_units.pressure;
    let dp_display = convert_pressure(result.pressure_drop_pa, PressureUnit::Pascal, dp_unit);
    println!(
        "{} {:.2}",
        tr.t(keys::RESULT_REYNOLDS),
        result.reynolds_number
    );
    println!(
        "{} {:.4}",
        tr.t(keys::RESULT_FRICTION),
        result.friction_factor
    );
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_PRESSURE_DROP),
        dp_display,
        dp_unit.symbol()
    );
    println!(
        "{} {}",
        tr.t(keys::REGIME_LABEL),
        regime_label(tr, result.reynolds_number)
    );
    Ok(())
}

/// 유량 역산 메뉴를 처리한다.
pub fn handle_flow_rate(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FLOW_RATE_HEADING));
    let (length, diameter, roughness, density, viscosity) = read_pipe_and_fluid(tr)?;
    let dp_value = read_f64(tr, tr.t(keys::PROMPT_TARGET_DP))?;
    let dp_unit = read_pressure_unit(tr)?;
    let dp_pa = convert_pressure(dp_value, dp_unit, PressureUnit::Pascal);

    let input = FlowRateInput {
        length_m: length,
        diameter_m: diameter,
        roughness_m: roughness,
        density_kg_per_m3: density,
        dynamic_viscosity_pa_s: viscosity,
        pressure_drop_pa: dp_pa,
    };
    let result = flow_rate_with_options(input, &cfg.solver.options())?;

    let flow_unit = cfg.default_units.volume_flow;
    let flow_display = convert_volume_flow(
        result.flow_rate_m3_per_s,
        VolumeFlowUnit::CubicMeterPerSecond,
        flow_unit,
    );
    println!(
        "{} {:.2}",
        tr.t(keys::RESULT_REYNOLDS),
        result.reynolds_number
    );
    println!(
        "{} {:.4}",
        tr.t(keys::RESULT_FRICTION),
        result.friction_factor
    );
    println!(
        "{} {:.4} {}",
        tr.t(keys::RESULT_FLOW_RATE),
        flow_display,
        flow_unit.symbol()
    );
    println!(
        "{} {:.2} m/s",
        tr.t(keys::RESULT_VELOCITY),
        result.velocity_m_per_s
    );
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Pressure),
        2 => Some(QuantityKind::Length),
        3 => Some(QuantityKind::Velocity),
        4 => Some(QuantityKind::Viscosity),
        5 => Some(QuantityKind::Density),
        6 => Some(QuantityKind::VolumeFlow),
        _ => None,
    }
}

/// 참고 자료 메뉴를 처리한다.
pub fn handle_reference(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::REFERENCE_HEADING));
    println!("{}", tr.t(keys::REFERENCE_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            println!("{}", tr.t(keys::REFERENCE_FLUID_HEADING));
            for fluid in fluid_db::fluids() {
                println!("  {:<9} {}  ({})", fluid.code, fluid.name, fluid.notes);
            }
            let code = read_line(tr.t(keys::PROMPT_FLUID_CODE))?;
            let temp = read_f64(tr, tr.t(keys::PROMPT_FLUID_TEMP))?;
            match fluid_db::properties_at(code.trim(), temp) {
                Some(props) => {
                    if props.clamped {
                        println!("{}", tr.t(keys::FLUID_CLAMPED_NOTE));
                    }
                    println!(
                        "{} ρ={:.2} kg/m3, μ={:.6e} Pa·s",
                        tr.t(keys::FLUID_PROPS_LABEL),
                        props.density_kg_per_m3,
                        props.viscosity_pa_s
                    );
                }
                None => println!("{}", tr.t(keys::FLUID_UNKNOWN)),
            }
        }
        "2" => {
            println!("{}", tr.t(keys::REFERENCE_MATERIAL_HEADING));
            for material in material_db::materials() {
                println!(
                    "  {:<10} {:>9.1e}  {} {}",
                    material.code, material.roughness_m, material.name, material.notes
                );
            }
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} friction={}, inverse={}, ΔP[{}], Q[{}]",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.solver.friction_iterations,
        cfg.solver.inverse_iterations,
        cfg.default_units.pressure.symbol(),
        cfg.default_units.volume_flow.symbol()
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => cfg.solver.friction_iterations = read_iterations(tr)?,
        "2" => cfg.solver.inverse_iterations = read_iterations(tr)?,
        "3" => cfg.default_units.pressure = read_pressure_unit(tr)?,
        "4" => cfg.default_units.volume_flow = read_flow_unit(tr)?,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 배관 치수와 유체 물성 공통 입력을 읽는다.
/// 밀도에 0 이하를 입력하면 유체 프리셋에서 물성을 가져온다.
fn read_pipe_and_fluid(tr: &Translator) -> Result<(f64, f64, f64, f64, f64), AppError> {
    let length = read_f64(tr, tr.t(keys::PROMPT_LENGTH))?;
    let diameter = read_f64(tr, tr.t(keys::PROMPT_DIAMETER))?;
    let roughness = read_f64(tr, tr.t(keys::PROMPT_ROUGHNESS))?;
    let density = read_f64(tr, tr.t(keys::PROMPT_DENSITY))?;
    let (density, viscosity) = if density <= 0.0 {
        loop {
            let code = read_line(tr.t(keys::PROMPT_FLUID_CODE))?;
            let temp = read_f64(tr, tr.t(keys::PROMPT_FLUID_TEMP))?;
            if let Some(props) = fluid_db::properties_at(code.trim(), temp) {
                if props.clamped {
                    println!("{}", tr.t(keys::FLUID_CLAMPED_NOTE));
                }
                println!(
                    "{} ρ={:.2} kg/m3, μ={:.6e} Pa·s",
                    tr.t(keys::FLUID_PROPS_LABEL),
                    props.density_kg_per_m3,
                    props.viscosity_pa_s
                );
                break (props.density_kg_per_m3, props.viscosity_pa_s);
            }
            println!("{}", tr.t(keys::FLUID_UNKNOWN));
        }
    } else {
        let viscosity = read_f64(tr, tr.t(keys::PROMPT_VISCOSITY))?;
        (density, viscosity)
    };
    Ok((length, diameter, roughness, density, viscosity))
}

fn regime_label(tr: &Translator, reynolds: f64) -> &'static str {
    match flow_regime(reynolds) {
        FlowRegime::Laminar => tr.t(keys::REGIME_LAMINAR),
        FlowRegime::Turbulent => tr.t(keys::REGIME_TURBULENT),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_iterations(tr: &Translator) -> Result<u32, AppError> {
    loop {
        let s = read_line(tr.t(keys::SETTINGS_PROMPT_ITERATIONS))?;
        match s.trim().parse::<u32>() {
            Ok(n) if n >= 1 => return Ok(n),
            _ => println!("{}", tr.t(keys::SETTINGS_INVALID_ITERATIONS)),
        }
    }
}

fn read_pressure_unit(tr: &Translator) -> Result<PressureUnit, AppError> {
    println!("{}", tr.t(keys::PRESSURE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => PressureUnit::Pascal,
        "2" => PressureUnit::KiloPascal,
        "3" => PressureUnit::Bar,
        "4" => PressureUnit::Psi,
        "5" => PressureUnit::MeterWater,
        _ => PressureUnit::Pascal,
    };
    Ok(unit)
}

fn read_flow_unit(tr: &Translator) -> Result<VolumeFlowUnit, AppError> {
    println!("{}", tr.t(keys::FLOW_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => VolumeFlowUnit::CubicMeterPerSecond,
        "2" => VolumeFlowUnit::CubicMeterPerHour,
        "3" => VolumeFlowUnit::LiterPerSecond,
        "4" => VolumeFlowUnit::LiterPerMinute,
        "5" => VolumeFlowUnit::UsGallonPerMinute,
        _ => VolumeFlowUnit::CubicMeterPerSecond,
    };
    Ok(unit)
}
