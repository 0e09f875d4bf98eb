use serde::{Deserialize, Serialize};

/// 압력(차압) 단위. 내부 기준은 Pa이다.
///
/// 배관 압력강하는 차압이므로 게이지/절대 구분 없이 크기 환산만 다룬다.
/// 수두(mH2O/mmH2O)는 표준 중력 기준으로 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    MilliBar,
    Psi,
    MeterWater,
    MillimeterWater,
}

const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_PSI: f64 = 6_894.757;
const PA_PER_M_H2O: f64 = 9_806.65;

fn to_pa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1_000.0,
        PressureUnit::MegaPascal => value * 1_000_000.0,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::MilliBar => value * 100.0,
        PressureUnit::Psi => value * PA_PER_PSI,
        PressureUnit::MeterWater => value * PA_PER_M_H2O,
        PressureUnit::MillimeterWater => value * PA_PER_M_H2O / 1_000.0,
    }
}

fn from_pa(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::KiloPascal => value_pa / 1_000.0,
        PressureUnit::MegaPascal => value_pa / 1_000_000.0,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::MilliBar => value_pa / 100.0,
        PressureUnit::Psi => value_pa / PA_PER_PSI,
        PressureUnit::MeterWater => value_pa / PA_PER_M_H2O,
        PressureUnit::MillimeterWater => value_pa * 1_000.0 / PA_PER_M_H2O,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pa(value, from);
    from_pa(pa, to)
}

impl PressureUnit {
    /// 표시용 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Bar => "bar",
            PressureUnit::MilliBar => "mbar",
            PressureUnit::Psi => "psi",
            PressureUnit::MeterWater => "mH2O",
            PressureUnit::MillimeterWater => "mmH2O",
        }
    }
}
