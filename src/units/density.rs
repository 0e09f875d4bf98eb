use serde::{Deserialize, Serialize};

/// 밀도 단위. 내부 기준은 kg/m3이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    KilogramPerCubicMeter,
    GramPerCubicCentimeter,
    PoundPerCubicFoot,
}

const KG_M3_PER_LB_FT3: f64 = 16.018_463;

fn to_kg_m3(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::KilogramPerCubicMeter => value,
        DensityUnit::GramPerCubicCentimeter => value * 1000.0,
        DensityUnit::PoundPerCubicFoot => value * KG_M3_PER_LB_FT3,
    }
}

fn from_kg_m3(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::KilogramPerCubicMeter => value,
        DensityUnit::GramPerCubicCentimeter => value / 1000.0,
        DensityUnit::PoundPerCubicFoot => value / KG_M3_PER_LB_FT3,
    }
}

/// 밀도를 변환한다.
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    let base = to_kg_m3(value, from);
    from_kg_m3(base, to)
}
