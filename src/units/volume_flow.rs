use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 m3/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeFlowUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
    LiterPerSecond,
    LiterPerMinute,
    UsGallonPerMinute,
}

const M3_S_PER_GPM: f64 = 6.309_02e-5;

fn to_m3_s(value: f64, unit: VolumeFlowUnit) -> f64 {
    match unit {
        VolumeFlowUnit::CubicMeterPerSecond => value,
        VolumeFlowUnit::CubicMeterPerHour => value / 3600.0,
        VolumeFlowUnit::LiterPerSecond => value / 1000.0,
        VolumeFlowUnit::LiterPerMinute => value / 60_000.0,
        VolumeFlowUnit::UsGallonPerMinute => value * M3_S_PER_GPM,
    }
}

fn from_m3_s(value: f64, unit: VolumeFlowUnit) -> f64 {
    match unit {
        VolumeFlowUnit::CubicMeterPerSecond => value,
        VolumeFlowUnit::CubicMeterPerHour => value * 3600.0,
        VolumeFlowUnit::LiterPerSecond => value * 1000.0,
        VolumeFlowUnit::LiterPerMinute => value * 60_000.0,
        VolumeFlowUnit::UsGallonPerMinute => value / M3_S_PER_GPM,
    }
}

/// 체적 유량을 변환한다.
pub fn convert_volume_flow(value: f64, from: VolumeFlowUnit, to: VolumeFlowUnit) -> f64 {
    let base = to_m3_s(value, from);
    from_m3_s(base, to)
}

impl VolumeFlowUnit {
    /// 표시용 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeFlowUnit::CubicMeterPerSecond => "m3/s",
            VolumeFlowUnit::CubicMeterPerHour => "m3/h",
            VolumeFlowUnit::LiterPerSecond => "L/s",
            VolumeFlowUnit::LiterPerMinute => "L/min",
            VolumeFlowUnit::UsGallonPerMinute => "gpm",
        }
    }
}
