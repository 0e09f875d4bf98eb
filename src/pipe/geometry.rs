/// 원형 단면의 유동 면적을 계산한다. A = π·D²/4
pub fn flow_area_m2(diameter_m: f64) -> f64 {
    std::f64::consts::PI * diameter_m * diameter_m / 4.0
}

/// 체적 유량에서 평균 유속을 계산한다.
pub fn velocity_from_flow_rate(flow_m3_per_s: f64, diameter_m: f64) -> f64 {
    flow_m3_per_s / flow_area_m2(diameter_m)
}

/// 평균 유속에서 체적 유량을 계산한다.
pub fn flow_rate_from_velocity(velocity_m_per_s: f64, diameter_m: f64) -> f64 {
    velocity_m_per_s * flow_area_m2(diameter_m)
}
