use super::friction::{friction_factor_with_options, reynolds_number};
use super::{PipeCalcError, SolverOptions};

/// Darcy-Weisbach 기반 압력강하 계산 입력.
#[derive(Debug, Clone)]
pub struct PressureDropInput {
    /// 배관 길이 [m]
    pub length_m: f64,
    /// 내경 [m]
    pub diameter_m: f64,
    /// 절대 거칠기 [m]
    pub roughness_m: f64,
    /// 유체 밀도 [kg/m3]
    pub density_kg_per_m3: f64,
    /// 동점도 [Pa·s]
    pub dynamic_viscosity_pa_s: f64,
    /// 평균 유속 [m/s]
    pub velocity_m_per_s: f64,
}

/// 압력강하 계산 결과.
#[derive(Debug, Clone)]
pub struct PressureDropResult {
    /// 레이놀즈수
    pub reynolds_number: f64,
    /// 마찰계수
    pub friction_factor: f64,
    /// 압력강하 [Pa]
    pub pressure_drop_pa: f64,
}

/// Darcy-Weisbach 식을 계산한다. ΔP = f·(L/D)·ρ·v²/2
pub fn darcy_weisbach_pa(
    length_m: f64,
    diameter_m: f64,
    density_kg_per_m3: f64,
    velocity_m_per_s: f64,
    friction_factor: f64,
) -> f64 {
    friction_factor
        * (length_m / diameter_m)
        * density_kg_per_m3
        * velocity_m_per_s
        * velocity_m_per_s
        / 2.0
}

/// 기본 반복 횟수로 압력강하를 계산한다.
pub fn pressure_drop(input: PressureDropInput) -> Result<PressureDropResult, PipeCalcError> {
    pressure_drop_with_options(input, &SolverOptions::default())
}

/// 알려진 유속에서 압력강하를 계산한다.
///
/// 레이놀즈수 → 마찰계수 → Darcy-Weisbach 순의 단일 패스 계산이다.
pub fn pressure_drop_with_options(
    input: PressureDropInput,
    options: &SolverOptions,
) -> Result<PressureDropResult, PipeCalcError> {
    validate_common(
        input.length_m,
        input.diameter_m,
        input.roughness_m,
        input.density_kg_per_m3,
        input.dynamic_viscosity_pa_s,
    )?;
    if input.velocity_m_per_s <= 0.0 || !input.velocity_m_per_s.is_finite() {
        return Err(PipeCalcError::InvalidInput("유속은 0보다 커야 합니다."));
    }

    let reynolds = reynolds_number(
        input.density_kg_per_m3,
        input.velocity_m_per_s,
        input.diameter_m,
        input.dynamic_viscosity_pa_s,
    );
    let friction =
        friction_factor_with_options(reynolds, input.roughness_m, input.diameter_m, options)?;
    let delta_p_pa = darcy_weisbach_pa(
        input.length_m,
        input.diameter_m,
        input.density_kg_per_m3,
        input.velocity_m_per_s,
        friction,
    );

    Ok(PressureDropResult {
        reynolds_number: reynolds,
        friction_factor: friction,
        pressure_drop_pa: delta_p_pa,
    })
}

/// 정/역방향 계산이 공유하는 입력 검증.
pub(super) fn validate_common(
    length_m: f64,
    diameter_m: f64,
    roughness_m: f64,
    density_kg_per_m3: f64,
    dynamic_viscosity_pa_s: f64,
) -> Result<(), PipeCalcError> {
    if length_m <= 0.0 || !length_m.is_finite() {
        return Err(PipeCalcError::InvalidInput("길이는 0보다 커야 합니다."));
    }
    if diameter_m <= 0.0 || !diameter_m.is_finite() {
        return Err(PipeCalcError::InvalidInput("직경은 0보다 커야 합니다."));
    }
    if roughness_m < 0.0 || !roughness_m.is_finite() {
        return Err(PipeCalcError::InvalidInput("거칠기는 음수일 수 없습니다."));
    }
    if density_kg_per_m3 <= 0.0 || !density_kg_per_m3.is_finite() {
        return Err(PipeCalcError::InvalidInput("밀도는 0보다 커야 합니다."));
    }
    if dynamic_viscosity_pa_s <= 0.0 || !dynamic_viscosity_pa_s.is_finite() {
        return Err(PipeCalcError::InvalidInput("점도는 0보다 커야 합니다."));
    }
    Ok(())
}
