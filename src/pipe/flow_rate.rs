use super::friction::{friction_factor_with_options, reynolds_number};
use super::geometry::flow_rate_from_velocity;
use super::pressure_drop::{darcy_weisbach_pa, validate_common};
use super::{PipeCalcError, SolverOptions};

/// 역산 반복의 초기 유속 추정값 [m/s].
const INITIAL_VELOCITY_M_PER_S: f64 = 1.0;

/// 목표 압력강하에서 유량을 역산하기 위한 입력.
#[derive(Debug, Clone)]
pub struct FlowRateInput {
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
    /// 목표 압력강하 [Pa]
    pub pressure_drop_pa: f64,
}

/// 유량 역산 결과.
#[derive(Debug, Clone)]
pub struct FlowRateResult {
    /// 수렴한 평균 유속 [m/s]
    pub velocity_m_per_s: f64,
    /// 레이놀즈수
    pub reynolds_number: f64,
    /// 마찰계수
    pub friction_factor: f64,
    /// 체적 유량 [m3/s]
    pub flow_rate_m3_per_s: f64,
}

/// 기본 반복 횟수로 유량을 역산한다.
pub fn flow_rate(input: FlowRateInput) -> Result<FlowRateResult, PipeCalcError> {
    flow_rate_with_options(input, &SolverOptions::default())
}

/// 목표 압력강하를 만드는 유량을 역산한다.
///
/// v₀ = 1.0 에서 시작해 매 회 정방향 압력강하를 평가하고
/// v ← v·√(ΔP_목표/ΔP_계산) 으로 보정하는 고정 횟수 반복이다. ΔP ∝ v²
/// 이므로 마찰계수가 고정이라면 한 번에 맞지만, 마찰계수가 매 회
/// 레이놀즈수를 따라 다시 계산되므로 중첩 고정점 반복이 된다.
/// 보고되는 레이놀즈수/마찰계수는 마지막 회에 평가된 값이다.
pub fn flow_rate_with_options(
    input: FlowRateInput,
    options: &SolverOptions,
) -> Result<FlowRateResult, PipeCalcError> {
    validate_common(
        input.length_m,
        input.diameter_m,
        input.roughness_m,
        input.density_kg_per_m3,
        input.dynamic_viscosity_pa_s,
    )?;
    if input.pressure_drop_pa <= 0.0 || !input.pressure_drop_pa.is_finite() {
        return Err(PipeCalcError::InvalidInput(
            "목표 압력강하는 0보다 커야 합니다.",
        ));
    }
    if options.inverse_iterations == 0 {
        return Err(PipeCalcError::InvalidInput(
            "반복 횟수는 0보다 커야 합니다.",
        ));
    }

    let mut velocity = INITIAL_VELOCITY_M_PER_S;
    let mut reynolds = 0.0;
    let mut friction = 0.0;
    for _ in 0..options.inverse_iterations {
        reynolds = reynolds_number(
            input.density_kg_per_m3,
            velocity,
            input.diameter_m,
            input.dynamic_viscosity_pa_s,
        );
        friction = friction_factor_with_options(
            reynolds,
            input.roughness_m,
            input.diameter_m,
            options,
        )?;
        let delta_p_pa = darcy_weisbach_pa(
            input.length_m,
            input.diameter_m,
            input.density_kg_per_m3,
            velocity,
            friction,
        );
        if delta_p_pa <= 0.0 || !delta_p_pa.is_finite() {
            return Err(PipeCalcError::NumericDomain(
                "반복 중 압력강하가 0 이하 또는 발산했습니다.",
            ));
        }
        velocity *= (input.pressure_drop_pa / delta_p_pa).sqrt();
        if !velocity.is_finite() {
            return Err(PipeCalcError::NumericDomain(
                "유속 반복이 발산했습니다.",
            ));
        }
    }

    Ok(FlowRateResult {
        velocity_m_per_s: velocity,
        reynolds_number: reynolds,
        friction_factor: friction,
        flow_rate_m3_per_s: flow_rate_from_velocity(velocity, input.diameter_m),
    })
}
