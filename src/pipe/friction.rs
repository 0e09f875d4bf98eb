use super::{PipeCalcError, SolverOptions};

/// 층류/난류 경계 레이놀즈수. 2300 미만이면 층류로 취급한다.
pub const LAMINAR_LIMIT_RE: f64 = 2300.0;

/// Colebrook-White 반복의 초기 마찰계수 추정값.
const INITIAL_FRICTION_GUESS: f64 = 0.02;

/// 유동 영역 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

/// 레이놀즈수로 유동 영역을 판정한다. 경계값 2300은 난류로 분류된다.
pub fn flow_regime(reynolds: f64) -> FlowRegime {
    if reynolds < LAMINAR_LIMIT_RE {
        FlowRegime::Laminar
    } else {
        FlowRegime::Turbulent
    }
}

/// 레이놀즈수를 계산한다. Re = ρ·v·D / μ
pub fn reynolds_number(
    density_kg_per_m3: f64,
    velocity_m_per_s: f64,
    diameter_m: f64,
    dynamic_viscosity_pa_s: f64,
) -> f64 {
    density_kg_per_m3 * velocity_m_per_s * diameter_m / dynamic_viscosity_pa_s
}

/// 기본 반복 횟수(100회)로 마찰계수를 계산한다.
pub fn friction_factor(
    reynolds: f64,
    roughness_m: f64,
    diameter_m: f64,
) -> Result<f64, PipeCalcError> {
    friction_factor_with_options(reynolds, roughness_m, diameter_m, &SolverOptions::default())
}

/// Darcy 마찰계수를 계산한다.
///
/// 층류(Re < 2300)는 닫힌형 64/Re, 난류는 Colebrook-White 잔차
/// g(f) = -2·log10(ε/(3.7·D) + 2.51/(Re·√f)) - 1/√f 에 대해
/// f ← 1/g(f)² 갱신을 정해진 횟수만큼 반복한다. 수렴 판정은 하지 않는다.
pub fn friction_factor_with_options(
    reynolds: f64,
    roughness_m: f64,
    diameter_m: f64,
    options: &SolverOptions,
) -> Result<f64, PipeCalcError> {
    if reynolds <= 0.0 || !reynolds.is_finite() {
        return Err(PipeCalcError::InvalidInput(
            "레이놀즈수는 0보다 커야 합니다.",
        ));
    }
    if diameter_m <= 0.0 || !diameter_m.is_finite() {
        return Err(PipeCalcError::InvalidInput("직경은 0보다 커야 합니다."));
    }
    if roughness_m < 0.0 || !roughness_m.is_finite() {
        return Err(PipeCalcError::InvalidInput(
            "거칠기는 음수일 수 없습니다.",
        ));
    }
    if options.friction_iterations == 0 {
        return Err(PipeCalcError::InvalidInput(
            "반복 횟수는 0보다 커야 합니다.",
        ));
    }

    if reynolds < LAMINAR_LIMIT_RE {
        return Ok(64.0 / reynolds);
    }

    let relative_term = roughness_m / (3.7 * diameter_m);
    let mut f = INITIAL_FRICTION_GUESS;
    for _ in 0..options.friction_iterations {
        if f <= 0.0 {
            return Err(PipeCalcError::NumericDomain(
                "마찰계수 반복값이 0 이하로 내려갔습니다.",
            ));
        }
        let log_arg = relative_term + 2.51 / (reynolds * f.sqrt());
        if log_arg <= 0.0 {
            return Err(PipeCalcError::NumericDomain(
                "Colebrook 로그 인자가 0 이하입니다.",
            ));
        }
        let residual = -2.0 * log_arg.log10() - 1.0 / f.sqrt();
        f = 1.0 / (residual * residual);
        if !f.is_finite() {
            return Err(PipeCalcError::NumericDomain(
                "마찰계수 반복이 발산했습니다.",
            ));
        }
    }
    Ok(f)
}
