//! 배관 유동 계산 회귀 테스트. 기준 시나리오 값은 고정 100회 반복 결과이다.
use pipe_flow_toolbox::pipe::{
    darcy_weisbach_pa, flow_rate, flow_rate_from_velocity, flow_rate_with_options, flow_regime,
    friction_factor, friction_factor_with_options, pressure_drop, reynolds_number,
    velocity_from_flow_rate, FlowRateInput, FlowRegime, PipeCalcError, PressureDropInput,
    SolverOptions,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn laminar_matches_closed_form() {
    let f = friction_factor(1000.0, 0.0001, 0.05).expect("laminar");
    assert_eq!(f, 64.0 / 1000.0);
}

#[test]
fn laminar_ignores_roughness() {
    let smooth = friction_factor(1500.0, 0.0, 0.05).expect("smooth laminar");
    let rough = friction_factor(1500.0, 0.005, 0.05).expect("rough laminar");
    assert_eq!(smooth, rough);
}

#[test]
fn threshold_routes_to_turbulent() {
    assert_eq!(flow_regime(2300.0), FlowRegime::Turbulent);
    assert_eq!(flow_regime(2299.9999), FlowRegime::Laminar);

    // 경계 바로 아래는 닫힌형 그대로
    let below = friction_factor(2299.0, 0.0001, 0.1).expect("below threshold");
    assert_eq!(below, 64.0 / 2299.0);

    // 경계값은 난류 반복으로 들어가며 유한한 양수를 반환해야 한다
    let at = friction_factor(2300.0, 0.0001, 0.1).expect("at threshold");
    assert!(at.is_finite() && at > 0.0);
}

#[test]
fn turbulent_is_deterministic() {
    let a = friction_factor(75_000.0, 0.00015, 0.05).expect("first");
    let b = friction_factor(75_000.0, 0.00015, 0.05).expect("second");
    assert_eq!(a, b);
}

#[test]
fn single_iteration_matches_update_rule() {
    let options = SolverOptions {
        friction_iterations: 1,
        ..SolverOptions::default()
    };
    let actual =
        friction_factor_with_options(75_000.0, 0.00015, 0.05, &options).expect("one round");

    let relative_term = 0.00015 / (3.7 * 0.05);
    let f0: f64 = 0.02;
    let residual = -2.0 * (relative_term + 2.51 / (75_000.0 * f0.sqrt())).log10() - 1.0 / f0.sqrt();
    assert_eq!(actual, 1.0 / (residual * residual));
}

#[test]
fn iteration_count_is_observable() {
    let half = SolverOptions {
        friction_iterations: 50,
        ..SolverOptions::default()
    };
    let f50 = friction_factor_with_options(199_600.0, 0.0001, 0.1, &half).expect("50 rounds");
    let f100 = friction_factor(199_600.0, 0.0001, 0.1).expect("100 rounds");
    assert_close("f50", f50, 0.021_031, 1e-3);
    assert_close("f100", f100, 0.019_636, 1e-3);
    assert!((f50 - f100).abs() > 1e-4);
}

#[test]
fn zero_iterations_rejected() {
    let none = SolverOptions {
        friction_iterations: 0,
        inverse_iterations: 0,
    };
    assert!(matches!(
        friction_factor_with_options(10_000.0, 0.0, 0.1, &none),
        Err(PipeCalcError::InvalidInput(_))
    ));
    let input = FlowRateInput {
        length_m: 10.0,
        diameter_m: 0.1,
        roughness_m: 0.0001,
        density_kg_per_m3: 998.0,
        dynamic_viscosity_pa_s: 0.001,
        pressure_drop_pa: 1000.0,
    };
    assert!(matches!(
        flow_rate_with_options(input, &none),
        Err(PipeCalcError::InvalidInput(_))
    ));
}

#[test]
fn scenario_water_50mm_pipe() {
    // L=10 m, D=0.05 m, ε=1.5e-4 m, 물(ρ=1000, μ=0.001), v=1.5 m/s
    let input = PressureDropInput {
        length_m: 10.0,
        diameter_m: 0.05,
        roughness_m: 0.00015,
        density_kg_per_m3: 1000.0,
        dynamic_viscosity_pa_s: 0.001,
        velocity_m_per_s: 1.5,
    };
    let res = pressure_drop(input).expect("scenario 50mm");
    assert_close("re", res.reynolds_number, 75_000.0, 1e-12);
    assert!(res.friction_factor > 0.015 && res.friction_factor < 0.03);
    assert_close("f", res.friction_factor, 0.026_167, 1e-3);
    assert_close("dp", res.pressure_drop_pa, 5_887.5, 1e-3);
    let recomputed = darcy_weisbach_pa(10.0, 0.05, 1000.0, 1.5, res.friction_factor);
    assert_close("darcy consistency", res.pressure_drop_pa, recomputed, 1e-12);
}

#[test]
fn scenario_water_100mm_pipe() {
    // L=10 m, D=0.1 m, ε=1e-4 m, 물(ρ=998, μ=0.001), v=2.0 m/s
    let input = PressureDropInput {
        length_m: 10.0,
        diameter_m: 0.1,
        roughness_m: 0.0001,
        density_kg_per_m3: 998.0,
        dynamic_viscosity_pa_s: 0.001,
        velocity_m_per_s: 2.0,
    };
    let res = pressure_drop(input).expect("scenario 100mm");
    assert_close("re", res.reynolds_number, 199_600.0, 1e-12);
    assert!(res.friction_factor > 0.015 && res.friction_factor < 0.03);
    assert_close("f", res.friction_factor, 0.019_636, 1e-3);
    assert_close("dp", res.pressure_drop_pa, 3_919.4, 1e-3);
}

#[test]
fn round_trip_recovers_turbulent_velocity() {
    let forward = pressure_drop(PressureDropInput {
        length_m: 10.0,
        diameter_m: 0.1,
        roughness_m: 0.0001,
        density_kg_per_m3: 998.0,
        dynamic_viscosity_pa_s: 0.001,
        velocity_m_per_s: 2.0,
    })
    .expect("forward");

    let inverse = flow_rate(FlowRateInput {
        length_m: 10.0,
        diameter_m: 0.1,
        roughness_m: 0.0001,
        density_kg_per_m3: 998.0,
        dynamic_viscosity_pa_s: 0.001,
        pressure_drop_pa: forward.pressure_drop_pa,
    })
    .expect("inverse");

    let rel_err = (inverse.velocity_m_per_s - 2.0).abs() / 2.0;
    assert!(rel_err < 0.05, "velocity rel err {rel_err}");
    assert_close(
        "q",
        inverse.flow_rate_m3_per_s,
        flow_rate_from_velocity(inverse.velocity_m_per_s, 0.1),
        1e-12,
    );
    assert_eq!(flow_regime(inverse.reynolds_number), FlowRegime::Turbulent);
}

#[test]
fn round_trip_recovers_laminar_velocity() {
    // 고점도 오일, Re=45 층류
    let forward = pressure_drop(PressureDropInput {
        length_m: 2.0,
        diameter_m: 0.05,
        roughness_m: 0.0,
        density_kg_per_m3: 900.0,
        dynamic_viscosity_pa_s: 0.5,
        velocity_m_per_s: 0.5,
    })
    .expect("laminar forward");
    assert_eq!(forward.reynolds_number, 45.0);
    assert_eq!(forward.friction_factor, 64.0 / 45.0);

    let inverse = flow_rate(FlowRateInput {
        length_m: 2.0,
        diameter_m: 0.05,
        roughness_m: 0.0,
        density_kg_per_m3: 900.0,
        dynamic_viscosity_pa_s: 0.5,
        pressure_drop_pa: forward.pressure_drop_pa,
    })
    .expect("laminar inverse");
    assert_close("v", inverse.velocity_m_per_s, 0.5, 1e-6);
}

#[test]
fn smooth_pipe_turbulent_is_valid() {
    let f = friction_factor(10_000.0, 0.0, 0.1).expect("smooth turbulent");
    assert!(f.is_finite() && f > 0.0);
}

#[test]
fn geometry_conversions_are_inverse() {
    let v = 2.37;
    let d = 0.08;
    let q = flow_rate_from_velocity(v, d);
    assert_close("v roundtrip", velocity_from_flow_rate(q, d), v, 1e-12);
    // 면적 기준 직접 환산 확인
    let area = std::f64::consts::PI * d * d / 4.0;
    assert_close("q", q, v * area, 1e-12);
}

#[test]
fn reynolds_number_definition() {
    let re = reynolds_number(998.0, 2.0, 0.1, 0.001);
    assert_eq!(re, 998.0 * 2.0 * 0.1 / 0.001);
}

#[test]
fn invalid_inputs_fail_fast() {
    let valid = PressureDropInput {
        length_m: 10.0,
        diameter_m: 0.1,
        roughness_m: 0.0001,
        density_kg_per_m3: 998.0,
        dynamic_viscosity_pa_s: 0.001,
        velocity_m_per_s: 2.0,
    };

    let zero_viscosity = PressureDropInput {
        dynamic_viscosity_pa_s: 0.0,
        ..valid.clone()
    };
    assert!(matches!(
        pressure_drop(zero_viscosity),
        Err(PipeCalcError::InvalidInput(_))
    ));

    let zero_diameter = PressureDropInput {
        diameter_m: 0.0,
        ..valid.clone()
    };
    assert!(matches!(
        pressure_drop(zero_diameter),
        Err(PipeCalcError::InvalidInput(_))
    ));

    let negative_density = PressureDropInput {
        density_kg_per_m3: -1.0,
        ..valid.clone()
    };
    assert!(matches!(
        pressure_drop(negative_density),
        Err(PipeCalcError::InvalidInput(_))
    ));

    let nan_velocity = PressureDropInput {
        velocity_m_per_s: f64::NAN,
        ..valid.clone()
    };
    assert!(matches!(
        pressure_drop(nan_velocity),
        Err(PipeCalcError::InvalidInput(_))
    ));

    let negative_roughness = PressureDropInput {
        roughness_m: -0.001,
        ..valid
    };
    assert!(matches!(
        pressure_drop(negative_roughness),
        Err(PipeCalcError::InvalidInput(_))
    ));
}

#[test]
fn inverse_rejects_nonpositive_target() {
    let base = FlowRateInput {
        length_m: 10.0,
        diameter_m: 0.1,
        roughness_m: 0.0001,
        density_kg_per_m3: 998.0,
        dynamic_viscosity_pa_s: 0.001,
        pressure_drop_pa: 0.0,
    };
    assert!(matches!(
        flow_rate(base.clone()),
        Err(PipeCalcError::InvalidInput(_))
    ));
    let negative = FlowRateInput {
        pressure_drop_pa: -500.0,
        ..base
    };
    assert!(matches!(
        flow_rate(negative),
        Err(PipeCalcError::InvalidInput(_))
    ));
}
