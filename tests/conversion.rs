//! 단위 변환 회귀 테스트.
use pipe_flow_toolbox::conversion::{convert, ConversionError};
use pipe_flow_toolbox::quantity::QuantityKind;
use pipe_flow_toolbox::units::{convert_pressure, convert_volume_flow, PressureUnit, VolumeFlowUnit};

#[test]
fn bar_to_pascal() {
    let pa = convert(QuantityKind::Pressure, 1.0, "bar", "Pa").expect("bar->Pa");
    assert!((pa - 100_000.0).abs() < 1e-9);
}

#[test]
fn psi_to_pascal() {
    let pa = convert(QuantityKind::Pressure, 1.0, "psi", "Pa").expect("psi->Pa");
    assert!((pa - 6_894.757).abs() < 1e-3);
}

#[test]
fn water_column_to_pascal() {
    // 10 mH2O ≈ 98066.5 Pa (표준 중력)
    let pa = convert(QuantityKind::Pressure, 10.0, "mH2O", "Pa").expect("mH2O->Pa");
    assert!((pa - 98_066.5).abs() < 1e-6);
    let mm = convert(QuantityKind::Pressure, 98_066.5, "Pa", "mmH2O").expect("Pa->mmH2O");
    assert!((mm - 10_000.0).abs() < 1e-6);
}

#[test]
fn pressure_enum_roundtrip() {
    let bar = convert_pressure(101_325.0, PressureUnit::Pascal, PressureUnit::Bar);
    assert!((bar - 1.01325).abs() < 1e-9);
    let back = convert_pressure(bar, PressureUnit::Bar, PressureUnit::Pascal);
    assert!((back - 101_325.0).abs() < 1e-6);
}

#[test]
fn millimeter_to_inch() {
    let inch = convert(QuantityKind::Length, 25.4, "mm", "in").expect("mm->in");
    assert!((inch - 1.0).abs() < 1e-9);
}

#[test]
fn meter_per_second_to_kmh() {
    let kmh = convert(QuantityKind::Velocity, 1.0, "m/s", "km/h").expect("m/s->km/h");
    assert!((kmh - 3.6).abs() < 1e-9);
}

#[test]
fn centipoise_to_pascal_second() {
    let pas = convert(QuantityKind::Viscosity, 1.0, "cP", "Pa.s").expect("cP->Pa.s");
    assert!((pas - 0.001).abs() < 1e-12);
}

#[test]
fn gram_per_cm3_to_kg_per_m3() {
    let kg = convert(QuantityKind::Density, 1.0, "g/cm3", "kg/m3").expect("g/cm3->kg/m3");
    assert!((kg - 1000.0).abs() < 1e-9);
}

#[test]
fn cubic_meter_per_hour_to_base() {
    let m3s = convert(QuantityKind::VolumeFlow, 3600.0, "m3/h", "m3/s").expect("m3/h->m3/s");
    assert!((m3s - 1.0).abs() < 1e-9);
    let lpm = convert_volume_flow(
        1.0,
        VolumeFlowUnit::LiterPerMinute,
        VolumeFlowUnit::CubicMeterPerSecond,
    );
    assert!((lpm - 1.0 / 60_000.0).abs() < 1e-12);
}

#[test]
fn us_gallon_per_minute() {
    let m3s = convert(QuantityKind::VolumeFlow, 1.0, "gpm", "m3/s").expect("gpm->m3/s");
    assert!((m3s - 6.309_02e-5).abs() < 1e-9);
}

#[test]
fn unknown_unit_is_rejected() {
    let err = convert(QuantityKind::Pressure, 1.0, "furlong", "Pa");
    assert!(matches!(err, Err(ConversionError::UnknownUnit(_))));
    let err = convert(QuantityKind::Length, 1.0, "m", "cubit");
    assert!(matches!(err, Err(ConversionError::UnknownUnit(_))));
}

#[test]
fn unit_names_are_case_insensitive() {
    let pa = convert(QuantityKind::Pressure, 2.0, "BAR", "pa").expect("BAR->pa");
    assert!((pa - 200_000.0).abs() < 1e-9);
}
