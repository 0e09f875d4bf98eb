//! 유체/재질 참고 테이블 회귀 테스트.
use pipe_flow_toolbox::fluid_db;
use pipe_flow_toolbox::material_db;

#[test]
fn water_at_table_point() {
    let props = fluid_db::properties_at("water", 20.0).expect("water 20C");
    assert!(!props.clamped);
    assert!((props.density_kg_per_m3 - 998.21).abs() < 1e-6);
    assert!((props.viscosity_pa_s - 1.002e-3).abs() < 1e-9);
}

#[test]
fn water_interpolates_between_points() {
    // 25°C는 20°C와 30°C의 중간값
    let props = fluid_db::properties_at("water", 25.0).expect("water 25C");
    assert!(!props.clamped);
    let density_mid = (998.21 + 995.65) / 2.0;
    let viscosity_mid = (1.002e-3 + 0.798e-3) / 2.0;
    assert!((props.density_kg_per_m3 - density_mid).abs() < 1e-9);
    assert!((props.viscosity_pa_s - viscosity_mid).abs() < 1e-12);
}

#[test]
fn out_of_range_clamps_to_edge() {
    let hot = fluid_db::properties_at("water", 150.0).expect("water 150C");
    assert!(hot.clamped);
    assert!((hot.density_kg_per_m3 - 958.35).abs() < 1e-6);

    let cold = fluid_db::properties_at("air", -40.0).expect("air -40C");
    assert!(cold.clamped);
    assert!((cold.density_kg_per_m3 - 1.293).abs() < 1e-9);
}

#[test]
fn fluid_lookup_is_case_insensitive() {
    assert!(fluid_db::find_fluid("WATER").is_some());
    assert!(fluid_db::find_fluid("Seawater").is_some());
    assert!(fluid_db::find_fluid("물").is_some());
    assert!(fluid_db::find_fluid("mercury").is_none());
}

#[test]
fn material_roughness_lookup() {
    let steel = material_db::find_material("steel").expect("steel");
    assert!((steel.roughness_m - 4.5e-5).abs() < 1e-12);

    let cast_iron = material_db::find_material("CAST-IRON").expect("cast iron");
    assert!(cast_iron.roughness_m > steel.roughness_m);

    assert!(material_db::find_material("unobtainium").is_none());
}

#[test]
fn material_table_is_nonempty_and_nonnegative() {
    let materials = material_db::materials();
    assert!(!materials.is_empty());
    for m in materials {
        assert!(m.roughness_m >= 0.0, "{} roughness", m.code);
    }
}
