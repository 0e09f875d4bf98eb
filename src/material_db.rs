/// 배관 재질별 절대 거칠기 참고 테이블.
/// 신관 기준 대표값이며 노후 배관은 수 배 이상 커질 수 있다.

#[derive(Debug)]
pub struct PipeMaterialData {
    pub code: &'static str,
    pub name: &'static str,
    /// 절대 거칠기 ε [m]
    pub roughness_m: f64,
    pub notes: &'static str,
}

pub fn materials() -> &'static [PipeMaterialData] {
    MATERIALS
}

pub fn find_material(code: &str) -> Option<&'static PipeMaterialData> {
    MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

static MATERIALS: &[PipeMaterialData] = &[
    PipeMaterialData {
        code: "drawn",
        name: "인발관",
        roughness_m: 1.5e-6,
        notes: "동관/황동관 포함",
    },
    PipeMaterialData {
        code: "pvc",
        name: "PVC",
        roughness_m: 1.5e-6,
        notes: "플라스틱 배관 전반",
    },
    PipeMaterialData {
        code: "steel",
        name: "탄소강",
        roughness_m: 4.5e-5,
        notes: "상용 강관 신관 기준",
    },
    PipeMaterialData {
        code: "galvanized",
        name: "아연도금강",
        roughness_m: 1.5e-4,
        notes: "",
    },
    PipeMaterialData {
        code: "cast-iron",
        name: "주철",
        roughness_m: 2.6e-4,
        notes: "",
    },
    PipeMaterialData {
        code: "concrete",
        name: "콘크리트",
        roughness_m: 1.5e-3,
        notes: "마감 상태에 따라 0.3~3mm",
    },
];
