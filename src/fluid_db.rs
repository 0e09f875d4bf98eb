/// 자주 쓰는 유체의 밀도/점도 테이블과 선형 보간을 제공한다.
/// 값은 1기압 기준 참고용이며 정밀 해석에는 실측값을 사용해야 한다.

#[derive(Debug, Clone, Copy)]
pub struct FluidPoint {
    pub temp_c: f64,
    pub density_kg_per_m3: f64,
    pub viscosity_pa_s: f64,
}

impl FluidPoint {
    pub const fn new(temp_c: f64, density_kg_per_m3: f64, viscosity_pa_s: f64) -> Self {
        Self {
            temp_c,
            density_kg_per_m3,
            viscosity_pa_s,
        }
    }
}

#[derive(Debug)]
pub struct FluidData {
    pub code: &'static str,
    pub name: &'static str,
    pub notes: &'static str,
    pub points: &'static [FluidPoint],
}

#[derive(Debug)]
pub struct FluidProperties {
    pub density_kg_per_m3: f64,
    pub viscosity_pa_s: f64,
    /// true면 테이블 범위 밖이라 가장자리 값으로 클램프됨을 의미한다.
    pub clamped: bool,
}

pub fn fluids() -> &'static [FluidData] {
    FLUIDS
}

pub fn find_fluid(code: &str) -> Option<&'static FluidData> {
    FLUIDS
        .iter()
        .find(|f| f.code.eq_ignore_ascii_case(code) || f.name.eq_ignore_ascii_case(code))
}

/// 지정한 온도에서 유체 물성을 보간한다.
pub fn properties_at(code: &str, temp_c: f64) -> Option<FluidProperties> {
    let fluid = find_fluid(code)?;
    interpolate(fluid.points, temp_c)
}

fn interpolate(points: &[FluidPoint], temp_c: f64) -> Option<FluidProperties> {
    if points.is_empty() {
        return None;
    }
    if temp_c <= points[0].temp_c {
        let p = points[0];
        return Some(FluidProperties {
            density_kg_per_m3: p.density_kg_per_m3,
            viscosity_pa_s: p.viscosity_pa_s,
            clamped: temp_c < p.temp_c,
        });
    }
    if temp_c >= points[points.len() - 1].temp_c {
        let p = points[points.len() - 1];
        return Some(FluidProperties {
            density_kg_per_m3: p.density_kg_per_m3,
            viscosity_pa_s: p.viscosity_pa_s,
            clamped: temp_c > p.temp_c,
        });
    }
    for pair in points.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if temp_c >= lo.temp_c && temp_c <= hi.temp_c {
            let ratio = (temp_c - lo.temp_c) / (hi.temp_c - lo.temp_c);
            return Some(FluidProperties {
                density_kg_per_m3: lo.density_kg_per_m3
                    + ratio * (hi.density_kg_per_m3 - lo.density_kg_per_m3),
                viscosity_pa_s: lo.viscosity_pa_s + ratio * (hi.viscosity_pa_s - lo.viscosity_pa_s),
                clamped: false,
            });
        }
    }
    None
}

static FLUIDS: &[FluidData] = &[
    FluidData {
        code: "water",
        name: "물",
        notes: "포화 액체 기준 0~100°C",
        points: &[
            FluidPoint::new(0.0, 999.84, 1.792e-3),
            FluidPoint::new(10.0, 999.70, 1.307e-3),
            FluidPoint::new(20.0, 998.21, 1.002e-3),
            FluidPoint::new(30.0, 995.65, 0.798e-3),
            FluidPoint::new(40.0, 992.22, 0.653e-3),
            FluidPoint::new(50.0, 988.05, 0.547e-3),
            FluidPoint::new(60.0, 983.20, 0.467e-3),
            FluidPoint::new(80.0, 971.79, 0.355e-3),
            FluidPoint::new(100.0, 958.35, 0.282e-3),
        ],
    },
    FluidData {
        code: "air",
        name: "공기",
        notes: "건조 공기, 1기압",
        points: &[
            FluidPoint::new(0.0, 1.293, 1.716e-5),
            FluidPoint::new(20.0, 1.204, 1.813e-5),
            FluidPoint::new(40.0, 1.127, 1.907e-5),
            FluidPoint::new(60.0, 1.060, 1.999e-5),
            FluidPoint::new(80.0, 1.000, 2.088e-5),
            FluidPoint::new(100.0, 0.946, 2.174e-5),
        ],
    },
    FluidData {
        code: "seawater",
        name: "해수",
        notes: "염분 3.5% 기준",
        points: &[
            FluidPoint::new(0.0, 1028.1, 1.88e-3),
            FluidPoint::new(10.0, 1026.9, 1.40e-3),
            FluidPoint::new(20.0, 1024.8, 1.08e-3),
            FluidPoint::new(30.0, 1021.7, 0.87e-3),
        ],
    },
];
