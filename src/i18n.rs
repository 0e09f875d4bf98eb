use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_PRESSURE_DROP: &str = "main_menu.pressure_drop";
    pub const MAIN_MENU_FLOW_RATE: &str = "main_menu.flow_rate";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_REFERENCE: &str = "main_menu.reference";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PRESSURE_DROP_HEADING: &str = "pressure_drop.heading";
    pub const FLOW_RATE_HEADING: &str = "flow_rate.heading";
    pub const PROMPT_LENGTH: &str = "prompt.length";
    pub const PROMPT_DIAMETER: &str = "prompt.diameter";
    pub const PROMPT_ROUGHNESS: &str = "prompt.roughness";
    pub const PROMPT_DENSITY: &str = "prompt.density";
    pub const PROMPT_VISCOSITY: &str = "prompt.viscosity";
    pub const PROMPT_VELOCITY: &str = "prompt.velocity";
    pub const PROMPT_TARGET_DP: &str = "prompt.target_dp";
    pub const PROMPT_FLUID_CODE: &str = "prompt.fluid_code";
    pub const PROMPT_FLUID_TEMP: &str = "prompt.fluid_temp";
    pub const FLUID_UNKNOWN: &str = "fluid.unknown";
    pub const FLUID_CLAMPED_NOTE: &str = "fluid.clamped_note";
    pub const FLUID_PROPS_LABEL: &str = "fluid.props_label";

    pub const RESULT_REYNOLDS: &str = "result.reynolds";
    pub const RESULT_FRICTION: &str = "result.friction";
    pub const RESULT_PRESSURE_DROP: &str = "result.pressure_drop";
    pub const RESULT_FLOW_RATE: &str = "result.flow_rate";
    pub const RESULT_VELOCITY: &str = "result.velocity";
    pub const REGIME_LABEL: &str = "result.regime";
    pub const REGIME_LAMINAR: &str = "result.regime_laminar";
    pub const REGIME_TURBULENT: &str = "result.regime_turbulent";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const REFERENCE_HEADING: &str = "reference.heading";
    pub const REFERENCE_OPTIONS: &str = "reference.options";
    pub const REFERENCE_FLUID_HEADING: &str = "reference.fluid_heading";
    pub const REFERENCE_MATERIAL_HEADING: &str = "reference.material_heading";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_ITERATIONS: &str = "settings.prompt_iterations";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_INVALID_ITERATIONS: &str = "settings.invalid_iterations";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const PRESSURE_UNIT_OPTIONS: &str = "unit.pressure_options";
    pub const FLOW_UNIT_OPTIONS: &str = "unit.flow_options";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Pipe Flow Toolbox ===",
        MAIN_MENU_PRESSURE_DROP => "1) 압력강하 계산 (유속 → ΔP)",
        MAIN_MENU_FLOW_RATE => "2) 유량 역산 (ΔP → 유량)",
        MAIN_MENU_UNIT_CONVERSION => "3) 단위 변환기",
        MAIN_MENU_REFERENCE => "4) 참고 자료 (유체/거칠기)",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        PROMPT_SELECT => "선택: ",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PRESSURE_DROP_HEADING => "\n-- 압력강하 계산 --",
        FLOW_RATE_HEADING => "\n-- 유량 역산 --",
        PROMPT_LENGTH => "배관 길이 [m]: ",
        PROMPT_DIAMETER => "배관 내경 [m]: ",
        PROMPT_ROUGHNESS => "거칠기 ε [m] (탄소강 배관 약 0.000045): ",
        PROMPT_DENSITY => "유체 밀도 [kg/m3] (0 입력 시 유체 프리셋 사용): ",
        PROMPT_VISCOSITY => "동점도 [Pa·s] (물 20°C 약 0.001): ",
        PROMPT_VELOCITY => "유속 [m/s]: ",
        PROMPT_TARGET_DP => "목표 압력강하 값: ",
        PROMPT_FLUID_CODE => "유체 코드(water/air/seawater): ",
        PROMPT_FLUID_TEMP => "유체 온도 [°C]: ",
        FLUID_UNKNOWN => "등록되지 않은 유체 코드입니다.",
        FLUID_CLAMPED_NOTE => "주의: 온도가 테이블 범위를 벗어나 가장자리 값을 사용했습니다.",
        FLUID_PROPS_LABEL => "적용 물성:",
        RESULT_REYNOLDS => "레이놀즈수:",
        RESULT_FRICTION => "마찰계수:",
        RESULT_PRESSURE_DROP => "압력강하:",
        RESULT_FLOW_RATE => "체적 유량:",
        RESULT_VELOCITY => "유속:",
        REGIME_LABEL => "유동 영역:",
        REGIME_LAMINAR => "층류",
        REGIME_TURBULENT => "난류",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 압력  2) 길이  3) 속도  4) 점도  5) 밀도  6) 유량",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: Pa, mm, cP): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: bar, in, Pa.s): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        REFERENCE_HEADING => "\n-- 참고 자료 --",
        REFERENCE_OPTIONS => "1) 유체 물성  2) 배관 거칠기",
        REFERENCE_FLUID_HEADING => "유체 물성 (온도 보간):",
        REFERENCE_MATERIAL_HEADING => "배관 재질별 절대 거칠기 [m]:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => {
            "1) 마찰계수 반복 횟수  2) 역산 반복 횟수  3) 압력 표시 단위  4) 유량 표시 단위"
        }
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_ITERATIONS => "반복 횟수(1 이상): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_INVALID_ITERATIONS => "1 이상의 정수를 입력하세요.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        PRESSURE_UNIT_OPTIONS => "압력 단위: 1=Pa 2=kPa 3=bar 4=psi 5=mH2O",
        FLOW_UNIT_OPTIONS => "유량 단위: 1=m3/s 2=m3/h 3=L/s 4=L/min 5=gpm",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Pipe Flow Toolbox ===",
        MAIN_MENU_PRESSURE_DROP => "1) Pressure drop (velocity → ΔP)",
        MAIN_MENU_FLOW_RATE => "2) Flow rate (ΔP → flow)",
        MAIN_MENU_UNIT_CONVERSION => "3) Unit Converter",
        MAIN_MENU_REFERENCE => "4) Reference data (fluids/roughness)",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        PROMPT_SELECT => "Select: ",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PRESSURE_DROP_HEADING => "\n-- Pressure Drop --",
        FLOW_RATE_HEADING => "\n-- Flow Rate --",
        PROMPT_LENGTH => "Pipe length [m]: ",
        PROMPT_DIAMETER => "Pipe inner diameter [m]: ",
        PROMPT_ROUGHNESS => "Roughness ε [m] (carbon steel ~0.000045): ",
        PROMPT_DENSITY => "Fluid density [kg/m3] (0 = use fluid preset): ",
        PROMPT_VISCOSITY => "Dynamic viscosity [Pa·s] (water at 20°C ~0.001): ",
        PROMPT_VELOCITY => "Velocity [m/s]: ",
        PROMPT_TARGET_DP => "Target pressure drop value: ",
        PROMPT_FLUID_CODE => "Fluid code (water/air/seawater): ",
        PROMPT_FLUID_TEMP => "Fluid temperature [°C]: ",
        FLUID_UNKNOWN => "Unknown fluid code.",
        FLUID_CLAMPED_NOTE => "Note: temperature outside table range; edge values used.",
        FLUID_PROPS_LABEL => "Applied properties:",
        RESULT_REYNOLDS => "Reynolds number:",
        RESULT_FRICTION => "Friction factor:",
        RESULT_PRESSURE_DROP => "Pressure drop:",
        RESULT_FLOW_RATE => "Flow rate:",
        RESULT_VELOCITY => "Velocity:",
        REGIME_LABEL => "Flow regime:",
        REGIME_LAMINAR => "laminar",
        REGIME_TURBULENT => "turbulent",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Pressure  2) Length  3) Velocity  4) Viscosity  5) Density  6) Flow",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: Pa, mm, cP): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: bar, in, Pa.s): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        REFERENCE_HEADING => "\n-- Reference Data --",
        REFERENCE_OPTIONS => "1) Fluid properties  2) Pipe roughness",
        REFERENCE_FLUID_HEADING => "Fluid properties (interpolated by temperature):",
        REFERENCE_MATERIAL_HEADING => "Absolute roughness by pipe material [m]:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => {
            "1) Friction iterations  2) Inverse iterations  3) Pressure display unit  4) Flow display unit"
        }
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_ITERATIONS => "Iteration count (min 1): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_INVALID_ITERATIONS => "Please enter an integer of at least 1.",
        SETTINGS_SAVED => "Settings saved.",
        PRESSURE_UNIT_OPTIONS => "Pressure units: 1=Pa 2=kPa 3=bar 4=psi 5=mH2O",
        FLOW_UNIT_OPTIONS => "Flow units: 1=m3/s 2=m3/h 3=L/s 4=L/min 5=gpm",
        _ => return None,
    })
}
