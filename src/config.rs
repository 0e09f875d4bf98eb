use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::pipe::SolverOptions;
use crate::units::*;

/// 각 물리량별 표시 단위 설정을 담는다. 내부 계산은 항상 SI로 한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub pressure: PressureUnit,
    pub length: LengthUnit,
    pub velocity: VelocityUnit,
    pub viscosity: ViscosityUnit,
    pub density: DensityUnit,
    pub volume_flow: VolumeFlowUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            pressure: PressureUnit::Pascal,
            length: LengthUnit::Meter,
            velocity: VelocityUnit::MeterPerSecond,
            viscosity: ViscosityUnit::PascalSecond,
            density: DensityUnit::KilogramPerCubicMeter,
            volume_flow: VolumeFlowUnit::CubicMeterPerSecond,
        }
    }
}

/// 고정 횟수 반복 계산의 설정값.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Colebrook-White 마찰계수 반복 횟수
    pub friction_iterations: u32,
    /// 유량 역산 반복 횟수
    pub inverse_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            friction_iterations: 100,
            inverse_iterations: 100,
        }
    }
}

impl SolverConfig {
    /// 계산 모듈에 넘길 옵션으로 변환한다.
    pub fn options(&self) -> SolverOptions {
        SolverOptions {
            friction_iterations: self.friction_iterations,
            inverse_iterations: self.inverse_iterations,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드(ko/en). 없으면 시스템 로케일을 따른다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub default_units: DefaultUnits,
    pub solver: SolverConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            default_units: DefaultUnits::default(),
            solver: SolverConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
