//! 단위 정의 및 변환 모듈 모음.

pub mod density;
pub mod length;
pub mod pressure;
pub mod velocity;
pub mod viscosity;
pub mod volume_flow;

pub use density::{convert_density, DensityUnit};
pub use length::{convert_length, LengthUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
pub use volume_flow::{convert_volume_flow, VolumeFlowUnit};
