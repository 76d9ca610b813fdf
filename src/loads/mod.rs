//! Load model: component self-weight, seismic inertia and soil pressure

mod lateral;
mod self_weight;

pub use lateral::{LateralLoad, LateralLoads, PressureRegime};
pub use self_weight::{seismic_inertia, self_weight, ComponentLoad};
