//! Numeric constants.

pub mod f32;
pub mod f64;
