//! Interpolation helpers used when previewing a plan.

pub mod functions;

pub use functions::{bezier_ease_t, lerp_f32, DEFAULT_BEZIER_CTRL};
