// src/vector/line_helpers.rs
// Miter limit conversions for the line expansion shader
// RELEVANT FILES: src/vector/line_shader.rs, src/config.rs

use std::f32::consts::PI;

use crate::error::{LineMeshError, LineMeshResult};

/// Default miter length limit, corresponds to a join angle of about 28.955°
pub const DEFAULT_MITER_LENGTH_LIMIT: f32 = 4.0;

/// Smallest join angle, in radians, drawn as a miter for a given miter length limit.
///
/// Miter length relative to the line width is `1/sin(θ/2)` for a join angle `θ`.
pub fn miter_length_to_angle(limit: f32) -> f32 {
    2.0 * (1.0 / limit).asin()
}

/// Convert a miter length limit to the cosine the shader compares join angles against.
///
/// The limit has to be finite and at least `1`.
pub fn line_miter_length_limit(context: &'static str, limit: f32) -> LineMeshResult<f32> {
    if !limit.is_finite() || limit < 1.0 {
        return Err(LineMeshError::InvalidMiterLimit {
            context,
            expected: "a finite value greater than or equal to 1",
            value: limit,
        });
    }
    Ok(miter_length_to_angle(limit).cos())
}

/// Convert a miter angle limit in radians to the cosine the shader compares against.
///
/// The angle has to be greater than 0 and at most π.
pub fn line_miter_angle_limit(context: &'static str, angle: f32) -> LineMeshResult<f32> {
    if !(angle > 0.0 && angle <= PI) {
        return Err(LineMeshError::InvalidMiterLimit {
            context,
            expected: "a value greater than 0° and less than or equal to 180°",
            value: angle.to_degrees(),
        });
    }
    Ok(angle.cos())
}
