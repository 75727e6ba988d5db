use crate::models::Vec2;

/// Convert a content-local (relative) position to stage (absolute) pixels at
/// the given scale. Inverse of [`to_relative`] for any finite scale > 0.
pub fn to_absolute(relative: Vec2, scale: f64) -> Vec2 {
    Vec2::new(relative.x * scale, relative.y * scale)
}

/// Convert a stage (absolute) position to content-local (relative) units at
/// the given scale. Inverse of [`to_absolute`] for any finite scale > 0.
pub fn to_relative(absolute: Vec2, scale: f64) -> Vec2 {
    Vec2::new(absolute.x / scale, absolute.y / scale)
}
