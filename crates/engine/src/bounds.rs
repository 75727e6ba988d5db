use crate::models::{Size, Vec2};

/// Clamp an absolute content-group position so the image keeps overlapping
/// the allowed stage window.
///
/// The window per axis is `[fraction * stage, (1 - fraction) * stage]`. The
/// image's leading (top/left) edge may not pass the window max and its
/// trailing (bottom/right) edge may not pass the window min, with the image
/// span taken at the current scale. Idempotent; degenerates gracefully when
/// the image at scale is smaller than the window.
pub fn bounded_position(
    pos: Vec2,
    stage: Size,
    image: Size,
    scale: f64,
    boundary_fraction: f64,
) -> Vec2 {
    let min_x = boundary_fraction * stage.width;
    let min_y = boundary_fraction * stage.height;
    let max_x = (1.0 - boundary_fraction) * stage.width;
    let max_y = (1.0 - boundary_fraction) * stage.height;

    let image_w = image.width * scale;
    let image_h = image.height * scale;

    let x = (pos.x.min(max_x) + image_w).max(min_x) - image_w;
    let y = (pos.y.min(max_y) + image_h).max(min_y) - image_h;

    Vec2::new(x, y)
}
