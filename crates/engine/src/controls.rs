use crate::bounce::BounceBack;
use crate::bounds::bounded_position;
use crate::coords::{to_absolute, to_relative};
use crate::models::Vec2;
use crate::viewport::Viewport;

/// Tolerance for deciding whether the boundary clamp moved a position.
/// Comparison happens on resolved relative coordinates, never by identity.
const POSITION_EPSILON: f64 = 1e-6;

/// Pan axis selected by a wheel gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Modifier keys held during a wheel gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

/// A wheel event as normalized by the UI shell: pixel-like deltas plus the
/// modifier keys held when it fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
    pub modifiers: Modifiers,
}

fn approx_eq(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < POSITION_EPSILON && (a.y - b.y).abs() < POSITION_EPSILON
}

/// Content-space point sitting under `pointer` for a group at `group` offset.
pub fn content_point_under(pointer: Vec2, scale: f64, group: Vec2) -> Vec2 {
    Vec2::new(pointer.x / scale - group.x, pointer.y / scale - group.y)
}

/// Group offset that puts `content_point` back under `pointer` at `scale`.
pub fn offset_keeping_point_under(pointer: Vec2, scale: f64, content_point: Vec2) -> Vec2 {
    Vec2::new(
        pointer.x / scale - content_point.x,
        pointer.y / scale - content_point.y,
    )
}

/// Shift applied by one directional wheel tick. Alt swaps the axis, ctrl
/// inverts the direction; a positive delta moves content toward the origin.
pub fn pan_shift(axis: Axis, delta: f64, modifiers: Modifiers, step: f64) -> Vec2 {
    let mut move_x = axis == Axis::X;
    if modifiers.alt {
        move_x = !move_x;
    }
    let mut direction = if delta > 0.0 { -1.0 } else { 1.0 };
    if modifiers.ctrl {
        direction = -direction;
    }
    if move_x {
        Vec2::new(direction * step, 0.0)
    } else {
        Vec2::new(0.0, direction * step)
    }
}

impl Viewport {
    /// Route a wheel event: a horizontal delta pans along X, meta plus a
    /// vertical delta pans along Y, a plain vertical delta zooms about the
    /// pointer. Zooming without a pointer position is a no-op.
    pub fn handle_wheel(&mut self, input: WheelInput, pointer: Option<Vec2>) {
        if !self.ready() {
            return;
        }
        if input.delta_x != 0.0 {
            self.wheel_pan(Axis::X, input.delta_x, input.modifiers);
        } else if input.modifiers.meta {
            self.wheel_pan(Axis::Y, input.delta_y, input.modifiers);
        } else {
            let Some(pointer) = pointer else { return };
            self.zoom_at(pointer, input.delta_y, input.modifiers);
        }
    }

    /// Shift the content group by one pan step along the (modifier-resolved)
    /// axis, bouncing back if the step lands outside the boundary.
    pub fn wheel_pan(&mut self, axis: Axis, delta: f64, modifiers: Modifiers) {
        if !self.ready() {
            return;
        }
        let shift = pan_shift(axis, delta, modifiers, self.config.pan_step);
        let tentative = Vec2::new(self.group.x + shift.x, self.group.y + shift.y);
        self.move_group_to(tentative);
    }

    /// Zoom by one multiplicative step about the pointer: the content point
    /// under the pointer stays put across the scale change. Ctrl or alt
    /// inverts the zoom direction. The recomputed offset goes through the
    /// boundary clamp and bounces back rather than snapping when rejected.
    pub fn zoom_at(&mut self, pointer: Vec2, delta_y: f64, modifiers: Modifiers) {
        if !self.ready() {
            return;
        }
        let old_scale = self.scale;
        let mut direction = if delta_y > 0.0 { -1.0 } else { 1.0 };
        if modifiers.ctrl || modifiers.alt {
            direction = -direction;
        }
        let new_scale = if direction > 0.0 {
            old_scale * self.config.zoom_step
        } else {
            old_scale / self.config.zoom_step
        };
        let new_scale = new_scale.clamp(self.config.min_scale, self.config.max_scale);
        if (new_scale - old_scale).abs() < 1e-9 {
            return;
        }

        let content_point = content_point_under(pointer, old_scale, self.group);
        self.scale = new_scale;
        let tentative = offset_keeping_point_under(pointer, new_scale, content_point);
        self.move_group_to(tentative);
    }

    /// Drag end for the content group: accept the dropped position, then
    /// bounce back if it violates the boundary.
    pub fn end_drag(&mut self, position: Vec2) {
        if !self.ready() {
            return;
        }
        self.move_group_to(position);
    }

    /// Advance the in-flight bounce-back by `dt` seconds. Returns true while
    /// the animation is still running.
    pub fn tick(&mut self, dt: f64) -> bool {
        let Some(bounce) = &mut self.bounce else {
            return false;
        };
        self.group = bounce.advance(dt);
        if bounce.is_done() {
            self.bounce = None;
            return false;
        }
        true
    }

    /// Move the group to a tentative relative position. If the boundary
    /// clamp rejects it, the group still lands on the tentative position and
    /// a bounce-back to the corrected one is scheduled; any previous bounce
    /// is dropped (last write wins).
    fn move_group_to(&mut self, tentative: Vec2) {
        self.bounce = None;
        self.group = tentative;

        let clamped = to_relative(
            bounded_position(
                to_absolute(tentative, self.scale),
                self.stage,
                self.image,
                self.scale,
                self.config.boundary_fraction,
            ),
            self.scale,
        );
        if !approx_eq(clamped, tentative) {
            tracing::debug!(
                x = clamped.x,
                y = clamped.y,
                "Position outside boundary, bouncing back"
            );
            self.bounce = Some(BounceBack::new(
                tentative,
                clamped,
                self.config.bounce_duration,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewportConfig;
    use crate::models::Size;

    fn viewport(stage: (f64, f64), image: (f64, f64), scale: f64) -> Viewport {
        let mut v = Viewport::new(Size::new(image.0, image.1), ViewportConfig::default());
        v.stage = Size::new(stage.0, stage.1);
        v.scale = scale;
        v
    }

    // --- pan_shift tests ---

    #[test]
    fn test_pan_shift_positive_delta_moves_negative() {
        let shift = pan_shift(Axis::X, 10.0, Modifiers::default(), 7.5);
        assert_eq!(shift, Vec2::new(-7.5, 0.0));
    }

    #[test]
    fn test_pan_shift_negative_delta_moves_positive() {
        let shift = pan_shift(Axis::Y, -3.0, Modifiers::default(), 7.5);
        assert_eq!(shift, Vec2::new(0.0, 7.5));
    }

    #[test]
    fn test_pan_shift_alt_swaps_axis() {
        let modifiers = Modifiers {
            alt: true,
            ..Default::default()
        };
        let shift = pan_shift(Axis::X, 10.0, modifiers, 7.5);
        assert_eq!(shift, Vec2::new(0.0, -7.5));
    }

    #[test]
    fn test_pan_shift_ctrl_inverts_direction() {
        let modifiers = Modifiers {
            ctrl: true,
            ..Default::default()
        };
        let shift = pan_shift(Axis::X, 10.0, modifiers, 7.5);
        assert_eq!(shift, Vec2::new(7.5, 0.0));
    }

    #[test]
    fn test_pan_shift_alt_and_ctrl_combine() {
        let modifiers = Modifiers {
            alt: true,
            ctrl: true,
            ..Default::default()
        };
        let shift = pan_shift(Axis::Y, 10.0, modifiers, 7.5);
        assert_eq!(shift, Vec2::new(7.5, 0.0));
    }

    // --- wheel pan tests ---

    #[test]
    fn test_wheel_pan_applies_step() {
        let mut v = viewport((1000.0, 1000.0), (2000.0, 2000.0), 1.0);
        v.group = Vec2::new(-500.0, -500.0);
        v.wheel_pan(Axis::X, 10.0, Modifiers::default());
        assert!((v.group.x - (-507.5)).abs() < 1e-9);
        assert!((v.group.y - (-500.0)).abs() < 1e-9);
        assert!(!v.is_bouncing());
    }

    #[test]
    fn test_wheel_pan_into_boundary_bounces() {
        let mut v = viewport((1000.0, 1000.0), (2000.0, 2000.0), 1.0);
        v.group = Vec2::new(-1795.0, 0.0);
        v.wheel_pan(Axis::X, 10.0, Modifiers::default());
        // Lands on the tentative position first, then bounces to the clamp
        assert!((v.group.x - (-1802.5)).abs() < 1e-9);
        assert!(v.is_bouncing());
        while v.tick(0.05) {}
        assert!((v.group.x - (-1800.0)).abs() < 1e-9);
        assert!(!v.is_bouncing());
    }

    // --- zoom tests ---

    #[test]
    fn test_zoom_in_scales_up_by_step() {
        let mut v = viewport((1000.0, 1000.0), (2000.0, 2000.0), 1.0);
        v.group = Vec2::new(-500.0, -500.0);
        v.zoom_at(Vec2::new(500.0, 500.0), -10.0, Modifiers::default());
        assert!((v.scale - 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_out_scales_down_by_step() {
        let mut v = viewport((1000.0, 1000.0), (2000.0, 2000.0), 1.0);
        v.group = Vec2::new(-500.0, -500.0);
        v.zoom_at(Vec2::new(500.0, 500.0), 10.0, Modifiers::default());
        assert!((v.scale - 1.0 / 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_keeps_content_point_under_pointer() {
        let mut v = viewport((1000.0, 1000.0), (2000.0, 2000.0), 1.0);
        v.group = Vec2::new(-500.0, -500.0);
        let pointer = Vec2::new(500.0, 500.0);
        let before = v.pointer_to_content(pointer);
        v.zoom_at(pointer, -10.0, Modifiers::default());
        let after = v.pointer_to_content(pointer);
        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_ctrl_inverts_direction() {
        let mut v = viewport((1000.0, 1000.0), (2000.0, 2000.0), 1.0);
        v.group = Vec2::new(-500.0, -500.0);
        let modifiers = Modifiers {
            ctrl: true,
            ..Default::default()
        };
        v.zoom_at(Vec2::new(500.0, 500.0), 10.0, modifiers);
        assert!((v.scale - 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_at_max_scale_is_noop() {
        let mut v = viewport((1000.0, 1000.0), (2000.0, 2000.0), 10.0);
        v.group = Vec2::new(-500.0, -500.0);
        v.zoom_at(Vec2::new(500.0, 500.0), -10.0, Modifiers::default());
        assert!((v.scale - 10.0).abs() < 1e-9);
        assert!((v.group.x - (-500.0)).abs() < 1e-9);
        assert!(!v.is_bouncing());
    }

    #[test]
    fn test_zoom_clamp_rejection_bounces() {
        // Image far smaller than the stage: a single zoom-out from the
        // lower clamp edge pushes the trailing edge out of the window
        let mut v = viewport((1000.0, 1000.0), (100.0, 100.0), 1.0);
        v.group = Vec2::new(100.0, 100.0);
        v.zoom_at(Vec2::ZERO, 10.0, Modifiers::default());
        assert!(v.is_bouncing());
        while v.tick(0.05) {}
        assert!((v.group.x - 110.0).abs() < 1e-9);
        assert!((v.group.y - 110.0).abs() < 1e-9);
    }

    // --- wheel routing tests ---

    #[test]
    fn test_handle_wheel_horizontal_delta_pans_x() {
        let mut v = viewport((1000.0, 1000.0), (2000.0, 2000.0), 1.0);
        v.group = Vec2::new(-500.0, -500.0);
        let input = WheelInput {
            delta_x: 4.0,
            delta_y: -120.0,
            modifiers: Modifiers::default(),
        };
        v.handle_wheel(input, Some(Vec2::new(500.0, 500.0)));
        assert!((v.group.x - (-507.5)).abs() < 1e-9);
        assert!((v.scale - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_handle_wheel_meta_pans_y() {
        let mut v = viewport((1000.0, 1000.0), (2000.0, 2000.0), 1.0);
        v.group = Vec2::new(-500.0, -500.0);
        let input = WheelInput {
            delta_x: 0.0,
            delta_y: 10.0,
            modifiers: Modifiers {
                meta: true,
                ..Default::default()
            },
        };
        v.handle_wheel(input, Some(Vec2::new(500.0, 500.0)));
        assert!((v.group.y - (-507.5)).abs() < 1e-9);
        assert!((v.scale - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_handle_wheel_zoom_without_pointer_is_noop() {
        let mut v = viewport((1000.0, 1000.0), (2000.0, 2000.0), 1.0);
        v.group = Vec2::new(-500.0, -500.0);
        let input = WheelInput {
            delta_x: 0.0,
            delta_y: -120.0,
            modifiers: Modifiers::default(),
        };
        v.handle_wheel(input, None);
        assert!((v.scale - 1.0).abs() < 1e-9);
        assert!((v.group.x - (-500.0)).abs() < 1e-9);
    }

    #[test]
    fn test_handle_wheel_before_layout_is_noop() {
        let mut v = Viewport::new(Size::new(2000.0, 2000.0), ViewportConfig::default());
        let input = WheelInput {
            delta_x: 4.0,
            delta_y: 0.0,
            modifiers: Modifiers::default(),
        };
        v.handle_wheel(input, Some(Vec2::ZERO));
        assert_eq!(v.group, Vec2::ZERO);
        assert!((v.scale - 1.0).abs() < 1e-9);
    }

    // --- drag end / bounce tests ---

    #[test]
    fn test_drag_end_within_bounds_settles() {
        let mut v = viewport((1000.0, 1000.0), (2000.0, 2000.0), 1.0);
        v.end_drag(Vec2::new(-300.0, -300.0));
        assert_eq!(v.group, Vec2::new(-300.0, -300.0));
        assert!(!v.is_bouncing());
    }

    #[test]
    fn test_drag_end_out_of_bounds_bounces_to_clamped() {
        // Stage 1000x1000, image 2000x2000 at scale 1, fraction 0.2:
        // x bottoms out at 200 - 2000 = -1800
        let mut v = viewport((1000.0, 1000.0), (2000.0, 2000.0), 1.0);
        v.end_drag(Vec2::new(-1900.0, 400.0));
        assert!((v.group.x - (-1900.0)).abs() < 1e-9);
        assert!(v.is_bouncing());

        assert!(v.tick(0.1));
        assert!((v.group.x - (-1850.0)).abs() < 1e-9);
        assert!((v.group.y - 400.0).abs() < 1e-9);

        assert!(!v.tick(0.1));
        assert_eq!(v.group.x, -1800.0);
        assert_eq!(v.group.y, 400.0);
        assert!(!v.is_bouncing());
    }

    #[test]
    fn test_drag_end_near_clamp_within_epsilon_settles() {
        let mut v = viewport((1000.0, 1000.0), (2000.0, 2000.0), 1.0);
        v.end_drag(Vec2::new(-1800.0000000001, 0.0));
        assert!(!v.is_bouncing());
    }

    #[test]
    fn test_new_gesture_overrides_in_flight_bounce() {
        let mut v = viewport((1000.0, 1000.0), (2000.0, 2000.0), 1.0);
        v.end_drag(Vec2::new(-1900.0, 0.0));
        assert!(v.is_bouncing());
        v.end_drag(Vec2::new(-300.0, 0.0));
        assert!(!v.is_bouncing());
        assert!((v.group.x - (-300.0)).abs() < 1e-9);
    }

    #[test]
    fn test_tick_without_bounce_is_noop() {
        let mut v = viewport((1000.0, 1000.0), (2000.0, 2000.0), 1.0);
        v.group = Vec2::new(-250.0, -250.0);
        assert!(!v.tick(0.1));
        assert_eq!(v.group, Vec2::new(-250.0, -250.0));
    }
}
