use serde::{Deserialize, Serialize};

use crate::bounce::BounceBack;
use crate::config::ViewportConfig;
use crate::models::{Size, Vec2};

/// Native size of the background map images.
pub const IMAGE_WIDTH: f64 = 3840.0;
pub const IMAGE_HEIGHT: f64 = 2160.0;

/// Read-only render projection of the viewport: the uniform scale plus the
/// content group's translate in absolute pixels. The shell applies this to
/// the canvas and draws; it never mutates viewport state through it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Scene model for the map canvas: the stage (the rendering surface in
/// pixel space), the pannable content group, and the background image the
/// group contains.
///
/// Plain state updated by gesture handlers and `tick`; no live node handles.
/// Before the first layout the stage has zero size and every gesture handler
/// is a no-op.
#[derive(Debug, Clone)]
pub struct Viewport {
    pub(crate) stage: Size,
    pub(crate) scale: f64,
    pub(crate) group: Vec2,
    pub(crate) image: Size,
    pub(crate) config: ViewportConfig,
    pub(crate) bounce: Option<BounceBack>,
}

impl Viewport {
    pub fn new(image: Size, config: ViewportConfig) -> Self {
        Viewport {
            stage: Size::ZERO,
            scale: 1.0,
            group: Vec2::ZERO,
            image,
            config,
            bounce: None,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Content-group offset in relative (content) units.
    pub fn group_position(&self) -> Vec2 {
        self.group
    }

    pub fn stage_size(&self) -> Size {
        self.stage
    }

    pub fn image_size(&self) -> Size {
        self.image
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn is_bouncing(&self) -> bool {
        self.bounce.is_some()
    }

    pub(crate) fn ready(&self) -> bool {
        self.stage.width > 0.0 && self.stage.height > 0.0
    }

    /// Resize the stage to fill its container and rescale so the image fits
    /// the container width. Both axes share the width-fit scale factor; the
    /// image may overflow the container height and is panned into view.
    pub fn fit_to_container(&mut self, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 || self.image.width <= 0.0 {
            return;
        }
        self.stage = Size::new(width, height);
        self.scale = (width / self.image.width).clamp(self.config.min_scale, self.config.max_scale);
    }

    /// Re-fit the stage and move the content group back to the origin,
    /// dropping any in-flight bounce-back.
    pub fn restore(&mut self) {
        if !self.ready() {
            return;
        }
        self.scale =
            (self.stage.width / self.image.width).clamp(self.config.min_scale, self.config.max_scale);
        self.group = Vec2::ZERO;
        self.bounce = None;
        tracing::debug!(scale = self.scale, "Restored default position and scale");
    }

    /// Convert a pointer position on the stage to content-local coordinates.
    pub fn pointer_to_content(&self, pointer: Vec2) -> Vec2 {
        Vec2::new(
            pointer.x / self.scale - self.group.x,
            pointer.y / self.scale - self.group.y,
        )
    }

    /// Current render instruction for the shell.
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            scale: self.scale,
            offset_x: self.group.x * self.scale,
            offset_y: self.group.y * self.scale,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(
            Size::new(IMAGE_WIDTH, IMAGE_HEIGHT),
            ViewportConfig::default(),
        )
    }
}
