use serde::{Deserialize, Serialize};

/// Tuning knobs for the viewport: boundary fraction, zoom/pan steps, scale
/// bounds, and the bounce-back duration. The defaults reproduce the viewer's
/// original feel; a shell may deserialize overrides from its own config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewportConfig {
    /// Fraction of the stage window the image must keep overlapped.
    pub boundary_fraction: f64,
    /// Multiplicative scale step per zoom tick.
    pub zoom_step: f64,
    /// Lower scale bound; keeps the scale strictly positive.
    pub min_scale: f64,
    /// Upper scale bound.
    pub max_scale: f64,
    /// Wheel pan step in content units per tick.
    pub pan_step: f64,
    /// Bounce-back duration in seconds.
    pub bounce_duration: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        ViewportConfig {
            boundary_fraction: 0.2,
            zoom_step: 1.05,
            min_scale: 0.05,
            max_scale: 10.0,
            pan_step: 7.5,
            bounce_duration: 0.2,
        }
    }
}
