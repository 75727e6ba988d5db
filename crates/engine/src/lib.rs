//! Viewport engine for an interactive tactical map viewer.
//!
//! Owns the coordinate-space conversions between absolute (stage) and
//! relative (content-group) positions, boundary-clamped panning and zooming,
//! the bounce-back correction animation, and the icon-mark overlay the viewer
//! edits. The UI shell feeds it normalized pointer/wheel events plus map and
//! floor identifiers, and renders from the transform and icon list it
//! exposes.

pub mod bounce;
pub mod bounds;
pub mod catalog;
pub mod config;
pub mod controls;
pub mod coords;
pub mod icons;
pub mod models;
pub mod viewport;

pub use catalog::{Catalog, Floor, GameMap};
pub use config::ViewportConfig;
pub use controls::{Axis, Modifiers, WheelInput};
pub use icons::IconLayer;
pub use models::{IconKind, IconMark, Size, Vec2};
pub use viewport::{ViewTransform, Viewport};
