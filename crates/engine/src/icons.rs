use serde::{Deserialize, Serialize};

use crate::models::{IconKind, IconMark, Vec2};

/// Half-extent of the square hit region around an icon, in content units.
pub const ICON_HITBOX_SIZE: f64 = 50.0;

/// Color assigned to a freshly dropped icon.
pub const DEFAULT_ICON_COLOR: &str = "#ffffff";

/// Checks if a content-local position is within an icon's hit region.
pub fn is_position_on_icon(pos: Vec2, icon: &IconMark, hitbox_size: f64) -> bool {
    pos.x >= icon.x - hitbox_size
        && pos.x <= icon.x + hitbox_size
        && pos.y >= icon.y - hitbox_size
        && pos.y <= icon.y + hitbox_size
}

/// The droppable icon overlay: an ordered list of marks in content-local
/// coordinates, invariant to the current zoom.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconLayer {
    icons: Vec<IconMark>,
}

impl IconLayer {
    pub fn new() -> Self {
        IconLayer::default()
    }

    pub fn icons(&self) -> &[IconMark] {
        &self.icons
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Add a mark at a content-local position, picked up from a drop event.
    pub fn drop_at(&mut self, position: Vec2, kind: IconKind) {
        self.icons.push(IconMark {
            x: position.x,
            y: position.y,
            kind,
            color: DEFAULT_ICON_COLOR.to_string(),
        });
    }

    /// Index of the first icon whose hit region contains `pos`, in insertion
    /// order.
    pub fn icon_at(&self, pos: Vec2) -> Option<usize> {
        self.icons
            .iter()
            .position(|icon| is_position_on_icon(pos, icon, ICON_HITBOX_SIZE))
    }

    /// Move a single icon; every other field and icon is untouched.
    /// Out-of-range indices are ignored.
    pub fn update_position(&mut self, index: usize, position: Vec2) {
        if let Some(icon) = self.icons.get_mut(index) {
            icon.x = position.x;
            icon.y = position.y;
        }
    }

    /// Recolor a single icon; every other field and icon is untouched.
    /// Out-of-range indices are ignored.
    pub fn update_color(&mut self, index: usize, color: &str) {
        if let Some(icon) = self.icons.get_mut(index) {
            icon.color = color.to_string();
        }
    }

    /// Remove every mark.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.icons.len(), "Cleared all icons");
        self.icons.clear();
    }
}
