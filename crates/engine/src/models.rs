use serde::{Deserialize, Serialize};

/// A 2D point or offset. Whether the values are relative (content-local) or
/// absolute (stage pixels) depends on context; see the `coords` module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }
}

/// The symbols the sidebar tray offers for drag-and-drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Gun,
    Running,
    Bomb,
    Defuser,
    Eye,
}

impl std::fmt::Display for IconKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconKind::Gun => write!(f, "gun"),
            IconKind::Running => write!(f, "running"),
            IconKind::Bomb => write!(f, "bomb"),
            IconKind::Defuser => write!(f, "defuser"),
            IconKind::Eye => write!(f, "eye"),
        }
    }
}

/// A placed tactical icon: content-local position, symbol, display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconMark {
    pub x: f64,
    pub y: f64,
    pub kind: IconKind,
    pub color: String,
}

impl IconMark {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
