use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell in the panel grid, relative to the home panel at the origin.
///
/// `x` grows to the right and `y` grows downward. Serialized as a two-element
/// array so config files can list panels as `[x, y]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct PanelCoord {
    pub x: i32,
    pub y: i32,
}

impl PanelCoord {
    pub const HOME: PanelCoord = PanelCoord { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The adjacent coordinate on the given side.
    pub fn neighbor(self, side: Side) -> Self {
        let (dx, dy) = side.delta();
        self.offset(dx, dy)
    }
}

impl From<(i32, i32)> for PanelCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<PanelCoord> for (i32, i32) {
    fn from(c: PanelCoord) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for PanelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal neighbors of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Up,
    Down,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Up, Side::Down];

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Up => "up",
            Side::Down => "down",
        }
    }

    /// Grid delta towards this side. Up is negative y.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Side::Left => (-1, 0),
            Side::Right => (1, 0),
            Side::Up => (0, -1),
            Side::Down => (0, 1),
        }
    }
}

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Offset applied to the panel container so that one panel fills the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

impl Translation {
    /// Offset that brings `panel` into view. The container moves opposite to
    /// the panel, one full viewport per grid step.
    pub fn for_panel(panel: PanelCoord, size: ViewportSize) -> Self {
        // `+ 0.0` folds -0.0 into 0.0 for the home row/column.
        Self {
            x: -(f64::from(panel.x) * size.width) + 0.0,
            y: -(f64::from(panel.y) * size.height) + 0.0,
        }
    }

    /// CSS `transform` value for this offset.
    pub fn to_css(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.x, self.y)
    }
}
