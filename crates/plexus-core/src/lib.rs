//! Core types shared across the plexus crates.
//!
//! Holds the simulation tunables, the surface and cursor value types read by
//! every node update, and the color theme used when drawing.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Number of nodes populated at startup.
pub const NODE_COUNT: usize = 45;

/// Maximum distance at which two nodes are connected by a line.
pub const MAX_DIST: f64 = 140.0;

/// Radius around the cursor inside which nodes are pushed away.
pub const CURSOR_RADIUS: f64 = 120.0;

/// Velocity added per unit of node-to-cursor offset while inside [`CURSOR_RADIUS`].
pub const CURSOR_FORCE: f64 = 0.0005;

/// Radius of a drawn node.
pub const NODE_RADIUS: f64 = 2.0;

/// Stroke width of a connection line.
pub const LINE_WIDTH: f64 = 0.6;

/// Initial velocity components are drawn uniformly from `-VELOCITY_RANGE..VELOCITY_RANGE`.
pub const VELOCITY_RANGE: f64 = 0.2;

/// Dimensions of the drawable area in surface pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size of a terminal of `cols x rows` cells, each cell covering
    /// `cell_width x cell_height` surface pixels.
    pub fn from_cells(cols: u16, rows: u16, cell_width: f64, cell_height: f64) -> Self {
        Self {
            width: f64::from(cols) * cell_width,
            height: f64::from(rows) * cell_height,
        }
    }
}

/// A point on the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Centre of terminal cell `(column, row)` in surface pixels.
    pub fn cell_center(column: u16, row: u16, cell_width: f64, cell_height: f64) -> Self {
        Self {
            x: (f64::from(column) + 0.5) * cell_width,
            y: (f64::from(row) + 0.5) * cell_height,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Last known pointer position, unset until the first pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor(Option<Point>);

impl Cursor {
    pub const fn unset() -> Self {
        Self(None)
    }

    pub const fn at(x: f64, y: f64) -> Self {
        Self(Some(Point::new(x, y)))
    }

    pub fn position(self) -> Option<Point> {
        self.0
    }

    pub fn is_set(self) -> bool {
        self.0.is_some()
    }
}

/// Color theme for nodes and connection lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Cyan,
    Green,
    Magenta,
    Yellow,
    Red,
    Blue,
    White,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Cyan => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Yellow,
            ColorTheme::Yellow => ColorTheme::Red,
            ColorTheme::Red => ColorTheme::Blue,
            ColorTheme::Blue => ColorTheme::White,
            ColorTheme::White => ColorTheme::Cyan,
        }
    }

    /// RGB components of the theme hue.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorTheme::Cyan => (34, 211, 238),
            ColorTheme::Green => (74, 222, 128),
            ColorTheme::Magenta => (232, 121, 249),
            ColorTheme::Yellow => (250, 204, 21),
            ColorTheme::Red => (248, 113, 113),
            ColorTheme::Blue => (96, 165, 250),
            ColorTheme::White => (226, 232, 240),
        }
    }

    /// Convert theme to Ratatui Color.
    pub fn color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb(r, g, b)
    }
}
