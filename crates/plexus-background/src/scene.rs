//! Recorded drawing surface rendered through a ratatui Braille canvas.

use plexus_core::{Point, SurfaceSize};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Line as CanvasLine, Points},
    },
};

use crate::{color::Rgba, draw::Surface};

/// Background the scene is composited over.
const DEFAULT_BACKGROUND: (u8, u8, u8) = (0, 0, 0);

/// A single recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Dot {
        center: Point,
        radius: f64,
        color: Rgba,
    },
    Segment {
        from: Point,
        to: Point,
        color: Rgba,
        width: f64,
    },
}

/// Display list for one frame.
///
/// Coordinates are surface pixels with y growing downward.
#[derive(Debug, Clone)]
pub struct Scene {
    size: SurfaceSize,
    background: (u8, u8, u8),
    fill: Rgba,
    stroke: Rgba,
    stroke_width: f64,
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            background: DEFAULT_BACKGROUND,
            fill: Rgba::opaque(0, 0, 0),
            stroke: Rgba::opaque(0, 0, 0),
            stroke_width: 1.0,
            shapes: Vec::new(),
        }
    }

    pub fn with_background(mut self, background: (u8, u8, u8)) -> Self {
        self.background = background;
        self
    }

    pub fn background(&self) -> (u8, u8, u8) {
        self.background
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Map a surface point onto the canvas, whose y axis grows upward.
    fn to_canvas(&self, p: Point) -> (f64, f64) {
        (p.x, self.size.height - p.y)
    }
}

impl Surface for Scene {
    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.shapes.clear();
    }

    fn set_fill(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        self.shapes.push(Shape::Dot {
            center,
            radius,
            color: self.fill,
        });
    }

    fn set_stroke(&mut self, color: Rgba, width: f64) {
        self.stroke = color;
        self.stroke_width = width;
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.shapes.push(Shape::Segment {
            from,
            to,
            color: self.stroke,
            width: self.stroke_width,
        });
    }
}

impl Widget for &Scene {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (r, g, b) = self.background;
        let drawable = self.size.width > 0.0 && self.size.height > 0.0;

        Canvas::default()
            .background_color(Color::Rgb(r, g, b))
            .marker(Marker::Braille)
            .x_bounds([0.0, self.size.width])
            .y_bounds([0.0, self.size.height])
            .paint(|ctx| {
                if !drawable {
                    return;
                }
                // Braille dots have a single thickness, so stroke width is not rendered.
                for shape in &self.shapes {
                    match *shape {
                        Shape::Dot {
                            center,
                            radius,
                            color,
                        } => {
                            let (x, y) = self.to_canvas(center);
                            let color = color.over(self.background);
                            ctx.draw(&Points {
                                coords: &[(x, y)],
                                color,
                            });
                            ctx.draw(&Circle {
                                x,
                                y,
                                radius,
                                color,
                            });
                        }
                        Shape::Segment {
                            from, to, color, ..
                        } => {
                            let (x1, y1) = self.to_canvas(from);
                            let (x2, y2) = self.to_canvas(to);
                            ctx.draw(&CanvasLine {
                                x1,
                                y1,
                                x2,
                                y2,
                                color: color.over(self.background),
                            });
                        }
                    }
                }
            })
            .render(area, buf);
    }
}
