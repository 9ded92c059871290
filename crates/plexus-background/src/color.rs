//! Color utility functions for drawing onto a terminal surface.

use ratatui::style::Color;

/// An RGB color with an opacity in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    pub fn from_rgb((r, g, b): (u8, u8, u8)) -> Self {
        Self::opaque(r, g, b)
    }

    /// Same hue with a different opacity.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Composite this color over an opaque background.
    ///
    /// Terminal cells carry no alpha channel, so translucency is flattened
    /// into a plain RGB color here.
    pub fn over(self, background: (u8, u8, u8)) -> Color {
        let a = self.alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (f64::from(fg) * a + f64::from(bg) * (1.0 - a)).round() as u8;
        Color::Rgb(
            mix(self.r, background.0),
            mix(self.g, background.1),
            mix(self.b, background.2),
        )
    }
}
