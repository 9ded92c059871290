//! Node entity model.

use plexus_core::{Point, SurfaceSize, VELOCITY_RANGE};
use rand::Rng;

/// A single drifting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Current x position in surface pixels.
    pub x: f64,
    /// Current y position in surface pixels.
    pub y: f64,
    /// Horizontal velocity in pixels per tick.
    pub vx: f64,
    /// Vertical velocity in pixels per tick.
    pub vy: f64,
}

impl Node {
    pub const fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self { x, y, vx, vy }
    }

    /// A node placed uniformly over `size` with a small random velocity.
    pub fn random<R: Rng>(rng: &mut R, size: SurfaceSize) -> Self {
        // Scaled unit samples keep a zero-sized surface valid.
        Self {
            x: rng.gen_range(0.0..1.0) * size.width,
            y: rng.gen_range(0.0..1.0) * size.height,
            vx: (rng.gen_range(0.0..1.0) - 0.5) * 2.0 * VELOCITY_RANGE,
            vy: (rng.gen_range(0.0..1.0) - 0.5) * 2.0 * VELOCITY_RANGE,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Populate `count` random nodes over `size`.
pub fn spawn<R: Rng>(rng: &mut R, count: usize, size: SurfaceSize) -> Vec<Node> {
    (0..count).map(|_| Node::random(rng, size)).collect()
}
