//! Node network state and the per-frame tick.

use log::debug;
use plexus_core::{ColorTheme, Cursor, NODE_COUNT, Point, SurfaceSize};
use rand::Rng;

use crate::{
    color::Rgba,
    draw::{self, ConnectionStats, Surface},
    node::{self, Node},
    physics::update_node,
};

/// Everything one animation frame reads and writes.
#[derive(Debug, Clone)]
pub struct NetworkState {
    /// Fixed node population.
    nodes: Vec<Node>,
    /// Last pointer position.
    cursor: Cursor,
    /// Current surface dimensions.
    size: SurfaceSize,
    /// Fill for nodes and base hue for connection lines.
    color: Rgba,
}

impl NetworkState {
    /// Create a network of [`NODE_COUNT`] random nodes over `size`.
    pub fn new(size: SurfaceSize) -> Self {
        Self::with_rng(&mut rand::thread_rng(), NODE_COUNT, size)
    }

    /// Create a network of `count` nodes drawn from `rng`.
    pub fn with_rng<R: Rng>(rng: &mut R, count: usize, size: SurfaceSize) -> Self {
        let nodes = node::spawn(rng, count, size);
        debug!(
            "spawned {} nodes over {}x{}",
            nodes.len(),
            size.width,
            size.height
        );
        Self::from_nodes(nodes, size)
    }

    /// Create a network from explicit nodes.
    pub fn from_nodes(nodes: Vec<Node>, size: SurfaceSize) -> Self {
        Self {
            nodes,
            cursor: Cursor::unset(),
            size,
            color: Rgba::from_rgb(ColorTheme::default().rgb()),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn set_theme(&mut self, theme: ColorTheme) {
        self.color = Rgba::from_rgb(theme.rgb());
    }

    /// Record a pointer movement.
    pub fn on_pointer_move(&mut self, position: Point) {
        self.cursor = Cursor::at(position.x, position.y);
    }

    /// Adopt new surface dimensions.
    ///
    /// Nodes keep their positions; any now outside the surface drift back
    /// through the usual edge reflection.
    pub fn on_resize<S: Surface + ?Sized>(&mut self, size: SurfaceSize, surface: &mut S) {
        debug!("surface resized to {}x{}", size.width, size.height);
        self.size = size;
        surface.resize(size);
    }

    /// Run one frame: clear, move and draw every node, then draw connections.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> ConnectionStats {
        surface.clear();

        for node in &mut self.nodes {
            update_node(node, self.size, self.cursor);
            draw::draw_node(surface, node, self.color);
        }

        draw::draw_connections(surface, &self.nodes, self.color)
    }
}
