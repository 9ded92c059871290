//! Drifting node network for the plexus background.
//!
//! A fixed set of nodes drift across the surface, bounce off its edges and
//! shy away from the pointer. Every frame the nodes are drawn together with
//! fading lines between each pair close enough to connect.

mod color;
mod draw;
mod node;
mod physics;
mod scene;
mod state;

pub use color::Rgba;
pub use draw::{ConnectionStats, Surface, connection_alpha, draw_connections, draw_node};
pub use node::{Node, spawn};
pub use physics::update_node;
pub use scene::{Scene, Shape};
pub use state::NetworkState;
