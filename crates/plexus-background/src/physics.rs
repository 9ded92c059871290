//! Per-node update step.

use plexus_core::{CURSOR_FORCE, CURSOR_RADIUS, Cursor, SurfaceSize};

use crate::node::Node;

/// Advance `node` by one tick.
///
/// Position is integrated first and the bounds are checked afterwards, so a
/// node may sit just outside the surface for one frame before its flipped
/// velocity carries it back. Within [`CURSOR_RADIUS`] of a set cursor the
/// node is pushed away in proportion to its offset. Nothing damps the
/// accumulated velocity.
pub fn update_node(node: &mut Node, size: SurfaceSize, cursor: Cursor) {
    node.x += node.vx;
    node.y += node.vy;

    if node.x < 0.0 || node.x > size.width {
        node.vx = -node.vx;
    }
    if node.y < 0.0 || node.y > size.height {
        node.vy = -node.vy;
    }

    if let Some(pointer) = cursor.position() {
        let dx = node.x - pointer.x;
        let dy = node.y - pointer.y;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist < CURSOR_RADIUS {
            node.vx += dx * CURSOR_FORCE;
            node.vy += dy * CURSOR_FORCE;
        }
    }
}
