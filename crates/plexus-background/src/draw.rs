//! Draw step: the surface contract plus node and connection drawing.

use plexus_core::{LINE_WIDTH, MAX_DIST, NODE_RADIUS, Point, SurfaceSize};

use crate::{color::Rgba, node::Node};

/// A 2D drawing context.
pub trait Surface {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Set the pixel dimensions. Clears the surface.
    fn resize(&mut self, size: SurfaceSize);

    fn set_fill(&mut self, color: Rgba);

    fn fill_circle(&mut self, center: Point, radius: f64);

    fn set_stroke(&mut self, color: Rgba, width: f64);

    fn stroke_line(&mut self, from: Point, to: Point);
}

/// Counters from one connection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionStats {
    /// Unordered pairs whose distance was evaluated.
    pub pairs_checked: usize,
    /// Pairs close enough to be joined by a line.
    pub lines_drawn: usize,
}

/// Stroke opacity for two nodes `dist` apart, or `None` when too far apart to connect.
pub fn connection_alpha(dist: f64) -> Option<f64> {
    (dist < MAX_DIST).then(|| 1.0 - dist / MAX_DIST)
}

/// Draw `node` as a filled dot.
pub fn draw_node<S: Surface + ?Sized>(surface: &mut S, node: &Node, color: Rgba) {
    surface.set_fill(color);
    surface.fill_circle(node.position(), NODE_RADIUS);
}

/// Join every pair of nodes closer than [`MAX_DIST`], fading with distance.
///
/// Each unordered pair is visited once, `n * (n - 1) / 2` in total.
pub fn draw_connections<S: Surface + ?Sized>(
    surface: &mut S,
    nodes: &[Node],
    color: Rgba,
) -> ConnectionStats {
    let mut stats = ConnectionStats::default();

    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            stats.pairs_checked += 1;
            let dist = a.position().distance(b.position());

            if let Some(alpha) = connection_alpha(dist) {
                surface.set_stroke(color.with_alpha(alpha), LINE_WIDTH);
                surface.stroke_line(a.position(), b.position());
                stats.lines_drawn += 1;
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Scene, Shape};

    const CYAN: Rgba = Rgba::opaque(34, 211, 238);

    #[test]
    fn test_alpha_is_linear() {
        for d in [0.0, 1.0, 35.0, 70.0, 100.5, 139.0, 139.999] {
            let alpha = connection_alpha(d).unwrap();
            assert!((alpha - (1.0 - d / 140.0)).abs() < f64::EPSILON);
        }
        assert_eq!(connection_alpha(0.0), Some(1.0));
    }

    #[test]
    fn test_no_alpha_at_or_past_max() {
        assert_eq!(connection_alpha(MAX_DIST), None);
        assert_eq!(connection_alpha(140.0001), None);
        assert_eq!(connection_alpha(1000.0), None);
    }

    #[test]
    fn test_draw_node_fills_fixed_radius() {
        let mut scene = Scene::new(SurfaceSize::new(100.0, 100.0));
        draw_node(&mut scene, &Node::new(12.0, 34.0, 1.0, 1.0), CYAN);

        assert_eq!(
            scene.shapes(),
            &[Shape::Dot {
                center: Point::new(12.0, 34.0),
                radius: NODE_RADIUS,
                color: CYAN,
            }]
        );
    }

    #[test]
    fn test_pair_enumeration_count() {
        let nodes: Vec<Node> = (0..45)
            .map(|i| Node::new(f64::from(i) * 1000.0, 0.0, 0.0, 0.0))
            .collect();
        let mut scene = Scene::new(SurfaceSize::new(50_000.0, 10.0));

        let stats = draw_connections(&mut scene, &nodes, CYAN);
        assert_eq!(stats.pairs_checked, 990);
        assert_eq!(stats.lines_drawn, 0);
        assert!(scene.shapes().is_empty());
    }

    #[test]
    fn test_each_close_pair_drawn_once() {
        let nodes = [
            Node::new(0.0, 0.0, 0.0, 0.0),
            Node::new(30.0, 40.0, 0.0, 0.0),
            Node::new(0.0, 140.0, 0.0, 0.0),
        ];
        let mut scene = Scene::new(SurfaceSize::new(200.0, 200.0));

        let stats = draw_connections(&mut scene, &nodes, CYAN);
        assert_eq!(stats, ConnectionStats { pairs_checked: 3, lines_drawn: 2 });

        let segments: Vec<_> = scene
            .shapes()
            .iter()
            .filter_map(|s| match s {
                Shape::Segment { from, to, color, width } => Some((*from, *to, *color, *width)),
                _ => None,
            })
            .collect();

        // (0,0)-(30,40) is 50 apart, (30,40)-(0,140) is ~104.4, (0,0)-(0,140) sits on the limit.
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].0, Point::new(0.0, 0.0));
        assert_eq!(segments[0].1, Point::new(30.0, 40.0));
        assert!((segments[0].2.alpha - (1.0 - 50.0 / 140.0)).abs() < 1e-12);
        assert_eq!(segments[0].3, LINE_WIDTH);
        assert_eq!(segments[1].0, Point::new(30.0, 40.0));
        assert_eq!(segments[1].1, Point::new(0.0, 140.0));
    }
}
