use graphwiz_core::{Node, NodeId, Position};

pub const DEFAULT_NODE_RADIUS: f32 = 20.0;

/// Circle hit testing for canvas clicks.
///
/// A click hits a node when its distance to the node centre is at most
/// `radius + tolerance`. Overlapping nodes resolve to the oldest one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTester {
    radius: f32,
    tolerance: f32,
}

impl Default for HitTester {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_RADIUS)
    }
}

impl HitTester {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            tolerance: 0.0,
        }
    }

    /// Extra pixels around each node that still count as a hit.
    pub fn with_tolerance(radius: f32, tolerance: f32) -> Self {
        Self {
            radius,
            tolerance: tolerance.max(0.0),
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    pub fn reach(&self) -> f32 {
        self.radius + self.tolerance
    }

    /// First node, in insertion order, whose circle contains `pos`.
    pub fn hit_test(&self, nodes: &[Node], pos: Position) -> Option<NodeId> {
        let reach = self.reach();
        nodes
            .iter()
            .find(|n| n.position().distance_to(pos) <= reach)
            .map(Node::id)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any point strictly inside a lone node's circle hits that node.
        #[test]
        fn prop_points_inside_circle_hit(
            cx in 0.0f32..800.0,
            cy in 0.0f32..600.0,
            radius in 5.0f32..40.0,
            angle in 0.0f32..std::f32::consts::TAU,
            frac in 0.0f32..0.99,
        ) {
            let nodes = vec![Node::new(NodeId(7), Position::new(cx, cy))];
            let r = radius * frac;
            let pos = Position::new(cx + r * angle.cos(), cy + r * angle.sin());
            prop_assert_eq!(HitTester::new(radius).hit_test(&nodes, pos), Some(NodeId(7)));
        }

        #[test]
        fn prop_points_outside_circle_miss(
            cx in 0.0f32..800.0,
            cy in 0.0f32..600.0,
            radius in 5.0f32..40.0,
            angle in 0.0f32..std::f32::consts::TAU,
            extra in 1.0f32..200.0,
        ) {
            let nodes = vec![Node::new(NodeId(7), Position::new(cx, cy))];
            let r = radius + extra;
            let pos = Position::new(cx + r * angle.cos(), cy + r * angle.sin());
            prop_assert_eq!(HitTester::new(radius).hit_test(&nodes, pos), None);
        }
    }
}
