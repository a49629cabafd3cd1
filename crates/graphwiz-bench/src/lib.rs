use graphwiz_core::NodeId;
use graphwiz_graph::GraphModel;

/// `side * side` nodes laid out on a grid, each connected to its right and
/// lower neighbour.
pub fn grid_graph(side: u32, spacing: f32) -> GraphModel {
    let mut model = GraphModel::new();
    for row in 0..side {
        for col in 0..side {
            model.add_node(col as f32 * spacing, row as f32 * spacing);
        }
    }
    for row in 0..side {
        for col in 0..side {
            let id = NodeId(row * side + col);
            if col + 1 < side {
                model.add_edge(id, NodeId(id.0 + 1));
            }
            if row + 1 < side {
                model.add_edge(id, NodeId(id.0 + side));
            }
        }
    }
    model
}

/// A single path 0-1-2-...; the worst case for recursion depth.
pub fn chain_graph(len: u32) -> GraphModel {
    let mut model = GraphModel::new();
    for i in 0..len {
        model.add_node(i as f32 * 50.0, 0.0);
    }
    for i in 1..len {
        model.add_edge(NodeId(i - 1), NodeId(i));
    }
    model
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        let model = grid_graph(4, 60.0);
        assert_eq!(model.node_count(), 16);
        // 2 * side * (side - 1)
        assert_eq!(model.edge_count(), 24);
    }

    #[test]
    fn test_chain_shape() {
        let model = chain_graph(10);
        assert_eq!(model.edge_count(), 9);
    }
}
