//! Complement graph

use crate::graph::{Graph, VertexId};
use tracing::debug;

/// Graph on the same vertices joining every distinct pair that `graph` leaves
/// non-adjacent. New edges carry weight 0; loops are never added. The source's
/// configuration carries over.
pub fn complement(graph: &Graph) -> Graph {
    let mut result = Graph::with_config(graph.config().clone());
    let vertices: Vec<VertexId> = graph.vertices().collect();
    for &v in &vertices {
        result.add_isolated_vertex(v);
    }

    for (i, &a) in vertices.iter().enumerate() {
        for &b in &vertices[i + 1..] {
            if !graph.is_adjacent(a, b) {
                result.add_edge_unique(a, b, 0.0);
            }
        }
    }

    debug!(
        vertices = result.vertex_count(),
        edges = result.edge_count(),
        "complement built"
    );
    result
}
