//! Graph algorithms module
//!
//! Property queries, cut vertices, cycle detection and MST construction over the
//! graph containers. The algorithms themselves live in the `graphprops-algorithms`
//! crate; this module provides the integration/adapter layer.

pub mod complement;
pub mod mst;
pub mod properties;
pub mod report;

use crate::graph::{DirectedGraph, Graph};
use graphprops_algorithms::GraphView;

// Re-export algorithms
pub use graphprops_algorithms::{
    kruskal_mst, prim_mst, KruskalTree, MstError, PrimTree,
    DisjointSet,
};

pub use complement::complement;
pub use mst::{kruskal, prim, MstAlgorithm, SpanningTree};
pub use properties::{
    component_count, cut_vertex_count, cut_vertices, has_loops, has_parallel_edges,
    is_complete, is_connected, is_eulerian, is_isolated, is_null, is_pending, is_regular,
    is_simple, is_unicursal,
};
pub use report::{GraphReport, VertexDegree};

/// Build an undirected GraphView: every edge is stored in both directions
pub fn build_view(graph: &Graph) -> GraphView {
    let index_to_node = graph.vertices().map(|v| v.as_u64()).collect();
    GraphView::from_adjacency_list(index_to_node, graph.adjacency().to_vec())
}

/// Build a directed GraphView over out-neighbours
pub fn build_directed_view(graph: &DirectedGraph) -> GraphView {
    let index_to_node = graph.vertices().map(|v| v.as_u64()).collect();
    GraphView::from_adjacency_list(index_to_node, graph.outgoing().to_vec())
}

/// True if the directed graph contains a cycle
pub fn has_cycle(graph: &DirectedGraph) -> bool {
    graphprops_algorithms::has_cycle(&build_directed_view(graph))
}
