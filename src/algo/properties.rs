//! Structural property queries over an undirected [`Graph`]
//!
//! All queries are read-only except the cut-vertex scan, which removes and restores
//! one vertex at a time and leaves the graph exactly as it found it.

use super::build_view;
use crate::graph::{Edge, Graph, GraphResult, VertexId};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Degree 0. Absent vertices are an error, not "isolated".
pub fn is_isolated(graph: &Graph, v: VertexId) -> GraphResult<bool> {
    Ok(graph.degree(v)? == 0)
}

/// Degree 1
pub fn is_pending(graph: &Graph, v: VertexId) -> GraphResult<bool> {
    Ok(graph.degree(v)? == 1)
}

/// All vertices share one degree. Vacuously true without vertices.
pub fn is_regular(graph: &Graph) -> bool {
    let mut degrees = graph.adjacency().iter().map(Vec::len);
    match degrees.next() {
        Some(first) => degrees.all(|d| d == first),
        None => true,
    }
}

/// No edges (vertices may still exist)
pub fn is_null(graph: &Graph) -> bool {
    graph.edge_count() == 0
}

pub fn has_loops(graph: &Graph) -> bool {
    graph.edges().iter().any(Edge::is_loop)
}

/// Two distinct edges join the same unordered pair, whatever their weights
pub fn has_parallel_edges(graph: &Graph) -> bool {
    let mut seen = FxHashSet::default();
    graph.edges().iter().any(|e| !seen.insert(e.normalized()))
}

pub fn is_simple(graph: &Graph) -> bool {
    !has_loops(graph) && !has_parallel_edges(graph)
}

/// Simple, and every pair of distinct vertices is adjacent
pub fn is_complete(graph: &Graph) -> bool {
    if !is_simple(graph) {
        return false;
    }
    let vertices: Vec<VertexId> = graph.vertices().collect();
    vertices.iter().enumerate().all(|(i, &a)| {
        vertices[i + 1..]
            .iter()
            .all(|&b| graph.is_adjacent(a, b))
    })
}

fn odd_degree_count(graph: &Graph) -> usize {
    graph
        .adjacency()
        .iter()
        .filter(|neighbors| neighbors.len() % 2 != 0)
        .count()
}

/// Every vertex has even degree
pub fn is_eulerian(graph: &Graph) -> bool {
    odd_degree_count(graph) == 0
}

/// Exactly two vertices have odd degree
pub fn is_unicursal(graph: &Graph) -> bool {
    odd_degree_count(graph) == 2
}

/// DFS from the smallest vertex id reaches every registered vertex.
///
/// The empty graph is connected.
pub fn is_connected(graph: &Graph) -> bool {
    let start = graph
        .vertices()
        .enumerate()
        .min_by_key(|&(_, v)| v)
        .map(|(idx, _)| idx);

    match start {
        Some(start) => graphprops_algorithms::is_connected(&build_view(graph), start),
        None => true,
    }
}

/// Number of connected components
pub fn component_count(graph: &Graph) -> usize {
    graphprops_algorithms::component_count(&build_view(graph))
}

/// Vertices whose removal increases the number of connected components, by id.
///
/// Each vertex is removed, the components of the remainder are counted, and the
/// vertex is restored before the next one is tried. O(V * (V + E)).
pub fn cut_vertices(graph: &mut Graph) -> Vec<VertexId> {
    let before = component_count(graph);
    let mut cuts = Vec::new();

    for v in graph.sorted_vertices() {
        let Ok(removed) = graph.remove_vertex(v) else {
            continue;
        };
        let after = component_count(graph);
        graph.restore_vertex(removed);

        debug!(vertex = %v, before, after, "cut vertex check");
        if after > before {
            cuts.push(v);
        }
    }
    cuts
}

pub fn cut_vertex_count(graph: &mut Graph) -> usize {
    cut_vertices(graph).len()
}
