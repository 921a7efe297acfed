//! Minimum spanning trees over a [`Graph`]
//!
//! Both constructors check connectivity first and report a disconnected graph as
//! [`GraphError::Disconnected`] instead of returning a partial forest.

use super::properties::component_count;
use crate::graph::{Edge, Graph, GraphError, GraphResult, VertexId};
use graphprops_algorithms::{kruskal_mst, prim_mst, IndexedEdge, MstError};
use serde::Serialize;
use tracing::{debug, info};

/// Which constructor produced a [`SpanningTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MstAlgorithm {
    Prim,
    Kruskal,
}

/// Spanning tree expressed in vertex identities
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree {
    pub algorithm: MstAlgorithm,
    /// Start vertex for Prim, `None` for Kruskal
    pub root: Option<VertexId>,
    /// Prim: `(parent, child, weight)` ordered by the child's dense index.
    /// Kruskal: the graph's own edges in acceptance order.
    pub edges: Vec<Edge>,
    pub total_weight: f64,
}

impl SpanningTree {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Tree predecessor of `v` in a Prim tree. `None` for the root, for vertices not
    /// in the tree, and for Kruskal trees (which are unrooted).
    pub fn parent_of(&self, v: VertexId) -> Option<VertexId> {
        if self.algorithm != MstAlgorithm::Prim {
            return None;
        }
        self.edges.iter().find(|e| e.b == v).map(|e| e.a)
    }
}

/// Prim's algorithm from `start` over the graph's weight matrix.
///
/// Zero-weight edges are absent from the matrix, so a graph that is only connected
/// through them fails with [`MstError::Unreachable`].
pub fn prim(graph: &Graph, start: VertexId) -> GraphResult<SpanningTree> {
    let start_idx = graph
        .index_of(start)
        .ok_or(GraphError::VertexNotFound(start))?;
    ensure_connected(graph)?;

    let tree = prim_mst(graph.adjacency_matrix().view(), start_idx)?;
    let edges: Vec<Edge> = tree
        .edges()
        .into_iter()
        .filter_map(|(p, c, w)| Some(Edge::new(graph.vertex_at(p)?, graph.vertex_at(c)?, w)))
        .collect();
    let total_weight = tree.total_weight();

    info!(
        root = %start,
        edges = edges.len(),
        total_weight,
        "prim spanning tree built"
    );
    Ok(SpanningTree {
        algorithm: MstAlgorithm::Prim,
        root: Some(start),
        edges,
        total_weight,
    })
}

/// Kruskal's algorithm over a stable-sorted snapshot of the edge list.
///
/// The graph's own edge order is left untouched.
pub fn kruskal(graph: &Graph) -> GraphResult<SpanningTree> {
    ensure_connected(graph)?;

    let indexed = indexed_edges(graph)?;
    let tree = kruskal_mst(graph.vertex_count(), &indexed)?;
    let edges: Vec<Edge> = tree
        .edge_indices
        .iter()
        .map(|&idx| graph.edges()[idx])
        .collect();

    info!(
        edges = edges.len(),
        total_weight = tree.total_weight,
        "kruskal spanning tree built"
    );
    Ok(SpanningTree {
        algorithm: MstAlgorithm::Kruskal,
        root: None,
        edges,
        total_weight: tree.total_weight,
    })
}

/// Every edge as dense indices, position for position with `graph.edges()`
fn indexed_edges(graph: &Graph) -> GraphResult<Vec<IndexedEdge>> {
    let dense = |v: VertexId| graph.index_of(v).ok_or(GraphError::VertexNotFound(v));
    graph
        .edges()
        .iter()
        .map(|e| {
            let (a, b) = e.endpoints();
            Ok((dense(a)?, dense(b)?, e.weight))
        })
        .collect()
}

fn ensure_connected(graph: &Graph) -> GraphResult<()> {
    if graph.vertex_count() == 0 {
        return Err(MstError::EmptyGraph.into());
    }
    let components = component_count(graph);
    if components > 1 {
        debug!(components, "spanning tree requested on disconnected graph");
        return Err(GraphError::Disconnected { components });
    }
    Ok(())
}
