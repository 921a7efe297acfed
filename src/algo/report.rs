//! One-shot property summary of an undirected graph

use super::properties::{
    cut_vertex_count, has_loops, has_parallel_edges, is_complete, is_connected, is_eulerian,
    is_null, is_regular, is_simple, is_unicursal,
};
use crate::graph::{Graph, VertexId};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VertexDegree {
    pub vertex: VertexId,
    pub degree: usize,
}

/// Every structural property of a graph, ready for a presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub null: bool,
    pub has_loops: bool,
    pub has_parallel_edges: bool,
    pub simple: bool,
    pub complete: bool,
    pub regular: bool,
    pub eulerian: bool,
    pub unicursal: bool,
    pub connected: bool,
    pub cut_vertex_count: usize,
    /// Ordered by vertex id
    pub degrees: Vec<VertexDegree>,
}

impl GraphReport {
    /// Run every property query. Needs `&mut` for the cut-vertex scan; the graph is
    /// unchanged on return.
    pub fn analyze(graph: &mut Graph) -> Self {
        let degrees = graph
            .sorted_vertices()
            .into_iter()
            .filter_map(|vertex| {
                let degree = graph.degree(vertex).ok()?;
                Some(VertexDegree { vertex, degree })
            })
            .collect();

        let report = GraphReport {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            null: is_null(graph),
            has_loops: has_loops(graph),
            has_parallel_edges: has_parallel_edges(graph),
            simple: is_simple(graph),
            complete: is_complete(graph),
            regular: is_regular(graph),
            eulerian: is_eulerian(graph),
            unicursal: is_unicursal(graph),
            connected: is_connected(graph),
            cut_vertex_count: cut_vertex_count(graph),
            degrees,
        };

        info!(
            vertices = report.vertex_count,
            edges = report.edge_count,
            connected = report.connected,
            cut_vertices = report.cut_vertex_count,
            "graph analyzed"
        );
        report
    }

    pub fn degree_of(&self, v: VertexId) -> Option<usize> {
        self.degrees
            .iter()
            .find(|d| d.vertex == v)
            .map(|d| d.degree)
    }
}
