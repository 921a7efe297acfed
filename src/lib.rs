//! Graphprops
//!
//! A small graph-analysis engine: weighted undirected and directed graphs, structural
//! property queries, directed cycle detection and minimum spanning trees.
//!
//! # Layout
//!
//! - [`graph`]: vertex identity, edges, the [`Graph`] and [`DirectedGraph`] containers
//! - [`algo`]: property engine, cut vertices, cycle detection, Prim and Kruskal
//!
//! The index-based algorithms (DFS, union-find, Prim over a weight matrix, Kruskal over
//! an edge list) live in the `graphprops-algorithms` crate and know nothing about
//! vertex identities; [`algo`] adapts the containers to them.
//!
//! ## Example Usage
//!
//! ```rust
//! use graphprops::algo::{self, GraphReport};
//! use graphprops::graph::{Graph, VertexId};
//!
//! let mut graph = Graph::new(4);
//! graph.add_edge(VertexId::new(0), VertexId::new(1), 10.0);
//! graph.add_edge(VertexId::new(0), VertexId::new(2), 6.0);
//! graph.add_edge(VertexId::new(0), VertexId::new(3), 5.0);
//! graph.add_edge(VertexId::new(1), VertexId::new(3), 15.0);
//! graph.add_edge(VertexId::new(2), VertexId::new(3), 4.0);
//!
//! assert!(algo::is_connected(&graph));
//!
//! let tree = algo::kruskal(&graph).unwrap();
//! assert_eq!(tree.total_weight, 19.0);
//!
//! let report = GraphReport::analyze(&mut graph);
//! assert_eq!(report.cut_vertex_count, 0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    DirectedEdge, DirectedEdgeDescriptor, DirectedGraph, Direction, Edge, EdgeDescriptor,
    Graph, GraphConfig, GraphError, GraphResult, RemovedVertex, VertexId,
};

pub use algo::{GraphReport, MstAlgorithm, MstError, SpanningTree};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
