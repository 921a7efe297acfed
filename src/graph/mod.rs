//! Graph data model
//!
//! - Vertex identity ([`VertexId`]) and loader descriptors
//! - Undirected ([`Edge`]) and directed ([`DirectedEdge`]) weighted edges
//! - Containers: [`Graph`] (undirected, adjacency list + weight matrix) and
//!   [`DirectedGraph`] (out-adjacency)

pub mod config;
pub mod directed;
pub mod edge;
pub mod store;
pub mod types;

// Re-export main types
pub use config::GraphConfig;
pub use directed::DirectedGraph;
pub use edge::{DirectedEdge, Edge};
pub use store::{Graph, GraphError, GraphResult, RemovedVertex};
pub use types::{DirectedEdgeDescriptor, Direction, EdgeDescriptor, VertexId};
