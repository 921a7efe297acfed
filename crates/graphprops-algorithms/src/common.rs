//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of the graph topology for algorithm execution.

use std::collections::HashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// Edge given as dense endpoint indices plus a weight: `(u, v, weight)`
pub type IndexedEdge = (usize, usize, f64);

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Undirected graphs are represented by storing every edge in both directions
/// (a self-loop is stored once).
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,
}

impl GraphView {
    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Dense index of a node, if it is part of the view
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.node_to_index.get(&node).copied()
    }

    /// Build a GraphView from per-node adjacency lists.
    ///
    /// `index_to_node[i]` is the identity of dense index `i`; `outgoing[i]` lists its successors.
    pub fn from_adjacency_list(index_to_node: Vec<NodeId>, outgoing: Vec<Vec<usize>>) -> Self {
        let node_count = index_to_node.len();
        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &node)| (node, idx))
            .collect();

        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();

        out_offsets.push(0);
        for neighbors in outgoing.into_iter().take(node_count) {
            out_targets.extend(neighbors);
            out_offsets.push(out_targets.len());
        }
        // Nodes without an adjacency row get an empty one
        while out_offsets.len() < node_count + 1 {
            out_offsets.push(out_targets.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
        }
    }
}
