//! Graph container configuration

use serde::{Deserialize, Serialize};

/// Settings for a [`Graph`](super::Graph) container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Declared vertex count; the adjacency matrix is at least this wide
    pub capacity: usize,
    /// Skip edges whose vertex pair (ignoring weight) is already present
    pub dedup_edges: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            capacity: 0,
            dedup_edges: false,
        }
    }
}

impl GraphConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Capacity `n` with duplicate-pair suppression on
    pub fn deduplicating(capacity: usize) -> Self {
        Self {
            capacity,
            dedup_edges: true,
        }
    }
}
