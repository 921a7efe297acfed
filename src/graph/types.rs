//! Core type definitions for the graph model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a graph vertex
///
/// Equality and ordering follow the numeric index. Displays as `v<index>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        VertexId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Stable label, e.g. `v3`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        VertexId(id)
    }
}

/// Orientation flag carried by directed edge descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `+1`: edge goes from the first vertex to the second
    Forward,
    /// `-1`: edge goes from the second vertex to the first
    Reverse,
}

impl TryFrom<i64> for Direction {
    type Error = i64;

    fn try_from(flag: i64) -> Result<Self, Self::Error> {
        match flag {
            1 => Ok(Direction::Forward),
            -1 => Ok(Direction::Reverse),
            other => Err(other),
        }
    }
}

/// Undirected edge as handed over by a loader: `(vertex1, vertex2, weight)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeDescriptor {
    pub v1: u64,
    pub v2: u64,
    pub weight: f64,
}

impl EdgeDescriptor {
    pub fn new(v1: u64, v2: u64, weight: f64) -> Self {
        EdgeDescriptor { v1, v2, weight }
    }
}

/// Directed edge as handed over by a loader; `direction` is `1` or `-1`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectedEdgeDescriptor {
    pub v1: u64,
    pub v2: u64,
    pub weight: f64,
    pub direction: i64,
}

impl DirectedEdgeDescriptor {
    pub fn new(v1: u64, v2: u64, weight: f64, direction: i64) -> Self {
        DirectedEdgeDescriptor {
            v1,
            v2,
            weight,
            direction,
        }
    }
}
