//! Edge implementations
//!
//! - [`Edge`]: undirected, weighted; `{a, b}` equals `{b, a}`
//! - [`DirectedEdge`]: ordered `(source, target)`, weighted

use super::types::{Direction, VertexId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An undirected weighted edge
///
/// Always references exactly two vertices; a self-loop references the same vertex twice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint, as supplied
    pub a: VertexId,

    /// Second endpoint, as supplied
    pub b: VertexId,

    pub weight: f64,
}

impl Edge {
    pub fn new(a: VertexId, b: VertexId, weight: f64) -> Self {
        Edge { a, b, weight }
    }

    /// Both endpoints, in insertion order
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    /// Check if this edge connects two specific vertices (in either order)
    pub fn connects(&self, v1: VertexId, v2: VertexId) -> bool {
        (self.a == v1 && self.b == v2) || (self.a == v2 && self.b == v1)
    }

    /// Check if `v` is one of the endpoints
    pub fn touches(&self, v: VertexId) -> bool {
        self.a == v || self.b == v
    }

    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }

    /// Same vertex pair, whatever the weights
    pub fn eq_ignore_weight(&self, other: &Edge) -> bool {
        self.connects(other.a, other.b)
    }

    /// Endpoint pair with the smaller id first
    pub fn normalized(&self) -> (VertexId, VertexId) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    /// Total order on weights only
    pub fn cmp_weight(&self, other: &Edge) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.eq_ignore_weight(other)
    }
}

/// A directed weighted edge from `source` to `target`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectedEdge {
    /// Edge goes FROM this vertex
    pub source: VertexId,

    /// Edge goes TO this vertex
    pub target: VertexId,

    pub weight: f64,
}

impl DirectedEdge {
    pub fn new(source: VertexId, target: VertexId, weight: f64) -> Self {
        DirectedEdge {
            source,
            target,
            weight,
        }
    }

    /// Orient `(v1, v2)` by a direction flag: `Forward` keeps the order, `Reverse` swaps it
    pub fn with_direction(
        v1: VertexId,
        v2: VertexId,
        weight: f64,
        direction: Direction,
    ) -> Self {
        match direction {
            Direction::Forward => Self::new(v1, v2, weight),
            Direction::Reverse => Self::new(v2, v1, weight),
        }
    }

    /// Same as [`DirectedEdge::with_direction`] from a raw `+1`/`-1` flag.
    ///
    /// Any other flag is returned as the error.
    pub fn from_flag(
        v1: VertexId,
        v2: VertexId,
        weight: f64,
        flag: i64,
    ) -> Result<Self, i64> {
        Direction::try_from(flag).map(|direction| Self::with_direction(v1, v2, weight, direction))
    }

    pub fn starts_from(&self, v: VertexId) -> bool {
        self.source == v
    }

    pub fn ends_at(&self, v: VertexId) -> bool {
        self.target == v
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Same source and target, whatever the weights
    pub fn eq_ignore_weight(&self, other: &DirectedEdge) -> bool {
        self.source == other.source && self.target == other.target
    }
}
