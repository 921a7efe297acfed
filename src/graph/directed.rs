//! Directed graph container

use super::edge::DirectedEdge;
use super::store::{GraphError, GraphResult, VertexSet};
use super::types::{Direction, DirectedEdgeDescriptor, VertexId};

/// Directed weighted graph
///
/// Same shape as [`Graph`](super::Graph) but edges are ordered pairs and the
/// adjacency list only holds out-neighbours.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    capacity: usize,
    vertices: VertexSet,
    edges: Vec<DirectedEdge>,
    /// outgoing[i] = dense indices of i's successors, one per edge
    outgoing: Vec<Vec<usize>>,
}

impl DirectedGraph {
    pub fn new(capacity: usize) -> Self {
        DirectedGraph {
            capacity,
            vertices: VertexSet::default(),
            edges: Vec::new(),
            outgoing: Vec::with_capacity(capacity),
        }
    }

    /// Build a graph from loader-supplied descriptors.
    ///
    /// Fails on the first direction flag that is neither `1` nor `-1`.
    pub fn from_descriptors<I>(capacity: usize, descriptors: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = DirectedEdgeDescriptor>,
    {
        let mut graph = Self::new(capacity);
        for d in descriptors {
            graph.add_edge_with_flag(VertexId::new(d.v1), VertexId::new(d.v2), d.weight, d.direction)?;
        }
        Ok(graph)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertices in first-seen order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    pub fn edges(&self) -> &[DirectedEdge] {
        &self.edges
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }

    /// Per-vertex successor lists over dense indices
    pub fn outgoing(&self) -> &[Vec<usize>] {
        &self.outgoing
    }

    pub fn add_isolated_vertex(&mut self, v: VertexId) {
        self.register_vertex(v);
    }

    /// Append a directed edge, registering unseen endpoints
    pub fn add_edge(&mut self, edge: DirectedEdge) {
        let s = self.register_vertex(edge.source);
        let t = self.register_vertex(edge.target);
        self.outgoing[s].push(t);
        self.edges.push(edge);
    }

    /// Append `(v1, v2)` oriented by a raw `+1`/`-1` flag
    pub fn add_edge_with_flag(
        &mut self,
        v1: VertexId,
        v2: VertexId,
        weight: f64,
        flag: i64,
    ) -> GraphResult<()> {
        let direction = Direction::try_from(flag).map_err(GraphError::InvalidDirection)?;
        self.add_edge(DirectedEdge::with_direction(v1, v2, weight, direction));
        Ok(())
    }

    /// Entry degree: number of edges ending at `v`
    pub fn in_degree(&self, v: VertexId) -> GraphResult<usize> {
        self.count_edges(v, |e| e.ends_at(v))
    }

    /// Exit degree: number of edges starting at `v`
    pub fn out_degree(&self, v: VertexId) -> GraphResult<usize> {
        self.count_edges(v, |e| e.starts_from(v))
    }

    fn count_edges(&self, v: VertexId, pred: impl Fn(&DirectedEdge) -> bool) -> GraphResult<usize> {
        if !self.contains_vertex(v) {
            return Err(GraphError::VertexNotFound(v));
        }
        Ok(self.edges.iter().filter(|e| pred(e)).count())
    }

    fn register_vertex(&mut self, v: VertexId) -> usize {
        let (idx, inserted) = self.vertices.insert_full(v);
        if inserted {
            self.outgoing.push(Vec::new());
        }
        idx
    }
}

impl PartialEq for DirectedGraph {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity
            && self.vertices.iter().eq(other.vertices.iter())
            && self.edges == other.edges
    }
}
