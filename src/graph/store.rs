//! Undirected graph container
//!
//! Owns the vertex set, the edge list and two derived adjacency structures that are
//! kept in sync on every insertion:
//! - an adjacency list over dense vertex indices (one entry per incident edge)
//! - a symmetric weight matrix (0 = no edge) consumed by Prim's algorithm
//!
//! While a vertex is out through [`Graph::remove_vertex`] only the adjacency list is
//! rebuilt. The weight matrix travels inside the [`RemovedVertex`] and is handed back
//! on restore, so a remove/restore pair costs O(V + E) rather than a matrix refill.

use super::config::GraphConfig;
use super::edge::Edge;
use super::types::{EdgeDescriptor, VertexId};
use graphprops_algorithms::MstError;
use indexmap::IndexSet;
use ndarray::{s, Array2, CowArray, Ix2};
use rustc_hash::FxBuildHasher;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("Invalid direction flag {0}: expected 1 or -1")]
    InvalidDirection(i64),

    #[error("Graph is disconnected ({components} components)")]
    Disconnected { components: usize },

    #[error(transparent)]
    Mst(#[from] MstError),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Deduplicated vertex set in first-seen order
pub(crate) type VertexSet = IndexSet<VertexId, FxBuildHasher>;

/// A vertex taken out of a [`Graph`] together with its incident edges.
///
/// Handing it back to [`Graph::restore_vertex`] puts the graph back exactly as it was.
#[derive(Debug)]
#[must_use = "a removed vertex must be restored to undo the removal"]
pub struct RemovedVertex {
    vertex: VertexId,
    position: usize,
    /// (original position in the edge list, edge), ascending by position
    edges: Vec<(usize, Edge)>,
    /// Weight matrix as it was before the removal, if it was current then
    matrix: Option<Array2<f64>>,
    revision_before: u64,
    revision_after: u64,
}

impl RemovedVertex {
    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    /// Number of edges that were incident to the vertex
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Undirected weighted graph
///
/// Vertices are registered as edges reference them (or explicitly as isolated
/// vertices). Dense index `i` is the `i`-th vertex in first-seen order.
#[derive(Debug, Clone)]
pub struct Graph {
    config: GraphConfig,

    vertices: VertexSet,

    /// Insertion order preserved; duplicates allowed unless `config.dedup_edges`
    edges: Vec<Edge>,

    /// adjacency[i] = dense indices of i's neighbours, one per incident edge
    adjacency: Vec<Vec<usize>>,

    /// At least max(capacity, vertex_count) square; parallel edges keep the lightest
    /// weight. Empty and ignored while `matrix_stale`.
    matrix: Array2<f64>,
    matrix_stale: bool,

    /// Vertices currently out through `remove_vertex`
    detached: usize,

    /// Bumped on every structural change; a restore that finds the revision its
    /// removal left behind knows nothing else changed in between
    revision: u64,
}

impl Graph {
    /// Create an empty graph declaring `capacity` vertices
    pub fn new(capacity: usize) -> Self {
        Self::with_config(GraphConfig::with_capacity(capacity))
    }

    pub fn with_config(config: GraphConfig) -> Self {
        let n = config.capacity;
        Graph {
            config,
            vertices: VertexSet::default(),
            edges: Vec::new(),
            adjacency: Vec::with_capacity(n),
            matrix: Array2::zeros((n, n)),
            matrix_stale: false,
            detached: 0,
            revision: 0,
        }
    }

    /// Build a graph from loader-supplied edge descriptors, in order
    pub fn from_descriptors<I>(capacity: usize, descriptors: I) -> Self
    where
        I: IntoIterator<Item = EdgeDescriptor>,
    {
        let mut graph = Self::new(capacity);
        for d in descriptors {
            graph.add_edge(VertexId::new(d.v1), VertexId::new(d.v2), d.weight);
        }
        graph
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Declared vertex count
    pub fn capacity(&self) -> usize {
        self.config.capacity
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

    /// Vertices ordered by identity
    pub fn sorted_vertices(&self) -> Vec<VertexId> {
        let mut sorted: Vec<VertexId> = self.vertices().collect();
        sorted.sort();
        sorted
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }

    /// Dense index of a vertex (its position in first-seen order)
    pub fn index_of(&self, v: VertexId) -> Option<usize> {
        self.vertices.get_index_of(&v)
    }

    /// Vertex at a dense index
    pub fn vertex_at(&self, idx: usize) -> Option<VertexId> {
        self.vertices.get_index(idx).copied()
    }

    /// Per-vertex neighbour lists over dense indices
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Weight matrix restricted to registered vertices (`vertex_count` square).
    ///
    /// Borrowed from the stored matrix, except while a vertex is removed, when it is
    /// built from the edge list on demand.
    pub fn adjacency_matrix(&self) -> CowArray<'_, f64, Ix2> {
        let n = self.vertex_count();
        if self.matrix_stale {
            CowArray::from(self.build_matrix(n))
        } else {
            CowArray::from(self.matrix.slice(s![..n, ..n]))
        }
    }

    /// Register a vertex with no edges. Idempotent.
    pub fn add_isolated_vertex(&mut self, v: VertexId) {
        self.register_vertex(v);
    }

    /// Append an undirected edge, registering unseen endpoints.
    ///
    /// With `dedup_edges` configured, an edge whose pair is already adjacent is skipped.
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId, weight: f64) {
        if self.config.dedup_edges && self.is_adjacent(v1, v2) {
            debug!(%v1, %v2, "skipping duplicate edge");
            return;
        }
        self.insert_edge(Edge::new(v1, v2, weight));
    }

    /// Append the edge only if `v1` and `v2` are not adjacent yet.
    ///
    /// Returns whether the edge was inserted.
    pub fn add_edge_unique(&mut self, v1: VertexId, v2: VertexId, weight: f64) -> bool {
        if self.is_adjacent(v1, v2) {
            return false;
        }
        self.insert_edge(Edge::new(v1, v2, weight));
        true
    }

    /// True iff some edge joins `v1` and `v2`, whatever its weight
    pub fn is_adjacent(&self, v1: VertexId, v2: VertexId) -> bool {
        match (self.index_of(v1), self.index_of(v2)) {
            (Some(i), Some(j)) => self.adjacency[i].contains(&j),
            _ => false,
        }
    }

    /// Number of edges incident to `v`; a self-loop counts once
    pub fn degree(&self, v: VertexId) -> GraphResult<usize> {
        self.index_of(v)
            .map(|i| self.adjacency[i].len())
            .ok_or(GraphError::VertexNotFound(v))
    }

    /// Take `v` and its incident edges out of the graph.
    ///
    /// Neighbours stay registered (possibly isolated). Dense indices of the remaining
    /// vertices shift down while the vertex is out.
    pub fn remove_vertex(&mut self, v: VertexId) -> GraphResult<RemovedVertex> {
        let position = self.index_of(v).ok_or(GraphError::VertexNotFound(v))?;
        let revision_before = self.revision;

        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.edges.len());
        for (pos, edge) in self.edges.drain(..).enumerate() {
            if edge.touches(v) {
                removed.push((pos, edge));
            } else {
                kept.push(edge);
            }
        }
        self.edges = kept;
        self.vertices.shift_remove_index(position);
        self.rebuild_adjacency();

        let matrix = if self.matrix_stale {
            None
        } else {
            self.matrix_stale = true;
            Some(std::mem::replace(&mut self.matrix, Array2::zeros((0, 0))))
        };
        self.detached += 1;
        self.revision += 1;

        debug!(vertex = %v, removed_edges = removed.len(), "vertex removed");
        Ok(RemovedVertex {
            vertex: v,
            position,
            edges: removed,
            matrix,
            revision_before,
            revision_after: self.revision,
        })
    }

    /// Undo a [`Graph::remove_vertex`], restoring vertex order and edge order.
    pub fn restore_vertex(&mut self, removed: RemovedVertex) {
        let RemovedVertex {
            vertex,
            position,
            edges,
            matrix,
            revision_before,
            revision_after,
        } = removed;

        self.vertices.shift_insert(position, vertex);
        // Ascending original positions: each insert lands where it was
        for (pos, edge) in edges {
            self.edges.insert(pos, edge);
        }
        self.rebuild_adjacency();
        self.detached = self.detached.saturating_sub(1);

        if self.revision == revision_after {
            self.revision = revision_before;
            if let Some(matrix) = matrix {
                self.matrix = matrix;
                self.matrix_stale = false;
            }
        } else {
            self.revision += 1;
        }
        if self.matrix_stale && self.detached == 0 {
            self.refresh_matrix();
        }

        debug!(%vertex, "vertex restored");
    }

    fn insert_edge(&mut self, edge: Edge) {
        let (a, b) = edge.endpoints();
        let i = self.register_vertex(a);
        let j = self.register_vertex(b);
        self.edges.push(edge);
        self.revision += 1;

        Self::link_list(&mut self.adjacency, i, j);
        if !self.matrix_stale {
            Self::link_matrix(&mut self.matrix, i, j, edge.weight);
        }
    }

    fn register_vertex(&mut self, v: VertexId) -> usize {
        let (idx, inserted) = self.vertices.insert_full(v);
        if inserted {
            self.revision += 1;
            self.adjacency.push(Vec::new());

            let count = self.vertices.len();
            if count == self.config.capacity + 1 {
                warn!(
                    capacity = self.config.capacity,
                    vertex_count = count,
                    "vertex count exceeds declared capacity"
                );
            }
            if !self.matrix_stale {
                self.grow_matrix(count);
            }
        }
        idx
    }

    /// Geometric growth: at least double, so n insertions past capacity copy O(n^2)
    fn grow_matrix(&mut self, needed: usize) {
        let current = self.matrix.nrows();
        if needed <= current {
            return;
        }
        let dim = needed.max(current * 2);
        let mut grown = Array2::zeros((dim, dim));
        grown
            .slice_mut(s![..current, ..current])
            .assign(&self.matrix);
        self.matrix = grown;
    }

    fn link_list(adjacency: &mut [Vec<usize>], i: usize, j: usize) {
        adjacency[i].push(j);
        if i != j {
            adjacency[j].push(i);
        }
    }

    fn link_matrix(matrix: &mut Array2<f64>, i: usize, j: usize, weight: f64) {
        let current = matrix[[i, j]];
        if weight != 0.0 && (current == 0.0 || weight < current) {
            matrix[[i, j]] = weight;
            matrix[[j, i]] = weight;
        }
    }

    /// Recompute the adjacency list from the vertex set and edge list
    fn rebuild_adjacency(&mut self) {
        let Graph {
            vertices,
            edges,
            adjacency,
            ..
        } = self;

        *adjacency = vec![Vec::new(); vertices.len()];
        for edge in edges.iter() {
            if let (Some(i), Some(j)) = (vertices.get_index_of(&edge.a), vertices.get_index_of(&edge.b)) {
                Self::link_list(adjacency, i, j);
            }
        }
    }

    /// Weight matrix of the current vertex set and edge list, `dim` square
    fn build_matrix(&self, dim: usize) -> Array2<f64> {
        let mut matrix = Array2::zeros((dim, dim));
        for edge in &self.edges {
            if let (Some(i), Some(j)) = (self.index_of(edge.a), self.index_of(edge.b)) {
                Self::link_matrix(&mut matrix, i, j, edge.weight);
            }
        }
        matrix
    }

    fn refresh_matrix(&mut self) {
        let dim = self.vertex_count().max(self.config.capacity);
        self.matrix = self.build_matrix(dim);
        self.matrix_stale = false;
    }
}

impl PartialEq for Graph {
    /// Same capacity, same vertices in the same order, same edges in the same order
    fn eq(&self, other: &Self) -> bool {
        self.config.capacity == other.config.capacity
            && self.vertices.iter().eq(other.vertices.iter())
            && self.edges == other.edges
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}
