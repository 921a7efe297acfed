//! Minimum Spanning Tree algorithms
//!
//! Implements Prim's algorithm over a dense weight matrix and Kruskal's
//! algorithm over an edge list with a disjoint-set forest.

use super::common::IndexedEdge;
use super::union_find::DisjointSet;
use ndarray::ArrayView2;
use thiserror::Error;

/// Reasons a spanning tree cannot be produced
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MstError {
    #[error("cannot build a spanning tree of an empty graph")]
    EmptyGraph,

    #[error("weight matrix must be square, got {rows}x{cols}")]
    NonSquareMatrix { rows: usize, cols: usize },

    #[error("start node {start} out of range for {node_count} nodes")]
    StartOutOfRange { start: usize, node_count: usize },

    #[error("edge #{edge} references a node outside 0..{node_count}")]
    EndpointOutOfRange { edge: usize, node_count: usize },

    #[error("only {reached} of {node_count} nodes are reachable from the start node")]
    Unreachable { reached: usize, node_count: usize },

    #[error("graph is disconnected ({components} components)")]
    Disconnected { components: usize },
}

/// Tree produced by Prim's algorithm
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimTree {
    /// Root of the tree
    pub start: usize,
    /// `parent[i]` is `i`'s predecessor in the tree; `None` only for `start`
    pub parent: Vec<Option<usize>>,
    /// `key[i]` is the weight of the tree edge into `i` (0 for `start`)
    pub key: Vec<f64>,
}

impl PrimTree {
    /// Tree edges as `(parent, child, weight)`, ordered by child index
    pub fn edges(&self) -> Vec<IndexedEdge> {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| parent.map(|p| (p, child, self.key[child])))
            .collect()
    }

    pub fn total_weight(&self) -> f64 {
        self.edges().iter().map(|&(_, _, w)| w).sum()
    }
}

/// Prim's Algorithm for Minimum Spanning Tree
///
/// `matrix[[u, v]]` is the weight of the edge between `u` and `v`; 0 means no edge.
/// Each round picks the cheapest node not yet in the tree (linear scan, first minimum
/// in index order wins ties), then relaxes its neighbours. O(V^2).
///
/// Fails with [`MstError::Unreachable`] instead of returning a partial tree when
/// some node cannot be reached from `start`.
pub fn prim_mst(matrix: ArrayView2<'_, f64>, start: usize) -> Result<PrimTree, MstError> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(MstError::NonSquareMatrix { rows, cols });
    }
    let n = rows;
    if n == 0 {
        return Err(MstError::EmptyGraph);
    }
    if start >= n {
        return Err(MstError::StartOutOfRange { start, node_count: n });
    }

    let mut key = vec![f64::INFINITY; n];
    let mut parent = vec![None; n];
    let mut in_tree = vec![false; n];
    key[start] = 0.0;

    for reached in 0..n {
        let u = min_key(&key, &in_tree).ok_or(MstError::Unreachable {
            reached,
            node_count: n,
        })?;
        in_tree[u] = true;

        for v in 0..n {
            let weight = matrix[[u, v]];
            if weight != 0.0 && !in_tree[v] && weight < key[v] {
                parent[v] = Some(u);
                key[v] = weight;
            }
        }
    }

    Ok(PrimTree { start, parent, key })
}

/// Node outside the tree with the smallest finite key
fn min_key(key: &[f64], in_tree: &[bool]) -> Option<usize> {
    let mut min = f64::INFINITY;
    let mut min_index = None;

    for (v, &k) in key.iter().enumerate() {
        if !in_tree[v] && k < min {
            min = k;
            min_index = Some(v);
        }
    }
    min_index
}

/// Tree produced by Kruskal's algorithm
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct KruskalTree {
    /// Accepted edges, in acceptance order
    pub edges: Vec<IndexedEdge>,
    /// Position of each accepted edge in the input list
    pub edge_indices: Vec<usize>,
    pub total_weight: f64,
}

/// Kruskal's Algorithm for Minimum Spanning Tree
///
/// Edges are scanned in ascending weight order; equal weights keep their input
/// order, so the result is deterministic. The input slice is not reordered.
///
/// Fails with [`MstError::Disconnected`] when the edges run out before
/// `node_count - 1` of them are accepted.
pub fn kruskal_mst(node_count: usize, edges: &[IndexedEdge]) -> Result<KruskalTree, MstError> {
    if node_count == 0 {
        return Err(MstError::EmptyGraph);
    }
    if let Some(edge) = edges
        .iter()
        .position(|&(u, v, _)| u >= node_count || v >= node_count)
    {
        return Err(MstError::EndpointOutOfRange { edge, node_count });
    }

    // Stable sort of an index snapshot
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&a, &b| edges[a].2.total_cmp(&edges[b].2));

    let required = node_count - 1;
    let mut ds = DisjointSet::new(node_count);
    let mut accepted = Vec::with_capacity(required);
    let mut edge_indices = Vec::with_capacity(required);
    let mut total_weight = 0.0;

    for idx in order {
        if accepted.len() == required {
            break;
        }
        let (u, v, weight) = edges[idx];
        // Endpoints already share a set: the edge would close a cycle
        if ds.union(u, v) {
            accepted.push((u, v, weight));
            edge_indices.push(idx);
            total_weight += weight;
        }
    }

    if accepted.len() < required {
        return Err(MstError::Disconnected {
            components: node_count - accepted.len(),
        });
    }

    Ok(KruskalTree {
        edges: accepted,
        edge_indices,
        total_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn matrix_from_edges(n: usize, edges: &[IndexedEdge]) -> Array2<f64> {
        let mut matrix = Array2::zeros((n, n));
        for &(u, v, w) in edges {
            matrix[[u, v]] = w;
            matrix[[v, u]] = w;
        }
        matrix
    }

    fn sample_edges() -> Vec<IndexedEdge> {
        vec![
            (0, 1, 10.0),
            (0, 2, 6.0),
            (0, 3, 5.0),
            (1, 3, 15.0),
            (2, 3, 4.0),
        ]
    }

    #[test]
    fn test_prim_mst() {
        // Triangle: 0-1 (1), 1-2 (2), 0-2 (10)
        // MST should be 0-1, 1-2. Total 3.
        let matrix = matrix_from_edges(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 10.0)]);

        let tree = prim_mst(matrix.view(), 0).unwrap();
        assert_eq!(tree.parent, vec![None, Some(0), Some(1)]);
        assert_eq!(tree.total_weight(), 3.0);
        assert_eq!(tree.edges(), vec![(0, 1, 1.0), (1, 2, 2.0)]);
    }

    #[test]
    fn test_prim_from_other_start() {
        let matrix = matrix_from_edges(4, &sample_edges());
        let tree = prim_mst(matrix.view(), 2).unwrap();

        assert_eq!(tree.parent[2], None);
        assert_eq!(tree.parent[3], Some(2));
        assert_eq!(tree.parent[0], Some(3));
        assert_eq!(tree.parent[1], Some(0));
        assert_eq!(tree.total_weight(), 19.0);
    }

    #[test]
    fn test_prim_ties_pick_first_minimum() {
        // 4-cycle 0-1-2-3-0, all weights 1. After 0, nodes 1 and 3 tie; 1 comes
        // first in index order, so 2 hangs off 1 and 3 stays attached to 0.
        let matrix = matrix_from_edges(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0)]);

        let tree = prim_mst(matrix.view(), 0).unwrap();
        assert_eq!(tree.parent, vec![None, Some(0), Some(1), Some(0)]);
        assert_eq!(tree.key, vec![0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_prim_rejects_bad_input() {
        let empty = Array2::<f64>::zeros((0, 0));
        assert_eq!(prim_mst(empty.view(), 0), Err(MstError::EmptyGraph));

        let rect = Array2::<f64>::zeros((2, 3));
        assert_eq!(
            prim_mst(rect.view(), 0),
            Err(MstError::NonSquareMatrix { rows: 2, cols: 3 })
        );

        let matrix = matrix_from_edges(2, &[(0, 1, 1.0)]);
        assert_eq!(
            prim_mst(matrix.view(), 2),
            Err(MstError::StartOutOfRange { start: 2, node_count: 2 })
        );
    }

    #[test]
    fn test_prim_disconnected() {
        // 0-1 and 2-3 are separate
        let matrix = matrix_from_edges(4, &[(0, 1, 1.0), (2, 3, 1.0)]);
        assert_eq!(
            prim_mst(matrix.view(), 0),
            Err(MstError::Unreachable { reached: 2, node_count: 4 })
        );
    }

    #[test]
    fn test_prim_single_node() {
        let matrix = Array2::<f64>::zeros((1, 1));
        let tree = prim_mst(matrix.view(), 0).unwrap();
        assert!(tree.edges().is_empty());
        assert_eq!(tree.total_weight(), 0.0);
    }

    #[test]
    fn test_kruskal_mst() {
        let tree = kruskal_mst(4, &sample_edges()).unwrap();

        assert_eq!(tree.edges, vec![(2, 3, 4.0), (0, 3, 5.0), (0, 1, 10.0)]);
        assert_eq!(tree.edge_indices, vec![4, 2, 0]);
        assert_eq!(tree.total_weight, 19.0);
    }

    #[test]
    fn test_kruskal_ties_keep_input_order() {
        // Square with equal weights: first three edges in input order win
        let edges = vec![(2, 3, 1.0), (0, 1, 1.0), (1, 2, 1.0), (3, 0, 1.0)];
        let tree = kruskal_mst(4, &edges).unwrap();
        assert_eq!(tree.edge_indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_kruskal_skips_cycle_and_loops() {
        let edges = vec![(0, 0, 0.5), (0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.5)];
        let tree = kruskal_mst(3, &edges).unwrap();
        assert_eq!(tree.edges, vec![(0, 1, 1.0), (1, 2, 1.0)]);
    }

    #[test]
    fn test_kruskal_disconnected() {
        let edges = vec![(0, 1, 1.0), (2, 3, 1.0)];
        assert_eq!(
            kruskal_mst(5, &edges),
            Err(MstError::Disconnected { components: 3 })
        );
    }

    #[test]
    fn test_kruskal_rejects_bad_input() {
        assert_eq!(kruskal_mst(0, &[]), Err(MstError::EmptyGraph));
        assert_eq!(
            kruskal_mst(2, &[(0, 1, 1.0), (1, 2, 1.0)]),
            Err(MstError::EndpointOutOfRange { edge: 1, node_count: 2 })
        );

        let single = kruskal_mst(1, &[]).unwrap();
        assert!(single.edges.is_empty());
    }

    #[test]
    fn test_prim_and_kruskal_agree_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let n = rng.gen_range(2..12);
            let mut edges = Vec::new();
            // Spanning path keeps the graph connected
            for v in 1..n {
                edges.push((v - 1, v, f64::from(rng.gen_range(1..20u32))));
            }
            for _ in 0..rng.gen_range(0..n * 2) {
                let u = rng.gen_range(0..n);
                let v = rng.gen_range(0..n);
                if u != v {
                    edges.push((u, v, f64::from(rng.gen_range(1..20u32))));
                }
            }

            // The matrix keeps one weight per pair, so feed Kruskal the same view
            let mut matrix = Array2::<f64>::zeros((n, n));
            for &(u, v, w) in &edges {
                if matrix[[u, v]] == 0.0 || w < matrix[[u, v]] {
                    matrix[[u, v]] = w;
                    matrix[[v, u]] = w;
                }
            }

            let prim = prim_mst(matrix.view(), 0).unwrap();
            let kruskal = kruskal_mst(n, &edges).unwrap();

            assert_eq!(kruskal.edges.len(), n - 1);
            assert_eq!(prim.edges().len(), n - 1);
            assert_eq!(prim.total_weight(), kruskal.total_weight);
        }
    }
}
