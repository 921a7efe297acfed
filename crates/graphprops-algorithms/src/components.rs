//! Connected component counting

use super::common::GraphView;
use super::union_find::DisjointSet;

/// Number of connected components, ignoring edge direction.
///
/// Starts from one set per node and subtracts one per successful merge.
pub fn component_count(view: &GraphView) -> usize {
    let n = view.node_count;
    let mut ds = DisjointSet::new(n);
    let mut count = n;

    for u in 0..n {
        for &v in view.successors(u) {
            if ds.union(u, v) {
                count -= 1;
            }
        }
    }
    count
}
