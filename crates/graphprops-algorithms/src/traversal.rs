//! Depth-first traversal and connectivity
//!
//! The DFS uses an explicit stack so deep path graphs cannot overflow the call stack.

use super::common::GraphView;

/// Mark every node reachable from `start` by following successors.
///
/// Returns an empty vector if `start` is out of range.
pub fn reachable_from(view: &GraphView, start: usize) -> Vec<bool> {
    if start >= view.node_count {
        return Vec::new();
    }

    let mut visited = vec![false; view.node_count];
    let mut stack = vec![start];
    visited[start] = true;

    while let Some(u) = stack.pop() {
        for &v in view.successors(u) {
            if !visited[v] {
                visited[v] = true;
                stack.push(v);
            }
        }
    }

    visited
}

/// True iff a DFS from `start` visits every node of the view.
///
/// An empty view is connected. For directed views this is reachability from `start`,
/// so callers wanting undirected connectivity must store both directions.
pub fn is_connected(view: &GraphView, start: usize) -> bool {
    if view.node_count == 0 {
        return true;
    }
    let visited = reachable_from(view, start);
    !visited.is_empty() && visited.iter().all(|&seen| seen)
}
