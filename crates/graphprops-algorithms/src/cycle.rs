//! Directed cycle detection
//!
//! Colored DFS: a node is unvisited, on the current DFS path, or fully explored.
//! Reaching a node that is still on the path is a back edge, i.e. a cycle.

use super::common::GraphView;

/// True if the directed view contains a cycle (self-loops included).
///
/// Every node is tried as a DFS root, so disconnected views are fully covered.
pub fn has_cycle(view: &GraphView) -> bool {
    let n = view.node_count;
    let mut visited = vec![false; n];
    let mut on_stack = vec![false; n];

    (0..n).any(|root| has_cycle_from(view, root, &mut visited, &mut on_stack))
}

/// DFS from `root`, returning true on the first back edge.
///
/// `on_stack[u]` is cleared once all of `u`'s successors are explored, so a node
/// reached again later through a different path is not mistaken for an ancestor.
fn has_cycle_from(
    view: &GraphView,
    root: usize,
    visited: &mut [bool],
    on_stack: &mut [bool],
) -> bool {
    if visited[root] {
        return false;
    }

    visited[root] = true;
    on_stack[root] = true;
    // (node, position of the next successor to explore)
    let mut stack = vec![(root, 0usize)];

    while let Some(frame) = stack.last_mut() {
        let (u, next) = *frame;
        let successors = view.successors(u);

        if next < successors.len() {
            frame.1 += 1;
            let v = successors[next];

            if on_stack[v] {
                return true;
            }
            if !visited[v] {
                visited[v] = true;
                on_stack[v] = true;
                stack.push((v, 0));
            }
        } else {
            on_stack[u] = false;
            stack.pop();
        }
    }

    false
}
