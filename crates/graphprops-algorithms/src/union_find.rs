//! Disjoint-set forest over dense node indices `0..n`
//!
//! Used by Kruskal's MST and connected-component counting.

/// Union-Find data structure with path compression and union by rank
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl DisjointSet {
    /// One singleton set per index in `0..size`
    pub fn new(size: usize) -> Self {
        DisjointSet {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    /// Representative (root) of the set containing `i`
    pub fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            self.parent[i] = self.find(self.parent[i]); // Path compression
        }
        self.parent[i]
    }

    /// Merge the sets containing `i` and `j`.
    ///
    /// Returns false when both were already in the same set.
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        if self.rank[root_i] < self.rank[root_j] {
            self.parent[root_i] = root_j;
        } else if self.rank[root_i] > self.rank[root_j] {
            self.parent[root_j] = root_i;
        } else {
            self.parent[root_j] = root_i;
            self.rank[root_i] += 1;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut ds = DisjointSet::new(4);
        for i in 0..4 {
            assert_eq!(ds.find(i), i);
        }
    }

    #[test]
    fn test_union_and_find() {
        let mut ds = DisjointSet::new(6);
        assert!(ds.union(0, 1));
        assert!(ds.union(2, 3));
        assert!(ds.union(1, 3));
        assert!(!ds.union(0, 2)); // Already joined through 1-3

        let root = ds.find(0);
        assert_eq!(ds.find(1), root);
        assert_eq!(ds.find(2), root);
        assert_eq!(ds.find(3), root);
        assert_ne!(ds.find(4), root);
        assert_ne!(ds.find(4), ds.find(5));
    }

    #[test]
    fn test_find_returns_a_root() {
        let mut ds = DisjointSet::new(8);
        for i in 1..8 {
            ds.union(i - 1, i);
        }
        for i in 0..8 {
            let root = ds.find(i);
            assert_eq!(ds.find(root), root);
            assert_eq!(ds.parent[root], root);
        }
    }

    #[test]
    fn test_rank_keeps_forest_shallow() {
        // Pairwise merging: height grows by one per doubling
        let n = 64;
        let mut ds = DisjointSet::new(n);
        let mut step = 1;
        while step < n {
            for i in (0..n).step_by(step * 2) {
                ds.union(i, i + step);
            }
            step *= 2;
        }
        assert!(ds.rank.iter().all(|&r| r <= 6));
    }
}
