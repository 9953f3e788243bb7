//! Disjoint sets over elements `1..=n`.
//!
//! Union by size with path compression. A root stores its set size
//! negated; every other element stores the parent pointer toward the
//! root. Slot 0 is unused so vertex ids index directly.

/// Union-find (disjoint-set) structure.
///
/// The preconditions on [`find`](UnionFind::find) and
/// [`join`](UnionFind::join) are structural: violating them is a caller
/// bug, and the methods panic rather than corrupt the partition.
#[derive(Debug, Clone)]
pub struct UnionFind {
    // nodes[i] < 0: i is a root and -nodes[i] is the set size.
    // nodes[i] >= 0: parent pointer toward the root.
    nodes: Vec<i64>,
}

impl UnionFind {
    /// `n` singleton sets, each element its own root with size 1.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn new(n: usize) -> Self {
        assert!(n >= 1, "union-find needs at least one element");
        Self {
            nodes: vec![-1; n + 1],
        }
    }

    /// Number of elements (not sets).
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Always false: the structure holds at least one element.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Representative (root) of `x`'s set.
    ///
    /// Every node on the walked path is repointed directly at the root,
    /// so repeated lookups on the same element stay cheap.
    ///
    /// # Panics
    /// Panics if `x` is outside `[1, n]`.
    pub fn find(&mut self, x: usize) -> usize {
        assert!(
            x >= 1 && x < self.nodes.len(),
            "element {x} outside [1, {}]",
            self.nodes.len() - 1
        );
        if self.nodes[x] < 0 {
            x
        } else {
            let root = self.find(self.nodes[x] as usize);
            self.nodes[x] = root as i64;
            root
        }
    }

    /// Merge the sets rooted at `r` and `s`.
    ///
    /// The smaller set is attached under the larger set's root and the
    /// surviving root's size becomes the sum; a size tie keeps `r` as
    /// the root.
    ///
    /// # Panics
    /// Panics unless `r != s`, both are in `[1, n]`, and both are
    /// current roots.
    pub fn join(&mut self, r: usize, s: usize) {
        assert_ne!(r, s, "cannot join a set with itself");
        assert!(r >= 1 && r < self.nodes.len(), "root {r} out of range");
        assert!(s >= 1 && s < self.nodes.len(), "root {s} out of range");
        assert!(self.nodes[r] < 0, "{r} is not a root");
        assert!(self.nodes[s] < 0, "{s} is not a root");

        let size_r = -self.nodes[r];
        let size_s = -self.nodes[s];

        if size_r >= size_s {
            self.nodes[s] = r as i64;
            self.nodes[r] -= size_s;
        } else {
            self.nodes[r] = s as i64;
            self.nodes[s] -= size_r;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_roots() {
        let mut sets = UnionFind::new(4);
        assert_eq!(sets.len(), 4);
        for x in 1..=4 {
            assert_eq!(sets.find(x), x);
        }
    }

    #[test]
    fn join_merges_and_find_agrees() {
        let mut sets = UnionFind::new(6);
        let a = sets.find(2);
        let b = sets.find(5);
        sets.join(a, b);
        assert_eq!(sets.find(2), sets.find(5));
        // find is idempotent
        let root = sets.find(2);
        assert_eq!(sets.find(root), sets.find(2));
    }

    #[test]
    fn size_tie_keeps_first_root() {
        let mut sets = UnionFind::new(2);
        sets.join(1, 2);
        assert_eq!(sets.find(2), 1);
    }

    #[test]
    fn smaller_set_goes_under_larger() {
        let mut sets = UnionFind::new(3);
        sets.join(2, 3); // {2, 3} rooted at 2
        sets.join(1, 2); // singleton 1 attaches under 2
        assert_eq!(sets.find(1), 2);
        assert_eq!(sets.find(3), 2);
    }

    #[test]
    fn n_minus_one_joins_leave_one_root() {
        let n = 8;
        let mut sets = UnionFind::new(n);
        for x in 2..=n {
            let r = sets.find(1);
            let s = sets.find(x);
            if r != s {
                sets.join(r, s);
            }
        }
        let roots: Vec<usize> = (1..=n).filter(|&x| sets.find(x) == x).collect();
        assert_eq!(roots.len(), 1);
        // the surviving root carries the whole size
        assert_eq!(sets.nodes[roots[0]], -(n as i64));
    }

    #[test]
    fn find_compresses_the_walked_path() {
        let mut sets = UnionFind::new(4);
        sets.join(1, 2);
        sets.join(3, 4);
        sets.join(1, 3); // 3 now points at 1, 4 still points at 3
        assert_eq!(sets.nodes[4], 3);
        sets.find(4);
        assert_eq!(sets.nodes[4], 1);
    }

    #[test]
    #[should_panic(expected = "at least one element")]
    fn zero_elements_panics() {
        let _ = UnionFind::new(0);
    }

    #[test]
    #[should_panic(expected = "cannot join a set with itself")]
    fn joining_same_root_panics() {
        let mut sets = UnionFind::new(3);
        sets.join(1, 1);
    }

    #[test]
    #[should_panic(expected = "is not a root")]
    fn joining_non_root_panics() {
        let mut sets = UnionFind::new(3);
        sets.join(1, 2);
        sets.join(2, 3); // 2 is no longer a root
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_element_panics() {
        let mut sets = UnionFind::new(3);
        sets.join(1, 4);
    }
}
