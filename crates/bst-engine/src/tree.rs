//! The tree engine: structural mutation, path-recorded queries, and
//! highlight state.

use crate::node::BstNode;
use crate::outcome::{Extremum, Insertion, Neighbor, Removal, Search, SearchMode};

/// Path-instrumented binary search tree.
///
/// Nodes live in a `Vec` arena addressed by `u32`; `root` is an index
/// into it. Slots vacated by [`remove`](Bst::remove) are kept on a free
/// list and handed back to later inserts, so the arena never holds more
/// slots than the peak node count.
///
/// No balancing is performed: tree shape is purely insertion-order
/// dependent. Duplicate keys are rejected at insert.
///
/// `highlighted_path` and `highlighted_nodes` are presentation
/// annotations consumed by the layout projection. They may reference
/// values no longer in the tree (stale entries simply highlight
/// nothing), and structural operations never touch them — callers decide
/// whether to apply an operation's returned path as the new highlight.
pub struct Bst<K> {
    pub(crate) arena: Vec<BstNode<K>>,
    pub(crate) free: Vec<u32>,
    pub(crate) root: Option<u32>,
    pub(crate) highlighted_path: Vec<K>,
    pub(crate) highlighted_nodes: Vec<K>,
}

impl<K> Bst<K> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            free: Vec::new(),
            root: None,
            highlighted_path: Vec::new(),
            highlighted_nodes: Vec::new(),
        }
    }

    /// Number of nodes currently in the tree.
    pub fn len(&self) -> usize {
        self.arena.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Tree height: 0 for an empty tree, 1 for a lone root.
    pub fn height(&self) -> usize {
        self.height_at(self.root)
    }

    fn height_at(&self, node: Option<u32>) -> usize {
        match node {
            None => 0,
            Some(i) => {
                let n = &self.arena[i as usize];
                1 + self.height_at(n.left).max(self.height_at(n.right))
            }
        }
    }

    /// Discards the entire node graph and resets highlight state.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.root = None;
        self.clear_highlight();
    }

    /// Replaces the highlighted path wholesale (no merge).
    pub fn set_highlight_path(&mut self, path: Vec<K>) {
        self.highlighted_path = path;
    }

    /// Resets both highlight annotations to empty.
    pub fn clear_highlight(&mut self) {
        self.highlighted_path.clear();
        self.highlighted_nodes.clear();
    }

    fn alloc(&mut self, value: K) -> u32 {
        match self.free.pop() {
            Some(idx) => {
                self.arena[idx as usize] = BstNode::new(value);
                idx
            }
            None => {
                self.arena.push(BstNode::new(value));
                (self.arena.len() - 1) as u32
            }
        }
    }

    fn release(&mut self, idx: u32) {
        self.arena[idx as usize].left = None;
        self.arena[idx as usize].right = None;
        self.free.push(idx);
    }
}

impl<K> Default for Bst<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq> Bst<K> {
    /// Replaces the independently highlighted node set, deduplicated.
    pub fn set_highlight_nodes(&mut self, nodes: Vec<K>) {
        self.highlighted_nodes.clear();
        for value in nodes {
            if !self.highlighted_nodes.contains(&value) {
                self.highlighted_nodes.push(value);
            }
        }
    }

    pub fn highlighted_path(&self) -> &[K] {
        &self.highlighted_path
    }

    pub fn highlighted_nodes(&self) -> &[K] {
        &self.highlighted_nodes
    }
}

impl<K: Copy + PartialOrd> Bst<K> {
    /// Inserts `value` if absent, descending from the root and recording
    /// every visited value. On success the new leaf's value is the last
    /// path entry; on a duplicate the path ends at the existing node and
    /// `inserted` is `false`.
    pub fn insert(&mut self, value: K) -> Insertion<K> {
        let mut path = Vec::new();

        let Some(mut curr) = self.root else {
            let node = self.alloc(value);
            self.root = Some(node);
            path.push(value);
            return Insertion {
                inserted: true,
                path,
            };
        };

        loop {
            let curr_value = self.arena[curr as usize].value;
            path.push(curr_value);
            if value < curr_value {
                match self.arena[curr as usize].left {
                    Some(l) => curr = l,
                    None => {
                        let node = self.alloc(value);
                        self.arena[curr as usize].left = Some(node);
                        path.push(value);
                        return Insertion {
                            inserted: true,
                            path,
                        };
                    }
                }
            } else if value > curr_value {
                match self.arena[curr as usize].right {
                    Some(r) => curr = r,
                    None => {
                        let node = self.alloc(value);
                        self.arena[curr as usize].right = Some(node);
                        path.push(value);
                        return Insertion {
                            inserted: true,
                            path,
                        };
                    }
                }
            } else {
                return Insertion {
                    inserted: false,
                    path,
                };
            }
        }
    }

    /// Descends from the root comparing against `value`, recording the
    /// path. In [`SearchMode::LowerBound`], a dead end reports the local
    /// lower-bound candidate described on [`Search::lower_bound`].
    pub fn search(&self, value: K, mode: SearchMode) -> Search<K> {
        let mut path = Vec::new();
        let mut curr = self.root;

        while let Some(i) = curr {
            let node_value = self.arena[i as usize].value;
            path.push(node_value);
            if value == node_value {
                return Search {
                    found: true,
                    path,
                    node: Some(node_value),
                    lower_bound: None,
                };
            }
            if value < node_value {
                let left = self.arena[i as usize].left;
                if mode == SearchMode::LowerBound && left.is_none() {
                    return Search {
                        found: false,
                        path,
                        node: None,
                        lower_bound: Some(node_value),
                    };
                }
                curr = left;
            } else {
                let right = self.arena[i as usize].right;
                if mode == SearchMode::LowerBound && right.is_none() {
                    return Search {
                        found: false,
                        path,
                        node: None,
                        lower_bound: None,
                    };
                }
                curr = right;
            }
        }

        Search {
            found: false,
            path,
            node: None,
            lower_bound: None,
        }
    }

    /// Leftmost value, with the descent path. `None` on an empty tree.
    pub fn find_min(&self) -> Option<Extremum<K>> {
        self.root.map(|r| self.subtree_min(r))
    }

    /// Rightmost value, with the descent path. `None` on an empty tree.
    pub fn find_max(&self) -> Option<Extremum<K>> {
        self.root.map(|r| self.subtree_max(r))
    }

    pub(crate) fn subtree_min(&self, start: u32) -> Extremum<K> {
        let mut path = Vec::new();
        let mut curr = start;
        while let Some(l) = self.arena[curr as usize].left {
            path.push(self.arena[curr as usize].value);
            curr = l;
        }
        let value = self.arena[curr as usize].value;
        path.push(value);
        Extremum { value, path }
    }

    pub(crate) fn subtree_max(&self, start: u32) -> Extremum<K> {
        let mut path = Vec::new();
        let mut curr = start;
        while let Some(r) = self.arena[curr as usize].right {
            path.push(self.arena[curr as usize].value);
            curr = r;
        }
        let value = self.arena[curr as usize].value;
        path.push(value);
        Extremum { value, path }
    }

    /// Deletes the node holding `value` if present; a no-op (but still
    /// path-recording) otherwise.
    ///
    /// Two-child deletion overwrites the matched node's value with the
    /// minimum of its right subtree, then recursively removes that
    /// minimum from the right subtree — the recursion's visits are
    /// appended to the same path. The min-probe that locates the
    /// successor records its own path, which is discarded.
    pub fn remove(&mut self, value: K) -> Removal<K> {
        let mut path = Vec::new();
        self.root = self.remove_at(self.root, value, &mut path);
        Removal { path }
    }

    fn remove_at(&mut self, node: Option<u32>, value: K, path: &mut Vec<K>) -> Option<u32> {
        let idx = node?;
        let node_value = self.arena[idx as usize].value;
        path.push(node_value);

        if value < node_value {
            let left = self.arena[idx as usize].left;
            let new_left = self.remove_at(left, value, path);
            self.arena[idx as usize].left = new_left;
            return Some(idx);
        }
        if value > node_value {
            let right = self.arena[idx as usize].right;
            let new_right = self.remove_at(right, value, path);
            self.arena[idx as usize].right = new_right;
            return Some(idx);
        }

        let (left, right) = {
            let n = &self.arena[idx as usize];
            (n.left, n.right)
        };
        match (left, right) {
            (None, other) | (other, None) => {
                self.release(idx);
                other
            }
            (Some(_), Some(right)) => {
                let successor = self.subtree_min(right).value;
                self.arena[idx as usize].value = successor;
                let new_right = self.remove_at(Some(right), successor, path);
                self.arena[idx as usize].right = new_right;
                Some(idx)
            }
        }
    }

    /// Largest value strictly less than `value`, tracked along a single
    /// root descent. `value` itself need not exist in the tree.
    pub fn predecessor(&self, value: K) -> Neighbor<K> {
        let mut path = Vec::new();
        let mut curr = self.root;
        let mut pred = None;

        while let Some(i) = curr {
            let node_value = self.arena[i as usize].value;
            path.push(node_value);
            if value <= node_value {
                curr = self.arena[i as usize].left;
            } else {
                pred = Some(node_value);
                curr = self.arena[i as usize].right;
            }
        }

        Neighbor {
            found: pred.is_some(),
            value: pred,
            path,
        }
    }

    /// Smallest value strictly greater than `value`, symmetric to
    /// [`predecessor`](Bst::predecessor).
    pub fn successor(&self, value: K) -> Neighbor<K> {
        let mut path = Vec::new();
        let mut curr = self.root;
        let mut succ = None;

        while let Some(i) = curr {
            let node_value = self.arena[i as usize].value;
            path.push(node_value);
            if value >= node_value {
                curr = self.arena[i as usize].right;
            } else {
                succ = Some(node_value);
                curr = self.arena[i as usize].left;
            }
        }

        Neighbor {
            found: succ.is_some(),
            value: succ,
            path,
        }
    }

    /// Checks the strict BST order invariant and the arena bookkeeping
    /// (every reachable node counted, no slot reachable twice).
    pub fn assert_valid(&self) -> Result<(), String>
    where
        K: std::fmt::Debug,
    {
        let keys = self.inorder();
        for pair in keys.windows(2) {
            if !(pair[0] < pair[1]) {
                return Err(format!(
                    "BST order violated: {:?} is not less than {:?}",
                    pair[0], pair[1]
                ));
            }
        }
        if keys.len() != self.len() {
            return Err(format!(
                "reachable node count {} does not match tracked size {}",
                keys.len(),
                self.len()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(values: &[i64]) -> Bst<i64> {
        let mut bst = Bst::new();
        for &v in values {
            bst.insert(v);
        }
        bst
    }

    #[test]
    fn insert_records_descent_path() {
        let mut bst = Bst::new();
        assert_eq!(bst.insert(58).path, vec![58]);
        assert_eq!(bst.insert(23).path, vec![58, 23]);
        assert_eq!(bst.insert(77).path, vec![58, 77]);
        assert_eq!(bst.insert(41).path, vec![58, 23, 41]);
        assert_eq!(bst.len(), 4);
    }

    #[test]
    fn duplicate_insert_is_rejected_with_path() {
        let mut bst = tree_of(&[58, 23, 77]);
        let result = bst.insert(23);
        assert!(!result.inserted);
        assert_eq!(result.path, vec![58, 23]);
        assert_eq!(bst.len(), 3);
    }

    #[test]
    fn search_exact_hit_and_miss() {
        let bst = tree_of(&[58, 23, 77]);
        let hit = bst.search(23, SearchMode::Exact);
        assert!(hit.found);
        assert_eq!(hit.path, vec![58, 23]);
        assert_eq!(hit.node, Some(23));

        let miss = bst.search(99, SearchMode::Exact);
        assert!(!miss.found);
        assert_eq!(miss.path, vec![58, 77]);
        assert_eq!(miss.node, None);
        assert_eq!(miss.lower_bound, None);
    }

    #[test]
    fn search_lower_bound_dead_ends() {
        let bst = tree_of(&[58, 23, 77]);

        // Left descent fails: current node is the candidate.
        let left_dead_end = bst.search(20, SearchMode::LowerBound);
        assert!(!left_dead_end.found);
        assert_eq!(left_dead_end.lower_bound, Some(23));
        assert_eq!(left_dead_end.path, vec![58, 23]);

        // Right descent fails: no bound below the search point.
        let right_dead_end = bst.search(30, SearchMode::LowerBound);
        assert!(!right_dead_end.found);
        assert_eq!(right_dead_end.lower_bound, None);
        assert_eq!(right_dead_end.path, vec![58, 23]);

        let hit = bst.search(77, SearchMode::LowerBound);
        assert!(hit.found);
        assert_eq!(hit.node, Some(77));
    }

    #[test]
    fn find_min_and_max_record_paths() {
        let bst = tree_of(&[58, 23, 77, 11, 41]);
        let min = bst.find_min().unwrap();
        assert_eq!(min.value, 11);
        assert_eq!(min.path, vec![58, 23, 11]);

        let max = bst.find_max().unwrap();
        assert_eq!(max.value, 77);
        assert_eq!(max.path, vec![58, 77]);

        assert!(Bst::<i64>::new().find_min().is_none());
        assert!(Bst::<i64>::new().find_max().is_none());
    }

    #[test]
    fn remove_leaf_and_missing_value() {
        let mut bst = tree_of(&[10, 5, 15]);
        assert_eq!(bst.remove(5).path, vec![10, 5]);
        assert_eq!(bst.inorder(), vec![10, 15]);

        // Missing value: still records the failed descent.
        assert_eq!(bst.remove(7).path, vec![10]);
        assert_eq!(bst.len(), 2);
    }

    #[test]
    fn remove_single_child_splices() {
        let mut bst = tree_of(&[10, 5, 15, 12]);
        assert_eq!(bst.remove(15).path, vec![10, 15]);
        assert_eq!(bst.inorder(), vec![5, 10, 12]);
        bst.assert_valid().unwrap();
    }

    #[test]
    fn remove_two_children_overwrites_with_successor() {
        let mut bst = tree_of(&[58, 23, 77, 11, 41]);
        let result = bst.remove(58);
        assert_eq!(result.path, vec![58, 77]);
        assert_eq!(bst.inorder(), vec![11, 23, 41, 77]);
        // Root slot survives with the successor's value.
        assert_eq!(bst.search(77, SearchMode::Exact).path, vec![77]);
        bst.assert_valid().unwrap();
    }

    #[test]
    fn remove_two_children_deep_successor() {
        let mut bst = tree_of(&[50, 30, 70, 60, 80, 65]);
        let result = bst.remove(50);
        // Initial match, then the successor-removal descent.
        assert_eq!(result.path, vec![50, 70, 60]);
        assert_eq!(bst.inorder(), vec![30, 60, 65, 70, 80]);
        bst.assert_valid().unwrap();
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut bst = tree_of(&[10, 5, 15]);
        bst.remove(5);
        bst.remove(15);
        bst.insert(7);
        bst.insert(20);
        assert_eq!(bst.len(), 3);
        assert_eq!(bst.arena.len(), 3);
        bst.assert_valid().unwrap();
    }

    #[test]
    fn predecessor_and_successor_without_membership() {
        let bst = tree_of(&[58, 23, 77, 11, 41]);

        let pred = bst.predecessor(41);
        assert_eq!(pred.value, Some(23));
        assert_eq!(pred.path, vec![58, 23, 41]);

        let succ = bst.successor(41);
        assert_eq!(succ.value, Some(58));

        // Query key absent from the tree.
        assert_eq!(bst.predecessor(40).value, Some(23));
        assert_eq!(bst.successor(40).value, Some(41));

        // Off both ends.
        let below = bst.predecessor(11);
        assert!(!below.found);
        assert_eq!(below.value, None);
        let above = bst.successor(77);
        assert!(!above.found);
    }

    #[test]
    fn clear_resets_structure_and_highlights() {
        let mut bst = tree_of(&[10, 5, 15]);
        bst.set_highlight_path(vec![10, 5]);
        bst.set_highlight_nodes(vec![15]);
        bst.clear();
        assert!(bst.is_empty());
        assert_eq!(bst.len(), 0);
        assert!(bst.highlighted_path().is_empty());
        assert!(bst.highlighted_nodes().is_empty());
    }

    #[test]
    fn highlight_nodes_are_deduplicated() {
        let mut bst = tree_of(&[10, 5, 15]);
        bst.set_highlight_nodes(vec![5, 15, 5, 5, 15]);
        assert_eq!(bst.highlighted_nodes(), &[5, 15]);
    }

    #[test]
    fn height_counts_levels() {
        assert_eq!(Bst::<i64>::new().height(), 0);
        assert_eq!(tree_of(&[10]).height(), 1);
        assert_eq!(tree_of(&[10, 5, 15]).height(), 2);
        assert_eq!(tree_of(&[1, 2, 3, 4]).height(), 4);
    }
}
