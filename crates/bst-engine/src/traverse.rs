//! Traversals and the order-statistic query.
//!
//! Each call computes a fresh sequence; no iterator state persists
//! between calls.

use crate::outcome::{SearchMode, Selection};
use crate::tree::Bst;

#[derive(Clone, Copy, PartialEq)]
enum Order {
    In,
    Pre,
    Post,
}

impl<K: Copy + PartialOrd> Bst<K> {
    /// Strictly increasing sequence of all keys.
    pub fn inorder(&self) -> Vec<K> {
        self.collect(Order::In)
    }

    pub fn preorder(&self) -> Vec<K> {
        self.collect(Order::Pre)
    }

    pub fn postorder(&self) -> Vec<K> {
        self.collect(Order::Post)
    }

    fn collect(&self, order: Order) -> Vec<K> {
        let mut acc = Vec::with_capacity(self.len());
        self.walk(self.root, order, &mut acc);
        acc
    }

    fn walk(&self, node: Option<u32>, order: Order, acc: &mut Vec<K>) {
        let Some(i) = node else { return };
        let n = &self.arena[i as usize];
        let (value, left, right) = (n.value, n.left, n.right);
        if order == Order::Pre {
            acc.push(value);
        }
        self.walk(left, order, acc);
        if order == Order::In {
            acc.push(value);
        }
        self.walk(right, order, acc);
        if order == Order::Post {
            acc.push(value);
        }
    }

    /// k-th smallest key, 1-indexed. Materializes the in-order sequence,
    /// indexes into it, and re-derives the value's path via exact search,
    /// so each call is O(n). `k` outside `[1, len]` yields `found: false`
    /// with an empty path.
    pub fn select(&self, k: usize) -> Selection<K> {
        let sequence = self.inorder();
        if k == 0 || k > sequence.len() {
            return Selection {
                found: false,
                value: None,
                path: Vec::new(),
            };
        }
        let value = sequence[k - 1];
        let hit = self.search(value, SearchMode::Exact);
        Selection {
            found: true,
            value: Some(value),
            path: hit.path,
        }
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
    fn traversal_orders() {
        let bst = tree_of(&[58, 23, 77, 11, 41]);
        assert_eq!(bst.inorder(), vec![11, 23, 41, 58, 77]);
        assert_eq!(bst.preorder(), vec![58, 23, 11, 41, 77]);
        assert_eq!(bst.postorder(), vec![11, 41, 23, 77, 58]);
    }

    #[test]
    fn traversals_on_empty_tree() {
        let bst = Bst::<i64>::new();
        assert!(bst.inorder().is_empty());
        assert!(bst.preorder().is_empty());
        assert!(bst.postorder().is_empty());
    }

    #[test]
    fn select_matches_inorder_index() {
        let bst = tree_of(&[10, 5, 15]);
        let second = bst.select(2);
        assert!(second.found);
        assert_eq!(second.value, Some(10));
        assert_eq!(second.path, vec![10]);

        let third = bst.select(3);
        assert_eq!(third.value, Some(15));
        assert_eq!(third.path, vec![10, 15]);
    }

    #[test]
    fn select_out_of_range() {
        let bst = tree_of(&[10, 5, 15]);
        for k in [0usize, 4, 100] {
            let miss = bst.select(k);
            assert!(!miss.found);
            assert_eq!(miss.value, None);
            assert!(miss.path.is_empty());
        }
        assert!(!Bst::<i64>::new().select(1).found);
    }
}
