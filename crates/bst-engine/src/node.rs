/// Arena-backed BST node: one key and up to two exclusively owned children.
///
/// Child links are indices into the owning [`Bst`](crate::tree::Bst)
/// arena. There are no parent pointers; a node is the root exactly when
/// the tree's `root` index points at it.
#[derive(Clone, Debug)]
pub struct BstNode<K> {
    pub value: K,
    pub left: Option<u32>,
    pub right: Option<u32>,
}

impl<K> BstNode<K> {
    pub fn new(value: K) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}
