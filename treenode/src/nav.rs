//! Read-only navigation over a binary search tree stored in a [`NodeArena`].
//!
//! Every function walks links only; none of them allocate or relink. All run
//! in O(h) where h is the height of the tree.
//!
//! # Panics
//!
//! The functions panic if they reach a handle that is not allocated, which
//! means the tree links are inconsistent.

use core::borrow::Borrow;
use core::cmp::Ordering;

use crate::arena::NodeArena;
use crate::node::NodeId;

/// Finds the node whose key equals `key` in the subtree under `root`.
pub fn search<K, V, Q>(arena: &NodeArena<K, V>, root: Option<NodeId>, key: &Q) -> Option<NodeId>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    search_by(arena, root, |node_key| key.cmp(node_key.borrow()))
}

/// Like [`search`], with `compare` giving the ordering of the wanted key
/// against a node key.
pub fn search_by<K, V, F>(arena: &NodeArena<K, V>, root: Option<NodeId>, mut compare: F) -> Option<NodeId>
where
    F: FnMut(&K) -> Ordering,
{
    let mut current = root;
    while let Some(id) = current {
        let node = arena.node(id);
        current = match compare(node.key()) {
            Ordering::Equal => return Some(id),
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
        };
    }
    None
}

/// Leftmost node of the subtree rooted at `x`.
pub fn minimum<K, V>(arena: &NodeArena<K, V>, mut x: NodeId) -> NodeId {
    while let Some(left) = arena.left(x) {
        x = left;
    }
    x
}

/// Rightmost node of the subtree rooted at `x`.
pub fn maximum<K, V>(arena: &NodeArena<K, V>, mut x: NodeId) -> NodeId {
    while let Some(right) = arena.right(x) {
        x = right;
    }
    x
}

/// In-order successor of `x`, or `None` if `x` holds the largest key.
pub fn successor<K, V>(arena: &NodeArena<K, V>, x: NodeId) -> Option<NodeId> {
    if let Some(right) = arena.right(x) {
        return Some(minimum(arena, right));
    }
    let mut child = x;
    let mut ancestor = arena.parent(x);
    while let Some(up) = ancestor {
        if arena.right(up) != Some(child) {
            break;
        }
        child = up;
        ancestor = arena.parent(up);
    }
    ancestor
}

/// In-order predecessor of `x`, or `None` if `x` holds the smallest key.
pub fn predecessor<K, V>(arena: &NodeArena<K, V>, x: NodeId) -> Option<NodeId> {
    if let Some(left) = arena.left(x) {
        return Some(maximum(arena, left));
    }
    let mut child = x;
    let mut ancestor = arena.parent(x);
    while let Some(up) = ancestor {
        if arena.left(up) != Some(child) {
            break;
        }
        child = up;
        ancestor = arena.parent(up);
    }
    ancestor
}

/// Root of the tree containing `x`.
pub fn root_of<K, V>(arena: &NodeArena<K, V>, mut x: NodeId) -> NodeId {
    while let Some(parent) = arena.parent(x) {
        x = parent;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds
    ///
    /// ```text
    ///        5
    ///      /   \
    ///     3     8
    ///    / \   / \
    ///   1   4 7   9
    /// ```
    fn sample() -> (NodeArena<i32, ()>, NodeId, [NodeId; 10]) {
        let mut arena = NodeArena::new();
        let mut ids = [NodeId(usize::MAX); 10];
        for key in [5, 3, 8, 1, 4, 7, 9] {
            ids[key as usize] = arena.alloc(key, ());
        }
        arena.link_left(ids[5], ids[3]).unwrap();
        arena.link_right(ids[5], ids[8]).unwrap();
        arena.link_left(ids[3], ids[1]).unwrap();
        arena.link_right(ids[3], ids[4]).unwrap();
        arena.link_left(ids[8], ids[7]).unwrap();
        arena.link_right(ids[8], ids[9]).unwrap();
        (arena, ids[5], ids)
    }

    #[test]
    fn test_search_with_custom_order() {
        let (arena, root, ids) = sample();
        let found = search_by(&arena, Some(root), |key| 4.cmp(key));
        assert_eq!(found, Some(ids[4]));
        assert_eq!(search_by(&arena, Some(root), |key| 6.cmp(key)), None);
    }

    #[test]
    fn test_root_of_every_node() {
        let (arena, root, ids) = sample();
        for key in [5, 3, 8, 1, 4, 7, 9] {
            assert_eq!(root_of(&arena, ids[key]), root);
        }
    }

    #[test]
    fn test_single_node_tree() {
        let mut arena = NodeArena::new();
        let only = arena.alloc("k", 1);

        assert_eq!(minimum(&arena, only), only);
        assert_eq!(maximum(&arena, only), only);
        assert_eq!(successor(&arena, only), None);
        assert_eq!(predecessor(&arena, only), None);
        assert_eq!(search(&arena, Some(only), "k"), Some(only));
        assert_eq!(search(&arena, None, "k"), None);
    }
}
