use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use crate::arena::{NodeArena, Side};
use crate::nav;
use crate::node::{Color, NodeId};

/// Ordered map backed by a red-black tree of arena nodes.
///
/// Keys are unique. The tree owns its [`NodeArena`]; navigation is done with
/// the primitives of [`crate::nav`].
#[derive(Clone)]
pub struct RbTree<K, V> {
    arena: NodeArena<K, V>,
    root: Option<NodeId>,
}

impl<K, V> Default for RbTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> RbTree<K, V> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            root: None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Read access to the nodes, for navigation with [`crate::nav`].
    #[must_use]
    pub fn arena(&self) -> &NodeArena<K, V> {
        &self.arena
    }

    /// Node holding the smallest key.
    #[must_use]
    pub fn first(&self) -> Option<NodeId> {
        self.root.map(|root| nav::minimum(&self.arena, root))
    }

    /// Node holding the largest key.
    #[must_use]
    pub fn last(&self) -> Option<NodeId> {
        self.root.map(|root| nav::maximum(&self.arena, root))
    }

    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.first().map(|id| self.entry(id))
    }

    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.last().map(|id| self.entry(id))
    }

    fn entry(&self, id: NodeId) -> (&K, &V) {
        let node = self.arena.node(id);
        (node.key(), node.value())
    }

    /// Iterates over the entries in ascending key order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            arena: &self.arena,
            front: self.first(),
            back: self.last(),
            remaining: self.len(),
        }
    }

    /// Iterates over the entries in descending key order.
    #[must_use]
    pub fn iter_rev(&self) -> core::iter::Rev<Iter<'_, K, V>> {
        self.iter().rev()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    fn red(&self, id: Option<NodeId>) -> Option<NodeId> {
        id.filter(|&id| self.arena.color(id) == Color::Red)
    }

    fn is_black(&self, id: Option<NodeId>) -> bool {
        self.red(id).is_none()
    }

    /// Side of `parent` that `child` hangs from.
    fn side_of(&self, parent: NodeId, child: Option<NodeId>) -> Side {
        if self.arena.left(parent) == child {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Rotates `x` down towards `side`; its opposite child takes its place.
    fn rotate(&mut self, x: NodeId, side: Side) {
        let Some(y) = self.arena.child(x, side.opposite()) else {
            return;
        };
        let inner = self.arena.child(y, side);
        self.arena.set_child(x, side.opposite(), inner);
        if let Some(inner) = inner {
            self.arena.set_parent(inner, Some(x));
        }
        self.replace_child(x, Some(y));
        self.arena.set_child(y, side, Some(x));
        self.arena.set_parent(x, Some(y));
    }

    /// Points the parent of `old` (or the root) at `new`.
    fn replace_child(&mut self, old: NodeId, new: Option<NodeId>) {
        let parent = self.arena.parent(old);
        match parent {
            None => self.root = new,
            Some(parent) => {
                let side = self.side_of(parent, Some(old));
                self.arena.set_child(parent, side, new);
            }
        }
        if let Some(new) = new {
            self.arena.set_parent(new, parent);
        }
    }

    fn insert_fixup(&mut self, mut z: NodeId) {
        while let Some(parent) = self.red(self.arena.parent(z)) {
            // A red parent is never the root, so the grandparent exists
            let Some(grandparent) = self.arena.parent(parent) else {
                break;
            };
            let side = self.side_of(grandparent, Some(parent));
            let uncle = self.arena.child(grandparent, side.opposite());

            if let Some(uncle) = self.red(uncle) {
                self.arena.set_color(parent, Color::Black);
                self.arena.set_color(uncle, Color::Black);
                self.arena.set_color(grandparent, Color::Red);
                z = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.arena.child(parent, side.opposite()) == Some(z) {
                z = parent;
                self.rotate(z, side);
                parent = self.arena.parent(z).unwrap_or(parent);
            }
            self.arena.set_color(parent, Color::Black);
            self.arena.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
        }
        if let Some(root) = self.root {
            self.arena.set_color(root, Color::Black);
        }
    }

    fn remove_fixup(&mut self, mut x: Option<NodeId>, mut parent: Option<NodeId>) {
        while x != self.root && self.is_black(x) {
            let Some(p) = parent else {
                break;
            };
            let side = self.side_of(p, x);
            let Some(mut sibling) = self.arena.child(p, side.opposite()) else {
                break;
            };

            if self.arena.color(sibling) == Color::Red {
                self.arena.set_color(sibling, Color::Black);
                self.arena.set_color(p, Color::Red);
                self.rotate(p, side);
                match self.arena.child(p, side.opposite()) {
                    Some(next) => sibling = next,
                    None => break,
                }
            }

            let near = self.arena.child(sibling, side);
            let far = self.arena.child(sibling, side.opposite());
            if self.is_black(near) && self.is_black(far) {
                self.arena.set_color(sibling, Color::Red);
                x = Some(p);
                parent = self.arena.parent(p);
                continue;
            }

            if self.is_black(far) {
                if let Some(near) = near {
                    self.arena.set_color(near, Color::Black);
                }
                self.arena.set_color(sibling, Color::Red);
                self.rotate(sibling, side.opposite());
                match self.arena.child(p, side.opposite()) {
                    Some(next) => sibling = next,
                    None => break,
                }
            }

            self.arena.set_color(sibling, self.arena.color(p));
            self.arena.set_color(p, Color::Black);
            if let Some(far) = self.arena.child(sibling, side.opposite()) {
                self.arena.set_color(far, Color::Black);
            }
            self.rotate(p, side);
            x = self.root;
            parent = None;
        }
        if let Some(x) = x {
            self.arena.set_color(x, Color::Black);
        }
    }

    /// Unlinks node `z` from the tree, keeping it balanced. `z` ends up detached.
    fn unlink(&mut self, z: NodeId) {
        let z_left = self.arena.left(z);
        let z_right = self.arena.right(z);
        let mut removed_color = self.arena.color(z);

        let (x, x_parent) = match (z_left, z_right) {
            (None, _) => {
                let parent = self.arena.parent(z);
                self.replace_child(z, z_right);
                (z_right, parent)
            }
            (_, None) => {
                let parent = self.arena.parent(z);
                self.replace_child(z, z_left);
                (z_left, parent)
            }
            (Some(z_left), Some(z_right)) => {
                let y = nav::minimum(&self.arena, z_right);
                removed_color = self.arena.color(y);
                let x = self.arena.right(y);
                let x_parent = if self.arena.parent(y) == Some(z) {
                    Some(y)
                } else {
                    let y_parent = self.arena.parent(y);
                    self.replace_child(y, x);
                    self.arena.set_child(y, Side::Right, Some(z_right));
                    self.arena.set_parent(z_right, Some(y));
                    y_parent
                };
                self.replace_child(z, Some(y));
                self.arena.set_child(y, Side::Left, Some(z_left));
                self.arena.set_parent(z_left, Some(y));
                self.arena.set_color(y, self.arena.color(z));
                (x, x_parent)
            }
        };

        if removed_color == Color::Black {
            self.remove_fixup(x, x_parent);
        }

        let node = self.arena.node_mut(z);
        node.parent = None;
        node.left = None;
        node.right = None;
    }
}

impl<K: Ord, V> RbTree<K, V> {
    /// Inserts `key` with `value`. Returns the previous value if the key was present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.arena.node(id);
            parent = Some(id);
            match key.cmp(node.key()) {
                core::cmp::Ordering::Equal => {
                    return Some(core::mem::replace(self.arena.value_mut(id), value));
                }
                core::cmp::Ordering::Less => {
                    side = Side::Left;
                    current = node.left();
                }
                core::cmp::Ordering::Greater => {
                    side = Side::Right;
                    current = node.right();
                }
            }
        }

        let z = self.arena.alloc(key, value);
        match parent {
            None => self.root = Some(z),
            Some(parent) => {
                self.arena.set_child(parent, side, Some(z));
                self.arena.set_parent(z, Some(parent));
            }
        }
        self.insert_fixup(z);
        None
    }

    /// Node holding `key`, if any.
    pub fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        nav::search(&self.arena, self.root, key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|id| self.arena.value(id))
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.find(key)?;
        Some(self.arena.value_mut(id))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Removes `key` and returns its value.
    #[allow(clippy::expect_used)]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let z = self.find(key)?;
        self.unlink(z);
        let (_, value) = self
            .arena
            .free(z)
            .expect("Unlinked node is detached and allocated");
        Some(value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RbTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RbTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for RbTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// In-order iterator over the entries of an `RbTree`
///
/// Steps with successor from the front and predecessor from the back.
/// This iterator implements `Clone`.
pub struct Iter<'a, K, V> {
    arena: &'a NodeArena<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        self.front = nav::successor(self.arena, id);
        let node = self.arena.node(id);
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        self.back = nav::predecessor(self.arena, id);
        let node = self.arena.node(id);
        Some((node.key(), node.value()))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a RbTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
