use alloc::vec::Vec;

use crate::error::TreeError;
use crate::nav;
use crate::node::{Color, Node, NodeId};

/// Which child link of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Clone, Debug)]
enum Slot<K, V> {
    Occupied(Node<K, V>),
    Vacant { next_free: Option<usize> },
}

/// Pool of tree nodes addressed by [`NodeId`].
///
/// The arena is the only owner of nodes. Links between nodes are handles into
/// this pool, so parent/child cycles never become ownership cycles. Freed
/// slots are reused by later allocations.
#[derive(Clone, Debug)]
pub struct NodeArena<K, V> {
    slots: Vec<Slot<K, V>>,
    free_head: Option<usize>,
    len: usize,
}

impl<K, V> Default for NodeArena<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> NodeArena<K, V> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Number of allocated nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocates a detached red node holding `key` and `value`.
    pub fn alloc(&mut self, key: K, value: V) -> NodeId {
        let node = Node::new(key, value);
        self.len += 1;
        match self.free_head {
            Some(index) => {
                if let Some(Slot::Vacant { next_free }) = self.slots.get(index) {
                    self.free_head = *next_free;
                }
                self.slots[index] = Slot::Occupied(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Gets the node behind `id`.
    ///
    /// Returns `None` if the slot is empty or out of bounds.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node<K, V>> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<K, V>> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Gets the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to an allocated node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node<K, V> {
        match self.get(id) {
            Some(node) => node,
            None => panic!("Node handle {id} does not refer to an allocated node"),
        }
    }

    /// Mutable variant of [`NodeArena::node`].
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to an allocated node.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("Node handle {id} does not refer to an allocated node"),
        }
    }

    #[must_use]
    pub fn key(&self, id: NodeId) -> &K {
        self.node(id).key()
    }

    #[must_use]
    pub fn value(&self, id: NodeId) -> &V {
        self.node(id).value()
    }

    pub fn value_mut(&mut self, id: NodeId) -> &mut V {
        self.node_mut(id).value_mut()
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    #[must_use]
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).left
    }

    #[must_use]
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).right
    }

    #[must_use]
    pub fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left(id),
            Side::Right => self.right(id),
        }
    }

    #[must_use]
    pub fn color(&self, id: NodeId) -> Color {
        self.node(id).color
    }

    pub fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    pub(crate) fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        self.node_mut(id).parent = parent;
    }

    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        let node = self.node_mut(id);
        match side {
            Side::Left => node.left = child,
            Side::Right => node.right = child,
        }
    }

    /// Makes `child` the `side` child of `parent`, setting both directions.
    ///
    /// # Errors
    ///
    /// - `TreeError::Vacant` if either handle is not allocated
    /// - `TreeError::SelfLink` if `parent == child`
    /// - `TreeError::LinkOccupied` if `parent` already has that child or
    ///   `child` already has a parent
    /// - `TreeError::Cycle` if `child` is the root of the tree holding `parent`
    pub fn link(&mut self, parent: NodeId, child: NodeId, side: Side) -> Result<(), TreeError> {
        let parent_node = self.get(parent).ok_or(TreeError::Vacant { id: parent })?;
        let child_node = self.get(child).ok_or(TreeError::Vacant { id: child })?;
        if parent == child {
            return Err(TreeError::SelfLink { id: parent });
        }
        let taken = match side {
            Side::Left => parent_node.left.is_some(),
            Side::Right => parent_node.right.is_some(),
        };
        if taken {
            return Err(TreeError::LinkOccupied { id: parent });
        }
        if child_node.parent.is_some() {
            return Err(TreeError::LinkOccupied { id: child });
        }
        // `child` has no parent here, so it is an ancestor of `parent` only as its root
        if nav::root_of(self, parent) == child {
            return Err(TreeError::Cycle { id: child });
        }

        self.set_child(parent, side, Some(child));
        self.set_parent(child, Some(parent));
        Ok(())
    }

    /// Shorthand for [`NodeArena::link`] with [`Side::Left`].
    ///
    /// # Errors
    ///
    /// Same as [`NodeArena::link`].
    pub fn link_left(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.link(parent, child, Side::Left)
    }

    /// Shorthand for [`NodeArena::link`] with [`Side::Right`].
    ///
    /// # Errors
    ///
    /// Same as [`NodeArena::link`].
    pub fn link_right(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.link(parent, child, Side::Right)
    }

    /// Cuts every link between `id` and its parent and children.
    ///
    /// The children keep their own subtrees; they simply become roots.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Vacant` if `id` is not allocated.
    pub fn detach(&mut self, id: NodeId) -> Result<(), TreeError> {
        let node = self.get(id).ok_or(TreeError::Vacant { id })?;
        let (parent, left, right) = (node.parent, node.left, node.right);

        if let Some(parent) = parent {
            if self.left(parent) == Some(id) {
                self.set_child(parent, Side::Left, None);
            } else {
                self.set_child(parent, Side::Right, None);
            }
        }
        for child in [left, right].into_iter().flatten() {
            self.set_parent(child, None);
        }

        let node = self.node_mut(id);
        node.parent = None;
        node.left = None;
        node.right = None;
        Ok(())
    }

    /// Releases a detached node and returns its key and value.
    ///
    /// # Errors
    ///
    /// - `TreeError::Vacant` if `id` is not allocated
    /// - `TreeError::StillLinked` if the node still has a parent or a child
    pub fn free(&mut self, id: NodeId) -> Result<(K, V), TreeError> {
        let node = self.get(id).ok_or(TreeError::Vacant { id })?;
        if !node.is_detached() {
            return Err(TreeError::StillLinked { id });
        }
        Ok(self.release(id))
    }

    /// Empties the slot behind `id` without looking at its links.
    ///
    /// Callers make sure the slot is occupied.
    fn release(&mut self, id: NodeId) -> (K, V) {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        let Slot::Occupied(node) = core::mem::replace(&mut self.slots[id.0], vacant) else {
            unreachable!("Node handle {id} released twice");
        };
        self.free_head = Some(id.0);
        self.len -= 1;
        tracing::trace!(slot = id.0, live = self.len, "tree node released");
        node.into_entry()
    }

    /// Frees `root` and everything below it. Returns the number of nodes freed.
    ///
    /// `root` is first detached from its parent, so the rest of the tree
    /// stays consistent.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Vacant` if `root` is not allocated.
    pub fn free_subtree(&mut self, root: NodeId) -> Result<usize, TreeError> {
        let node = self.get(root).ok_or(TreeError::Vacant { id: root })?;
        if let Some(parent) = node.parent {
            if self.left(parent) == Some(root) {
                self.set_child(parent, Side::Left, None);
            } else {
                self.set_child(parent, Side::Right, None);
            }
        }

        let mut freed = 0;
        let mut pending = alloc::vec![root];
        while let Some(id) = pending.pop() {
            let node = self.node(id);
            pending.extend([node.left, node.right].into_iter().flatten());
            drop(self.release(id));
            freed += 1;
        }
        Ok(freed)
    }

    /// Drops every node and forgets every handle.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}
