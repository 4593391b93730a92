use core::fmt;

/// Handle to a node slot in a [`NodeArena`](crate::NodeArena).
///
/// Handles are plain indices: copying one never copies or owns the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Slot index inside the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Red-black rebalancing tag carried by every node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// One node of a binary search tree.
///
/// The key is fixed at creation. `parent`, `left` and `right` are handles,
/// not ownership: the arena owns every node.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
    key: K,
    value: V,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) color: Color,
}

impl<K, V> Node<K, V> {
    /// New nodes start detached and red, ready for red-black insertion.
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            parent: None,
            left: None,
            right: None,
            color: Color::Red,
        }
    }

    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// True if the node has neither parent nor children.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.parent.is_none() && self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}
