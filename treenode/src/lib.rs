#![no_std]

//! Binary search tree nodes kept in an arena, with in-order navigation.
//!
//! Nodes live in a [`NodeArena`] and refer to each other through [`NodeId`]
//! handles. A node's parent, left and right links are plain handles, so the
//! parent/child cycle never turns into an ownership cycle. The arena is the
//! single owner of every node.
//!
//! This crate is `no_std` compatible; it needs `alloc`.
//!
//! # Navigation
//!
//! The [`nav`] functions walk any tree built in an arena. Ordering is
//! strictly by key: left subtree smaller, right subtree larger.
//!
//! ```
//! # use treenode::{nav, RbTree};
//! let tree: RbTree<i32, &str> = [5, 3, 8, 1, 4, 7, 9]
//!     .into_iter()
//!     .map(|key| (key, "v"))
//!     .collect();
//! let arena = tree.arena();
//! let root = tree.root().unwrap();
//!
//! assert_eq!(arena.key(nav::minimum(arena, root)), &1);
//! assert_eq!(arena.key(nav::maximum(arena, root)), &9);
//!
//! let four = nav::search(arena, Some(root), &4).unwrap();
//! assert_eq!(nav::successor(arena, four).map(|id| *arena.key(id)), Some(5));
//!
//! let seven = nav::search(arena, Some(root), &7).unwrap();
//! assert_eq!(nav::predecessor(arena, seven).map(|id| *arena.key(id)), Some(5));
//!
//! assert_eq!(nav::successor(arena, tree.last().unwrap()), None);
//! assert_eq!(nav::search(arena, Some(root), &6), None);
//! ```
//!
//! # Building Trees by Hand
//!
//! [`NodeArena::link`] connects a free child under a free parent link and
//! keeps both directions of the link consistent. Freeing a node that is still
//! linked is refused:
//!
//! ```
//! # use treenode::{NodeArena, TreeError};
//! let mut arena = NodeArena::new();
//! let root = arena.alloc(2, ());
//! let left = arena.alloc(1, ());
//! arena.link_left(root, left).unwrap();
//!
//! assert_eq!(arena.free(left), Err(TreeError::StillLinked { id: left }));
//! arena.detach(left).unwrap();
//! assert_eq!(arena.free(left), Ok((1, ())));
//! ```
//!
//! # Balanced Map
//!
//! [`RbTree`] keeps its nodes balanced with red-black recoloring and
//! rotations, so every navigation step stays O(log n).

#[cfg(test)]
extern crate std;

extern crate alloc;

mod arena;
mod error;
pub mod nav;
mod node;
mod rbtree;

// Re-export public types
pub use arena::{NodeArena, Side};
pub use error::TreeError;
pub use nav::{maximum, minimum, predecessor, search, successor};
pub use node::{Color, Node, NodeId};
pub use rbtree::{Iter, RbTree};
