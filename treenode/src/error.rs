use thiserror::Error;

use crate::node::NodeId;

/// Error types for arena link and release operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TreeError {
    /// The handle does not refer to an allocated node
    #[error("Vacant slot: node {id} is not allocated")]
    Vacant {
        /// Handle that was used
        id: NodeId,
    },
    /// The node is still linked into a tree and cannot be freed
    #[error("Node {id} is still linked to a parent or a child")]
    StillLinked {
        /// Handle of the linked node
        id: NodeId,
    },
    /// The requested link slot is already taken
    #[error("Link occupied: node {id} already has that link set")]
    LinkOccupied {
        /// Handle of the node whose link is taken
        id: NodeId,
    },
    /// A node cannot be linked to itself
    #[error("Node {id} cannot be linked to itself")]
    SelfLink {
        /// Handle of the node
        id: NodeId,
    },
    /// The child is an ancestor of the parent, so the link would close a cycle
    #[error("Node {id} is an ancestor of the parent; linking it would close a cycle")]
    Cycle {
        /// Handle of the would-be child
        id: NodeId,
    },
}
