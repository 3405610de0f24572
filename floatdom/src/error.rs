use thiserror::Error;

use crate::element::NodeId;

/// Errors returned by document tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The handle does not refer to a live node.
    #[error("node {0} does not exist")]
    NodeNotFound(NodeId),

    /// Appending would make a node its own ancestor.
    #[error("cannot append {child} under {parent}: {child} is an ancestor of {parent}")]
    HierarchyCycle { parent: NodeId, child: NodeId },

    /// Only `body` and `#id` selectors are understood.
    #[error("unsupported selector '{0}'")]
    InvalidSelector(String),
}
