use std::fmt;

use crate::layout::{Rect, Size};
use crate::types::FloatingStyle;

/// Handle to a node in a [`super::Document`].
///
/// Handles are plain values: they outlive the node they name, and every
/// lookup through a stale handle fails softly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) tag: String,
    /// Selector id (`#id`).
    pub(crate) element_id: Option<String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,

    // Layout
    /// Border box in viewport coordinates. `None` until the host lays it out.
    pub(crate) rect: Option<Rect>,
    /// Content-driven size, e.g. measured text.
    pub(crate) intrinsic: Option<Size>,

    // Scrolling
    pub(crate) scrollable: bool,
    pub(crate) scroll_offset: (f64, f64),

    pub(crate) floating_style: Option<FloatingStyle>,
}

impl Node {
    pub(crate) fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            element_id: None,
            parent: None,
            children: Vec::new(),
            rect: None,
            intrinsic: None,
            scrollable: false,
            scroll_offset: (0.0, 0.0),
            floating_style: None,
        }
    }
}
