//! Mounting floating content outside its logical parent.
//!
//! A [`Portal`] owns at most one floating root: a node it creates under the
//! [`RenderTarget`] and destroys again on unmount. Siblings created by other
//! portals under the same target are never touched.

use std::sync::atomic::{AtomicU64, Ordering};

use floatdom::{Document, DomError, FloatingStyle, NodeId};
use log::debug;

use crate::error::OverlayError;

static NEXT_ROOT: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ROOT.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Builds floating content under a freshly attached root.
pub type Content = Box<dyn Fn(&mut Document, NodeId) -> Result<(), DomError>>;

/// Where floating roots are attached.
pub trait RenderTarget {
    /// Whether the target node exists right now.
    fn is_ready(&self, doc: &Document) -> bool;

    /// Create a floating root under the target and return it.
    fn attach(&mut self, doc: &mut Document) -> Result<NodeId, OverlayError>;

    /// Remove a root previously returned by [`attach`](Self::attach).
    fn detach(&mut self, doc: &mut Document, root: NodeId);
}

/// Attaches under the node matched by a selector (`body` or `#id`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorTarget {
    selector: String,
}

impl SelectorTarget {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    fn resolve(&self, doc: &Document) -> Result<NodeId, OverlayError> {
        doc.query(&self.selector)?
            .ok_or_else(|| OverlayError::PortalTargetMissing {
                selector: self.selector.clone(),
            })
    }
}

impl Default for SelectorTarget {
    fn default() -> Self {
        Self::new("body")
    }
}

impl RenderTarget for SelectorTarget {
    fn is_ready(&self, doc: &Document) -> bool {
        self.resolve(doc).is_ok()
    }

    fn attach(&mut self, doc: &mut Document) -> Result<NodeId, OverlayError> {
        let parent = self.resolve(doc)?;
        let root = doc.create_element("div");
        doc.set_element_id(root, generate_id("floating"))?;
        doc.append_child(parent, root)?;
        // Out of flow from the start so the target's content size ignores it.
        doc.set_floating_style(root, FloatingStyle::default())?;
        Ok(root)
    }

    fn detach(&mut self, doc: &mut Document, root: NodeId) {
        if let Err(err) = doc.destroy(root) {
            debug!("floating root {root} already gone: {err}");
        }
    }
}

#[derive(Debug)]
pub struct Portal<T: RenderTarget> {
    target: T,
    root: Option<NodeId>,
}

impl<T: RenderTarget> Portal<T> {
    pub fn new(target: T) -> Self {
        Self { target, root: None }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn is_mounted(&self) -> bool {
        self.root.is_some()
    }

    /// Attach a root and build `content` into it. Already mounted portals
    /// return their existing root. A failing content builder leaves nothing
    /// behind.
    pub fn try_mount(
        &mut self,
        doc: &mut Document,
        content: Option<&Content>,
    ) -> Result<NodeId, OverlayError> {
        if let Some(root) = self.root {
            return Ok(root);
        }

        let root = self.target.attach(doc)?;
        if let Some(build) = content
            && let Err(err) = build(doc, root)
        {
            self.target.detach(doc, root);
            return Err(err.into());
        }

        debug!("portal mounted {root}");
        self.root = Some(root);
        Ok(root)
    }

    /// Like [`try_mount`](Self::try_mount), but a target that is not there
    /// yet (or any other failure) just renders nothing.
    pub fn mount(
        &mut self,
        doc: &mut Document,
        content: Option<&Content>,
    ) -> Option<NodeId> {
        match self.try_mount(doc, content) {
            Ok(root) => Some(root),
            Err(err) => {
                debug!("portal not mounted: {err}");
                None
            }
        }
    }

    pub fn unmount(&mut self, doc: &mut Document) {
        if let Some(root) = self.root.take() {
            self.target.detach(doc, root);
            debug!("portal unmounted {root}");
        }
    }
}
