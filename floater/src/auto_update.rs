//! Keeps an open overlay's position fresh.
//!
//! The scheduler only owns subscriptions. Recomputation happens in the
//! overlay, synchronously, for every notification the scheduler owns; no
//! debouncing or coalescing is done here.

use floatdom::{Document, Listener, ListenerId, NodeId};
use log::debug;

#[derive(Debug, Default)]
pub struct AutoUpdate {
    subscriptions: Vec<ListenerId>,
}

impl AutoUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to everything that can move the floating element: anchor
    /// and floating resizes, scrolling of any scroll container above either,
    /// and viewport resizes. Replaces any previous subscription set.
    pub fn start(&mut self, doc: &mut Document, anchor: NodeId, floating: NodeId) {
        self.teardown(doc);

        self.subscriptions.push(doc.listen(Listener::Resize(anchor)));
        self.subscriptions.push(doc.listen(Listener::Resize(floating)));

        let mut containers = doc.scrollable_ancestors(anchor);
        for node in doc.scrollable_ancestors(floating) {
            if !containers.contains(&node) {
                containers.push(node);
            }
        }
        for node in containers {
            self.subscriptions.push(doc.listen(Listener::Scroll(node)));
        }

        self.subscriptions.push(doc.listen(Listener::WindowResize));
        debug!("auto-update started ({} subscriptions)", self.subscriptions.len());
    }

    /// Wait for the anchor's first measurement.
    pub fn watch_anchor(&mut self, doc: &mut Document, anchor: NodeId) {
        self.teardown(doc);
        self.subscriptions.push(doc.listen(Listener::Resize(anchor)));
        debug!("waiting for anchor {anchor} to be measured");
    }

    pub fn owns(&self, listener: ListenerId) -> bool {
        self.subscriptions.contains(&listener)
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Drop every subscription. Safe to call repeatedly.
    pub fn teardown(&mut self, doc: &mut Document) {
        if self.subscriptions.is_empty() {
            return;
        }
        let count = self.subscriptions.len();
        for id in self.subscriptions.drain(..) {
            doc.unlisten(id);
        }
        debug!("auto-update torn down ({count} subscriptions)");
    }
}
