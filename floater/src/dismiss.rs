//! Outside-pointer and escape-key dismissal.

use floatdom::{Document, Key, Listener, ListenerId, NodeId};
use log::debug;

use crate::open_state::DismissReason;

/// Lifecycle of a [`DismissalWatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatcherState {
    /// Overlay closed, no listeners attached.
    #[default]
    Idle,
    /// Overlay open, global listeners attached.
    Watching,
    /// A close was requested and the owner has not re-rendered yet. Further
    /// triggers are swallowed so the owner hears about it once.
    CloseRequested,
}

#[derive(Debug, Default)]
pub struct DismissalWatcher {
    state: WatcherState,
    close_on_escape: bool,
    listeners: Vec<ListenerId>,
}

impl DismissalWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WatcherState {
        self.state
    }

    /// Start (or resume) watching. Listeners are attached only on the way
    /// out of `Idle`.
    pub fn arm(&mut self, doc: &mut Document, close_on_escape: bool) {
        if self.state == WatcherState::Idle {
            self.listeners.push(doc.listen(Listener::PointerDown));
            if close_on_escape {
                self.listeners.push(doc.listen(Listener::KeyDown));
            }
            self.close_on_escape = close_on_escape;
            debug!("dismissal watcher armed ({} listeners)", self.listeners.len());
        }
        self.state = WatcherState::Watching;
    }

    /// Remove every listener and go back to `Idle`.
    pub fn disarm(&mut self, doc: &mut Document) {
        for id in self.listeners.drain(..) {
            doc.unlisten(id);
        }
        if self.state != WatcherState::Idle {
            debug!("dismissal watcher disarmed");
        }
        self.state = WatcherState::Idle;
    }

    pub fn owns(&self, listener: ListenerId) -> bool {
        self.listeners.contains(&listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Classify a pointer-down. A target inside the anchor or the floating
    /// subtree is ignored; anything else, including no target at all,
    /// requests a close. A detached anchor contains nothing.
    pub fn on_pointer_down(
        &mut self,
        doc: &Document,
        target: Option<NodeId>,
        anchor: NodeId,
        floating: NodeId,
    ) -> Option<DismissReason> {
        if self.state != WatcherState::Watching {
            return None;
        }

        let inside = target.is_some_and(|target| {
            (doc.is_connected(anchor) && doc.contains(anchor, target))
                || doc.contains(floating, target)
        });
        if inside {
            return None;
        }

        self.request(DismissReason::OutsidePointer)
            .then_some(DismissReason::OutsidePointer)
    }

    pub fn on_key_down(&mut self, key: Key) -> Option<DismissReason> {
        if !self.close_on_escape || key != Key::Escape {
            return None;
        }
        self.request(DismissReason::EscapeKey)
            .then_some(DismissReason::EscapeKey)
    }

    /// Move to `CloseRequested` if currently watching. Returns whether the
    /// owner should be told.
    pub fn request(&mut self, reason: DismissReason) -> bool {
        if self.state != WatcherState::Watching {
            return false;
        }
        debug!("dismissal triggered: {reason:?}");
        self.state = WatcherState::CloseRequested;
        true
    }
}
