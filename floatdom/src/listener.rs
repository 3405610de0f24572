//! Listener registrations and the notification queue.
//!
//! This is the observation capability a browser spreads over
//! `ResizeObserver`, scroll listeners and window/document listeners. Every
//! registration gets its own [`ListenerId`]; host changes produce one
//! [`Notification`] per matching registration, in registration order, so
//! several independent consumers can share one document without seeing each
//! other's subscriptions.

use std::fmt;

use crate::element::NodeId;
use crate::event::Event;

/// What a registration listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Box size changes of one node.
    Resize(NodeId),
    /// Scrolling of one scroll container.
    Scroll(NodeId),
    /// Viewport size changes.
    WindowResize,
    /// Every pointer-down in the document.
    PointerDown,
    /// Every key-down in the document.
    KeyDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// An event addressed to a single registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub listener: ListenerId,
    pub event: Event,
}

#[derive(Debug, Default)]
pub(crate) struct ListenerRegistry {
    entries: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl ListenerRegistry {
    pub(crate) fn add(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn get(&self, id: ListenerId) -> Option<Listener> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, listener)| *listener)
    }

    /// Registrations listening to exactly `listener`, in registration order.
    pub(crate) fn matching(&self, listener: Listener) -> impl Iterator<Item = ListenerId> + '_ {
        self.entries
            .iter()
            .filter(move |(_, entry)| *entry == listener)
            .map(|(id, _)| *id)
    }
}
