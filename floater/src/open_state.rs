//! Controlled open state.
//!
//! The overlay never flips its own visibility. The owner passes `open` in on
//! every render and receives change requests through a callback; until the
//! owner re-renders with a new value, nothing changes.

use std::fmt;

use log::debug;

/// Callback invoked with the requested open state.
pub type OpenChange = Box<dyn FnMut(bool)>;

/// Why the overlay asked to be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    OutsidePointer,
    DetachedAnchor,
    EscapeKey,
}

pub struct OpenStateController {
    open: bool,
    on_change: Option<OpenChange>,
}

impl OpenStateController {
    pub fn new(open: bool, on_change: Option<OpenChange>) -> Self {
        Self { open, on_change }
    }

    /// Open state last supplied by the owner.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Accept the owner's props for this render.
    pub fn sync(&mut self, open: bool, on_change: Option<OpenChange>) {
        self.open = open;
        if on_change.is_some() {
            self.on_change = on_change;
        }
    }

    /// Ask the owner to close. The local state is left alone. Returns whether
    /// a callback was there to receive the request.
    pub fn request_close(&mut self, reason: DismissReason) -> bool {
        debug!("close requested: {reason:?}");
        match self.on_change.as_mut() {
            Some(callback) => {
                callback(false);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for OpenStateController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenStateController")
            .field("open", &self.open)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
