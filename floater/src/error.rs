//! Error types for overlay positioning and mounting.

use floatdom::{DomError, NodeId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlayError {
    /// The anchor has no measured box yet.
    #[error("anchor has not been measured")]
    AnchorNotReady,

    /// The portal selector matched nothing.
    #[error("portal target '{selector}' not found")]
    PortalTargetMissing { selector: String },

    /// The anchor was removed from the document while the overlay was open.
    #[error("anchor {0} is no longer connected")]
    DetachedAnchor(NodeId),

    #[error(transparent)]
    Dom(#[from] DomError),
}
