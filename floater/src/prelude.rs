//! Prelude module for convenient imports.
//!
//! ```ignore
//! use floater::prelude::*;
//! ```

pub use crate::auto_update::AutoUpdate;
pub use crate::config::{ConfigError, OverlayConfig};
pub use crate::dismiss::{DismissalWatcher, WatcherState};
pub use crate::error::OverlayError;
pub use crate::layers::{
    Content, Overlay, OverlayProps, OverlayState, Portal, RenderTarget, SelectorTarget,
};
pub use crate::open_state::{DismissReason, OpenChange, OpenStateController};
pub use crate::position::{
    Alignment, ComputedPosition, Coordinates, Placement, PositionOptions, Positioned, Side,
    compute_position, resolve,
};

pub use floatdom::{Document, NodeId, Rect, Size, Strategy};
