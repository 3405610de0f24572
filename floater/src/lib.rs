//! Floating overlay positioning on top of a [`floatdom::Document`].
//!
//! The pure pipeline lives in [`position`]; [`Overlay`] wires it to the
//! document with auto-update, dismissal and portal mounting.

pub mod auto_update;
pub mod config;
pub mod dismiss;
pub mod error;
pub mod layers;
pub mod open_state;
pub mod position;
pub mod prelude;

pub use config::{ConfigError, OverlayConfig};
pub use error::OverlayError;
pub use layers::{Overlay, OverlayProps, OverlayState};
pub use position::{Placement, compute_position, resolve};
