//! Layers module - portals and overlays.

pub mod overlay;
pub mod portal;

pub use overlay::{Overlay, OverlayProps, OverlayState};
pub use portal::{Content, Portal, RenderTarget, SelectorTarget};
