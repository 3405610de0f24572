//! The full positioning pipeline.

use floatdom::{Rect, Size};

use super::collision::{DEFAULT_PADDING, Positioned, apply_flip, shift};
use super::geometry::place;
use super::placement::Placement;
use super::size::match_width;
use crate::error::OverlayError;

/// Knobs for [`compute_position`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionOptions {
    pub placement: Placement,
    /// Gap between anchor and floating element along the main axis.
    pub offset: f64,
    /// Gap kept from the viewport edge when shifting.
    pub padding: f64,
    pub match_width: bool,
    pub flip: bool,
    pub shift: bool,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            offset: 8.0,
            padding: DEFAULT_PADDING,
            match_width: false,
            flip: true,
            shift: true,
        }
    }
}

/// Result of the pipeline: where the floating element goes and the size it
/// was placed with (after width matching).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedPosition {
    pub positioned: Positioned,
    pub size: Size,
}

/// Resolve → flip → match width → re-resolve at the chosen placement →
/// shift. Coordinates are in viewport space.
pub fn compute_position(
    anchor: Option<Rect>,
    floating: Size,
    viewport: Rect,
    options: &PositionOptions,
) -> Result<ComputedPosition, OverlayError> {
    let anchor = anchor.ok_or(OverlayError::AnchorNotReady)?;

    let mut placement = options.placement;
    if options.flip {
        let initial = place(anchor, floating, placement, options.offset);
        placement = apply_flip(initial, placement, anchor, floating, viewport, options.offset)
            .placement;
    }

    // Width feeds cross-axis centering, so resolve again with the final size.
    let size = match_width(floating, anchor, options.match_width);
    let mut positioned = Positioned {
        coordinates: place(anchor, size, placement, options.offset),
        placement,
    };
    if options.shift {
        positioned = shift(positioned, size, viewport, options.padding);
    }

    Ok(ComputedPosition { positioned, size })
}
