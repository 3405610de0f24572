//! Keeping a floating element on screen: flip first, then shift.

use floatdom::{Rect, Size};
use log::trace;

use super::geometry::{Coordinates, place};
use super::placement::{Placement, Side};

/// Default gap kept between a shifted floating element and the viewport edge.
pub const DEFAULT_PADDING: f64 = 8.0;

/// Coordinates together with the placement that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Positioned {
    pub coordinates: Coordinates,
    pub placement: Placement,
}

/// Room between the anchor and the viewport edge on `side`, after `offset`.
pub fn available_space(side: Side, anchor: Rect, viewport: Rect, offset: f64) -> f64 {
    let offset = offset.max(0.0);
    match side {
        Side::Top => anchor.top() - viewport.top() - offset,
        Side::Bottom => viewport.bottom() - anchor.bottom() - offset,
        Side::Left => anchor.left() - viewport.left() - offset,
        Side::Right => viewport.right() - anchor.right() - offset,
    }
}

fn overflows_main_axis(coordinates: Coordinates, side: Side, floating: Size, viewport: Rect) -> bool {
    let rect = coordinates.rect(floating);
    match side {
        Side::Top => rect.top() < viewport.top(),
        Side::Bottom => rect.bottom() > viewport.bottom(),
        Side::Left => rect.left() < viewport.left(),
        Side::Right => rect.right() > viewport.right(),
    }
}

/// Substitute the opposite side when the floating element overflows the
/// viewport on its main axis and the opposite side has strictly more room.
/// Equal room keeps the original placement.
pub fn apply_flip(
    coordinates: Coordinates,
    placement: Placement,
    anchor: Rect,
    floating: Size,
    viewport: Rect,
    offset: f64,
) -> Positioned {
    let side = placement.side();
    if !overflows_main_axis(coordinates, side, floating, viewport) {
        return Positioned {
            coordinates,
            placement,
        };
    }

    let preferred = available_space(side, anchor, viewport, offset);
    let alternate = available_space(side.opposite(), anchor, viewport, offset);
    if alternate <= preferred {
        return Positioned {
            coordinates,
            placement,
        };
    }

    let flipped = placement.opposite();
    trace!(
        "flip {} -> {} (space {:.1} vs {:.1})",
        placement, flipped, preferred, alternate
    );
    Positioned {
        coordinates: place(anchor, floating, flipped, offset),
        placement: flipped,
    }
}

/// Clamp the cross-axis coordinate into the viewport shrunk by `padding`.
/// The placement never changes. An element larger than the padded viewport
/// is pinned to the leading edge.
pub fn shift(positioned: Positioned, floating: Size, viewport: Rect, padding: f64) -> Positioned {
    let padding = padding.max(0.0);
    let c = positioned.coordinates;

    let coordinates = if positioned.placement.side().is_vertical() {
        let x = clamp_axis(
            c.x,
            floating.width,
            viewport.left() + padding,
            viewport.right() - padding,
        );
        Coordinates { x, ..c }
    } else {
        let y = clamp_axis(
            c.y,
            floating.height,
            viewport.top() + padding,
            viewport.bottom() - padding,
        );
        Coordinates { y, ..c }
    };

    Positioned {
        coordinates,
        ..positioned
    }
}

fn clamp_axis(start: f64, length: f64, min: f64, max: f64) -> f64 {
    let limit = max - length;
    if limit < min {
        min
    } else {
        start.clamp(min, limit)
    }
}
