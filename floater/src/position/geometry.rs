//! Geometry resolver: anchor box + floating size + placement → coordinates.

use floatdom::{Rect, Size, Strategy};

use super::placement::{Alignment, Placement, Side};
use crate::error::OverlayError;

/// Resolved position of a floating element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
    /// Positioning mode `x`/`y` assume.
    pub strategy: Strategy,
}

impl Coordinates {
    pub fn new(x: f64, y: f64, strategy: Strategy) -> Self {
        Self { x, y, strategy }
    }

    /// Re-express viewport (`fixed`) coordinates for `strategy`.
    ///
    /// `origin` is the viewport position of the containing block's
    /// coordinate space (see `Document::containing_origin`). It only matters
    /// for `absolute`.
    pub fn to_strategy(self, strategy: Strategy, origin: (f64, f64)) -> Self {
        let (x, y) = match (self.strategy, strategy) {
            (Strategy::Fixed, Strategy::Absolute) => (self.x - origin.0, self.y - origin.1),
            (Strategy::Absolute, Strategy::Fixed) => (self.x + origin.0, self.y + origin.1),
            _ => (self.x, self.y),
        };
        Self::new(x, y, strategy)
    }

    /// Box occupied by a floating element of `size` at these coordinates.
    pub fn rect(self, size: Size) -> Rect {
        Rect::new(self.x, self.y, size.width, size.height)
    }
}

/// Resolve viewport coordinates for `placement`.
///
/// `None` means the anchor has not been measured yet.
pub fn resolve(
    anchor: Option<Rect>,
    floating: Size,
    placement: Placement,
    offset: f64,
) -> Result<Coordinates, OverlayError> {
    let anchor = anchor.ok_or(OverlayError::AnchorNotReady)?;
    Ok(place(anchor, floating, placement, offset))
}

/// Infallible core of [`resolve`]. The result is in viewport space, so its
/// strategy is `fixed`. Negative offsets count as zero.
pub fn place(anchor: Rect, floating: Size, placement: Placement, offset: f64) -> Coordinates {
    let offset = offset.max(0.0);
    let alignment = placement.alignment();

    let cross_x = align(anchor.x, anchor.width, floating.width, alignment);
    let cross_y = align(anchor.y, anchor.height, floating.height, alignment);

    let (x, y) = match placement.side() {
        Side::Top => (cross_x, anchor.top() - offset - floating.height),
        Side::Bottom => (cross_x, anchor.bottom() + offset),
        Side::Left => (anchor.left() - offset - floating.width, cross_y),
        Side::Right => (anchor.right() + offset, cross_y),
    };

    Coordinates::new(x, y, Strategy::Fixed)
}

fn align(start: f64, span: f64, length: f64, alignment: Alignment) -> f64 {
    match alignment {
        Alignment::Start => start,
        Alignment::Center => start + (span - length) / 2.0,
        Alignment::End => start + span - length,
    }
}
