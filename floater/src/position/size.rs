use floatdom::{Rect, Size};

/// Force the floating width to the anchor's measured width when `enabled`,
/// overriding the content-driven width. Height is untouched.
pub fn match_width(floating: Size, anchor: Rect, enabled: bool) -> Size {
    if enabled {
        floating.with_width(anchor.width)
    } else {
        floating
    }
}
