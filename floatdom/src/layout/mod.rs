mod rect;

pub use rect::{Rect, Size};
