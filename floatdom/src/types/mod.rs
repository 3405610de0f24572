mod enums;
mod style;

pub use enums::Strategy;
pub use style::FloatingStyle;
