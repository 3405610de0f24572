/// CSS positioning mode assumed by a set of floating coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Relative to the nearest positioned ancestor (the node the floating
    /// root is mounted under).
    #[default]
    Absolute,
    /// Relative to the viewport.
    Fixed,
}

impl Strategy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
        }
    }
}
