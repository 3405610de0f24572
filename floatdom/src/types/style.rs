use super::Strategy;

/// Inline position style applied to a floating root.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloatingStyle {
    pub strategy: Strategy,
    pub left: f64,
    pub top: f64,
    /// Explicit width. `None` keeps the content-driven width.
    pub width: Option<f64>,
}

impl FloatingStyle {
    pub fn new(strategy: Strategy, left: f64, top: f64) -> Self {
        Self {
            strategy,
            left,
            top,
            width: None,
        }
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }
}
