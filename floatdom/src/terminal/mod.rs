//! Feeding raw terminal input into a document.
//!
//! One terminal cell is one unit of document space.

use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::Document;
use crate::event::Key;

impl Document {
    /// Translate a crossterm event into document input.
    /// Returns true if the event was applied. Unmapped keys are dropped.
    pub fn dispatch_crossterm(&mut self, event: &CrosstermEvent) -> bool {
        match event {
            CrosstermEvent::Mouse(mouse) => {
                let MouseEventKind::Down(button) = mouse.kind else {
                    return false;
                };
                self.pointer_down(f64::from(mouse.column), f64::from(mouse.row), button.into());
                true
            }
            CrosstermEvent::Key(event) if event.kind == KeyEventKind::Press => {
                let Some(key) = Key::from_crossterm(event.code) else {
                    return false;
                };
                self.key_down(key, event.modifiers.into());
                true
            }
            CrosstermEvent::Resize(width, height) => {
                self.resize_viewport(f64::from(*width), f64::from(*height));
                true
            }
            _ => false,
        }
    }
}
