pub mod element;
pub mod error;
pub mod event;
pub mod hit;
pub mod layout;
pub mod listener;
pub mod terminal;
pub mod types;

pub use element::{Document, NodeId};
pub use error::DomError;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use listener::{Listener, ListenerId, Notification};
pub use layout::{Rect, Size};
pub use types::*;
