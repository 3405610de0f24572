//! Pure positioning: placement names, the geometry resolver, collision
//! handling and size matching. Nothing here reads the document.

pub mod collision;
pub mod compute;
pub mod geometry;
pub mod placement;
pub mod size;

pub use collision::{DEFAULT_PADDING, Positioned, apply_flip, available_space, shift};
pub use compute::{ComputedPosition, PositionOptions, compute_position};
pub use geometry::{Coordinates, place, resolve};
pub use placement::{Alignment, ParsePlacementError, Placement, Side};
pub use size::match_width;
