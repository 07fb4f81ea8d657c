//! Map entities that walk about: the sprite-and-movement component and the
//! player wrapping it.

pub mod player;
pub mod walkabout;

pub use player::Player;
pub use walkabout::{Action, Walkabout};
