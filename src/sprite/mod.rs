//! Directional sprite animations: decoding, lookup, and folder discovery.

pub mod animation;
pub mod loader;
pub mod set;

pub use animation::{Animation, Frame};
pub use loader::{SpriteFile, discover, load_sprite_set, split_sprite_stem};
pub use set::SpriteSet;
