pub mod camera;
pub mod config;
pub mod entity;
pub mod error;
pub mod generate;
pub mod geometry;
pub mod render;
pub mod sprite;
pub mod tilemap;

pub use camera::Camera;
pub use config::WalkaboutConfig;
pub use entity::{Action, Player, Walkabout};
pub use error::{Error, Result};
pub use geometry::{Direction, Rect};
pub use render::{Canvas, RenderTarget};
pub use sprite::{Animation, SpriteSet};
pub use tilemap::{Impassability, TileMap};

/// Size of the generated `debug` walkabout, in pixels.
pub const DEBUG_SPRITE_W: u32 = 16;
pub const DEBUG_SPRITE_H: u32 = 24;
