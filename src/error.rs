//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading walkabout assets, maps or configuration,
/// and while drawing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to decode image {path:?}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write image {path:?}: {source}")]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("sprite directory {path:?} is not readable: {reason}")]
    SpriteDirectory { path: PathBuf, reason: String },

    #[error("no sprites found in {0:?}")]
    NoSprites(PathBuf),

    #[error("sprite set has no animations")]
    EmptySpriteSet,

    #[error("animation {0:?} has no frames")]
    EmptyAnimation(PathBuf),

    #[error("walkabout {dir:?} is missing sprites: {}", .missing.join(", "))]
    IncompleteSprites { dir: PathBuf, missing: Vec<String> },

    #[error("no sprite for action '{action}' facing '{direction}'")]
    MissingSprite { action: String, direction: String },

    #[error("unknown direction '{0}'")]
    UnknownDirection(String),

    #[error("invalid map layout: {0}")]
    MapLayout(String),
}

pub type Result<T> = std::result::Result<T, Error>;
