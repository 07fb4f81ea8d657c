use glam::IVec2;

use super::walkabout::Walkabout;
use crate::config::WalkaboutConfig;
use crate::error::Result;

/// A human- or AI-controlled character. Which one depends on the controller
/// driving it; the player itself only owns the walkabout.
///
/// Controllers and render loops reach the walkabout through the public
/// field, there are no forwarding methods.
#[derive(Debug)]
pub struct Player {
    pub walkabout: Walkabout,
}

impl Player {
    pub fn new(walkabout: Walkabout) -> Self {
        Self { walkabout }
    }

    /// Load the walkabout `name`, or the config's `default_walkabout` when
    /// `name` is `None`.
    pub fn from_config(config: &WalkaboutConfig, name: Option<&str>, start: Option<IVec2>) -> Result<Self> {
        let name = name.unwrap_or(&config.default_walkabout);
        Ok(Self::new(Walkabout::load(config, name, start)?))
    }
}
