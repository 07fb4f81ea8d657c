use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Direction;

// ── WalkaboutConfig ───────────────────────────────────────────────────────────

/// Where walkabout assets live and what every walkabout must provide.
///
/// Every field has a default, so a config file only needs to list the
/// values it overrides:
///
/// ```json
/// { "walkabouts_root": "assets/walkabouts", "speed": 2 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkaboutConfig {
    /// Parent directory holding one sub-directory per walkabout.
    pub walkabouts_root: PathBuf,
    /// Walkabout used by [`Player::from_config`](crate::entity::Player::from_config)
    /// when no name is given.
    pub default_walkabout: String,
    /// Pixels moved per successful step.
    pub speed: u32,
    /// Actions that must have a sprite for every required direction.
    pub required_actions: Vec<String>,
    /// Directions that must have a sprite for every required action.
    pub required_directions: Vec<Direction>,
}

impl Default for WalkaboutConfig {
    /// `data/walkabouts`, the `debug` walkabout, speed 1, and `stand`/`walk`
    /// in all four directions.
    fn default() -> Self {
        Self {
            walkabouts_root:     PathBuf::from("data").join("walkabouts"),
            default_walkabout:   "debug".to_string(),
            speed:               1,
            required_actions:    vec!["stand".to_string(), "walk".to_string()],
            required_directions: Direction::ALL.to_vec(),
        }
    }
}

impl WalkaboutConfig {
    /// Parse a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Directory holding the sprites of the walkabout called `name`.
    pub fn walkabout_dir(&self, name: &str) -> PathBuf {
        self.walkabouts_root.join(name)
    }

    /// Every `action_direction` stem the config requires, in a stable order.
    pub fn required_sprites(&self) -> Vec<(String, Direction)> {
        self.required_actions
            .iter()
            .flat_map(|a| self.required_directions.iter().map(move |d| (a.clone(), *d)))
            .collect()
    }
}
