use std::fmt;
use std::path::Path;

use glam::{IVec2, UVec2};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::WalkaboutConfig;
use crate::error::{Error, Result};
use crate::geometry::{Direction, Rect, max_step, movement_probe};
use crate::render::RenderTarget;
use crate::sprite::{SpriteSet, load_sprite_set};
use crate::tilemap::Impassability;

// ── Action ───────────────────────────────────────────────────────────────────

/// Animation category a walkabout is currently showing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Stand,
    Walk,
    Run,
}

impl Action {
    /// Asset-name token (`stand`, `walk`, `run`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Stand => "stand",
            Action::Walk => "walk",
            Action::Run => "run",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Walkabout ────────────────────────────────────────────────────────────────

/// A map entity that can face four directions and walk about, blocked by
/// the map's impassable regions.
pub struct Walkabout {
    sprites: SpriteSet,
    /// Derived from the sprites; `position` always has exactly this size.
    size: UVec2,
    position: Rect,
    pub action: Action,
    pub direction: Direction,
    speed: u32,
}

impl Walkabout {
    /// Load the walkabout `name` from the configured asset root, placing it
    /// at `start` (defaults to the origin).
    ///
    /// Fails if the directory is missing, holds no sprites, or lacks any of
    /// the configured required action/direction combinations.
    pub fn load(config: &WalkaboutConfig, name: &str, start: Option<IVec2>) -> Result<Self> {
        let dir = config.walkabout_dir(name);
        let walkabout = Self::from_dir(&dir, config, start)?;
        debug!(name, size = ?walkabout.size, sprites = walkabout.sprites.len(), "walkabout ready");
        Ok(walkabout)
    }

    /// Like [`load`](Self::load) but from an explicit sprite directory.
    pub fn from_dir(dir: &Path, config: &WalkaboutConfig, start: Option<IVec2>) -> Result<Self> {
        let sprites = load_sprite_set(dir)?;

        let missing = sprites.missing(&config.required_sprites());
        if !missing.is_empty() {
            return Err(Error::IncompleteSprites { dir: dir.to_path_buf(), missing });
        }

        let mut walkabout = Self::from_sprites(sprites, start)?;
        walkabout.speed = config.speed;
        Ok(walkabout)
    }

    /// Build from an already-decoded sprite set. No completeness check is
    /// made beyond requiring at least one animation.
    pub fn from_sprites(sprites: SpriteSet, start: Option<IVec2>) -> Result<Self> {
        let Some(size) = sprites.size() else {
            return Err(Error::EmptySpriteSet);
        };

        Ok(Self {
            sprites,
            size,
            position: Rect::from_topleft(start.unwrap_or(IVec2::ZERO), size),
            action: Action::Stand,
            direction: Direction::Up,
            speed: 1,
        })
    }

    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn position(&self) -> Rect {
        self.position
    }

    /// Teleport to `topleft` without collision checks.
    pub fn set_topleft(&mut self, topleft: IVec2) {
        self.position = self.position.moved_to(topleft);
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed;
    }

    /// Try to step `speed` pixels toward `direction`, shrinking the step one
    /// pixel at a time while the swept probe hits an impassable region.
    ///
    /// Facing changes even if no step fits. On success the action becomes
    /// [`Action::Walk`] and `true` is returned; if every step size collides
    /// the position and action are left untouched and `false` is returned.
    /// Step sizes that would overflow the pixel coordinate range count as
    /// colliding.
    pub fn r#move<M>(&mut self, direction: Direction, map: &M) -> bool
    where
        M: Impassability + ?Sized,
    {
        self.direction = direction;
        let current = self.position.topleft();

        // Steps that would leave i32 pixel space are treated as blocked.
        let longest = self.speed.min(max_step(current, self.size, direction)) as i32;

        for pixels in (1..=longest).rev() {
            let candidate = current + direction.offset() * pixels;
            let probe = movement_probe(current, candidate, self.size, direction);

            if map.blocks(&probe) {
                trace!(%direction, pixels, ?probe, "step blocked");
                continue;
            }

            self.position = Rect::from_topleft(candidate, self.size);
            self.action = Action::Walk;
            trace!(%direction, pixels, to = ?candidate, "moved");
            return true;
        }

        trace!(%direction, at = ?current, "movement blocked");
        false
    }

    /// Advance the playback clock of every animation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.sprites.tick_all(dt);
    }

    /// Draw the current frame of the `(action, direction)` animation at the
    /// entity's position relative to the viewport `offset`.
    pub fn blit<T>(&self, screen: &mut T, offset: IVec2) -> Result<()>
    where
        T: RenderTarget + ?Sized,
    {
        let animation = self
            .sprites
            .get(self.action.as_str(), self.direction.as_str())
            .ok_or_else(|| Error::MissingSprite {
                action: self.action.to_string(),
                direction: self.direction.to_string(),
            })?;

        screen.blit_image(animation.current_frame(), self.position.topleft() - offset);
        Ok(())
    }
}

impl fmt::Debug for Walkabout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walkabout")
            .field("size", &self.size)
            .field("position", &self.position)
            .field("action", &self.action)
            .field("direction", &self.direction)
            .field("speed", &self.speed)
            .field("sprites", &self.sprites.len())
            .finish()
    }
}
