use std::collections::HashMap;

use glam::UVec2;

use super::animation::Animation;
use crate::geometry::Direction;

/// Animations of one walkabout, keyed by action then direction token.
///
/// Direction keys are kept as raw strings: asset names may carry direction
/// tokens beyond the four movement directions (`up_left`, ...) and those are
/// stored even though movement never selects them.
#[derive(Clone, Debug, Default)]
pub struct SpriteSet {
    animations: HashMap<String, HashMap<String, Animation>>,
    /// Max size of the most recently inserted animation.
    size: Option<UVec2>,
}

impl SpriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `animation` under `(action, direction)`, replacing and returning
    /// any previous entry. The set's size becomes this animation's max size.
    pub fn insert(
        &mut self,
        action: impl Into<String>,
        direction: impl Into<String>,
        animation: Animation,
    ) -> Option<Animation> {
        self.size = Some(animation.max_size());
        self.animations
            .entry(action.into())
            .or_default()
            .insert(direction.into(), animation)
    }

    pub fn get(&self, action: &str, direction: &str) -> Option<&Animation> {
        self.animations.get(action)?.get(direction)
    }

    pub fn get_mut(&mut self, action: &str, direction: &str) -> Option<&mut Animation> {
        self.animations.get_mut(action)?.get_mut(direction)
    }

    pub fn contains(&self, action: &str, direction: &str) -> bool {
        self.get(action, direction).is_some()
    }

    /// Size recorded by the last `insert`, `None` while empty.
    pub fn size(&self) -> Option<UVec2> {
        self.size
    }

    /// Total number of animations across all actions.
    pub fn len(&self) -> usize {
        self.animations.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Action names present in the set, sorted.
    pub fn actions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.animations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// `action_direction` stems from `required` that have no animation.
    pub fn missing(&self, required: &[(String, Direction)]) -> Vec<String> {
        required
            .iter()
            .filter(|(action, direction)| !self.contains(action, direction.as_str()))
            .map(|(action, direction)| format!("{action}_{direction}"))
            .collect()
    }

    /// Advance every animation's clock by `dt` seconds.
    pub fn tick_all(&mut self, dt: f32) {
        for by_direction in self.animations.values_mut() {
            for animation in by_direction.values_mut() {
                animation.tick(dt);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use image::RgbaImage;

    use super::*;

    fn still(w: u32, h: u32) -> Animation {
        Animation::still(RgbaImage::new(w, h))
    }

    #[test]
    fn size_is_last_write_wins() {
        let mut set = SpriteSet::new();
        assert_eq!(set.size(), None);
        set.insert("walk", "up", still(32, 64));
        set.insert("stand", "up", still(32, 48));
        assert_eq!(set.size(), Some(UVec2::new(32, 48)));
    }

    #[test]
    fn two_key_lookup() {
        let mut set = SpriteSet::new();
        set.insert("stand", "up", still(1, 1));
        assert!(set.get("stand", "up").is_some());
        assert!(set.get("stand", "down").is_none());
        assert!(set.get("walk", "up").is_none());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn missing_lists_absent_combinations() {
        let mut set = SpriteSet::new();
        set.insert("stand", "up", still(1, 1));
        let required = vec![
            ("stand".to_string(), Direction::Up),
            ("stand".to_string(), Direction::Down),
            ("walk".to_string(), Direction::Up),
        ];
        assert_eq!(set.missing(&required), vec!["stand_down", "walk_up"]);
    }
}
