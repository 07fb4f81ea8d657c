use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::animation::Animation;
use super::set::SpriteSet;
use crate::error::{Error, Result};

/// File extensions recognised as sprite assets (compared case-insensitively).
pub const SPRITE_EXTENSIONS: [&str; 2] = ["gif", "png"];

/// A sprite asset discovered on disk, not yet decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteFile {
    pub action: String,
    pub direction: String,
    pub path: PathBuf,
}

/// Split a file stem `<action>_<direction>` on its first underscore.
///
/// The direction part may itself contain underscores. Returns `None` if
/// there is no underscore or either side is empty.
pub fn split_sprite_stem(stem: &str) -> Option<(&str, &str)> {
    let (action, direction) = stem.split_once('_')?;
    if action.is_empty() || direction.is_empty() {
        return None;
    }
    Some((action, direction))
}

fn has_sprite_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| SPRITE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

/// List the sprite files directly inside `dir`, sorted by file name.
///
/// Files with an unknown extension are ignored silently; files whose stem
/// does not split into action and direction are skipped with a warning.
pub fn discover(dir: &Path) -> Result<Vec<SpriteFile>> {
    if !dir.is_dir() {
        return Err(Error::SpriteDirectory {
            path: dir.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    let mut found = Vec::new();

    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Error::SpriteDirectory {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
        if !entry.file_type().is_file() || !has_sprite_extension(entry.path()) {
            continue;
        }

        let file_path = entry.path();
        let Some(stem) = file_path.file_stem().and_then(|s| s.to_str()) else {
            warn!(path = ?file_path, "sprite file name is not valid UTF-8; skipping");
            continue;
        };
        let Some((action, direction)) = split_sprite_stem(stem) else {
            warn!(path = ?file_path, "sprite name is not <action>_<direction>; skipping");
            continue;
        };

        found.push(SpriteFile {
            action: action.to_string(),
            direction: direction.to_string(),
            path: file_path.to_path_buf(),
        });
    }

    Ok(found)
}

/// Discover and decode every sprite in `dir`.
///
/// Files are decoded in file-name order, so when two stems collide only
/// by extension (`stand_up.gif`, `stand_up.png`) the later one replaces the
/// earlier, and the set's size is that of the lexicographically last file.
pub fn load_sprite_set(dir: &Path) -> Result<SpriteSet> {
    let files = discover(dir)?;
    if files.is_empty() {
        return Err(Error::NoSprites(dir.to_path_buf()));
    }

    let mut set = SpriteSet::new();
    for file in files {
        let animation = Animation::load(&file.path)?;
        debug!(
            path = ?file.path,
            frames = animation.frame_count(),
            size = ?animation.max_size(),
            "loaded sprite"
        );
        if set.insert(&file.action, &file.direction, animation).is_some() {
            warn!(
                action = %file.action,
                direction = %file.direction,
                path = ?file.path,
                "duplicate sprite stem; later file replaces earlier"
            );
        }
    }

    Ok(set)
}
