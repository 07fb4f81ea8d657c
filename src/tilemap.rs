// =============================================================================
// TILEMAP.RS — Impassability oracle for walkabout movement
// =============================================================================

use std::path::Path;

use glam::UVec2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Rect;

/// Character marking an impassable tile in row layouts.
pub const WALL: char = '#';

// ── Impassability ────────────────────────────────────────────────────────────

/// Anything that can report the regions an entity may not enter.
///
/// Entries are `None` where there is nothing blocking; those are skipped.
pub trait Impassability {
    fn impassability(&self) -> &[Option<Rect>];

    /// True if `probe` intersects any impassable region.
    fn blocks(&self, probe: &Rect) -> bool {
        self.impassability()
            .iter()
            .flatten()
            .any(|region| region.intersects(probe))
    }
}

impl Impassability for [Option<Rect>] {
    fn impassability(&self) -> &[Option<Rect>] {
        self
    }
}

impl Impassability for Vec<Option<Rect>> {
    fn impassability(&self) -> &[Option<Rect>] {
        self
    }
}

// ── TileMap ──────────────────────────────────────────────────────────────────

/// JSON layout accepted by [`TileMap::from_json_str`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapLayout {
    pub tile_width: u32,
    pub tile_height: u32,
    pub rows: Vec<String>,
}

/// Fixed-size grid of tiles, each either passable or impassable.
///
/// The impassability list is kept in sync with the grid: one entry per tile,
/// row-major, `Some(tile rect)` for impassable tiles.
#[derive(Clone, Debug)]
pub struct TileMap {
    width: u32,
    height: u32,
    tile_size: UVec2,
    impassable: Vec<bool>,
    regions: Vec<Option<Rect>>,
}

impl TileMap {
    /// All-passable map of `width` × `height` tiles.
    pub fn new(width: u32, height: u32, tile_w: u32, tile_h: u32) -> Self {
        let len = tile_count(width, height);
        Self {
            width,
            height,
            tile_size: UVec2::new(tile_w, tile_h),
            impassable: vec![false; len],
            regions: vec![None; len],
        }
    }

    /// Build from text rows: [`WALL`] is impassable, anything else passable.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], tile_w: u32, tile_h: u32) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count()) as u32;

        let mut map = Self::new(width, height, tile_w, tile_h);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count() as u32;
            if len != width {
                return Err(Error::MapLayout(format!(
                    "row {y} has {len} tiles, expected {width}"
                )));
            }
            for (x, ch) in row.chars().enumerate() {
                if ch == WALL {
                    map.set_impassable(x as i32, y as i32, true);
                }
            }
        }
        Ok(map)
    }

    /// Parse a [`MapLayout`] JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let layout: MapLayout = serde_json::from_str(json)?;
        if layout.tile_width == 0 || layout.tile_height == 0 {
            return Err(Error::MapLayout("tile size must be non-zero".to_string()));
        }
        Self::from_rows(layout.rows.as_slice(), layout.tile_width, layout.tile_height)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tile_size(&self) -> UVec2 {
        self.tile_size
    }

    /// Map extent in pixels.
    pub fn pixel_size(&self) -> UVec2 {
        UVec2::new(self.width, self.height) * self.tile_size
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Pixel rectangle covered by tile `(x, y)`.
    pub fn tile_rect(&self, x: i32, y: i32) -> Rect {
        let (tw, th) = (self.tile_size.x as i32, self.tile_size.y as i32);
        Rect::new(x * tw, y * th, tw, th)
    }

    /// Out-of-bounds coordinates are ignored.
    pub fn set_impassable(&mut self, x: i32, y: i32, impassable: bool) {
        let Some(i) = self.index(x, y) else { return };
        let region = impassable.then(|| self.tile_rect(x, y));
        self.impassable[i] = impassable;
        self.regions[i] = region;
    }

    /// Out-of-bounds coordinates report passable.
    pub fn is_impassable(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.impassable[i])
    }
}

/// Number of tiles in a `width` × `height` grid, computed without `u32` overflow.
#[inline]
fn tile_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

impl Impassability for TileMap {
    fn impassability(&self) -> &[Option<Rect>] {
        &self.regions
    }
}
