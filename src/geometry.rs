// =============================================================================
// GEOMETRY.RS — Pixel-space primitives for walkabout movement
//
// - Rect: axis-aligned rectangle (top-left + size) with raster intersection
// - Direction: the four facings and their unit offsets
// - movement_probe: the swept rectangle tested against impassable regions
// =============================================================================

use std::fmt;
use std::str::FromStr;

use glam::{IVec2, UVec2};
use serde::{Deserialize, Serialize};

// =============================================================================
// RECT
// =============================================================================

/// Axis-aligned rectangle in pixel space.
///
/// `x`/`y` are the top-left corner; the rectangle covers the half-open
/// ranges `[x, x + w)` and `[y, y + h)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rectangle from a top-left point and an unsigned size.
    pub fn from_topleft(topleft: IVec2, size: UVec2) -> Self {
        Self::new(topleft.x, topleft.y, size.x as i32, size.y as i32)
    }

    #[inline]
    pub fn topleft(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn bottomright(&self) -> IVec2 {
        IVec2::new(self.x + self.w, self.y + self.h)
    }

    /// Size as an unsigned vector. Negative extents clamp to zero.
    #[inline]
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.w.max(0) as u32, self.h.max(0) as u32)
    }

    /// Same size, new top-left.
    pub fn moved_to(&self, topleft: IVec2) -> Self {
        Self::new(topleft.x, topleft.y, self.w, self.h)
    }

    /// True if the rectangle covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Raster intersection test.
    ///
    /// Both rectangles must have non-zero area, and their half-open extents
    /// must overlap on both axes; rectangles that merely share an edge do not
    /// intersect. Negative widths/heights are treated as extending left/up
    /// from the origin.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let (ax0, ax1) = span(self.x, self.w);
        let (ay0, ay1) = span(self.y, self.h);
        let (bx0, bx1) = span(other.x, other.w);
        let (by0, by1) = span(other.y, other.h);

        ax0 < bx1 && bx0 < ax1 && ay0 < by1 && by0 < ay1
    }

    /// True if the pixel `(px, py)` lies inside the rectangle.
    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        let (x0, x1) = span(self.x, self.w);
        let (y0, y1) = span(self.y, self.h);
        px >= x0 && px < x1 && py >= y0 && py < y1
    }
}

#[inline]
fn span(origin: i32, extent: i32) -> (i32, i32) {
    let end = origin + extent;
    (origin.min(end), origin.max(end))
}

// =============================================================================
// DIRECTION
// =============================================================================

/// Facing / movement orientation of a walkabout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions, clockwise from up.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Unit `(dx, dy)` offset in y-down screen space.
    pub const fn offset(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Right => IVec2::new(1, 0),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
        }
    }

    /// Asset-name token (`up`, `right`, `down`, `left`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }

    /// Up and left move toward the origin; the probe rectangle is anchored
    /// at the candidate position for these.
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "right" => Ok(Direction::Right),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            other => Err(crate::Error::UnknownDirection(other.to_string())),
        }
    }
}

// =============================================================================
// MOVEMENT PROBE
// =============================================================================

/// Build the rectangle tested for collision when an entity at `current`
/// (top-left) of `size` steps to `candidate` moving in `direction`.
///
/// The probe's size is the absolute distance from the current top-left to
/// the candidate bottom-right. Its origin is the candidate top-left for
/// up/left and the current top-left for down/right. The two cases are not
/// mirror images of each other; tile collision relies on exactly this shape.
pub fn movement_probe(current: IVec2, candidate: IVec2, size: UVec2, direction: Direction) -> Rect {
    let candidate_bottomright = candidate + size.as_ivec2();
    let extent = (candidate_bottomright - current).abs();

    let origin = if direction.is_negative() { candidate } else { current };

    Rect::new(origin.x, origin.y, extent.x, extent.y)
}

/// Largest step (in pixels) from `current` toward `direction` whose candidate
/// position and movement probe still fit in `i32` pixel space.
///
/// Zero when the entity already sits at the edge of the coordinate range.
pub fn max_step(current: IVec2, size: UVec2, direction: Direction) -> u32 {
    let offset = direction.offset();
    let (coord, extent) = if offset.x != 0 {
        (current.x as i64, size.x as i64)
    } else {
        (current.y as i64, size.y as i64)
    };
    let (min, max) = (i32::MIN as i64, i32::MAX as i64);

    let limit = if direction.is_negative() {
        // candidate >= MIN, and |extent - pixels| must not reach |MIN|.
        (coord - min).min(extent - min - 1)
    } else {
        // candidate + extent <= MAX, and the probe's extent + pixels <= MAX.
        (max - coord - extent).min(max - extent)
    };

    limit.clamp(0, max) as u32
}
