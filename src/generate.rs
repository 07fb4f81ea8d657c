// =============================================================================
// GENERATE.RS — Placeholder walkabout sprites
//
// Draws a simple bordered body with two eyes that shift toward the facing
// direction, and writes one GIF per action/direction so a complete walkabout
// exists without any artist-made assets.
// =============================================================================

use std::fs::File;
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};
use crate::geometry::Direction;

const BODY: Rgba<u8> = Rgba([0xF5, 0xD0, 0x30, 0xFF]);
const BORDER: Rgba<u8> = Rgba([0x80, 0x60, 0x00, 0xFF]);
const EYE: Rgba<u8> = Rgba([0x10, 0x10, 0x10, 0xFF]);
const FOOT: Rgba<u8> = Rgba([0x40, 0x30, 0x00, 0xFF]);

/// Milliseconds per frame in generated walk cycles.
const WALK_FRAME_MS: u32 = 150;

fn put(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Bordered body with eyes nudged toward `facing`. `stride` selects which
/// foot is lifted (0 = both down, 1 = left up, 2 = right up).
pub fn draw_body(width: u32, height: u32, facing: Direction, stride: u8) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, BODY);
    let (w, h) = (width as i64, height as i64);

    for x in 0..w {
        put(&mut img, x, 0, BORDER);
        put(&mut img, x, h - 1, BORDER);
    }
    for y in 0..h {
        put(&mut img, 0, y, BORDER);
        put(&mut img, w - 1, y, BORDER);
    }

    // Facing away from the viewer shows no eyes.
    if facing != Direction::Up {
        let nudge = facing.offset();
        let ey = h / 3 + nudge.y as i64;
        let ex1 = w / 4 + nudge.x as i64;
        let ex2 = 3 * w / 4 + nudge.x as i64;
        put(&mut img, ex1, ey, EYE);
        put(&mut img, ex2, ey, EYE);
    }

    let foot_y = h - 2;
    let left_foot = w / 3;
    let right_foot = 2 * w / 3;
    put(&mut img, left_foot, foot_y - i64::from(stride == 1), FOOT);
    put(&mut img, right_foot, foot_y - i64::from(stride == 2), FOOT);

    img
}

/// Write `frames` as a looping GIF at `path`.
pub fn write_gif(path: &Path, frames: Vec<RgbaImage>, frame_ms: u32) -> Result<()> {
    let write_err = |source| Error::ImageWrite { path: path.to_path_buf(), source };

    let file = File::create(path)?;
    let mut encoder = GifEncoder::new(file);
    encoder.set_repeat(Repeat::Infinite).map_err(write_err)?;

    let delay = Delay::from_numer_denom_ms(frame_ms, 1);
    let frames = frames.into_iter().map(|img| Frame::from_parts(img, 0, 0, delay));
    encoder.encode_frames(frames).map_err(write_err)
}

/// Write a complete `stand`/`walk` × four-direction walkabout into `dir`
/// (created if needed). Returns the written paths in write order.
pub fn write_debug_walkabout(dir: &Path, width: u32, height: u32) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for direction in Direction::ALL {
        let stand_path = dir.join(format!("stand_{direction}.gif"));
        write_gif(&stand_path, vec![draw_body(width, height, direction, 0)], WALK_FRAME_MS)?;
        written.push(stand_path);

        let walk_path = dir.join(format!("walk_{direction}.gif"));
        let cycle = vec![
            draw_body(width, height, direction, 1),
            draw_body(width, height, direction, 2),
        ];
        write_gif(&walk_path, cycle, WALK_FRAME_MS)?;
        written.push(walk_path);
    }

    info!(dir = ?dir, count = written.len(), "wrote debug walkabout");
    Ok(written)
}
