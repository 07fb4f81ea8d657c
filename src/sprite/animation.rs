use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use glam::UVec2;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, RgbaImage};

use crate::error::{Error, Result};

/// Frame delay used when a GIF frame declares a delay of zero.
/// Most GIF players treat 0 as "as fast as reasonable", i.e. 100 ms.
pub const DEFAULT_FRAME_SECS: f32 = 0.1;

// ── Frame ─────────────────────────────────────────────────────────────────────

/// One decoded image plus how long it stays on screen.
#[derive(Clone, Debug)]
pub struct Frame {
    pub image: RgbaImage,
    /// Display time in seconds. Always > 0.
    pub duration: f32,
}

impl Frame {
    pub fn new(image: RgbaImage, duration: f32) -> Self {
        let duration = if duration > 0.0 { duration } else { DEFAULT_FRAME_SECS };
        Self { image, duration }
    }
}

// ── Animation ─────────────────────────────────────────────────────────────────

/// A looping sequence of RGBA frames with its own playback clock.
///
/// The clock only moves when [`tick`](Animation::tick) is called, so frame
/// selection is deterministic for a given sequence of ticks.
#[derive(Clone, Debug)]
pub struct Animation {
    frames: Vec<Frame>,
    /// Sum of all frame durations in seconds.
    total: f32,
    /// Position inside the loop, in `[0, total)`.
    elapsed: f32,
}

impl Animation {
    /// Build an animation from decoded frames. Returns `None` for an empty list.
    pub fn new(frames: Vec<Frame>) -> Option<Self> {
        if frames.is_empty() {
            return None;
        }
        let total = frames.iter().map(|f| f.duration).sum();
        Some(Self { frames, total, elapsed: 0.0 })
    }

    /// Single-frame animation.
    pub fn still(image: RgbaImage) -> Self {
        Self {
            frames: vec![Frame::new(image, DEFAULT_FRAME_SECS)],
            total: DEFAULT_FRAME_SECS,
            elapsed: 0.0,
        }
    }

    /// Decode `path` by extension: `.gif` keeps every frame and its delay,
    /// anything else is opened as a still image.
    pub fn load(path: &Path) -> Result<Self> {
        let is_gif = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("gif"));

        if is_gif { Self::from_gif(path) } else { Self::from_still(path) }
    }

    /// Decode every frame of an animated (or single-frame) GIF.
    pub fn from_gif(path: &Path) -> Result<Self> {
        let image_err = |source| Error::Image { path: path.to_path_buf(), source };

        let reader = BufReader::new(File::open(path)?);
        let decoder = GifDecoder::new(reader).map_err(image_err)?;
        let decoded = decoder.into_frames().collect_frames().map_err(image_err)?;

        let frames = decoded
            .into_iter()
            .map(|frame| {
                let (numer, denom) = frame.delay().numer_denom_ms();
                let secs = if denom == 0 { 0.0 } else { numer as f32 / denom as f32 / 1000.0 };
                Frame::new(frame.into_buffer(), secs)
            })
            .collect();

        Self::new(frames).ok_or_else(|| Error::EmptyAnimation(path.to_path_buf()))
    }

    /// Open any still image format the `image` crate was built with.
    pub fn from_still(path: &Path) -> Result<Self> {
        let img = image::open(path).map_err(|source| Error::Image { path: path.to_path_buf(), source })?;
        Ok(Self::still(img.to_rgba8()))
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Length of one loop in seconds.
    pub fn duration(&self) -> f32 {
        self.total
    }

    /// Largest frame width and largest frame height (taken independently).
    pub fn max_size(&self) -> UVec2 {
        self.frames.iter().fold(UVec2::ZERO, |acc, f| {
            acc.max(UVec2::new(f.image.width(), f.image.height()))
        })
    }

    /// Advance the playback clock by `dt` seconds, wrapping at the loop end.
    pub fn tick(&mut self, dt: f32) {
        if dt <= 0.0 || self.total <= 0.0 {
            return;
        }
        self.elapsed = (self.elapsed + dt) % self.total;
    }

    /// Rewind to the first frame.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Index of the frame visible at the current clock position.
    pub fn current_index(&self) -> usize {
        let mut t = self.elapsed;
        for (i, frame) in self.frames.iter().enumerate() {
            if t < frame.duration {
                return i;
            }
            t -= frame.duration;
        }
        // Float remainder landed exactly on the loop end.
        self.frames.len() - 1
    }

    /// The image visible at the current clock position.
    pub fn current_frame(&self) -> &RgbaImage {
        &self.frames[self.current_index()].image
    }
}
