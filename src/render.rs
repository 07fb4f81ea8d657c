use std::path::Path;

use glam::IVec2;
use image::{Rgba, RgbaImage};

use crate::error::{Error, Result};

// ── RenderTarget ─────────────────────────────────────────────────────────────

/// A surface that sprite frames can be drawn onto.
pub trait RenderTarget {
    /// Draw `image` with its top-left at `at` (surface pixels). Parts that
    /// fall outside the surface are clipped.
    fn blit_image(&mut self, image: &RgbaImage, at: IVec2);
}

// ── Canvas ───────────────────────────────────────────────────────────────────

/// CPU-side RGBA surface with alpha-over compositing.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Transparent canvas of `width` × `height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::new(width, height) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: [u8; 4]) {
        for px in self.image.pixels_mut() {
            *px = Rgba(color);
        }
    }

    /// Fill the pixels of `(x, y, w, h)` that lie on the canvas.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: [u8; 4]) {
        let x0 = x.max(0) as u32;
        let y0 = y.max(0) as u32;
        let x1 = (x + w as i32).clamp(0, self.width() as i32) as u32;
        let y1 = (y + h as i32).clamp(0, self.height() as i32) as u32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.image.put_pixel(px, py, Rgba(color));
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Write the canvas as a PNG.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|source| Error::ImageWrite { path: path.to_path_buf(), source })
    }
}

impl RenderTarget for Canvas {
    fn blit_image(&mut self, image: &RgbaImage, at: IVec2) {
        image::imageops::overlay(&mut self.image, image, at.x as i64, at.y as i64);
    }
}
