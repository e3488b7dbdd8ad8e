//! Render target contract: the one capability the comparator needs from a
//! rendering surface.
//!
//! The concrete surface (a browser page, an emulator framebuffer, a headless
//! renderer) stays outside this crate; anything that can produce a full-page
//! PNG capture on demand can be compared against a baseline.

use crate::codec::encode_png;
use crate::result::{CotejarError, CotejarResult};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// A surface that can produce a full-page screenshot on demand
pub trait RenderTarget {
    /// Capture the currently rendered content as PNG bytes
    fn capture_png(&mut self) -> CotejarResult<Vec<u8>>;
}

/// An in-memory render target backed by a fixed image
///
/// Useful in tests and simulations where no real rendering surface exists:
/// every capture returns the same image.
#[derive(Debug, Clone)]
pub struct StillImage {
    image: RgbaImage,
}

impl StillImage {
    /// Create a still target from an image
    #[must_use]
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Create a still target filled with a single color
    #[must_use]
    pub fn solid(width: u32, height: u32, color: Rgba<u8>) -> Self {
        let mut image = RgbaImage::new(width, height);
        for pixel in image.pixels_mut() {
            *pixel = color;
        }
        Self { image }
    }

    /// Replace a single pixel, e.g. to simulate a rendering change
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        self.image.put_pixel(x, y, color);
    }

    /// Access the backing image
    #[must_use]
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl RenderTarget for StillImage {
    fn capture_png(&mut self) -> CotejarResult<Vec<u8>> {
        encode_png(&self.image)
    }
}

/// A render target that re-reads a PNG file from disk on every capture
///
/// Used for offline comparison of already-captured screenshots.
#[derive(Debug, Clone)]
pub struct PngFile {
    path: PathBuf,
}

impl PngFile {
    /// Create a file-backed target
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this target reads from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RenderTarget for PngFile {
    fn capture_png(&mut self) -> CotejarResult<Vec<u8>> {
        std::fs::read(&self.path).map_err(|e| {
            CotejarError::capture(format!("cannot read {}: {e}", self.path.display()))
        })
    }
}
