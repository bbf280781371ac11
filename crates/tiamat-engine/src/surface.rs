//! CPU render target.
//!
//! A `Surface` is the coordinate-indexed buffer the rasterizers' pixel
//! sinks write into. Pixel stores are relaxed atomic writes through
//! `&self`: tile workers never target the same coordinate (tiles are
//! disjoint), so no locking is needed and a shared reference doubles as a
//! concurrent sink. Anything beyond per-pixel writes — counters,
//! aggregation — is the caller's to synchronize.

use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::Result;

use crate::paint::Color;
use crate::raster::Pixel;

/// Packed-RGBA8 pixel buffer with atomic per-pixel stores.
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<AtomicU32>,
}

impl Surface {
    /// Creates a surface cleared to transparent.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "surface has zero size");

        let mut pixels = Vec::new();
        pixels.resize_with(width as usize * height as usize, || AtomicU32::new(0));

        Ok(Self { width, height, pixels })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Writes one pixel. Coordinates outside the surface are ignored —
    /// rasterizers may emit beyond the visible region.
    #[inline]
    pub fn store(&self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i].store(bytemuck::cast(color), Ordering::Relaxed);
        }
    }

    #[inline]
    pub fn load(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y)
            .map(|i| bytemuck::cast(self.pixels[i].load(Ordering::Relaxed)))
    }

    /// Fills the whole surface with `color`.
    pub fn fill(&mut self, color: Color) {
        let word: u32 = bytemuck::cast(color);
        for px in &mut self.pixels {
            *px.get_mut() = word;
        }
    }

    /// Sink adapter for [`fill_triangle`] and [`TextRun::rasterize`].
    ///
    /// [`fill_triangle`]: crate::raster::fill_triangle
    /// [`TextRun::rasterize`]: crate::text::TextRun::rasterize
    #[inline]
    pub fn sink(&self) -> impl Fn(Pixel) + Sync + '_ {
        move |px: Pixel| self.store(px.x, px.y, px.color)
    }

    /// Copies the buffer out as tightly packed row-major RGBA bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let words: Vec<u32> = self.pixels.iter().map(|px| px.load(Ordering::Relaxed)).collect();
        bytemuck::cast_slice(&words).to_vec()
    }
}
