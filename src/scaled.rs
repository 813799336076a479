//! Magnified view of a surface

use crate::color::Rgb8;
use crate::error::{Error, Result};
use crate::Surface;

/// Surface where each pixel covers a `scale` x `scale` block of
///   an underlying surface
///
/// Useful to look at the individual pixels chosen by a rasterizer.
///   Partial blocks at the right and bottom border are not addressable.
#[derive(Debug)]
pub struct ScaledSurface<'a, S: Surface> {
    inner: &'a mut S,
    scale: usize,
}

impl<'a, S: Surface> ScaledSurface<'a, S> {
    /// Fails with `InvalidGeometry` if `scale` is 0
    pub fn new(inner: &'a mut S, scale: usize) -> Result<Self> {
        if scale == 0 {
            return Err(Error::geometry("pixel scale must be at least 1"));
        }
        Ok(Self { inner, scale })
    }
    pub fn scale(&self) -> usize {
        self.scale
    }
}

impl<'a, S: Surface> Surface for ScaledSurface<'a, S> {
    fn width(&self) -> usize {
        self.inner.width() / self.scale
    }
    fn height(&self) -> usize {
        self.inner.height() / self.scale
    }
    /// Color of the top-left pixel of the block
    fn get_pixel(&self, x: i64, y: i64) -> Option<Rgb8> {
        if ! self.contains(x, y) {
            return None;
        }
        let s = self.scale as i64;
        self.inner.get_pixel(x * s, y * s)
    }
    fn set_pixel(&mut self, x: i64, y: i64, c: Rgb8) {
        if ! self.contains(x, y) {
            return;
        }
        let s = self.scale as i64;
        for yi in y * s .. (y + 1) * s {
            self.inner.copy_hline(x * s, yi, s, c);
        }
    }
}
