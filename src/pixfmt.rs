//! Pixel Format

use crate::buffer::RenderingBuffer;
use crate::color::*;
use crate::error::Result;
use crate::ppm;

use crate::PixelData;
use crate::Surface;

use std::marker::PhantomData;
use std::path::Path;

/// Storage layout of a single pixel
pub trait Pixel {
    /// Bytes per pixel
    fn bpp() -> usize;
    /// Layout used when saving to an image file
    fn color_type() -> image::ColorType;
    /// Write `c` into the components `p`
    fn encode(c: Rgb8, p: &mut [u8]);
    /// Read the color stored in components `p`
    fn decode(p: &[u8]) -> Rgb8;
}

impl Pixel for Rgb8 {
    fn bpp() -> usize { 3 }
    fn color_type() -> image::ColorType { image::ColorType::RGB(8) }
    fn encode(c: Rgb8, p: &mut [u8]) {
        p[0] = c.r;
        p[1] = c.g;
        p[2] = c.b;
    }
    fn decode(p: &[u8]) -> Rgb8 {
        Rgb8::new(p[0], p[1], p[2])
    }
}

/// Alpha is always written as 255
impl Pixel for Rgba8 {
    fn bpp() -> usize { 4 }
    fn color_type() -> image::ColorType { image::ColorType::RGBA(8) }
    fn encode(c: Rgb8, p: &mut [u8]) {
        p[0] = c.r;
        p[1] = c.g;
        p[2] = c.b;
        p[3] = 255;
    }
    fn decode(p: &[u8]) -> Rgb8 {
        Rgb8::new(p[0], p[1], p[2])
    }
}

/// Pixel Format Wrapper around raw pixel component data
///
#[derive(Debug,Clone,PartialEq)]
pub struct Pixfmt<T> {
    rbuf: RenderingBuffer,
    phantom: PhantomData<T>,
}

impl<T: Pixel> Pixfmt<T> {
    /// Create new Pixel Format of width * height * bpp
    ///
    /// Allocates memory of width * height * bpp, all components are 0
    pub fn new(width: usize, height: usize) -> Self {
        Self { rbuf: RenderingBuffer::new(width, height, T::bpp()),
               phantom: PhantomData
        }
    }
    /// Size of Rendering Buffer in bytes; width * height * bpp
    pub fn size(&self) -> usize {
        self.rbuf.len()
    }
    /// Clear the Image
    ///
    /// All color components are set to 255, including `alpha` if present
    ///
    ///     use softras::{Surface,Pixfmt,Rgb8};
    ///
    ///     let mut pix = Pixfmt::<Rgb8>::new(2,2);
    ///     pix.clear();
    ///     assert_eq!(pix.get_pixel(0,0), Some(Rgb8::white()));
    ///     assert_eq!(pix.get_pixel(1,1), Some(Rgb8::white()));
    ///     assert_eq!(pix.get_pixel(2,2), None);
    ///
    pub fn clear(&mut self) {
        self.rbuf.clear();
    }
    /// Set every pixel to `c`
    pub fn fill(&mut self, c: Rgb8) {
        self.rbuf.data.chunks_mut(T::bpp()).for_each(|p| T::encode(c, p));
    }
    /// Save the Image to `filename`, format is chosen by the extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        ppm::write_file(&self.rbuf.data, self.rbuf.width, self.rbuf.height, T::color_type(), filename)
    }
    /// Load an Image from `filename`
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let (data, width, height) = ppm::read_file(filename)?;
        let mut pix = Self::new(width, height);
        for (src, dst) in data.chunks(3).zip(pix.rbuf.data.chunks_mut(T::bpp())) {
            T::encode(Rgb8::new(src[0], src[1], src[2]), dst);
        }
        Ok(pix)
    }
}

/// Access Pixeldata from a Pixfmt<T>
///
impl<T> PixelData for Pixfmt<T> {
    fn pixeldata(&self) -> &[u8] {
        & self.rbuf.data
    }
}

impl<T: Pixel> Surface for Pixfmt<T> {
    /// Width of rendering buffer in pixels
    fn width(&self) -> usize {
        self.rbuf.width
    }
    /// Height of rendering buffer in pixels
    fn height(&self) -> usize {
        self.rbuf.height
    }
    fn get_pixel(&self, x: i64, y: i64) -> Option<Rgb8> {
        if ! self.contains(x, y) {
            return None;
        }
        Some(T::decode(&self.rbuf[(x as usize, y as usize)]))
    }
    /// Copies the color `c` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use softras::{Surface,Pixfmt,Rgba8,Rgb8};
    ///
    ///     let mut pix = Pixfmt::<Rgba8>::new(1,2);
    ///     pix.set_pixel(0,1, Rgb8::black());
    ///     assert_eq!(pix.get_pixel(0,1), Some(Rgb8::black()));
    ///
    ///     pix.set_pixel(10,10, Rgb8::black()); // Ignored, outside of range
    ///     pix.set_pixel(-1,0, Rgb8::black());  // Ignored, outside of range
    ///
    fn set_pixel(&mut self, x: i64, y: i64, c: Rgb8) {
        if ! self.contains(x, y) {
            return;
        }
        T::encode(c, &mut self.rbuf[(x as usize, y as usize)]);
    }
    fn copy_hline(&mut self, x: i64, y: i64, len: i64, c: Rgb8) {
        if y < 0 || y >= self.rbuf.height as i64 || len <= 0 {
            return;
        }
        let x1 = std::cmp::max(x, 0);
        let x2 = std::cmp::min(x.saturating_add(len), self.rbuf.width as i64);
        if x1 >= x2 {
            return;
        }
        let bpp = T::bpp();
        let row = self.rbuf.row_ptr(y as usize);
        row[x1 as usize * bpp .. x2 as usize * bpp]
            .chunks_mut(bpp)
            .for_each(|p| T::encode(c, p));
    }
}
