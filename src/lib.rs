//! Aliased 2D software rasterization
//!
//! How does this work
//!
//!    pix = Pixfmt::<Rgb8>::new(w, h)        -- anything that implements Surface
//!
//!  Lines
//!    draw_line(pix, p0, p1, color)
//!      LineInterpolator                     -- Bresenham, one PixelPoint per step
//!        set_pixel()
//!
//!  Region Fill
//!    flood_fill(pix, seed, color)
//!      work list of PixelPoints             -- 4-neighborhood
//!        get_pixel() / set_pixel()
//!
//!  Polygons
//!    fill_polygon(pix, polygon)
//!      ScanConverter::scanlines()
//!        EdgeTable::new()                   -- non-horizontal edges, sorted by y_lower
//!        ActiveEdgeTable                    -- retire, admit, sort, pair, advance
//!     Output: Scanlines with Spans [x1,x2)
//!      render_scanlines()
//!        copy_hline()
//!
//! Pixels outside of the surface are dropped at `get_pixel` / `set_pixel`,
//! so none of the algorithms need to clip.

pub mod error;
pub mod color;
pub mod geometry;
pub mod buffer;
pub mod pixfmt;
pub mod scaled;
pub mod line_interp;
pub mod fill;
pub mod edge;
pub mod scan;
pub mod raster;
pub mod render;
pub mod circle;
pub mod ppm;

pub use error::*;
pub use color::*;
pub use geometry::*;
pub use buffer::*;
pub use pixfmt::*;
pub use scaled::*;
pub use line_interp::*;
pub use fill::*;
pub use edge::*;
pub use scan::*;
pub use raster::*;
pub use render::*;
pub use circle::*;

/// Access to the raw component data of a surface
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}

/// Fixed size, addressable pixel buffer
///
/// All rasterizers read and write through this trait. Coordinates
///   outside of `[0,width) x [0,height)` are never an error:
///   reads return `None` and writes are ignored.
pub trait Surface {
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// Color of the pixel at (`x`,`y`), `None` if outside the surface
    fn get_pixel(&self, x: i64, y: i64) -> Option<Rgb8>;
    /// Set the pixel at (`x`,`y`) to `c`, ignored if outside the surface
    fn set_pixel(&mut self, x: i64, y: i64, c: Rgb8);

    /// Check if (`x`,`y`) lies on the surface
    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width() as i64 && y < self.height() as i64
    }
    /// Copies the color `c` to pixels from (`x`,`y`) to (`x+len-1`,`y`)
    ///
    /// The run is clipped to the surface before any pixel is touched
    fn copy_hline(&mut self, x: i64, y: i64, len: i64, c: Rgb8) {
        if y < 0 || y >= self.height() as i64 || len <= 0 {
            return;
        }
        let x1 = std::cmp::max(x, 0);
        let x2 = std::cmp::min(x.saturating_add(len), self.width() as i64);
        for xi in x1 .. x2 {
            self.set_pixel(xi, y, c);
        }
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn width(&self) -> usize {
        (**self).width()
    }
    fn height(&self) -> usize {
        (**self).height()
    }
    fn get_pixel(&self, x: i64, y: i64) -> Option<Rgb8> {
        (**self).get_pixel(x, y)
    }
    fn set_pixel(&mut self, x: i64, y: i64, c: Rgb8) {
        (**self).set_pixel(x, y, c)
    }
    fn copy_hline(&mut self, x: i64, y: i64, len: i64, c: Rgb8) {
        (**self).copy_hline(x, y, len, c)
    }
}
