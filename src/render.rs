//! Renderer

use crate::color::Rgb8;
use crate::error::Result;
use crate::geometry::Polygon;
use crate::raster::ScanConverter;
use crate::scan::Scanline;
use crate::Surface;

use log::trace;

/// Render a single Scanline (y-row) with a solid color
pub fn render_scanline<S>(surface: &mut S, sl: &Scanline, color: Rgb8)
    where S: Surface + ?Sized
{
    for span in &sl.spans {
        trace!("RENDER SCANLINE: Span x,y,len {} {} {}", span.x, sl.y, span.len);
        surface.copy_hline(span.x, sl.y, span.len, color);
    }
}

/// Render Scanlines with a solid color
pub fn render_scanlines<S>(surface: &mut S, scanlines: &[Scanline], color: Rgb8)
    where S: Surface + ?Sized
{
    for sl in scanlines {
        render_scanline(surface, sl, color);
    }
}

/// Fill the interior of `polygon` using the even-odd rule
///
/// Uses the default [ScanConverter] settings
///
///     use softras::{Surface,Pixfmt,Rgb8,Polygon,fill_polygon};
///
///     let mut pix = Pixfmt::<Rgb8>::new(10,10);
///     pix.clear();
///     let tri = Polygon::new(vec![(1.,1.),(5.,1.),(3.,5.)], Rgb8::black()).unwrap();
///     fill_polygon(&mut pix, &tri).unwrap();
///     assert_eq!(pix.get_pixel(3,3), Some(Rgb8::black()));
///     assert_eq!(pix.get_pixel(5,1), Some(Rgb8::white()));
///
/// [ScanConverter]: ../raster/struct.ScanConverter.html
pub fn fill_polygon<S>(surface: &mut S, polygon: &Polygon) -> Result<()>
    where S: Surface + ?Sized
{
    ScanConverter::default().fill(surface, polygon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pixfmt;

    #[test]
    fn render_clipped_spans() {
        let mut pix = Pixfmt::<Rgb8>::new(4, 2);
        pix.clear();
        let mut sl = Scanline::new(1);
        sl.add_span(-3, 1);
        sl.add_span(3, 9);
        let off = Scanline { y: 5, spans: sl.spans.clone() };
        render_scanlines(&mut pix, &[sl, off], Rgb8::black());
        let row : Vec<_> = (0 .. 4).map(|x| pix.get_pixel(x, 1)).collect();
        let b = Some(Rgb8::black());
        let w = Some(Rgb8::white());
        assert_eq!(row, vec![b, w, w, b]);
        assert!((0 .. 4).all(|x| pix.get_pixel(x, 0) == w));
    }
}
