//! Aliased lines
//!
//! Uses [Bresenham's line drawing algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)

use crate::color::Rgb8;
use crate::error::{Error, Result};
use crate::geometry::{Line, PixelPoint, Point};
use crate::Surface;

use log::{debug, trace};

/// Pixels of a line, from the first end point to the second
///
/// Both end points are included and consecutive pixels are
///   8-connected. A line with `dx` and `dy` pixel deltas yields
///   exactly `max(|dx|,|dy|) + 1` pixels.
#[derive(Debug,Clone)]
pub struct LineInterpolator {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    count: i64,
}

impl LineInterpolator {
    /// Line between two pixels
    ///
    /// Fails with `InvalidGeometry` if a coordinate falls outside of
    ///   the `i32` range
    pub fn new(p0: PixelPoint, p1: PixelPoint) -> Result<Self> {
        check_range(p0)?;
        check_range(p1)?;
        let dx = (p1.x - p0.x).abs();
        let dy = (p1.y - p0.y).abs();
        let sx = if p0.x < p1.x { 1 } else { -1 };
        let sy = if p0.y < p1.y { 1 } else { -1 };
        Ok(Self { x: p0.x, y: p0.y, x1: p1.x, y1: p1.y,
                  dx, dy, sx, sy,
                  err: dx - dy,
                  count: std::cmp::max(dx, dy) + 1,
        })
    }
    /// Line between the pixels containing `p0` and `p1`
    ///
    /// Fails with `InvalidGeometry` if a coordinate is not finite or
    ///   falls outside of the `i32` range
    pub fn from_points(p0: Point, p1: Point) -> Result<Self> {
        Self::new(to_pixel(p0)?, to_pixel(p1)?)
    }
    /// Number of pixels not yet produced
    pub fn remaining(&self) -> usize {
        self.count as usize
    }
}

fn to_pixel(p: Point) -> Result<PixelPoint> {
    let lim = f64::from(std::i32::MAX);
    if ! p.is_finite() || p.x.abs() > lim || p.y.abs() > lim {
        return Err(Error::geometry(format!("line end point out of range: ({}, {})", p.x, p.y)));
    }
    Ok(p.floor())
}

fn check_range(p: PixelPoint) -> Result<()> {
    let lim = (i64::from(std::i32::MIN), i64::from(std::i32::MAX));
    if p.x < lim.0 || p.x > lim.1 || p.y < lim.0 || p.y > lim.1 {
        return Err(Error::geometry(format!("line end pixel out of range: ({}, {})", p.x, p.y)));
    }
    Ok(())
}

impl Iterator for LineInterpolator {
    type Item = PixelPoint;
    fn next(&mut self) -> Option<PixelPoint> {
        if self.count <= 0 {
            return None;
        }
        let p = PixelPoint::new(self.x, self.y);
        self.count -= 1;
        if self.x == self.x1 && self.y == self.y1 {
            self.count = 0;
            return Some(p);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(p)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

/// Draw a line from `p0` to `p1` of color `c`
///
/// End points are truncated to the pixels containing them. Pixels
///   outside of the surface are skipped.
///
///     use softras::{Surface,Pixfmt,Rgb8,Point,draw_line};
///
///     let mut pix = Pixfmt::<Rgb8>::new(10,10);
///     pix.clear();
///     draw_line(&mut pix, Point::new(0.,0.), Point::new(9.,0.), Rgb8::black()).unwrap();
///     assert_eq!(pix.get_pixel(9,0), Some(Rgb8::black()));
///     assert_eq!(pix.get_pixel(0,1), Some(Rgb8::white()));
///
pub fn draw_line<S>(surface: &mut S, p0: Point, p1: Point, c: Rgb8) -> Result<()>
    where S: Surface + ?Sized
{
    let li = LineInterpolator::from_points(p0, p1)?;
    debug!("DRAW LINE: ({}, {}) -> ({}, {}) {} pixels", p0.x, p0.y, p1.x, p1.y, li.remaining());
    for p in li {
        trace!("DRAW LINE: pixel {} {}", p.x, p.y);
        surface.set_pixel(p.x, p.y, c);
    }
    Ok(())
}

/// Draw a [Line] with its own color
///
/// [Line]: ../geometry/struct.Line.html
pub fn draw_segment<S>(surface: &mut S, line: &Line) -> Result<()>
    where S: Surface + ?Sized
{
    draw_line(surface, line.p0, line.p1, line.color)
}
