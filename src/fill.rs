//! Region (flood) fill

use crate::color::Rgb8;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::Surface;

use log::debug;

/// Recolor the 4-connected region around `seed`
///
/// Every pixel reachable from the seed through up, down, left and
///   right steps, and having the seed's original color, is set to `fill`.
///   Returns the number of pixels changed.
///
/// Nothing happens if the seed is outside of the surface or
///   already has the color `fill`.
///
/// Pending pixels are kept on an explicit stack, so region size is
///   limited by memory rather than call depth. The stack never holds
///   more entries than the region has pixels.
pub fn flood_fill<S>(surface: &mut S, seed: Point, fill: Rgb8) -> Result<usize>
    where S: Surface + ?Sized
{
    if ! seed.is_finite() {
        return Err(Error::geometry(format!("seed is not finite: ({}, {})", seed.x, seed.y)));
    }
    let seed = seed.floor();
    let target = match surface.get_pixel(seed.x, seed.y) {
        Some(c) => c,
        None => return Ok(0),
    };
    if target == fill {
        return Ok(0);
    }
    // Pixels are colored when pushed, so none is pushed twice
    surface.set_pixel(seed.x, seed.y, fill);
    let mut n = 1;
    let mut stack = vec![seed];
    while let Some(p) = stack.pop() {
        for q in p.neighbors4().iter() {
            if surface.get_pixel(q.x, q.y) == Some(target) {
                surface.set_pixel(q.x, q.y, fill);
                n += 1;
                stack.push(*q);
            }
        }
    }
    debug!("FLOOD FILL: seed {} {} recolored {} pixels", seed.x, seed.y, n);
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pixfmt;
    use std::cell::Cell;
    use std::collections::HashMap;

    #[test]
    fn fill_everything() {
        let mut pix = Pixfmt::<Rgb8>::new(7, 5);
        pix.clear();
        let n = flood_fill(&mut pix, Point::new(3.5, 2.5), Rgb8::black()).unwrap();
        assert_eq!(n, 35);
        assert_eq!(flood_fill(&mut pix, Point::new(0., 0.), Rgb8::black()).unwrap(), 0);
    }
    #[test]
    fn seed_outside() {
        let mut pix = Pixfmt::<Rgb8>::new(3, 3);
        pix.clear();
        assert_eq!(flood_fill(&mut pix, Point::new(-1., 0.), Rgb8::black()).unwrap(), 0);
        assert_eq!(flood_fill(&mut pix, Point::new(3., 0.), Rgb8::black()).unwrap(), 0);
        assert!(flood_fill(&mut pix, Point::new(f64::NAN, 0.), Rgb8::black()).is_err());
    }
    /// Counts pixel reads and writes of the wrapped surface
    struct Counting<'a> {
        pix: &'a mut Pixfmt<Rgb8>,
        reads: Cell<usize>,
        writes: HashMap<(i64,i64),usize>,
    }
    impl<'a> Surface for Counting<'a> {
        fn width(&self) -> usize { self.pix.width() }
        fn height(&self) -> usize { self.pix.height() }
        fn get_pixel(&self, x: i64, y: i64) -> Option<Rgb8> {
            self.reads.set(self.reads.get() + 1);
            self.pix.get_pixel(x, y)
        }
        fn set_pixel(&mut self, x: i64, y: i64, c: Rgb8) {
            *self.writes.entry((x,y)).or_insert(0) += 1;
            self.pix.set_pixel(x, y, c);
        }
    }

    #[test]
    fn each_pixel_visited_once() {
        let mut pix = Pixfmt::<Rgb8>::new(9, 7);
        pix.clear();
        for y in 0 .. 5 {
            pix.set_pixel(4, y, Rgb8::black());
        }
        let mut s = Counting { pix: &mut pix, reads: Cell::new(0), writes: HashMap::new() };
        let n = flood_fill(&mut s, Point::new(0., 0.), Rgb8::new(0,0,255)).unwrap();
        assert_eq!(n, 9 * 7 - 5);
        assert_eq!(s.writes.len(), n);
        assert!(s.writes.values().all(|&k| k == 1));
        // One read of the seed, then four neighbors per popped pixel
        assert_eq!(s.reads.get(), 1 + 4 * n);
    }
    #[test]
    fn diagonal_is_not_connected() {
        let mut pix = Pixfmt::<Rgb8>::new(2, 2);
        pix.clear();
        pix.set_pixel(1, 0, Rgb8::black());
        pix.set_pixel(0, 1, Rgb8::black());
        let red = Rgb8::new(255, 0, 0);
        assert_eq!(flood_fill(&mut pix, Point::new(0., 0.), red).unwrap(), 1);
        assert_eq!(pix.get_pixel(1, 1), Some(Rgb8::white()));
    }
}
