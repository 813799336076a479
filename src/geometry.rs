//! Points, Lines and Polygons

use crate::color::Rgb8;
use crate::error::{Error, Result};

use std::f64::consts::PI;

/// Continuous (sub-pixel) location
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Discrete pixel location
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash,PartialOrd,Ord)]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
    /// Pixel containing this point, i.e. both coordinates truncated
    ///   towards negative infinity
    pub fn floor(&self) -> PixelPoint {
        PixelPoint::new(self.x.floor() as i64, self.y.floor() as i64)
    }
}

impl From<(f64,f64)> for Point {
    fn from((x,y): (f64,f64)) -> Self {
        Point::new(x, y)
    }
}

impl PixelPoint {
    pub fn new(x: i64, y: i64) -> Self {
        PixelPoint { x, y }
    }
    /// Up, down, left and right neighbors
    pub fn neighbors4(&self) -> [PixelPoint; 4] {
        let PixelPoint { x, y } = *self;
        [PixelPoint::new(x + 1, y),
         PixelPoint::new(x - 1, y),
         PixelPoint::new(x, y + 1),
         PixelPoint::new(x, y - 1)]
    }
}

impl From<PixelPoint> for Point {
    fn from(p: PixelPoint) -> Self {
        Point::new(p.x as f64, p.y as f64)
    }
}

/// Line Segment with a color
///
/// There is no preferred direction, `p0` and `p1` are both drawn
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Line {
    pub p0: Point,
    pub p1: Point,
    pub color: Rgb8,
}

impl Line {
    pub fn new<P: Into<Point>>(p0: P, p1: P, color: Rgb8) -> Self {
        Line { p0: p0.into(), p1: p1.into(), color }
    }
}

/// Closed polygon with a fill color
///
/// The last vertex connects back to the first. Polygons may be
///   non-convex and self-intersecting; they are filled with the
///   even-odd rule.
#[derive(Debug,Clone,PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    color: Rgb8,
}

impl Polygon {
    /// Create a new polygon
    ///
    /// Fails with `InvalidGeometry` for fewer than 3 vertices or a
    ///   non-finite coordinate
    pub fn new<P: Into<Point>>(vertices: Vec<P>, color: Rgb8) -> Result<Self> {
        let vertices : Vec<Point> = vertices.into_iter().map(Into::into).collect();
        if vertices.len() < 3 {
            return Err(Error::geometry(format!("polygon needs at least 3 vertices, got {}", vertices.len())));
        }
        if let Some(p) = vertices.iter().find(|p| ! p.is_finite()) {
            return Err(Error::geometry(format!("polygon vertex is not finite: ({}, {})", p.x, p.y)));
        }
        let polygon = Polygon { vertices, color };
        if let Some((a, b)) = polygon.edges().find(|&(a, b)| ! edge_is_finite(a, b)) {
            return Err(Error::geometry(format!("polygon edge ({}, {}) -> ({}, {}) overflows",
                                               a.x, a.y, b.x, b.y)));
        }
        Ok(polygon)
    }
    /// Regular polygon with `sides` vertices on a circle
    ///
    /// Odd side counts start with a vertex at the top, even ones with
    ///   a flat top edge; the result is then turned by half a segment.
    pub fn regular(center: Point, radius: f64, sides: usize, color: Rgb8) -> Result<Self> {
        if sides < 3 {
            return Err(Error::geometry(format!("regular polygon needs at least 3 sides, got {}", sides)));
        }
        if ! radius.is_finite() || radius < 0.0 {
            return Err(Error::geometry(format!("regular polygon radius must be finite and >= 0, got {}", radius)));
        }
        let n = sides as f64;
        let start = (if sides % 2 == 1 { -PI / 2.0 } else { -PI / n }) + PI / n;
        let vertices : Vec<Point> = (0 .. sides)
            .map(|i| start + 2.0 * PI * i as f64 / n)
            .map(|a| Point::new(center.x + radius * a.cos(), center.y + radius * a.sin()))
            .collect();
        Self::new(vertices, color)
    }
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    pub fn color(&self) -> Rgb8 {
        self.color
    }
    /// Edges as (start, end) pairs, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0 .. n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

/// Check that the deltas and the inverse slope of an edge are finite
///
/// Horizontal edges have no slope and only need finite deltas
pub fn edge_is_finite(a: Point, b: Point) -> bool {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx.is_finite() && dy.is_finite() && (dy == 0.0 || (dx / dy).is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_negative() {
        assert_eq!(Point::new(-0.5, 2.9).floor(), PixelPoint::new(-1, 2));
        assert_eq!(Point::new(3.0, 0.0).floor(), PixelPoint::new(3, 0));
    }
    #[test]
    fn polygon_validation() {
        let c = Rgb8::black();
        assert!(Polygon::new(vec![(0.,0.),(1.,1.)], c).is_err());
        assert!(Polygon::new(Vec::<Point>::new(), c).is_err());
        assert!(Polygon::new(vec![(0.,0.),(1.,f64::NAN),(2.,0.)], c).is_err());
        assert!(Polygon::new(vec![(-1e308,0.),(1e308,1.),(0.,2.)], c).is_err());
        assert!(Polygon::new(vec![(0.,0.),(1e300,1e-10),(0.,1.)], c).is_err());
        assert!(! edge_is_finite(Point::new(0.,-1e308), Point::new(0.,1e308)));
        assert!(edge_is_finite(Point::new(-1e307,5.), Point::new(1e307,5.)));
        let p = Polygon::new(vec![(0.,0.),(4.,0.),(2.,3.)], c).unwrap();
        let edges : Vec<_> = p.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (Point::new(2.,3.), Point::new(0.,0.)));
    }
    #[test]
    fn regular_polygon() {
        let c = Rgb8::black();
        assert!(Polygon::regular(Point::new(0.,0.), 1.0, 2, c).is_err());
        assert!(Polygon::regular(Point::new(0.,0.), -1.0, 5, c).is_err());
        let center = Point::new(50., 50.);
        for &sides in [3, 4, 5, 6, 12].iter() {
            let p = Polygon::regular(center, 20.0, sides, c).unwrap();
            assert_eq!(p.vertices().len(), sides);
            for v in p.vertices() {
                let d = ((v.x - center.x).powi(2) + (v.y - center.y).powi(2)).sqrt();
                assert!((d - 20.0).abs() < 1e-9);
            }
        }
        // Square: a flat top edge turned by 45 degrees puts a vertex on the x axis
        let p = Polygon::regular(center, 10.0, 4, c).unwrap();
        assert!((p.vertices()[0].x - 60.0).abs() < 1e-9);
        assert!((p.vertices()[0].y - 50.0).abs() < 1e-9);
    }
}
