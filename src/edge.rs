//! Edge Table and Active Edge Table

use crate::geometry::{edge_is_finite, Point, Polygon};

use log::trace;
use std::cmp::Ordering;

/// Non-horizontal polygon edge, oriented from its lower to its upper y
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct EdgeTableEntry {
    /// Smaller y of the two end points
    pub y_lower: f64,
    /// x at `y_lower`
    pub x_lower: f64,
    /// Larger y, exclusive
    pub y_upper: f64,
    /// Change in x for a unit step in y (dx/dy)
    pub inv_slope: f64,
}

impl EdgeTableEntry {
    /// Edge from `p0` to `p1`, `None` for horizontal edges
    pub fn new(p0: Point, p1: Point) -> Option<Self> {
        if p0.y == p1.y {
            return None;
        }
        let (lo, hi) = if p0.y < p1.y { (p0, p1) } else { (p1, p0) };
        Some(EdgeTableEntry {
            y_lower: lo.y,
            x_lower: lo.x,
            y_upper: hi.y,
            inv_slope: (hi.x - lo.x) / (hi.y - lo.y),
        })
    }
    /// First scanline at or above `y_lower`
    pub fn first_scanline(&self) -> i64 {
        self.y_lower.ceil() as i64
    }
    /// Check if scanline `y` crosses the edge, upper end excluded
    pub fn covers(&self, y: i64) -> bool {
        let y = y as f64;
        self.y_lower <= y && y < self.y_upper
    }
    /// x where the edge crosses scanline `y`
    pub fn x_at(&self, y: i64) -> f64 {
        let dy = y as f64 - self.y_lower;
        if dy == 0.0 {
            self.x_lower
        } else {
            self.x_lower + self.inv_slope * dy
        }
    }
}

/// Non-horizontal edges of a polygon sorted by `y_lower`
#[derive(Debug,Default,Clone)]
pub struct EdgeTable {
    entries: Vec<EdgeTableEntry>,
}

impl EdgeTable {
    /// Edge table of a closed polygon
    pub fn new(polygon: &Polygon) -> Self {
        Self::from_edges(polygon.edges())
    }
    /// Edge table of an arbitrary set of edges
    ///
    /// The edges need not form a closed outline; scanlines may then
    ///   cross an odd number of them. Edges with a non-finite end point,
    ///   delta or slope are skipped.
    pub fn from_edges<I>(edges: I) -> Self
        where I: IntoIterator<Item = (Point, Point)>
    {
        let mut entries : Vec<_> = edges.into_iter()
            .filter(|&(p0, p1)| p0.is_finite() && p1.is_finite() && edge_is_finite(p0, p1))
            .filter_map(|(p0, p1)| EdgeTableEntry::new(p0, p1))
            .collect();
        entries.sort_by(|a, b| a.y_lower.partial_cmp(&b.y_lower).unwrap_or(Ordering::Equal));
        for e in &entries {
            trace!("ET: {} {} {} {}", e.y_lower, e.x_lower, e.y_upper, e.inv_slope);
        }
        Self { entries }
    }
    pub fn entries(&self) -> &[EdgeTableEntry] {
        &self.entries
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Edge crossing the current scanline
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct ActiveEdge {
    /// x where the edge crosses the current scanline
    pub x_intersect: f64,
    /// Larger y, exclusive
    pub y_upper: f64,
    /// Change in x for a unit step in y
    pub inv_slope: f64,
}

/// Edges crossing the current scanline
#[derive(Debug,Default,Clone)]
pub struct ActiveEdgeTable {
    entries: Vec<ActiveEdge>,
}

impl ActiveEdgeTable {
    pub fn new() -> Self {
        Self { entries: vec![] }
    }
    /// Drop edges that end at or below scanline `y`
    pub fn retire(&mut self, y: i64) {
        let y = y as f64;
        self.entries.retain(|e| y < e.y_upper);
    }
    /// Start tracking `e` at scanline `y`
    pub fn admit(&mut self, e: &EdgeTableEntry, y: i64) {
        self.entries.push(ActiveEdge {
            x_intersect: e.x_at(y),
            y_upper: e.y_upper,
            inv_slope: e.inv_slope,
        });
    }
    /// Order edges by increasing `x_intersect`
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| a.x_intersect.partial_cmp(&b.x_intersect).unwrap_or(Ordering::Equal));
    }
    /// Move every edge to the next scanline
    pub fn step(&mut self) {
        for e in self.entries.iter_mut() {
            e.x_intersect += e.inv_slope;
        }
    }
    /// Consecutive pairs of intersections (0-1, 2-3, ...)
    ///
    /// A trailing unpaired edge is not part of the output
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.entries.chunks_exact(2).map(|p| (p[0].x_intersect, p[1].x_intersect))
    }
    pub fn entries(&self) -> &[ActiveEdge] {
        &self.entries
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb8;

    #[test]
    fn edge_entry() {
        assert!(EdgeTableEntry::new(Point::new(0.,2.), Point::new(5.,2.)).is_none());
        let e = EdgeTableEntry::new(Point::new(3.,5.), Point::new(1.,1.)).unwrap();
        assert_eq!(e, EdgeTableEntry { y_lower: 1., x_lower: 1., y_upper: 5., inv_slope: 0.5 });
        assert_eq!(e.first_scanline(), 1);
        assert_eq!(e.x_at(3), 2.0);
        assert!(e.covers(1));
        assert!(e.covers(4));
        assert!(! e.covers(5));
        let e = EdgeTableEntry::new(Point::new(0.,-0.5), Point::new(1.,2.5)).unwrap();
        assert_eq!(e.first_scanline(), 0);
    }
    #[test]
    fn edge_table_sorted() {
        let p = Polygon::new(vec![(0.,8.),(4.,0.),(8.,8.),(4.,3.)], Rgb8::black()).unwrap();
        let et = EdgeTable::new(&p);
        assert_eq!(et.len(), 4);
        let ys : Vec<_> = et.entries().iter().map(|e| e.y_lower).collect();
        assert_eq!(ys, vec![0., 0., 3., 3.]);

        let p = Polygon::new(vec![(0.,0.),(4.,0.),(4.,4.),(0.,4.)], Rgb8::black()).unwrap();
        assert_eq!(EdgeTable::new(&p).len(), 2);
        assert!(EdgeTable::default().is_empty());

        let et = EdgeTable::from_edges(vec![(Point::new(0.,3.), Point::new(1.,1.)),
                                            (Point::new(0.,0.), Point::new(f64::NAN,1.)),
                                            (Point::new(-1e308,-1e308), Point::new(1e308,1e308))]);
        assert_eq!(et.len(), 1);
        assert!(et.entries().iter().all(|e| e.inv_slope.is_finite()));
    }
    #[test]
    fn active_edge_table() {
        let a = EdgeTableEntry::new(Point::new(5.,1.), Point::new(3.,5.)).unwrap();
        let b = EdgeTableEntry::new(Point::new(1.,1.), Point::new(3.,5.)).unwrap();
        let mut aet = ActiveEdgeTable::new();
        aet.admit(&a, 1);
        aet.admit(&b, 1);
        aet.sort();
        assert_eq!(aet.pairs().collect::<Vec<_>>(), vec![(1.0, 5.0)]);
        aet.step();
        assert_eq!(aet.pairs().collect::<Vec<_>>(), vec![(1.5, 4.5)]);
        aet.retire(4);
        assert_eq!(aet.len(), 2);
        aet.retire(5);
        assert!(aet.is_empty());
    }
    #[test]
    fn unpaired_edge_dropped() {
        let a = EdgeTableEntry::new(Point::new(0.,0.), Point::new(0.,5.)).unwrap();
        let mut aet = ActiveEdgeTable::new();
        for _ in 0 .. 3 {
            aet.admit(&a, 0);
        }
        assert_eq!(aet.pairs().count(), 1);
    }
}
