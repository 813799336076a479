//! Polygon scan conversion

use crate::color::Rgb8;
use crate::edge::{ActiveEdgeTable, EdgeTable};
use crate::error::{Error, Result};
use crate::geometry::Polygon;
use crate::render::render_scanlines;
use crate::scan::Scanline;
use crate::Surface;

use log::{debug, trace, warn};

/// What to do with a scanline crossing an odd number of edges
///
/// A closed polygon always crosses a scanline an even number of times,
///   so this only matters for degenerate input.
#[derive(Debug,PartialEq,Copy,Clone)]
pub enum OddEdgePolicy {
    /// Ignore the right-most unpaired edge on that scanline
    Drop,
    /// Fail the whole call without writing any pixel
    Reject,
}
impl Default for OddEdgePolicy {
    fn default() -> OddEdgePolicy {
        OddEdgePolicy::Drop
    }
}

/// Even-Odd scanline polygon filler
///
///    ET  = EdgeTable::new(polygon)     -- sorted by y_lower
///    AET = []
///    for y in 0 .. height
///       retire edges with y_upper <= y
///       admit edges from the ET with ceil(y_lower) <= y
///       sort AET by x
///       spans between pairs: ceil(xL) .. ceil(xR)   -- right exclusive
///       x += dx/dy
///
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct ScanConverter {
    odd_edges: OddEdgePolicy,
}

impl ScanConverter {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_policy(odd_edges: OddEdgePolicy) -> Self {
        Self { odd_edges }
    }
    pub fn policy(&self) -> OddEdgePolicy {
        self.odd_edges
    }
    /// Covered spans of `polygon` on rows `0 .. height`
    ///
    /// Rows without any span are omitted; rows are in increasing order
    pub fn scanlines(&self, polygon: &Polygon, height: usize) -> Result<Vec<Scanline>> {
        self.sweep(&EdgeTable::new(polygon), height)
    }
    /// Covered spans of an edge table on rows `0 .. height`
    pub fn sweep(&self, et: &EdgeTable, height: usize) -> Result<Vec<Scanline>> {
        let entries = et.entries();
        let mut aet = ActiveEdgeTable::new();
        let mut next = 0;
        let mut out = vec![];

        for y in 0 .. height as i64 {
            if next >= entries.len() && aet.is_empty() {
                break;
            }
            aet.retire(y);
            // Edges starting above row 0 enter at row 0 at their
            //   interpolated x, already finished ones are skipped
            while next < entries.len() && entries[next].first_scanline() <= y {
                if entries[next].covers(y) {
                    aet.admit(&entries[next], y);
                }
                next += 1;
            }
            aet.sort();
            if aet.len() % 2 == 1 {
                match self.odd_edges {
                    OddEdgePolicy::Drop => {
                        warn!("SCANLINE: {} odd number of active edges ({}), dropping the last", y, aet.len());
                    }
                    OddEdgePolicy::Reject => {
                        return Err(Error::UnpairedEdges { y, count: aet.len() });
                    }
                }
            }
            let mut sl = Scanline::new(y);
            for (xl, xr) in aet.pairs() {
                trace!("SCANLINE: {} SPAN {} -> {}", y, xl, xr);
                sl.add_span(column(xl), column(xr));
            }
            if ! sl.is_empty() {
                out.push(sl);
            }
            aet.step();
        }
        debug!("SCAN CONVERT: {} edges {} rows", entries.len(), out.len());
        Ok(out)
    }
    /// Fill `polygon` on `surface` with its color
    ///
    /// All spans are computed before the first pixel is written, so
    ///   an error leaves the surface untouched.
    pub fn fill<S>(&self, surface: &mut S, polygon: &Polygon) -> Result<()>
        where S: Surface + ?Sized
    {
        self.fill_edges(surface, &EdgeTable::new(polygon), polygon.color())
    }
    /// Fill the even-odd interior of an edge table on `surface`
    pub fn fill_edges<S>(&self, surface: &mut S, et: &EdgeTable, color: Rgb8) -> Result<()>
        where S: Surface + ?Sized
    {
        let scanlines = self.sweep(et, surface.height())?;
        render_scanlines(surface, &scanlines, color);
        Ok(())
    }
}

/// First pixel column at or right of `x`
///
/// Limited to the `i32` range so span lengths cannot overflow
fn column(x: f64) -> i64 {
    let lim = f64::from(std::i32::MAX);
    x.max(-lim).min(lim).ceil() as i64
}
