//! Filled circles and rings

use crate::color::Rgb8;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::Surface;

use log::debug;

fn check(center: Point, values: &[(&str, f64)]) -> Result<()> {
    if ! center.is_finite() {
        return Err(Error::geometry(format!("circle center is not finite: ({}, {})", center.x, center.y)));
    }
    for &(name, v) in values {
        if ! v.is_finite() || v < 0.0 {
            return Err(Error::geometry(format!("circle {} must be finite and >= 0, got {}", name, v)));
        }
    }
    Ok(())
}

/// Visit the pixels of `surface` within `radius` of `center`
///
/// `f` gets the pixel and its squared distance to the center
fn for_each_in_disc<S, F>(surface: &mut S, center: Point, radius: f64, mut f: F)
    where S: Surface + ?Sized,
          F: FnMut(&mut S, i64, i64, f64)
{
    let x1 = std::cmp::max((center.x - radius).floor() as i64, 0);
    let y1 = std::cmp::max((center.y - radius).floor() as i64, 0);
    let x2 = std::cmp::min((center.x + radius).ceil() as i64, surface.width() as i64 - 1);
    let y2 = std::cmp::min((center.y + radius).ceil() as i64, surface.height() as i64 - 1);
    for y in y1 ..= y2 {
        for x in x1 ..= x2 {
            let dx = x as f64 - center.x;
            let dy = y as f64 - center.y;
            f(&mut *surface, x, y, dx * dx + dy * dy);
        }
    }
}

/// Fill every pixel closer than `radius` to `center`
///
/// Distances are measured from the pixel coordinate itself
pub fn fill_circle<S>(surface: &mut S, center: Point, radius: f64, color: Rgb8) -> Result<()>
    where S: Surface + ?Sized
{
    check(center, &[("radius", radius)])?;
    debug!("FILL CIRCLE: ({}, {}) r {}", center.x, center.y, radius);
    let r2 = radius * radius;
    for_each_in_disc(surface, center, radius, |s, x, y, d2| {
        if d2 < r2 {
            s.set_pixel(x, y, color);
        }
    });
    Ok(())
}

/// Fill a circle of `inner_radius` surrounded by a ring `contour_width` wide
///
/// Pixels farther out than `inner_radius + contour_width` are untouched
pub fn fill_ring<S>(surface: &mut S, center: Point, inner_radius: f64, contour_width: f64,
                    inner: Rgb8, contour: Rgb8) -> Result<()>
    where S: Surface + ?Sized
{
    check(center, &[("radius", inner_radius), ("contour width", contour_width)])?;
    let outer = inner_radius + contour_width;
    debug!("FILL RING: ({}, {}) r {} -> {}", center.x, center.y, inner_radius, outer);
    let (ri2, ro2) = (inner_radius * inner_radius, outer * outer);
    for_each_in_disc(surface, center, outer, |s, x, y, d2| {
        if d2 < ri2 {
            s.set_pixel(x, y, inner);
        } else if d2 < ro2 {
            s.set_pixel(x, y, contour);
        }
    });
    Ok(())
}
