//! Reading and Writing of image files (PNG, PPM, ...)
//!
//! The format is chosen from the file extension by the `image` crate
//!
use crate::error::Result;

use log::{debug, info};
use std::path::Path;

/// Load an image as RGB8 component data, width and height
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename.as_ref())?.to_rgb();
    let (w, h) = img.dimensions();
    debug!("read {}: {}x{}", filename.as_ref().display(), w, h);
    Ok((img.into_raw(), w as usize, h as usize))
}

/// Save component data of `width` x `height` pixels laid out as `color`
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize,
                                  color: image::ColorType, filename: P) -> Result<()> {
    debug!("write {}: {}x{}", filename.as_ref().display(), width, height);
    image::save_buffer(filename, buf, width as u32, height as u32, color)?;
    Ok(())
}

/// Compare two image files pixel by pixel
///
/// Differences are logged and reported as `false`
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        info!("IMG DIFF: sizes differ {}x{} {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut n = 0;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            debug!("IMG DIFF: {} [{},{},{}]: {} {}", i, (i/3)%w1,(i/3)/w1,i%3, v1,v2);
            n += 1;
        }
    }
    if n > 0 {
        info!("IMG DIFF: {} components differ", n);
    }
    Ok(n == 0)
}
