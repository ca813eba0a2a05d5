//! Writing and reading of frame snapshots
//!
//! Frames are stored as 8-bit RGBA images, the file format follows the
//! extension (PNG is the only one compiled in).
//!
use crate::color::ChannelOrder;
use crate::color::Rgba8;
use crate::error::Error;
use crate::error::Result;

use std::path::Path;

/// Unpack colors into RGBA bytes
pub fn to_rgba_bytes(buf: &[u32], order: ChannelOrder) -> Vec<u8> {
    buf.iter()
        .map(|&p| Rgba8::from_packed(p, order))
        .flat_map(|c| [c.r, c.g, c.b, c.a])
        .collect()
}

/// Pack RGBA bytes into colors
pub fn from_rgba_bytes(bytes: &[u8], order: ChannelOrder) -> Vec<u32> {
    bytes.chunks_exact(4)
        .map(|c| order.pack(c[0], c[1], c[2], c[3]))
        .collect()
}

/// Save the `width` x `height` image held in `buf`
///
/// `buf` may be longer than needed, never shorter.
pub fn write_file<P: AsRef<Path>>(buf: &[u32], width: usize, height: usize, order: ChannelOrder, filename: P) -> Result<()> {
    let pixels = width.checked_mul(height)
        .and_then(|n| buf.get(.. n))
        .ok_or(Error::BufferTooSmall { len: buf.len(), width, height })?;
    let bytes = to_rgba_bytes(pixels, order);
    image::save_buffer(filename, &bytes, width as u32, height as u32, image::ColorType::Rgba8)?;
    Ok(())
}

pub fn read_file<P: AsRef<Path>>(filename: P, order: ChannelOrder) -> Result<(Vec<u32>, usize, usize)> {
    let img = image::open(filename)?.to_rgba8();
    let (w, h) = img.dimensions();
    let buf = from_rgba_bytes(&img.into_raw(), order);
    Ok((buf, w as usize, h as usize))
}

/// Compare two image files pixel by pixel
///
/// Differences are logged at debug level.
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1, w1, h1) = read_file(f1, ChannelOrder::Abgr)?;
    let (d2, w2, h2) = read_file(f2, ChannelOrder::Abgr)?;
    if w1 != w2 || h1 != h2 {
        log::debug!("image sizes differ: {}x{} vs {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut flag = true;
    for (i, (v1, v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            log::debug!("[{},{}]: {:08x} {:08x}", i % w1, i / w1, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}
