//! Color buffer

use crate::color::ChannelOrder;
use crate::error::Result;
use crate::snapshot;
use crate::target::PaintTarget;

use std::ops::Index;
use std::ops::IndexMut;
use std::path::Path;

/// Frame storage, one packed color per pixel
///
/// Data is stored as row-major order (C-format). Storage grows when a larger
/// frame is requested and is never shrunk.
#[derive(Debug,Default)]
pub struct ColorBuffer {
    data: Vec<u32>,
    width: usize,
    height: usize,
}

impl ColorBuffer {
    /// Create a new buffer of width, height
    ///
    /// Data for the Image is allocated and set to 0
    pub fn new(width: usize, height: usize) -> Self {
        ColorBuffer { width, height, data: vec![0u32; width * height] }
    }
    /// Set the frame size
    ///
    /// Reallocates only if the frame no longer fits, in which case the old
    /// contents are lost.
    ///
    ///     use uiraster::ColorBuffer;
    ///
    ///     let mut buf = ColorBuffer::new(4, 4);
    ///     buf.resize(2, 2);
    ///     assert_eq!(buf.capacity(), 16);
    ///     buf.resize(8, 3);
    ///     assert_eq!(buf.capacity(), 24);
    ///
    pub fn resize(&mut self, width: usize, height: usize) {
        let area = width * height;
        if self.data.len() < area {
            log::debug!("color buffer grows from {} to {} pixels", self.data.len(), area);
            self.data = vec![0u32; area];
        }
        self.width = width;
        self.height = height;
    }
    /// Current frame width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Current frame height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Pixels allocated
    pub fn capacity(&self) -> usize {
        self.data.len()
    }
    /// Pixels of the current frame
    pub fn pixels(&self) -> &[u32] {
        &self.data[.. self.width * self.height]
    }
    /// Mutable pixels of the current frame
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        let n = self.width * self.height;
        &mut self.data[.. n]
    }
    /// Set every pixel of the frame to `color`
    pub fn clear(&mut self, color: u32) {
        self.pixels_mut().iter_mut().for_each(|v| *v = color);
    }
    /// Borrow the frame as a paint target
    pub fn target(&mut self) -> Result<PaintTarget<'_>> {
        let (w, h) = (self.width, self.height);
        PaintTarget::new(self.pixels_mut(), w, h)
    }
    /// Write the frame to an image file, format from the extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P, order: ChannelOrder) -> Result<()> {
        snapshot::write_file(self.pixels(), self.width, self.height, order, filename)
    }
}

impl Index<(usize,usize)> for ColorBuffer {
    type Output = u32;
    fn index(&self, index: (usize, usize)) -> &u32 {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.width + index.0]
    }
}
impl IndexMut<(usize,usize)> for ColorBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut u32 {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        &mut self.data[index.1 * self.width + index.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrinking_keeps_contents() {
        let mut buf = ColorBuffer::new(3, 3);
        buf.clear(7);
        buf.resize(2, 2);
        assert_eq!(buf.pixels(), &[7, 7, 7, 7]);
    }
    #[test]
    fn growing_discards_contents() {
        let mut buf = ColorBuffer::new(2, 2);
        buf.clear(7);
        buf.resize(3, 2);
        assert!(buf.pixels().iter().all(|&p| p == 0));
        assert_eq!(buf.pixels().len(), 6);
    }
    #[test]
    fn index_by_column_then_row() {
        let mut buf = ColorBuffer::new(3, 2);
        buf[(2, 1)] = 5;
        assert_eq!(buf.pixels()[5], 5);
        assert_eq!(buf[(2, 1)], 5);
    }
    #[test]
    #[should_panic]
    fn index_outside_frame() {
        let buf = ColorBuffer::new(3, 2);
        let _ = buf[(3, 0)];
    }
}
