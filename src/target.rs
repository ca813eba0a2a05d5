//! Paint target

use crate::clip::PixelBox;
use crate::clip::Rectangle;
use crate::color::ChannelOrder;
use crate::color::Rgba8;
use crate::error::Error;
use crate::error::Result;

/// Borrowed destination pixels plus the points to pixels scale
///
/// Data is stored as row-major order, one packed color per pixel
#[derive(Debug)]
pub struct PaintTarget<'a> {
    pixels: &'a mut [u32],
    width: usize,
    height: usize,
    /// Multiply UI point coordinates with this to get pixel coordinates
    pub scale: (f32, f32),
    /// Packing of `pixels`
    pub order: ChannelOrder,
}

impl<'a> PaintTarget<'a> {
    /// Wrap `pixels` as a `width` x `height` image
    ///
    /// `pixels` may be longer than needed, never shorter.
    pub fn new(pixels: &'a mut [u32], width: usize, height: usize) -> Result<Self> {
        if width.checked_mul(height).map_or(true, |n| pixels.len() < n) {
            return Err(Error::BufferTooSmall { len: pixels.len(), width, height });
        }
        Ok(Self { pixels, width, height, scale: (1.0, 1.0), order: ChannelOrder::default() })
    }
    /// Set the points to pixels scale
    pub fn with_scale(mut self, sx: f32, sy: f32) -> Self {
        self.scale = (sx, sy);
        self
    }
    /// Set the packing of the pixels
    pub fn with_order(mut self, order: ChannelOrder) -> Self {
        self.order = order;
        self
    }
    /// Width of target in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Height of target in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Every pixel of the target
    pub fn limits(&self) -> PixelBox {
        PixelBox::target(self.width, self.height)
    }
    /// Scale a UI point position to device pixels
    pub fn to_device(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.scale.0, y * self.scale.1)
    }
    /// Pixels a clip rectangle in UI points allows, limited to the target
    pub fn clip_box(&self, clip: &Rectangle<f32>) -> PixelBox {
        let r = clip.scale(self.scale.0, self.scale.1);
        PixelBox::from_centers(&r).intersect(&self.limits())
    }
    /// Packed color at (`x`,`y`)
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }
    /// Unpacked color at (`x`,`y`)
    pub fn get_rgba(&self, x: usize, y: usize) -> Rgba8 {
        Rgba8::from_packed(self.get(x, y), self.order)
    }
    /// Mutable packed pixels of row `y` from column `x1` up to `x2`
    ///
    /// The box passed to fillers is always inside the limits.
    pub fn span_mut(&mut self, y: i64, x1: i64, x2: i64) -> &mut [u32] {
        debug_assert!(self.limits().contains(x1, y) || x1 == x2);
        let row = y as usize * self.width;
        &mut self.pixels[row + x1 as usize .. row + x2 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_buffers() {
        let mut px = vec![0u32; 11];
        assert!(matches!(PaintTarget::new(&mut px, 4, 3),
                         Err(Error::BufferTooSmall { len: 11, width: 4, height: 3 })));
        assert!(PaintTarget::new(&mut px, 3, 3).is_ok());
        assert!(PaintTarget::new(&mut px, usize::MAX, 2).is_err());
    }
    #[test]
    fn clip_box_is_scaled_and_limited() {
        let mut px = vec![0u32; 20 * 10];
        let t = PaintTarget::new(&mut px, 20, 10).unwrap().with_scale(2.0, 0.5);
        let b = t.clip_box(&Rectangle::from_array([1.0, 4.0, 100.0, 12.0]));
        assert_eq!(b, PixelBox::new(2, 2, 20, 6));
        let outside = t.clip_box(&Rectangle::from_array([30.0, 0.0, 40.0, 10.0]));
        assert!(outside.is_empty());
    }
    #[test]
    fn spans_address_rows() {
        let mut px: Vec<u32> = (0..12).collect();
        let mut t = PaintTarget::new(&mut px, 4, 3).unwrap();
        assert_eq!(t.span_mut(1, 1, 3), &[5, 6]);
        t.span_mut(2, 0, 1)[0] = 99;
        assert_eq!(t.get(0, 2), 99);
    }
}
