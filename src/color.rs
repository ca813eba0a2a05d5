//! Colors

use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;

/// Bit layout of a packed 32-bit color
///
/// Names read from the most to the least significant byte.
#[derive(Debug,Copy,Clone,PartialEq,Eq,Default)]
pub enum ChannelOrder {
    /// Red in the lowest byte, alpha in the highest
    #[default]
    Abgr,
    /// Blue in the lowest byte, alpha in the highest
    Argb,
}

impl ChannelOrder {
    /// Bit shift of red, green, blue and alpha
    pub fn shifts(self) -> (u32, u32, u32, u32) {
        match self {
            ChannelOrder::Abgr => (0, 8, 16, 24),
            ChannelOrder::Argb => (16, 8, 0, 24),
        }
    }
    /// Pack 8-bit components into a u32
    ///
    ///     use uiraster::ChannelOrder;
    ///
    ///     assert_eq!(ChannelOrder::Abgr.pack(0x11, 0x22, 0x33, 0x44), 0x4433_2211);
    ///     assert_eq!(ChannelOrder::Argb.pack(0x11, 0x22, 0x33, 0x44), 0x4411_2233);
    ///
    pub fn pack(self, r: u8, g: u8, b: u8, a: u8) -> u32 {
        let (rs, gs, bs, as_) = self.shifts();
        (u32::from(r) << rs) | (u32::from(g) << gs) | (u32::from(b) << bs) | (u32::from(a) << as_)
    }
}

/// Color as Red, Green, Blue, and Alpha, 8 bits each
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// Transparent black (0,0,0,0)
    pub fn transparent() -> Self {
        Self::new(0,0,0,0)
    }
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Split a packed color into its components
    ///
    ///     use uiraster::{ChannelOrder, Rgba8};
    ///
    ///     let c = Rgba8::from_packed(0xFF00_80FF, ChannelOrder::Abgr);
    ///     assert_eq!(c, Rgba8::new(0xFF, 0x80, 0x00, 0xFF));
    ///     assert_eq!(c.to_packed(ChannelOrder::Abgr), 0xFF00_80FF);
    ///
    pub fn from_packed(x: u32, order: ChannelOrder) -> Self {
        let (rs, gs, bs, as_) = order.shifts();
        Self::new((x >> rs) as u8, (x >> gs) as u8, (x >> bs) as u8, (x >> as_) as u8)
    }
    /// Join the components back into a packed color
    pub fn to_packed(self, order: ChannelOrder) -> u32 {
        order.pack(self.r, self.g, self.b, self.a)
    }
    /// Same color with a different alpha
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl From<Rgba32> for Rgba8 {
    /// Components are rounded and saturate at 0 and 255
    fn from(c: Rgba32) -> Rgba8 {
        Rgba8::new(cu8(c.r), cu8(c.g), cu8(c.b), cu8(c.a))
    }
}

/// Convert an f32 [0,1] component to a u8 [0,255] component
///
/// Out of range values saturate.
pub fn cu8(v: f32) -> u8 {
    (v * 255.0 + 0.5) as u8
}

const INV_255: f32 = 1.0 / 255.0;

/// Color as Red, Green, Blue, and Alpha in floating point, [0,1]
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rgba32 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba32 {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
    /// Expand a packed color with 1/255 scaling
    pub fn from_packed(x: u32, order: ChannelOrder) -> Self {
        Rgba8::from_packed(x, order).into()
    }
    /// Round back to a packed color
    pub fn to_packed(self, order: ChannelOrder) -> u32 {
        Rgba8::from(self).to_packed(order)
    }
}

impl From<Rgba8> for Rgba32 {
    fn from(c: Rgba8) -> Rgba32 {
        Rgba32::new(f32::from(c.r) * INV_255,
                    f32::from(c.g) * INV_255,
                    f32::from(c.b) * INV_255,
                    f32::from(c.a) * INV_255)
    }
}

impl Add for Rgba32 {
    type Output = Rgba32;
    fn add(self, o: Rgba32) -> Rgba32 {
        Rgba32::new(self.r + o.r, self.g + o.g, self.b + o.b, self.a + o.a)
    }
}
impl AddAssign for Rgba32 {
    fn add_assign(&mut self, o: Rgba32) {
        *self = *self + o;
    }
}
impl Mul<Rgba32> for f32 {
    type Output = Rgba32;
    fn mul(self, c: Rgba32) -> Rgba32 {
        Rgba32::new(self * c.r, self * c.g, self * c.b, self * c.a)
    }
}
