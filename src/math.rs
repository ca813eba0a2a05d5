//! Blending and small numeric helpers

use crate::color::Rgba8;
use crate::color::Rgba32;

/// Interpolate a single component, `p + a * (q - p) / 255`
///
/// Signed integer math, division truncates towards zero. With `a == 255`
/// the result is exactly `q`, with `a == 0` exactly `p`.
pub fn lerp_u8(p: u8, q: u8, a: u8) -> u8 {
    let (p, q, a) = (i32::from(p), i32::from(q), i32::from(a));
    (p + (a * (q - p)) / 255) as u8
}

/// Blend source `c` over destination `p` using the alpha of `c`
///
/// Every component, alpha included, is computed as
///
/// out = c.a/255 * c + (1 - c.a/255) * p
///
/// using integer math only.
///
/// see [Alpha Compositing](https://en.wikipedia.org/wiki/Alpha_compositing)
///
///     use uiraster::{blend, Rgba8};
///
///     let dst = Rgba8::new(10, 20, 30, 40);
///     let src = Rgba8::new(200, 100, 50, 255);
///     assert_eq!(blend(dst, src), src);
///     assert_eq!(blend(dst, src.with_alpha(0)), dst);
///
pub fn blend(p: Rgba8, c: Rgba8) -> Rgba8 {
    let a = c.a;
    Rgba8::new(lerp_u8(p.r, c.r, a),
               lerp_u8(p.g, c.g, a),
               lerp_u8(p.b, c.b, a),
               lerp_u8(p.a, c.a, a))
}

/// Blend source `c` over an implicit all-zero destination
///
/// Equal to `blend(Rgba8::transparent(), c)`.
pub fn blend_0_x(c: Rgba8) -> Rgba8 {
    let a = u32::from(c.a);
    let scale = |v: u8| ((u32::from(v) * a) / 255) as u8;
    Rgba8::new(scale(c.r), scale(c.g), scale(c.b), scale(c.a))
}

/// Blend in floating point, `c.a * c + (1 - c.a) * p`
pub fn blend_f32(p: Rgba32, c: Rgba32) -> Rgba32 {
    (c.a * c) + ((1.0 - c.a) * p)
}

/// Smallest of three values
pub fn min3(a: f32, b: f32, c: f32) -> f32 {
    a.min(b).min(c)
}

/// Largest of three values
pub fn max3(a: f32, b: f32, c: f32) -> f32 {
    a.max(b).max(c)
}
