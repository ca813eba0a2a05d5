//! Rectangle fillers
//!
//! Most of a UI frame is panels and text, both drawn as axis aligned
//! quads. These fill such quads directly instead of as two triangles, and
//! cover exactly the pixels the triangle rasterizer would.

use crate::clip::PixelBox;
use crate::clip::Rectangle;
use crate::color::Rgba8;
use crate::draw::DrawVert;
use crate::math::blend;
use crate::math::blend_0_x;
use crate::target::PaintTarget;
use crate::texture::GlyphAtlas;

/// Blend of a fixed source color, memoizing the last destination
///
/// Neighboring pixels usually hold the same color, so the previous result
/// can be reused.
#[derive(Debug,Copy,Clone)]
pub struct BlendCache {
    color: Rgba8,
    enabled: bool,
    last_target: u32,
    last_output: u32,
}

impl BlendCache {
    /// Cache for blending `color`, seeded with destination `seed`
    pub fn new(color: Rgba8, seed: Rgba8, enabled: bool, order: crate::ChannelOrder) -> Self {
        let last_output = blend(seed, color).to_packed(order);
        Self { color, enabled, last_target: seed.to_packed(order), last_output }
    }
    /// Cache seeded with an all-zero destination
    pub fn empty(color: Rgba8, enabled: bool, order: crate::ChannelOrder) -> Self {
        Self { color, enabled, last_target: 0, last_output: blend_0_x(color).to_packed(order) }
    }
    /// Blend over packed destination `px`
    #[inline]
    pub fn apply(&mut self, px: u32, order: crate::ChannelOrder) -> u32 {
        if !self.enabled {
            return blend(Rgba8::from_packed(px, order), self.color).to_packed(order);
        }
        if px != self.last_target {
            self.last_target = px;
            self.last_output = blend(Rgba8::from_packed(px, order), self.color).to_packed(order);
        }
        self.last_output
    }
}

/// Fill the rectangle `min`..`max` (UI points) with a single color
///
/// Covers pixels whose centers lie in (min, max] after scaling, limited to
/// `clip` and the target.
pub fn paint_uniform_rectangle(target: &mut PaintTarget<'_>,
                               clip: &Rectangle<f32>,
                               min: (f32, f32),
                               max: (f32, f32),
                               color: Rgba8,
                               cache: bool) {
    let (x1, y1) = target.to_device(min.0, min.1);
    let (x2, y2) = target.to_device(max.0, max.1);
    let b = PixelBox::from_span(x1, y1, x2, y2).intersect(&target.clip_box(clip));
    if b.is_empty() || color.a == 0 {
        return;
    }
    let order = target.order;
    if color.a == 255 {
        let c = color.to_packed(order);
        for y in b.y1 .. b.y2 {
            target.span_mut(y, b.x1, b.x2).iter_mut().for_each(|p| *p = c);
        }
        return;
    }
    let seed = target.get_rgba(b.x1 as usize, b.y1 as usize);
    let mut cache = BlendCache::new(color, seed, cache, order);
    for y in b.y1 .. b.y2 {
        for p in target.span_mut(y, b.x1, b.x2).iter_mut() {
            *p = cache.apply(*p, order);
        }
    }
}

/// Per-axis span of a quad corner pair, sorted by position
fn axis(p0: f32, p1: f32, t0: f32, t1: f32) -> (f32, f32, f32, f32) {
    if p0 <= p1 { (p0, p1, t0, t1) } else { (p1, p0, t1, t0) }
}

/// Fill a single-colored glyph quad between opposite corners `v0` and `v2`
///
/// Texture coordinates are interpolated linearly between the corners; the
/// atlas alpha scales the vertex alpha.
pub fn paint_uniform_textured_rectangle(target: &mut PaintTarget<'_>,
                                        atlas: &GlyphAtlas,
                                        clip: &Rectangle<f32>,
                                        v0: &DrawVert,
                                        v2: &DrawVert) {
    let (px0, py0) = target.to_device(v0.pos.0, v0.pos.1);
    let (px2, py2) = target.to_device(v2.pos.0, v2.pos.1);
    let (x_lo, x_hi, u_lo, u_hi) = axis(px0, px2, v0.uv.0, v2.uv.0);
    let (y_lo, y_hi, v_lo, v_hi) = axis(py0, py2, v0.uv.1, v2.uv.1);

    let b = PixelBox::from_span(x_lo, y_lo, x_hi, y_hi).intersect(&target.clip_box(clip));
    if b.is_empty() {
        return;
    }
    // Non-empty box, so both spans are positive
    let du = (u_hi - u_lo) / (x_hi - x_lo);
    let dv = (v_hi - v_lo) / (y_hi - y_lo);
    let u_left = u_lo + ((b.x1 as f32 + 0.5) - x_lo) * du;
    let mut v  = v_lo + ((b.y1 as f32 + 0.5) - y_lo) * dv;

    let order = target.order;
    let color = Rgba8::from_packed(v0.col, order);
    let opaque = color.to_packed(order);

    for y in b.y1 .. b.y2 {
        let mut u = u_left;
        for p in target.span_mut(y, b.x1, b.x2).iter_mut() {
            let texel = atlas.sample(u, v);
            u += du;
            if texel == 0 {
                continue;
            }
            let alpha = (u32::from(color.a) * u32::from(texel)) / 255;
            if alpha >= 255 {
                *p = opaque;
            } else if alpha > 0 {
                let src = color.with_alpha(alpha as u8);
                *p = blend(Rgba8::from_packed(*p, order), src).to_packed(order);
            }
        }
        v += dv;
    }
}
