//! Triangle Rasterizer
//!
//! Scan conversion of a single triangle. Inside tests run in fixed point
//! (see [`crate::fixed`]), attributes are interpolated in floating point.
//!
//! Pixel ownership follows the dominant edge rule: a pixel center lying
//! exactly on an edge belongs to the triangle for which that edge is
//! dominant. Edges are oriented by the winding sign first, so two triangles
//! sharing an edge never both paint its pixels, whatever their winding.

use crate::barycentric::Planes;
use crate::clip::PixelBox;
use crate::clip::Rectangle;
use crate::color::cu8;
use crate::color::Rgba8;
use crate::color::Rgba32;
use crate::draw::DrawVert;
use crate::fixed::as_point;
use crate::fixed::orient_2d;
use crate::fixed::Point;
use crate::fixed::FIXED_BIAS;
use crate::math::blend_f32;
use crate::math::max3;
use crate::math::min3;
use crate::rect::BlendCache;
use crate::target::PaintTarget;
use crate::texture::GlyphAtlas;

/// Result of rasterizing one triangle
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Coverage {
    /// Pixels were visited
    Painted,
    /// Zero area, nothing to do
    Degenerate,
    /// Entirely outside the clip rectangle or the target
    Clipped,
}

/// True if `edge` owns the pixel centers lying exactly on it
///
/// An edge is dominant if it points down (positive y), or is horizontal and
/// points left.
///
///     use uiraster::{is_dominant_edge, Point};
///
///     assert!(is_dominant_edge(Point::new(0, 1)));
///     assert!(is_dominant_edge(Point::new(-1, 0)));
///     assert!(!is_dominant_edge(Point::new(1, 0)));
///     assert!(!is_dominant_edge(Point::new(5, -1)));
///
pub fn is_dominant_edge(edge: Point) -> bool {
    edge.y > 0 || (edge.y == 0 && edge.x < 0)
}

/// Bias added to an edge function, 0 for dominant edges, -1 otherwise
fn edge_bias(edge: Point, sign: i64) -> i64 {
    if is_dominant_edge(Point::new(sign * edge.x, sign * edge.y)) { 0 } else { -1 }
}

/// Pixel bounding box of a triangle in device coordinates
fn bounding_box(p0: (f32, f32), p1: (f32, f32), p2: (f32, f32)) -> PixelBox {
    let lo = |v: f32| f64::from(v).floor() as i64;
    let hi = |v: f32| f64::from(v).ceil() as i64;
    PixelBox::new(lo(min3(p0.0, p1.0, p2.0)), lo(min3(p0.1, p1.1, p2.1)),
                  hi(max3(p0.0, p1.0, p2.0)), hi(max3(p0.1, p1.1, p2.1)))
}

/// Edge function along a row, `w + step * k` at the k-th pixel
#[derive(Debug,Copy,Clone)]
struct Edge {
    w: i128,
    step: i128,
}

impl Edge {
    /// Edge `a`→`b` evaluated at `p`, stepping one pixel in x per advance
    fn new(a: Point, b: Point, p: Point, sign: i64) -> Self {
        let bias = edge_bias(b - a, sign);
        Self { w: i128::from(sign) * orient_2d(a, b, p) + i128::from(bias),
               step: i128::from(FIXED_BIAS * sign * (a.y - b.y)) }
    }
    /// Pixel steps in `0..n` where the edge function is not negative
    fn span(&self, n: i64) -> (i64, i64) {
        let n = i128::from(n);
        let (lo, hi) = if self.step > 0 {
            (-self.w.div_euclid(self.step), n)
        } else if self.step < 0 {
            (0, self.w.div_euclid(-self.step) + 1)
        } else if self.w >= 0 {
            (0, n)
        } else {
            (0, 0)
        };
        (lo.clamp(0, n) as i64, hi.clamp(0, n) as i64)
    }
}

/// Rasterize the triangle `v0`, `v1`, `v2`
///
/// Positions are scaled to device pixels, the triangle is limited to
/// `clip` (UI points) and the target. If `atlas` is given, vertex alpha is
/// multiplied with the interpolated atlas sample.
///
/// An untextured triangle with one color blends with integer math, through
/// the last-color cache when `cache` is set. Everything else interpolates
/// the color in floating point: opaque results overwrite, transparent ones
/// are skipped and the rest are blended.
pub fn paint_triangle(target: &mut PaintTarget<'_>,
                      atlas: Option<&GlyphAtlas>,
                      clip: &Rectangle<f32>,
                      v0: &DrawVert,
                      v1: &DrawVert,
                      v2: &DrawVert,
                      cache: bool) -> Coverage {
    let p0 = target.to_device(v0.pos.0, v0.pos.1);
    let p1 = target.to_device(v1.pos.0, v1.pos.1);
    let p2 = target.to_device(v2.pos.0, v2.pos.1);

    let p0i = as_point(p0.0, p0.1);
    let p1i = as_point(p1.0, p1.1);
    let p2i = as_point(p2.0, p2.1);

    // Winding
    let area = orient_2d(p0i, p1i, p2i);
    if area == 0 {
        return Coverage::Degenerate;
    }
    let sign = area.signum() as i64;

    let b = bounding_box(p0, p1, p2).intersect(&target.clip_box(clip));
    if b.is_empty() {
        return Coverage::Clipped;
    }

    let uniform = v0.col == v1.col && v0.col == v2.col;
    let gradient = !uniform || atlas.is_some();

    let planes = if gradient {
        let origin = (b.x1 as f32 + 0.5, b.y1 as f32 + 0.5);
        match Planes::new(p0, p1, p2, origin) {
            Some(planes) => Some(planes),
            None => return Coverage::Degenerate,
        }
    } else {
        None
    };

    let order = target.order;
    let c0 = Rgba32::from_packed(v0.col, order);
    let c1 = Rgba32::from_packed(v1.col, order);
    let c2 = Rgba32::from_packed(v2.col, order);
    let mut blender = BlendCache::empty(Rgba8::from_packed(v0.col, order), cache, order);

    let n = b.x2 - b.x1;
    for y in b.y1 .. b.y2 {
        let p = Point::pixel_center(b.x1, y);
        let (l0, h0) = Edge::new(p1i, p2i, p, sign).span(n);
        let (l1, h1) = Edge::new(p2i, p0i, p, sign).span(n);
        let (l2, h2) = Edge::new(p0i, p1i, p, sign).span(n);
        let lo = l0.max(l1).max(l2);
        let hi = h0.min(h1).min(h2);
        if lo >= hi {
            continue;
        }

        let mut bary = planes.map(|pl| pl.at(lo as f32, (y - b.y1) as f32));
        for px in target.span_mut(y, b.x1 + lo, b.x1 + hi).iter_mut() {
            match bary {
                Some(w) => {
                    let mut src = if uniform {
                        c0
                    } else {
                        (w.w0 * c0) + (w.w1 * c1) + (w.w2 * c2)
                    };
                    if let Some(atlas) = atlas {
                        let u = w.mix(v0.uv.0, v1.uv.0, v2.uv.0);
                        let v = w.mix(v0.uv.1, v1.uv.1, v2.uv.1);
                        src.a *= f32::from(atlas.sample(u, v)) / 255.0;
                    }
                    match cu8(src.a) {
                        0 => {}
                        255 => *px = Rgba8::from(src).to_packed(order),
                        _ => {
                            let dst = Rgba32::from_packed(*px, order);
                            *px = Rgba8::from(blend_f32(dst, src)).to_packed(order);
                        }
                    }
                }
                None => *px = blender.apply(*px, order),
            }
            if let (Some(w), Some(pl)) = (bary.as_mut(), planes.as_ref()) {
                *w += pl.dx;
            }
        }
    }
    Coverage::Painted
}
