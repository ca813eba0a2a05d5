//! Draw command dispatch
//!
//! Walks the indices of each command, recognizes glyph quads and uniformly
//! colored rectangles and sends everything else to the triangle rasterizer.

use crate::clip::PixelBox;
use crate::clip::Rectangle;
use crate::color::Rgba8;
use crate::draw::DrawCallback;
use crate::draw::DrawCmd;
use crate::draw::DrawIdx;
use crate::draw::DrawList;
use crate::draw::DrawVert;
use crate::error::Error;
use crate::error::Result;
use crate::math::max3;
use crate::math::min3;
use crate::painter::PaintOptions;
use crate::raster::paint_triangle;
use crate::raster::Coverage;
use crate::rect::paint_uniform_rectangle;
use crate::rect::paint_uniform_textured_rectangle;
use crate::target::PaintTarget;
use crate::texture::GlyphAtlas;
use crate::texture::TextureRef;

use std::ops::AddAssign;

/// Counts of what a paint call did
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct PaintStats {
    /// Rectangles filled with a single color
    pub uniform_rects: usize,
    /// Glyph quads filled from the atlas
    pub glyph_rects: usize,
    /// Triangles sent through the general rasterizer
    pub triangles: usize,
    /// Zero area triangles skipped
    pub degenerate: usize,
    /// Rectangles and triangles entirely outside the clip rectangle
    pub clipped: usize,
    /// Commands handled by a callback
    pub callbacks: usize,
}

impl AddAssign for PaintStats {
    fn add_assign(&mut self, o: PaintStats) {
        self.uniform_rects += o.uniform_rects;
        self.glyph_rects   += o.glyph_rects;
        self.triangles     += o.triangles;
        self.degenerate    += o.degenerate;
        self.clipped       += o.clipped;
        self.callbacks     += o.callbacks;
    }
}

/// Draw command vertices, moved by the display origin
struct Vertices<'a> {
    vtx: &'a [DrawVert],
    offset: usize,
    origin: (f32, f32),
}

impl Vertices<'_> {
    fn get(&self, i: DrawIdx) -> DrawVert {
        let mut v = self.vtx[i as usize + self.offset];
        v.pos = (v.pos.0 - self.origin.0, v.pos.1 - self.origin.1);
        v
    }
}

/// True if `v` samples something other than the white texel
fn has_texture(white_uv: Option<(f32, f32)>, v: &[DrawVert]) -> bool {
    match white_uv {
        Some(w) => v.iter().any(|v| v.uv != w),
        None => false,
    }
}

/// True if all vertices share one color
fn has_uniform_color(v: &[DrawVert]) -> bool {
    v.iter().all(|x| x.col == v[0].col)
}

/// Glyph quad layout: corners a, b, c and d clockwise from the top left,
/// drawn as indices a b c a c d
///
/// `v3` is the vertex of the sixth index.
fn is_glyph_quad(idx: &[DrawIdx], v0: &DrawVert, v1: &DrawVert, v2: &DrawVert, v3: &DrawVert) -> bool {
    idx[3] == idx[0] && idx[4] == idx[2] &&
        v0.pos.0 == v3.pos.0 && v1.pos.0 == v2.pos.0 &&
        v0.pos.1 == v1.pos.1 && v2.pos.1 == v3.pos.1 &&
        v0.uv.0 == v3.uv.0 && v1.uv.0 == v2.uv.0 &&
        v0.uv.1 == v1.uv.1 && v2.uv.1 == v3.uv.1
}

/// Corners of the rectangle drawn by two triangles, if that is what they are
///
/// Every vertex must be a corner of the bounding box of the first triangle,
/// each triangle must use three different corners, and the corners left out
/// must be opposite, so the triangles are the two halves of one diagonal
/// split.
fn rectangle_bounds(v: &[DrawVert; 6]) -> Option<((f32, f32), (f32, f32))> {
    let min = (min3(v[0].pos.0, v[1].pos.0, v[2].pos.0), min3(v[0].pos.1, v[1].pos.1, v[2].pos.1));
    let max = (max3(v[0].pos.0, v[1].pos.0, v[2].pos.0), max3(v[0].pos.1, v[1].pos.1, v[2].pos.1));
    if !(min.0 < max.0 && min.1 < max.1) {
        return None;
    }
    // Corner bit: 1 << (x is max | (y is max) << 1)
    let corner = |v: &DrawVert| -> Option<u8> {
        let x = if v.pos.0 == min.0 { 0 } else if v.pos.0 == max.0 { 1 } else { return None };
        let y = if v.pos.1 == min.1 { 0 } else if v.pos.1 == max.1 { 2 } else { return None };
        Some(1 << (x | y))
    };
    let mut missing = [0u8; 2];
    for (k, tri) in v.chunks_exact(3).enumerate() {
        let mut mask = 0u8;
        for vert in tri {
            let c = corner(vert)?;
            if mask & c != 0 {
                return None;
            }
            mask |= c;
        }
        missing[k] = 0b1111 ^ mask;
    }
    match missing[0] ^ missing[1] {
        0b1001 | 0b0110 => Some((min, max)),
        _ => None,
    }
}

/// Check that every index of a command addresses a vertex
fn validate_indices(indices: &[DrawIdx], vtx_offset: usize, len: usize) -> Result<()> {
    for &i in indices {
        let index = (i as usize).checked_add(vtx_offset).unwrap_or(usize::MAX);
        if index >= len {
            log::warn!("rejecting draw command: vertex {} of {}", index, len);
            return Err(Error::VertexIndex { index, len });
        }
    }
    Ok(())
}

/// Rasterize one draw command
///
/// `indices` are the indices of the command, all of them valid for `vtx`
/// once `cmd.vtx_offset` is added. Positions and the clip rectangle are
/// moved by -`origin` before scaling. Trailing indices that do not make up
/// a triangle are ignored.
pub fn paint_draw_cmd(target: &mut PaintTarget<'_>,
                      vtx: &[DrawVert],
                      indices: &[DrawIdx],
                      cmd: &DrawCmd,
                      texture: TextureRef<'_>,
                      origin: (f32, f32),
                      options: &PaintOptions,
                      stats: &mut PaintStats) {
    let verts = Vertices { vtx, offset: cmd.vtx_offset, origin };
    let clip = Rectangle::from_array(cmd.clip_rect).translate(origin.0, origin.1);
    let atlas: Option<&GlyphAtlas> = texture.atlas();
    let white_uv = atlas.map(|a| a.white_uv());
    let order = target.order;

    let n = indices.len();
    let mut i = 0;
    while i + 3 <= n {
        let v0 = verts.get(indices[i]);
        let v1 = verts.get(indices[i + 1]);
        let v2 = verts.get(indices[i + 2]);

        if i + 6 <= n {
            let idx = &indices[i .. i + 6];
            if let Some(atlas) = atlas.filter(|_| options.glyph_fast_path) {
                let v3 = verts.get(idx[5]);
                if is_glyph_quad(idx, &v0, &v1, &v2, &v3) {
                    let quad = [v0, v1, v2, v3];
                    if has_uniform_color(&quad) && has_texture(white_uv, &quad) {
                        paint_uniform_textured_rectangle(target, atlas, &clip, &v0, &v2);
                        stats.glyph_rects += 1;
                        i += 6;
                        continue;
                    }
                }
            }
            if options.rect_fast_path {
                let six = [v0, v1, v2, verts.get(idx[3]), verts.get(idx[4]), verts.get(idx[5])];
                if let Some((min, max)) = rectangle_bounds(&six) {
                    let (x1, y1) = target.to_device(min.0, min.1);
                    let (x2, y2) = target.to_device(max.0, max.1);
                    if PixelBox::from_span(x1, y1, x2, y2).intersect(&target.clip_box(&clip)).is_empty() {
                        stats.clipped += 1;
                        i += 6;
                        continue;
                    }
                    if has_uniform_color(&six) && !has_texture(white_uv, &six) {
                        let color = Rgba8::from_packed(v0.col, order);
                        paint_uniform_rectangle(target, &clip, min, max, color, options.color_cache);
                        stats.uniform_rects += 1;
                        i += 6;
                        continue;
                    }
                }
            }
        }

        let tri_atlas = if has_texture(white_uv, &[v0, v1, v2]) { atlas } else { None };
        match paint_triangle(target, tri_atlas, &clip, &v0, &v1, &v2, options.color_cache) {
            Coverage::Painted    => stats.triangles += 1,
            Coverage::Degenerate => stats.degenerate += 1,
            Coverage::Clipped    => stats.clipped += 1,
        }
        i += 3;
    }
}

/// Rasterize every command of `list`, in order
///
/// Commands with a callback are not rasterized, a user callback is called
/// with the list and the command instead. Each command is checked before
/// anything is drawn for it: its indices must lie inside the index buffer,
/// address existing vertices and its texture must resolve against `atlas`.
pub fn paint_draw_list(target: &mut PaintTarget<'_>,
                       list: &DrawList,
                       atlas: Option<&GlyphAtlas>,
                       options: &PaintOptions,
                       origin: (f32, f32),
                       stats: &mut PaintStats) -> Result<()> {
    let mut start: usize = 0;
    for (k, cmd) in list.cmd_buffer.iter().enumerate() {
        let len = list.idx_buffer.len();
        let end = start.checked_add(cmd.elem_count)
            .ok_or(Error::IndexRange { start, end: usize::MAX, len })?;
        match &cmd.callback {
            Some(DrawCallback::ResetRenderState) => {
                log::trace!("cmd {}: reset render state", k);
                stats.callbacks += 1;
            }
            Some(DrawCallback::User(f)) => {
                log::trace!("cmd {}: user callback", k);
                f(list, cmd);
                stats.callbacks += 1;
            }
            None => {
                let indices = list.idx_buffer.get(start .. end)
                    .ok_or(Error::IndexRange { start, end, len })?;
                validate_indices(indices, cmd.vtx_offset, list.vtx_buffer.len())?;
                let texture = TextureRef::resolve(cmd.texture_id, atlas)?;
                log::trace!("cmd {}: {} indices, texture {:?}", k, cmd.elem_count, cmd.texture_id);
                paint_draw_cmd(target, &list.vtx_buffer, indices, cmd, texture, origin, options, stats);
            }
        }
        start = end;
    }
    Ok(())
}
