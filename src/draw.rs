//! Draw lists
//!
//! Per-frame input produced by the UI library: shared vertex and index
//! buffers and the commands that consume them in order.

use crate::texture::TextureId;

use std::fmt;

/// Index into a vertex buffer
pub type DrawIdx = u32;

/// Clip rectangle of commands created before any `push_clip_rect`
pub const DEFAULT_CLIP_RECT: [f32; 4] = [-8192.0, -8192.0, 8192.0, 8192.0];

/// Vertex
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct DrawVert {
    /// Position in UI points
    pub pos: (f32, f32),
    /// Texture coordinate, [0,1] across the atlas
    pub uv: (f32, f32),
    /// Packed color
    pub col: u32,
}

impl DrawVert {
    pub fn new(pos: (f32, f32), uv: (f32, f32), col: u32) -> Self {
        Self { pos, uv, col }
    }
}

/// Function run in place of rasterizing a command
pub type UserCallback = Box<dyn Fn(&DrawList, &DrawCmd)>;

/// Callback attached to a draw command
pub enum DrawCallback {
    /// Request to reset renderer state, nothing to do in software
    ResetRenderState,
    /// Called with the list and the command it sits on
    User(UserCallback),
}

impl fmt::Debug for DrawCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCallback::ResetRenderState => write!(f, "ResetRenderState"),
            DrawCallback::User(_) => write!(f, "User(..)"),
        }
    }
}

/// Draw command
#[derive(Debug)]
pub struct DrawCmd {
    /// Number of indices consumed
    pub elem_count: usize,
    /// [min x, min y, max x, max y] in UI points
    pub clip_rect: [f32; 4],
    /// Texture sampled by the command
    pub texture_id: TextureId,
    /// Added to every index of the command
    pub vtx_offset: usize,
    /// If set, the command is not rasterized
    pub callback: Option<DrawCallback>,
}

impl DrawCmd {
    pub fn new(clip_rect: [f32; 4], texture_id: TextureId) -> Self {
        Self { elem_count: 0, clip_rect, texture_id, vtx_offset: 0, callback: None }
    }
}

/// Commands with shared vertex and index buffers
#[derive(Debug)]
pub struct DrawList {
    pub cmd_buffer: Vec<DrawCmd>,
    pub idx_buffer: Vec<DrawIdx>,
    pub vtx_buffer: Vec<DrawVert>,
    clip_rect: [f32; 4],
    texture_id: TextureId,
    white_uv: (f32, f32),
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new((0.0, 0.0))
    }
}

impl DrawList {
    /// Create an empty list
    ///
    /// `white_uv` is the texture coordinate given to untextured primitives,
    /// normally the white texel of the atlas.
    pub fn new(white_uv: (f32, f32)) -> Self {
        Self { cmd_buffer: vec![], idx_buffer: vec![], vtx_buffer: vec![],
               clip_rect: DEFAULT_CLIP_RECT,
               texture_id: TextureId::FONT_ATLAS,
               white_uv,
        }
    }
    /// Clip following primitives to `clip`, [min x, min y, max x, max y]
    pub fn push_clip_rect(&mut self, clip: [f32; 4]) {
        self.clip_rect = clip;
    }
    /// Texture following primitives
    pub fn push_texture_id(&mut self, id: TextureId) {
        self.texture_id = id;
    }
    /// Command that takes the next indices, new if the state changed
    fn current_cmd(&mut self) -> &mut DrawCmd {
        let reuse = match self.cmd_buffer.last() {
            Some(cmd) => cmd.callback.is_none()
                && cmd.clip_rect == self.clip_rect
                && cmd.texture_id == self.texture_id,
            None => false,
        };
        if !reuse {
            self.cmd_buffer.push(DrawCmd::new(self.clip_rect, self.texture_id));
        }
        let n = self.cmd_buffer.len();
        &mut self.cmd_buffer[n - 1]
    }
    /// Append vertices and indices, indices relative to the first new vertex
    pub fn prim_vtx(&mut self, verts: &[DrawVert], idx: &[DrawIdx]) {
        let base = self.vtx_buffer.len() as DrawIdx;
        self.vtx_buffer.extend_from_slice(verts);
        self.idx_buffer.extend(idx.iter().map(|i| base + i));
        self.current_cmd().elem_count += idx.len();
    }
    /// Axis aligned rectangle from `a` (top left) to `c` (bottom right)
    ///
    /// Emitted as vertices a, b, c, d clockwise from the top left and
    /// indices 0 1 2, 0 2 3.
    pub fn prim_rect(&mut self, a: (f32, f32), c: (f32, f32), col: u32) {
        let uv = self.white_uv;
        self.prim_rect_uv(a, c, uv, uv, col);
    }
    /// Rectangle with texture coordinates from `uv_a` to `uv_c`, a glyph
    pub fn prim_rect_uv(&mut self, a: (f32, f32), c: (f32, f32),
                        uv_a: (f32, f32), uv_c: (f32, f32), col: u32) {
        let verts = [
            DrawVert::new(a,          uv_a,           col),
            DrawVert::new((c.0, a.1), (uv_c.0, uv_a.1), col),
            DrawVert::new(c,          uv_c,           col),
            DrawVert::new((a.0, c.1), (uv_a.0, uv_c.1), col),
        ];
        self.prim_vtx(&verts, &[0, 1, 2, 0, 2, 3]);
    }
    /// Untextured triangle with one color per vertex
    pub fn add_triangle(&mut self, p: [(f32, f32); 3], col: [u32; 3]) {
        let uv = self.white_uv;
        let verts = [
            DrawVert::new(p[0], uv, col[0]),
            DrawVert::new(p[1], uv, col[1]),
            DrawVert::new(p[2], uv, col[2]),
        ];
        self.prim_vtx(&verts, &[0, 1, 2]);
    }
    /// Append a command that runs `callback` instead of drawing
    pub fn add_callback(&mut self, callback: DrawCallback) {
        let mut cmd = DrawCmd::new(self.clip_rect, self.texture_id);
        cmd.callback = Some(callback);
        self.cmd_buffer.push(cmd);
    }
}

/// Everything drawn in one frame
#[derive(Debug,Default)]
pub struct DrawData {
    /// Top left of the displayed region, in UI points
    pub display_pos: (f32, f32),
    /// Size of the displayed region, in UI points
    pub display_size: (f32, f32),
    /// Lists in back to front order
    pub cmd_lists: Vec<DrawList>,
}

impl DrawData {
    pub fn new(display_size: (f32, f32)) -> Self {
        Self { display_pos: (0.0, 0.0), display_size, cmd_lists: vec![] }
    }
    /// Vertices over all lists
    pub fn total_vtx_count(&self) -> usize {
        self.cmd_lists.iter().map(|l| l.vtx_buffer.len()).sum()
    }
    /// Indices over all lists
    pub fn total_idx_count(&self) -> usize {
        self.cmd_lists.iter().map(|l| l.idx_buffer.len()).sum()
    }
}
