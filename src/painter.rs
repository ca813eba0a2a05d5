//! Painter
//!
//! Owner of the glyph atlas and entry point for painting a frame.

use crate::buffer::ColorBuffer;
use crate::color::ChannelOrder;
use crate::draw::DrawData;
use crate::error::Error;
use crate::error::Result;
use crate::render::paint_draw_list;
use crate::render::PaintStats;
use crate::target::PaintTarget;
use crate::texture::GlyphAtlas;
use crate::texture::TextureId;
use crate::texture::TextureRef;

/// Paint settings
///
///     use uiraster::{ChannelOrder, PaintOptions};
///
///     let opts = PaintOptions::new()
///         .channel_order(ChannelOrder::Argb)
///         .rect_fast_path(false);
///     assert_eq!(opts.order, ChannelOrder::Argb);
///     assert!(!opts.rect_fast_path);
///     assert!(opts.glyph_fast_path);
///
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct PaintOptions {
    /// Packing of vertex colors and target pixels
    pub order: ChannelOrder,
    /// Fill recognized single color rectangles directly
    pub rect_fast_path: bool,
    /// Fill recognized glyph quads directly
    pub glyph_fast_path: bool,
    /// Reuse the previous blend result when the destination repeats
    pub color_cache: bool,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self { order: ChannelOrder::Abgr,
               rect_fast_path: true,
               glyph_fast_path: true,
               color_cache: true }
    }
}

impl PaintOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn channel_order(mut self, order: ChannelOrder) -> Self {
        self.order = order;
        self
    }
    pub fn rect_fast_path(mut self, on: bool) -> Self {
        self.rect_fast_path = on;
        self
    }
    pub fn glyph_fast_path(mut self, on: bool) -> Self {
        self.glyph_fast_path = on;
        self
    }
    pub fn color_cache(mut self, on: bool) -> Self {
        self.color_cache = on;
        self
    }
    /// All fast paths off, every primitive goes through the triangle
    /// rasterizer
    pub fn general_only(self) -> Self {
        self.rect_fast_path(false).glyph_fast_path(false)
    }
}

/// Software painter
///
/// Holds the glyph atlas between `bind` and `unbind`.
///
///     use uiraster::{DrawData, DrawList, GlyphAtlas, Painter};
///
///     let mut painter = Painter::new();
///     painter.bind(GlyphAtlas::new(vec![255; 4], 2, 2).unwrap()).unwrap();
///
///     let mut list = DrawList::new((0.25, 0.25));
///     list.prim_rect((0.0, 0.0), (2.0, 2.0), 0xFF00_00FF);
///     let mut data = DrawData::new((4.0, 4.0));
///     data.cmd_lists.push(list);
///
///     let mut pixels = vec![0u32; 16];
///     let stats = painter.paint(&data, &mut pixels, 4, 4).unwrap();
///     assert_eq!(stats.uniform_rects, 1);
///     assert_eq!(pixels[5], 0xFF00_00FF);
///     assert_eq!(pixels[15], 0);
///
#[derive(Debug,Default)]
pub struct Painter {
    atlas: Option<GlyphAtlas>,
    options: PaintOptions,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_options(options: PaintOptions) -> Self {
        Self { atlas: None, options }
    }
    pub fn options(&self) -> &PaintOptions {
        &self.options
    }
    pub fn set_options(&mut self, options: PaintOptions) {
        self.options = options;
    }
    /// Take ownership of `atlas`, returning the id draw commands use for it
    pub fn bind(&mut self, atlas: GlyphAtlas) -> Result<TextureId> {
        if self.atlas.is_some() {
            return Err(Error::AtlasAlreadyBound);
        }
        log::debug!("bind glyph atlas {}x{}", atlas.width(), atlas.height());
        self.atlas = Some(atlas);
        Ok(TextureId::FONT_ATLAS)
    }
    /// Release the atlas, its id no longer resolves
    pub fn unbind(&mut self) -> Result<()> {
        match self.atlas.take() {
            Some(atlas) => {
                log::debug!("unbind glyph atlas {}x{}", atlas.width(), atlas.height());
                Ok(())
            }
            None => Err(Error::AtlasNotBound),
        }
    }
    pub fn is_bound(&self) -> bool {
        self.atlas.is_some()
    }
    pub fn atlas(&self) -> Option<&GlyphAtlas> {
        self.atlas.as_ref()
    }
    /// What `id` stands for right now
    pub fn resolve(&self, id: TextureId) -> Result<TextureRef<'_>> {
        TextureRef::resolve(id, self.atlas.as_ref())
    }
    /// Paint `data` into `pixels`, a `width` x `height` row-major image
    ///
    /// The display size of `data` is stretched over the whole image. Pixels
    /// are not cleared first.
    pub fn paint(&self, data: &DrawData, pixels: &mut [u32], width: usize, height: usize) -> Result<PaintStats> {
        let atlas = self.atlas.as_ref().ok_or(Error::AtlasNotBound)?;
        let (dw, dh) = data.display_size;
        if !(dw > 0.0 && dh > 0.0) {
            return Err(Error::InvalidDisplaySize { width: dw, height: dh });
        }
        let mut target = PaintTarget::new(pixels, width, height)?
            .with_scale(width as f32 / dw, height as f32 / dh)
            .with_order(self.options.order);

        let mut stats = PaintStats::default();
        if width == 0 || height == 0 {
            return Ok(stats);
        }
        for list in &data.cmd_lists {
            paint_draw_list(&mut target, list, Some(atlas), &self.options, data.display_pos, &mut stats)?;
        }
        log::trace!("painted {} lists: {:?}", data.cmd_lists.len(), stats);
        Ok(stats)
    }
    /// Paint `data` over the current frame of `buf`
    pub fn paint_buffer(&self, data: &DrawData, buf: &mut ColorBuffer) -> Result<PaintStats> {
        let (w, h) = (buf.width(), buf.height());
        self.paint(data, buf.pixels_mut(), w, h)
    }
}
