//! Frame level renderer backend
//!
//! Glue between a UI library and the [`Painter`]: creates the atlas from the
//! font data on the first frame and paints each frame into an owned
//! [`ColorBuffer`] sized to the display.

use crate::buffer::ColorBuffer;
use crate::draw::DrawData;
use crate::error::Result;
use crate::painter::PaintOptions;
use crate::painter::Painter;
use crate::render::PaintStats;
use crate::texture::GlyphAtlas;
use crate::texture::TextureId;

/// Source of the glyph atlas bitmap, normally the font atlas of the UI library
pub trait FontSource {
    /// Alpha bitmap of the atlas with its width and height
    fn tex_data_as_alpha8(&self) -> (&[u8], usize, usize);
    /// Texture coordinate of the solid white texel, if not texel (0,0)
    fn white_uv(&self) -> Option<(f32, f32)> {
        None
    }
    /// Receive the id of the bound atlas, or `TextureId::NONE` once it is gone
    fn set_tex_id(&mut self, _id: TextureId) {}
}

/// Backend owning the painter and the output pixels
#[derive(Debug)]
pub struct SoftRenderer<F: FontSource> {
    fonts: F,
    painter: Painter,
    buffer: ColorBuffer,
    clear_color: Option<u32>,
}

impl<F: FontSource> SoftRenderer<F> {
    pub fn new(fonts: F) -> Self {
        Self::with_options(fonts, PaintOptions::default())
    }
    pub fn with_options(fonts: F, options: PaintOptions) -> Self {
        Self { fonts, painter: Painter::with_options(options), buffer: ColorBuffer::default(), clear_color: None }
    }
    /// Fill the frame with `color` before painting each frame
    pub fn with_clear_color(mut self, color: u32) -> Self {
        self.clear_color = Some(color);
        self
    }
    /// Backend name reported to the UI library
    pub fn name(&self) -> &'static str {
        "uiraster"
    }
    pub fn fonts(&self) -> &F {
        &self.fonts
    }
    pub fn fonts_mut(&mut self) -> &mut F {
        &mut self.fonts
    }
    pub fn painter(&self) -> &Painter {
        &self.painter
    }
    /// Build and bind the atlas from the font source
    pub fn create_device_objects(&mut self) -> Result<()> {
        let (pixels, width, height) = self.fonts.tex_data_as_alpha8();
        let mut atlas = GlyphAtlas::from_alpha8(pixels, width, height)?;
        if let Some((u, v)) = self.fonts.white_uv() {
            atlas = atlas.with_white_uv(u, v);
        }
        let id = self.painter.bind(atlas)?;
        self.fonts.set_tex_id(id);
        log::debug!("{}: device objects created", self.name());
        Ok(())
    }
    /// Unbind the atlas, if bound
    pub fn invalidate_device_objects(&mut self) -> Result<()> {
        if self.painter.is_bound() {
            self.painter.unbind()?;
            self.fonts.set_tex_id(TextureId::NONE);
            log::debug!("{}: device objects destroyed", self.name());
        }
        Ok(())
    }
    /// Start a frame, creating device objects on first use
    pub fn new_frame(&mut self) -> Result<()> {
        if !self.painter.is_bound() {
            self.create_device_objects()?;
        }
        Ok(())
    }
    /// Paint a frame into the color buffer
    ///
    /// The buffer is sized to the display size, one pixel per UI point.
    pub fn render_draw_data(&mut self, data: &DrawData) -> Result<PaintStats> {
        let (w, h) = data.display_size;
        self.buffer.resize(w.max(0.0) as usize, h.max(0.0) as usize);
        if let Some(color) = self.clear_color {
            self.buffer.clear(color);
        }
        self.painter.paint_buffer(data, &mut self.buffer)
    }
    /// Pixels of the last frame
    pub fn color_buffer(&self) -> &ColorBuffer {
        &self.buffer
    }
    pub fn color_buffer_mut(&mut self) -> &mut ColorBuffer {
        &mut self.buffer
    }
    /// Release everything bound to the painter
    pub fn shutdown(&mut self) -> Result<()> {
        self.invalidate_device_objects()
    }
}
