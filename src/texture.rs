//! Glyph atlas and texture handles

use crate::error::Error;
use crate::error::Result;

/// Opaque texture handle carried by a draw command
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct TextureId(pub u64);

impl TextureId {
    /// No texture, everything is drawn with vertex colors only
    pub const NONE: TextureId = TextureId(0);
    /// The bound glyph atlas
    pub const FONT_ATLAS: TextureId = TextureId(1);
}

/// What a texture handle resolves to
#[derive(Debug,Copy,Clone)]
pub enum TextureRef<'a> {
    /// Untextured
    None,
    /// Sample alpha from the glyph atlas
    GlyphAtlas(&'a GlyphAtlas),
}

impl<'a> TextureRef<'a> {
    /// Look up `id` given the bound atlas, if any
    ///
    ///     use uiraster::{GlyphAtlas, TextureId, TextureRef};
    ///
    ///     let atlas = GlyphAtlas::new(vec![255], 1, 1).unwrap();
    ///     assert!(TextureRef::resolve(TextureId::FONT_ATLAS, Some(&atlas)).unwrap().atlas().is_some());
    ///     assert!(TextureRef::resolve(TextureId::NONE, None).unwrap().atlas().is_none());
    ///     assert!(TextureRef::resolve(TextureId::FONT_ATLAS, None).is_err());
    ///     assert!(TextureRef::resolve(TextureId(7), Some(&atlas)).is_err());
    ///
    pub fn resolve(id: TextureId, atlas: Option<&'a GlyphAtlas>) -> Result<Self> {
        match (id, atlas) {
            (TextureId::NONE, _) => Ok(TextureRef::None),
            (TextureId::FONT_ATLAS, Some(atlas)) => Ok(TextureRef::GlyphAtlas(atlas)),
            _ => Err(Error::InvalidTexture(id)),
        }
    }
    /// The atlas, if this is one
    pub fn atlas(&self) -> Option<&'a GlyphAtlas> {
        match *self {
            TextureRef::None => None,
            TextureRef::GlyphAtlas(atlas) => Some(atlas),
        }
    }
}

/// Alpha-only bitmap holding the rendered glyphs
///
/// Data is stored as row-major order, one byte per texel
#[derive(Debug,Clone,PartialEq)]
pub struct GlyphAtlas {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
    white_uv: (f32, f32),
}

impl GlyphAtlas {
    /// Take ownership of `pixels`, `width` * `height` alpha values
    ///
    /// The solid white texel is assumed at texel (0,0).
    ///
    ///     use uiraster::GlyphAtlas;
    ///
    ///     let atlas = GlyphAtlas::new(vec![255, 0, 0, 255], 2, 2).unwrap();
    ///     assert_eq!(atlas.white_uv(), (0.25, 0.25));
    ///     assert!(GlyphAtlas::new(vec![0; 3], 2, 2).is_err());
    ///
    pub fn new(pixels: Vec<u8>, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || width.checked_mul(height) != Some(pixels.len()) {
            return Err(Error::AtlasSize { len: pixels.len(), width, height });
        }
        let white_uv = (0.5 / width as f32, 0.5 / height as f32);
        Ok(Self { pixels, width, height, white_uv })
    }
    /// Copy alpha values out of a borrowed bitmap
    pub fn from_alpha8(pixels: &[u8], width: usize, height: usize) -> Result<Self> {
        Self::new(pixels.to_vec(), width, height)
    }
    /// Move the solid white texel
    pub fn with_white_uv(mut self, u: f32, v: f32) -> Self {
        self.white_uv = (u, v);
        self
    }
    /// Texture coordinate of the solid white texel
    ///
    /// Vertices carrying exactly this coordinate are treated as untextured.
    pub fn white_uv(&self) -> (f32, f32) {
        self.white_uv
    }
    /// Width in texels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Height in texels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Raw alpha values
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
    /// Alpha at texel (`x`,`y`)
    pub fn texel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width + x]
    }
    /// Nearest-texel alpha at (`u`,`v`)
    ///
    /// Coordinates are clamped to [0,1], so any input is safe.
    ///
    ///     use uiraster::GlyphAtlas;
    ///
    ///     let atlas = GlyphAtlas::new(vec![0, 255, 255, 0], 2, 2).unwrap();
    ///     assert_eq!(atlas.sample(0.0, 0.0), 0);
    ///     assert_eq!(atlas.sample(1.0, 0.0), 255);
    ///     assert_eq!(atlas.sample(1.0, 1.0), 0);
    ///     assert_eq!(atlas.sample(-4.0, 9.0), 255);
    ///
    pub fn sample(&self, u: f32, v: f32) -> u8 {
        let u = clamp_unit(u);
        let v = clamp_unit(v);
        let w_1 = (self.width - 1) as f32;
        let h_1 = (self.height - 1) as f32;
        // Saturating casts, u and v are already in range
        let tx = ((u * w_1) + 0.5) as usize;
        let ty = ((v * h_1) + 0.5) as usize;
        self.texel(tx.min(self.width - 1), ty.min(self.height - 1))
    }
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
