//! Errors

use crate::texture::TextureId;

use thiserror::Error;

/// Everything that can go wrong while binding, painting or exporting
#[derive(Debug, Error)]
pub enum Error {
    /// Paint or unbind called without a bound glyph atlas
    #[error("glyph atlas is not bound")]
    AtlasNotBound,
    /// Bind called while an atlas is still bound
    #[error("glyph atlas is already bound, unbind it first")]
    AtlasAlreadyBound,
    /// A draw command names a texture that does not resolve
    #[error("draw command references unknown texture {0:?}")]
    InvalidTexture(TextureId),
    /// Atlas pixel data does not match its dimensions
    #[error("atlas data holds {len} bytes but is declared {width}x{height}")]
    AtlasSize { len: usize, width: usize, height: usize },
    /// Destination slice is shorter than width * height
    #[error("pixel buffer holds {len} pixels but {width}x{height} were requested")]
    BufferTooSmall { len: usize, width: usize, height: usize },
    /// A draw command reads past the end of the index buffer
    #[error("draw command reads indices {start}..{end} of {len}")]
    IndexRange { start: usize, end: usize, len: usize },
    /// An index points past the end of the vertex buffer
    #[error("vertex index {index} out of range for {len} vertices")]
    VertexIndex { index: usize, len: usize },
    /// Logical display size must be positive in both directions
    #[error("display size {width}x{height} is not positive")]
    InvalidDisplaySize { width: f32, height: f32 },
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
