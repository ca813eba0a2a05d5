//! Software rasterizer for immediate mode GUI draw lists
//!
//! How does this work
//!
//!    painter = Painter::new()
//!    painter.bind( GlyphAtlas )          -- once, from the font bitmap
//!    painter.paint( DrawData, pixels )   -- every frame
//!      paint_draw_list()                 -- per list
//!        TextureRef::resolve()           -- per command
//!        paint_draw_cmd()
//!          glyph quad  => paint_uniform_textured_rectangle()
//!          rectangle   => paint_uniform_rectangle()
//!          otherwise   => paint_triangle()
//!    painter.unbind()
//!
//! Output pixels are packed 32-bit colors, row-major, with the channel
//! order given by [`PaintOptions`].
//!
//!     use uiraster::{DrawData, DrawList, GlyphAtlas, Painter};
//!
//!     let mut painter = Painter::new();
//!     let atlas = GlyphAtlas::new(vec![255; 4], 2, 2).unwrap();
//!     let white = atlas.white_uv();
//!     painter.bind(atlas).unwrap();
//!
//!     let mut list = DrawList::new(white);
//!     list.prim_rect((0.0, 0.0), (10.0, 10.0), 0xFFFF_0000);
//!     let mut data = DrawData::new((20.0, 20.0));
//!     data.cmd_lists.push(list);
//!
//!     let mut pixels = vec![0u32; 20 * 20];
//!     painter.paint(&data, &mut pixels, 20, 20).unwrap();
//!     assert_eq!(pixels[9 * 20 + 9], 0xFFFF_0000);
//!     assert_eq!(pixels[10 * 20 + 10], 0);
//!

pub mod color;
pub mod math;
pub mod fixed;
pub mod barycentric;
pub mod texture;
pub mod clip;
pub mod target;
pub mod buffer;
pub mod rect;
pub mod raster;
pub mod draw;
pub mod render;
pub mod painter;
pub mod backend;
pub mod snapshot;
pub mod error;

pub use color::*;
pub use math::*;
pub use fixed::*;
pub use barycentric::*;
pub use texture::*;
pub use clip::*;
pub use target::*;
pub use buffer::*;
pub use rect::*;
pub use raster::*;
pub use draw::*;
pub use render::*;
pub use painter::*;
pub use backend::*;
pub use snapshot::*;
pub use error::*;
