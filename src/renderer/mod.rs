//! Renderer Module
//!
//! Turns a console grid into pixels: bitmap glyphs, the font atlas with its
//! builtin variants, and the root console that rasterizes dirty cells into
//! an XRGB8888 framebuffer.

mod atlas;
mod font;
mod root;

pub use atlas::{decode_xbm, FontAtlas};
pub use font::{FontData, FontError, Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use root::RootConsole;
