//! Text support: the fixed bitmap-font table and TrueType face loading.
//!
//! Glyph rasterization lives in `render::text`.

mod bitmap_font;
mod font_system;

pub use bitmap_font::{BitmapFont, FontFamily};
pub use font_system::{FontLoadError, FontSystem};
