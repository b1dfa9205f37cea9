use easel_engine::coords::Point;
use easel_engine::paint::Color;
use easel_engine::scene::DrawList;
use easel_engine::text::BitmapFont;

use crate::error::CommandError;

use super::Shape;

/// A line of text in one of the named bitmap fonts.
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    font: BitmapFont,
    text: String,
}

impl TextShape {
    /// Fails with `InvalidArgument` when `font` is not a known font name.
    pub fn new(font: &str, text: impl Into<String>) -> Result<Self, CommandError> {
        let font = BitmapFont::from_name(font)
            .ok_or_else(|| CommandError::InvalidArgument(format!("invalid font {font:?}")))?;
        Ok(Self::with_font(font, text))
    }

    pub fn with_font(font: BitmapFont, text: impl Into<String>) -> Self {
        Self {
            font,
            text: text.into(),
        }
    }

    pub fn font(&self) -> BitmapFont {
        self.font
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Shape for TextShape {
    /// The baseline of the first glyph starts at `center`.
    fn draw(&self, canvas: &mut DrawList, center: Point, color: Color) {
        canvas.push_text(self.text.clone(), self.font, color, center);
    }

    fn border(&self, _canvas: &mut DrawList, _center: Point, _width: f32, _color: Color) {}

    fn describe(&self) -> String {
        format!("text {} {:?}", self.font, self.text)
    }
}
