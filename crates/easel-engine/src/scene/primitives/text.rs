use crate::coords::Point;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};
use crate::text::BitmapFont;

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: BitmapFont,
    pub color: Color,
    /// Baseline-left of the first glyph in logical pixels.
    pub origin: Point,
}

impl DrawList {
    /// Records a single-line text draw command.
    pub fn push_text(
        &mut self,
        text: impl Into<String>,
        font: BitmapFont,
        color: Color,
        origin: Point,
    ) {
        self.push(DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            color,
            origin,
        }));
    }
}
