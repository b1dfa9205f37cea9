use crate::coords::VertexList;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Stroked polyline payload.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineCmd {
    pub points: VertexList,
    /// Line width in logical pixels.
    pub width: f32,
    pub color: Color,
    /// When set, the last vertex is joined back to the first.
    pub closed: bool,
}

impl DrawList {
    /// Records a stroked polyline.
    #[inline]
    pub fn push_outline(&mut self, points: VertexList, width: f32, color: Color, closed: bool) {
        self.push(DrawCmd::Outline(OutlineCmd {
            points,
            width,
            color,
            closed,
        }));
    }
}
