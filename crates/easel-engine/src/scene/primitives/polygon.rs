use crate::coords::VertexList;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Filled polygon payload.
///
/// Vertices are in logical pixels (bottom-left origin, +Y up). The fill
/// is a triangle fan anchored at the first vertex, so concave input is
/// drawn the way a fan draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: VertexList,
    pub color: Color,
}

impl DrawList {
    /// Records a filled polygon. Fewer than 3 points draws nothing.
    #[inline]
    pub fn push_polygon(&mut self, points: VertexList, color: Color) {
        self.push(DrawCmd::Polygon(PolygonCmd { points, color }));
    }
}
