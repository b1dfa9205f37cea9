use crate::scene::primitives::outline::OutlineCmd;
use crate::scene::primitives::polygon::PolygonCmd;
use crate::scene::primitives::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new primitive module under `scene::primitives::*`
/// - add a new variant here
/// - implement push helpers inside that primitive module
/// - teach a renderer under `render::*` to consume it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Polygon(PolygonCmd),
    Outline(OutlineCmd),
    Text(TextCmd),
}
