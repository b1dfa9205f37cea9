//! Coordinate and geometry types shared across the engine and the shape layer.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin bottom-left
//! - +X right, +Y up
//!
//! Renderers convert to NDC in shaders using a viewport uniform.

mod point;
mod viewport;

pub use point::{Point, VertexList};
pub use viewport::Viewport;
