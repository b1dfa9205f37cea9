//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in logical pixels (bottom-left origin, +Y up).
//! - Vertex shader converts to NDC using a viewport uniform.

mod common;
mod ctx;

pub mod solid;
pub mod text;

pub use ctx::{RenderCtx, RenderTarget};
pub use solid::SolidRenderer;
pub use text::TextRenderer;
