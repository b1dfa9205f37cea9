//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in paint order (insertion order)
//! - keep primitive-specific helpers isolated per file under `scene::primitives`

mod cmd;
mod list;

pub mod primitives;

pub use cmd::DrawCmd;
pub use list::DrawList;
