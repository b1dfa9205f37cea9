//! Primitive draw commands and their `DrawList` push helpers.

pub mod outline;
pub mod polygon;
pub mod text;
