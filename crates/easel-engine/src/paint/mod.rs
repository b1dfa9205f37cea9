//! Paint model shared between the shape layer and renderers.
//!
//! Scope:
//! - 8-bit RGB color values
//! - the symbolic color-name table
//!
//! Geometry types remain in `coords`.

pub mod color;
mod names;

pub use color::{Color, ColorError};
