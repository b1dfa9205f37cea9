//! Easel engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by higher layers,
//! plus the renderer-agnostic draw list that shapes record primitives into.

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
