//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform::winit` translates window-system events into `InputEvent`s.
//!
//! Pointer positions are logical pixels with a bottom-left origin, matching
//! scene coordinates.

mod frame;
mod state;
mod types;

pub(crate) mod platform;

pub use frame::{InputFrame, KeyPress};
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
};
