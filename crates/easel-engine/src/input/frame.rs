use super::types::{InputEvent, Key, KeyState, Modifiers};

/// A key press (including auto-repeat) in arrival order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
    pub repeat: bool,
}

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys/buttons, pointer position).
/// `InputFrame` provides the events received since the previous frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    /// Key presses this frame, in order. Repeats are included.
    pub fn key_presses(&self) -> impl Iterator<Item = KeyPress> + '_ {
        self.events.iter().filter_map(|ev| match ev {
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                modifiers,
                repeat,
            } => Some(KeyPress {
                key: *key,
                modifiers: *modifiers,
                repeat: *repeat,
            }),
            _ => None,
        })
    }
}
