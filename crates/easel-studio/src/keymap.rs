use easel_draw::Direction;
use easel_engine::input::Key;

/// What a key press does to the scene.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Move the selected object by its move step.
    Step(Direction),
    /// Move the selected object by one pixel.
    Nudge(Direction),
    SelectNext,
    SelectPrev,
    Select(usize),
    Invalid,
}

/// Letters match in either case.
pub fn action_for(key: Key) -> Action {
    if let Some(d) = key.digit() {
        return Action::Select(d as usize);
    }
    if let Some(n) = key.function_index() {
        return Action::Select(n as usize);
    }
    match key {
        Key::Q | Key::Escape => Action::Quit,
        Key::H => Action::Step(Direction::Left),
        Key::J => Action::Step(Direction::Down),
        Key::K => Action::Step(Direction::Up),
        Key::L => Action::Step(Direction::Right),
        Key::N | Key::Space | Key::Tab => Action::SelectNext,
        Key::P | Key::Backspace => Action::SelectPrev,
        Key::ArrowLeft => Action::Nudge(Direction::Left),
        Key::ArrowDown => Action::Nudge(Direction::Down),
        Key::ArrowUp => Action::Nudge(Direction::Up),
        Key::ArrowRight => Action::Nudge(Direction::Right),
        _ => Action::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        assert_eq!(action_for(Key::Q), Action::Quit);
        assert_eq!(action_for(Key::Escape), Action::Quit);
    }

    #[test]
    fn vi_keys_step() {
        assert_eq!(action_for(Key::H), Action::Step(Direction::Left));
        assert_eq!(action_for(Key::J), Action::Step(Direction::Down));
        assert_eq!(action_for(Key::K), Action::Step(Direction::Up));
        assert_eq!(action_for(Key::L), Action::Step(Direction::Right));
    }

    #[test]
    fn selection_keys() {
        for key in [Key::N, Key::Space, Key::Tab] {
            assert_eq!(action_for(key), Action::SelectNext);
        }
        for key in [Key::P, Key::Backspace] {
            assert_eq!(action_for(key), Action::SelectPrev);
        }
        assert_eq!(action_for(Key::Digit0), Action::Select(0));
        assert_eq!(action_for(Key::Digit7), Action::Select(7));
        assert_eq!(action_for(Key::F1), Action::Select(1));
        assert_eq!(action_for(Key::F12), Action::Select(12));
    }

    #[test]
    fn arrows_nudge() {
        assert_eq!(action_for(Key::ArrowUp), Action::Nudge(Direction::Up));
        assert_eq!(action_for(Key::ArrowLeft), Action::Nudge(Direction::Left));
    }

    #[test]
    fn everything_else_is_invalid() {
        assert_eq!(action_for(Key::Z), Action::Invalid);
        assert_eq!(action_for(Key::Enter), Action::Invalid);
        assert_eq!(action_for(Key::Unknown(42)), Action::Invalid);
    }
}
