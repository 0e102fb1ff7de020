/// Keys the frame driver reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Char(char),
}

/// Pressed-key state, queried once per update
pub trait Input {
    fn is_key_pressed(&self, key: Key) -> bool;
}

/// Input source with nothing pressed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl Input for NoInput {
    fn is_key_pressed(&self, _key: Key) -> bool {
        false
    }
}
