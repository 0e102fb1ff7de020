/// Crossterm key polling
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashSet;
use std::io;
use std::time::Duration;
use wire3d_core::{Input, Key};

/// Keys pressed since the last poll, plus any pending resize
#[derive(Debug, Default)]
pub struct KeyboardState {
    pressed: HashSet<Key>,
    resized: Option<(u16, u16)>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every pending terminal event without blocking.
    pub fn poll(&mut self) -> io::Result<()> {
        self.pressed.clear();
        while event::poll(Duration::from_millis(0))? {
            self.handle(event::read()?);
        }
        Ok(())
    }

    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                if let Some(key) = map_key(&key) {
                    self.pressed.insert(key);
                }
            }
            Event::Resize(width, height) => self.resized = Some((width, height)),
            _ => {}
        }
    }

    /// The latest terminal size reported since the previous call.
    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        self.resized.take()
    }
}

impl Input for KeyboardState {
    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

/// Translate a crossterm key event; `q` and ctrl-c count as escape.
pub fn map_key(event: &KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let key = match event.code {
        KeyCode::Esc | KeyCode::Char('q') => Key::Escape,
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Escape,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Char(c) => Key::Char(c.to_ascii_lowercase()),
        _ => return None,
    };
    Some(key)
}
