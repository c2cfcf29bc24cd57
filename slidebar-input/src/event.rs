use serde::{Deserialize, Serialize};

/// Raw input events consumed by widgets and the navigation layer.
///
/// Pointer coordinates are absolute pixels. `dx`/`dy` on [`Event::PointerMove`]
/// are the relative motion since the previous pointer event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Key pressed
    Key { key: Key, modifiers: Modifiers },
    /// Pointer moved (with or without a button held)
    PointerMove { x: i32, y: i32, dx: i32, dy: i32 },
    /// Pointer button pressed
    PointerDown { x: i32, y: i32, button: MouseButton },
    /// Pointer button released
    PointerUp { x: i32, y: i32, button: MouseButton },
    /// Wheel gesture. Negative `delta` scrolls up, positive scrolls down.
    Wheel { x: i32, y: i32, delta: i32 },
    /// Window regained focus, with the pointer position at that moment
    FocusGained { x: i32, y: i32 },
    /// Window lost focus, with the last known pointer position
    FocusLost { x: i32, y: i32 },
    /// Analog joystick axis motion, `value` in `[-1.0, 1.0]`
    JoyAxis { axis: u8, value: f32 },
    /// Digital hat motion
    JoyHat { x: i8, y: i8 },
    /// Joystick button pressed
    JoyButton { button: u8 },
    /// Surface resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Pointer position carried by this event, if any.
    pub fn pointer_position(&self) -> Option<(i32, i32)> {
        match *self {
            Event::PointerMove { x, y, .. }
            | Event::PointerDown { x, y, .. }
            | Event::PointerUp { x, y, .. }
            | Event::Wheel { x, y, .. }
            | Event::FocusGained { x, y }
            | Event::FocusLost { x, y } => Some((x, y)),
            _ => None,
        }
    }

    pub fn key(key: Key) -> Self {
        Event::Key {
            key,
            modifiers: Modifiers::new(),
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Convert a crossterm key code. Keys without a counterpart yield `None`.
pub fn convert_key(code: crossterm::event::KeyCode) -> Option<Key> {
    use crossterm::event::KeyCode;
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::BackTab => Some(Key::BackTab),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Insert => Some(Key::Insert),
        KeyCode::F(n) => Some(Key::F(n)),
        _ => None,
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
