//! Conversion from crossterm events to slidebar events.
//!
//! Terminal mouse reports only carry absolute cells, so the tracker keeps
//! the last pointer position to synthesise motion deltas and the pointer
//! position attached to focus changes.

use crossterm::event::{
    Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use log::trace;

use crate::event::{convert_key, Event};

#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    last: Option<(i32, i32)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last pointer position seen, if any.
    pub fn position(&self) -> Option<(i32, i32)> {
        self.last
    }

    /// Convert a crossterm event, updating the tracked pointer position.
    ///
    /// Returns `None` for events with no counterpart (key releases, horizontal
    /// wheel, paste, focus changes before any pointer position is known).
    pub fn convert(&mut self, event: &CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Key(key_event) => convert_key_event(key_event),
            CrosstermEvent::Mouse(mouse_event) => self.convert_mouse_event(mouse_event),
            CrosstermEvent::FocusGained => {
                let (x, y) = self.last?;
                Some(Event::FocusGained { x, y })
            }
            CrosstermEvent::FocusLost => {
                let (x, y) = self.last?;
                Some(Event::FocusLost { x, y })
            }
            CrosstermEvent::Resize(width, height) => Some(Event::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }

    /// Convert a batch, dropping events without a counterpart.
    pub fn convert_all<'a, I>(&mut self, events: I) -> Vec<Event>
    where
        I: IntoIterator<Item = &'a CrosstermEvent>,
    {
        events
            .into_iter()
            .filter_map(|event| self.convert(event))
            .collect()
    }

    fn convert_mouse_event(&mut self, event: &MouseEvent) -> Option<Event> {
        let x = i32::from(event.column);
        let y = i32::from(event.row);
        let (last_x, last_y) = self.last.unwrap_or((x, y));
        self.last = Some((x, y));

        match event.kind {
            MouseEventKind::Down(button) => Some(Event::PointerDown {
                x,
                y,
                button: button.into(),
            }),
            MouseEventKind::Up(button) => Some(Event::PointerUp {
                x,
                y,
                button: button.into(),
            }),
            MouseEventKind::Drag(_) | MouseEventKind::Moved => Some(Event::PointerMove {
                x,
                y,
                dx: x - last_x,
                dy: y - last_y,
            }),
            MouseEventKind::ScrollUp => Some(Event::Wheel { x, y, delta: -1 }),
            MouseEventKind::ScrollDown => Some(Event::Wheel { x, y, delta: 1 }),
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => None,
        }
    }
}

fn convert_key_event(event: &KeyEvent) -> Option<Event> {
    trace!(
        "Key event: code={:?}, modifiers={:?}, kind={:?}",
        event.code,
        event.modifiers,
        event.kind
    );

    // Only key presses map to key-down events
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let key = convert_key(event.code)?;
    Some(Event::Key {
        key,
        modifiers: event.modifiers.into(),
    })
}
