//! Scrollbar event handling.
//!
//! Events in a batch are processed in order. Each handler returns a
//! [`Transition`]; moves are folded together and the change callback runs
//! once, after the whole batch.

use log::{debug, trace};
use slidebar_input::{Event, Key, Modifiers, MouseButton, Orientation};

use super::state::{DragState, Transition};
use super::widget::Scrollbar;

/// Share of the page step, in percent, used when paging with shift held.
const SHIFT_PAGE_PERCENT: f64 = 35.0;

impl Scrollbar {
    /// Process a batch of events.
    ///
    /// Returns `true` if any event changed the scrollbar. The change callback
    /// fires at most once per call, and only when the slider moved.
    pub fn update(&mut self, events: &[Event]) -> bool {
        if self.readonly || !self.visible {
            return false;
        }

        let mut outcome = Transition::NONE;
        for event in events {
            trace!("Scrollbar '{}': {:?}", self.id, event);
            let transition = match *event {
                Event::Key { key, modifiers } => self.handle_key(key, modifiers),
                Event::PointerMove { x, y, dx, dy } if self.mouse_enabled => {
                    self.handle_pointer_move(x, y, dx, dy)
                }
                Event::PointerDown { x, y, button } if self.mouse_enabled => {
                    self.handle_pointer_down(x, y, button)
                }
                Event::PointerUp { .. } if self.mouse_enabled => self.handle_pointer_up(),
                Event::Wheel { x, y, delta } if self.mouse_enabled => {
                    self.handle_wheel(x, y, delta)
                }
                Event::FocusLost { x, y } => self.handle_focus_lost(x, y),
                Event::FocusGained { x, y } => self.handle_focus_gained(x, y),
                _ => Transition::NONE,
            };
            outcome = outcome.merge(transition);
        }

        if outcome.moved {
            let value = self.value();
            debug!("Scrollbar '{}': changed to {}", self.id, value);
            if let Some(callback) = self.on_change.as_mut() {
                callback(value);
            }
        }
        outcome.updated
    }

    /// Move the slider by `pixels` along the axis, clamped to the track.
    ///
    /// Returns `true` if the slider moved.
    pub(super) fn scroll(&mut self, pixels: f64) -> bool {
        let requested = pixels.round() as i32;
        if requested == 0 {
            return false;
        }
        let target = self
            .slider_position
            .saturating_add(requested)
            .clamp(0, self.max_offset());
        if target == self.slider_position {
            return false;
        }
        trace!(
            "Scrollbar '{}': slider {} -> {} (requested {})",
            self.id, self.slider_position, target, requested
        );
        self.slider_position = target;
        true
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Transition {
        if !self.keyboard_enabled || self.orientation() != Orientation::Vertical {
            return Transition::NONE;
        }
        let direction = if key == self.binding.keys.page_down {
            1.0
        } else if key == self.binding.keys.page_up {
            -1.0
        } else {
            return Transition::NONE;
        };

        let step = if modifiers.shift {
            (self.page_step_px() * SHIFT_PAGE_PERCENT / 100.0).trunc()
        } else {
            self.page_step_px()
        };
        Transition::scrolled(self.scroll(direction * step))
    }

    fn handle_pointer_move(&mut self, x: i32, y: i32, dx: i32, dy: i32) -> Transition {
        let rect = self.rect();
        let hovered = rect.contains(x, y);
        if hovered != self.state.hovered {
            trace!(
                "Scrollbar '{}': pointer {}",
                self.id,
                if hovered { "entered" } else { "left" }
            );
            self.state.hovered = hovered;
        }

        let DragState::Dragging { .. } = self.state.drag else {
            return Transition::NONE;
        };
        self.state.drag = DragState::Dragging { last: (x, y) };

        if self.outside_hysteresis_band(x, y) {
            trace!("Scrollbar '{}': ignoring motion past the track end", self.id);
            return Transition::NONE;
        }

        let axis = self.orientation();
        Transition::scrolled(self.scroll(f64::from(axis.pick(dx, dy))))
    }

    /// While the slider rests at either end, motion is ignored until the
    /// pointer comes back within half a slider length of the track ends.
    /// Both band edges are exclusive.
    fn outside_hysteresis_band(&self, x: i32, y: i32) -> bool {
        let percent = self.value_percent();
        if percent != 0.0 && percent != 1.0 {
            return false;
        }
        let axis = self.orientation();
        let rect = self.rect();
        let half = f64::from(self.slider_rect().extent(axis)) / 2.0;
        let pointer = f64::from(axis.pick(x, y));
        pointer > f64::from(rect.end(axis)) - half || pointer < f64::from(rect.start(axis)) + half
    }

    fn handle_pointer_down(&mut self, x: i32, y: i32, button: MouseButton) -> Transition {
        let slider = self.slider_rect();
        if slider.contains(x, y) {
            debug!("Scrollbar '{}': drag started ({:?})", self.id, button);
            self.state.drag = DragState::Dragging { last: (x, y) };
            return Transition::NONE;
        }

        if !self.rect().contains(x, y) {
            return Transition::NONE;
        }

        // Move towards the click by one page
        let axis = self.orientation();
        let direction = if axis.pick(x, y) > slider.start(axis) {
            1.0
        } else {
            -1.0
        };
        Transition::scrolled(self.scroll(direction * self.page_step_px()))
    }

    fn handle_pointer_up(&mut self) -> Transition {
        if !self.state.drag.is_dragging() {
            return Transition::NONE;
        }
        debug!("Scrollbar '{}': drag ended", self.id);
        self.state.drag = DragState::Idle;
        self.state.focus_lost = false;
        Transition {
            moved: false,
            updated: true,
        }
    }

    fn handle_wheel(&mut self, x: i32, y: i32, delta: i32) -> Transition {
        if self.orientation() != Orientation::Vertical || delta == 0 {
            return Transition::NONE;
        }
        if let Some(region) = self.scroll_region
            && !region.contains(x, y)
        {
            return Transition::NONE;
        }
        let direction = f64::from(delta.signum());
        Transition::scrolled(self.scroll(direction * self.single_step_px()))
    }

    fn handle_focus_lost(&mut self, x: i32, y: i32) -> Transition {
        if let DragState::Dragging { .. } = self.state.drag {
            self.state.drag = DragState::Dragging { last: (x, y) };
            self.state.focus_lost = true;
        }
        Transition::NONE
    }

    /// Apply the pointer motion missed while the window was unfocused.
    fn handle_focus_gained(&mut self, x: i32, y: i32) -> Transition {
        if !std::mem::take(&mut self.state.focus_lost) {
            return Transition::NONE;
        }
        let DragState::Dragging { last: (last_x, last_y) } = self.state.drag else {
            return Transition::NONE;
        };
        self.state.drag = DragState::Dragging { last: (x, y) };

        let axis = self.orientation();
        let delta = axis.pick(x, y).saturating_sub(axis.pick(last_x, last_y));
        debug!(
            "Scrollbar '{}': focus regained mid-drag, compensating {} px",
            self.id, delta
        );
        Transition::scrolled(self.scroll(f64::from(delta)))
    }
}
