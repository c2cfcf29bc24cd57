//! Named input predicates.
//!
//! Each predicate answers "does this event mean action X for this target?".
//! Predicates never throttle: the joystick delay/repeat values are exposed
//! for the navigation loop, which owns event-rate limiting.

use std::sync::Arc;
use std::time::Duration;

use log::trace;
use slidebar_input::{Event, Key};

use super::binding::ControllerBinding;

/// Something an input event is dispatched to (a menu, a widget).
pub trait ControlTarget {
    fn target_id(&self) -> &str;
}

impl ControlTarget for &str {
    fn target_id(&self) -> &str {
        self
    }
}

impl ControlTarget for String {
    fn target_id(&self) -> &str {
        self.as_str()
    }
}

/// Every semantic action in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Apply,
    Back,
    CloseMenu,
    Escape,
    Tab,
    Left,
    Right,
    MoveUp,
    MoveDown,
    JoyUp,
    JoyDown,
    JoyLeft,
    JoyRight,
    JoyAxisXLeft,
    JoyAxisXRight,
    JoyAxisYUp,
    JoyAxisYDown,
    JoySelect,
    JoyBack,
}

impl Action {
    pub const ALL: [Action; 19] = [
        Action::Apply,
        Action::Back,
        Action::CloseMenu,
        Action::Escape,
        Action::Tab,
        Action::Left,
        Action::Right,
        Action::MoveUp,
        Action::MoveDown,
        Action::JoyUp,
        Action::JoyDown,
        Action::JoyLeft,
        Action::JoyRight,
        Action::JoyAxisXLeft,
        Action::JoyAxisXRight,
        Action::JoyAxisYUp,
        Action::JoyAxisYDown,
        Action::JoySelect,
        Action::JoyBack,
    ];
}

fn key_is(event: &Event, expected: Key) -> bool {
    matches!(event, Event::Key { key, .. } if *key == expected)
}

fn hat_is(event: &Event, expected: (i8, i8)) -> bool {
    matches!(event, Event::JoyHat { x, y } if (*x, *y) == expected)
}

fn button_is(event: &Event, expected: u8) -> bool {
    matches!(event, Event::JoyButton { button } if *button == expected)
}

/// Axis motion past the deadzone. `positive` selects the direction.
fn axis_past(event: &Event, expected: u8, deadzone: f32, positive: bool) -> bool {
    match event {
        Event::JoyAxis { axis, value } if *axis == expected => {
            if positive {
                *value > deadzone
            } else {
                *value < -deadzone
            }
        }
        _ => false,
    }
}

/// Catalog of input predicates.
///
/// All predicates have default bodies driven by [`Controls::binding`];
/// implementors override individual predicates to customise behaviour for
/// particular targets.
pub trait Controls {
    fn binding(&self) -> &ControllerBinding;

    // -------------------------------------------------------------------------
    // Keyboard
    // -------------------------------------------------------------------------

    fn apply(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        key_is(event, self.binding().keys.apply)
    }

    fn back(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        key_is(event, self.binding().keys.back)
    }

    fn close_menu(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        key_is(event, self.binding().keys.close_menu)
    }

    fn escape(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        key_is(event, self.binding().keys.escape)
    }

    fn tab(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        key_is(event, self.binding().keys.tab)
    }

    fn left(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        key_is(event, self.binding().keys.left)
    }

    fn right(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        key_is(event, self.binding().keys.right)
    }

    fn move_up(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        key_is(event, self.binding().keys.move_up)
    }

    fn move_down(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        key_is(event, self.binding().keys.move_down)
    }

    // -------------------------------------------------------------------------
    // Joystick hat
    // -------------------------------------------------------------------------

    fn joy_up(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        hat_is(event, self.binding().joy.up)
    }

    fn joy_down(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        hat_is(event, self.binding().joy.down)
    }

    fn joy_left(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        hat_is(event, self.binding().joy.left)
    }

    fn joy_right(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        hat_is(event, self.binding().joy.right)
    }

    // -------------------------------------------------------------------------
    // Joystick axes
    // -------------------------------------------------------------------------

    fn joy_axis_x_left(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        let joy = &self.binding().joy;
        axis_past(event, joy.axis_x, joy.deadzone, false)
    }

    fn joy_axis_x_right(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        let joy = &self.binding().joy;
        axis_past(event, joy.axis_x, joy.deadzone, true)
    }

    fn joy_axis_y_up(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        let joy = &self.binding().joy;
        axis_past(event, joy.axis_y, joy.deadzone, false)
    }

    fn joy_axis_y_down(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        let joy = &self.binding().joy;
        axis_past(event, joy.axis_y, joy.deadzone, true)
    }

    // -------------------------------------------------------------------------
    // Joystick buttons
    // -------------------------------------------------------------------------

    fn joy_select(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        button_is(event, self.binding().joy.button_select)
    }

    fn joy_back(&self, event: &Event, _target: &dyn ControlTarget) -> bool {
        button_is(event, self.binding().joy.button_back)
    }

    // -------------------------------------------------------------------------
    // Timing metadata
    // -------------------------------------------------------------------------

    fn joy_deadzone(&self) -> f32 {
        self.binding().joy.deadzone
    }

    fn joy_delay(&self) -> Duration {
        self.binding().joy_delay()
    }

    fn joy_repeat(&self) -> Duration {
        self.binding().joy_repeat()
    }

    // -------------------------------------------------------------------------
    // Classification
    // -------------------------------------------------------------------------

    /// Evaluate the predicate named by `action`.
    fn matches(&self, action: Action, event: &Event, target: &dyn ControlTarget) -> bool {
        match action {
            Action::Apply => self.apply(event, target),
            Action::Back => self.back(event, target),
            Action::CloseMenu => self.close_menu(event, target),
            Action::Escape => self.escape(event, target),
            Action::Tab => self.tab(event, target),
            Action::Left => self.left(event, target),
            Action::Right => self.right(event, target),
            Action::MoveUp => self.move_up(event, target),
            Action::MoveDown => self.move_down(event, target),
            Action::JoyUp => self.joy_up(event, target),
            Action::JoyDown => self.joy_down(event, target),
            Action::JoyLeft => self.joy_left(event, target),
            Action::JoyRight => self.joy_right(event, target),
            Action::JoyAxisXLeft => self.joy_axis_x_left(event, target),
            Action::JoyAxisXRight => self.joy_axis_x_right(event, target),
            Action::JoyAxisYUp => self.joy_axis_y_up(event, target),
            Action::JoyAxisYDown => self.joy_axis_y_down(event, target),
            Action::JoySelect => self.joy_select(event, target),
            Action::JoyBack => self.joy_back(event, target),
        }
    }

    /// Every action `event` satisfies, in catalog order.
    fn actions(&self, event: &Event, target: &dyn ControlTarget) -> Vec<Action> {
        let matched: Vec<Action> = Action::ALL
            .into_iter()
            .filter(|action| self.matches(*action, event, target))
            .collect();
        trace!(
            "Classified {:?} for '{}': {:?}",
            event,
            target.target_id(),
            matched
        );
        matched
    }
}

/// Default controller backed by a shared [`ControllerBinding`].
#[derive(Debug, Clone)]
pub struct Controller {
    binding: Arc<ControllerBinding>,
}

impl Controller {
    pub fn new(binding: Arc<ControllerBinding>) -> Self {
        Self { binding }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ControllerBinding::shared())
    }
}

impl Controls for Controller {
    fn binding(&self) -> &ControllerBinding {
        &self.binding
    }
}
