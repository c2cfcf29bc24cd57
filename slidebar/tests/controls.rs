use std::sync::Arc;
use std::time::Duration;

use slidebar::controls::{
    Action, ConfigError, ControlTarget, Controller, ControllerBinding, Controls,
};
use slidebar::{Event, Key, Modifiers};

fn controller() -> Controller {
    Controller::new(Arc::new(ControllerBinding::default()))
}

fn axis(axis: u8, value: f32) -> Event {
    Event::JoyAxis { axis, value }
}

fn hat(x: i8, y: i8) -> Event {
    Event::JoyHat { x, y }
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_default_keys() {
    let controls = controller();
    let menu = "menu";

    assert!(controls.apply(&Event::key(Key::Enter), &menu));
    assert!(controls.back(&Event::key(Key::Backspace), &menu));
    assert!(controls.close_menu(&Event::key(Key::Escape), &menu));
    assert!(controls.escape(&Event::key(Key::Escape), &menu));
    assert!(controls.tab(&Event::key(Key::Tab), &menu));
    assert!(controls.left(&Event::key(Key::Left), &menu));
    assert!(controls.right(&Event::key(Key::Right), &menu));
    assert!(!controls.apply(&Event::key(Key::Tab), &menu));
}

#[test]
fn test_vertical_keys_are_inverted() {
    let controls = controller();
    let menu = "menu";

    assert!(controls.move_down(&Event::key(Key::Up), &menu));
    assert!(controls.move_up(&Event::key(Key::Down), &menu));
    assert!(!controls.move_down(&Event::key(Key::Down), &menu));
}

#[test]
fn test_modifiers_do_not_affect_key_predicates() {
    let controls = controller();
    let event = Event::Key {
        key: Key::Enter,
        modifiers: Modifiers::ctrl(),
    };
    assert!(controls.apply(&event, &"menu"));
}

#[test]
fn test_key_predicates_reject_other_events() {
    let controls = controller();
    assert!(!controls.apply(&Event::JoyButton { button: 0 }, &"menu"));
    assert!(!controls.escape(&Event::FocusLost { x: 0, y: 0 }, &"menu"));
}

// ============================================================================
// Joystick
// ============================================================================

#[test]
fn test_hat_directions() {
    let controls = controller();
    let menu = "menu";

    assert!(controls.joy_up(&hat(0, 1), &menu));
    assert!(controls.joy_down(&hat(0, -1), &menu));
    assert!(controls.joy_left(&hat(-1, 0), &menu));
    assert!(controls.joy_right(&hat(1, 0), &menu));
    assert!(!controls.joy_up(&hat(1, 1), &menu));
}

#[test]
fn test_axes_respect_deadzone() {
    let controls = controller();
    let menu = "menu";

    assert!(!controls.joy_axis_x_right(&axis(0, 0.5), &menu));
    assert!(controls.joy_axis_x_right(&axis(0, 0.6), &menu));
    assert!(controls.joy_axis_x_left(&axis(0, -0.6), &menu));
    assert!(!controls.joy_axis_x_left(&axis(0, -0.4), &menu));

    // Y grows downwards
    assert!(controls.joy_axis_y_down(&axis(1, 0.9), &menu));
    assert!(controls.joy_axis_y_up(&axis(1, -0.9), &menu));

    // Wrong axis
    assert!(!controls.joy_axis_x_right(&axis(1, 0.9), &menu));
}

#[test]
fn test_buttons() {
    let controls = controller();
    assert!(controls.joy_select(&Event::JoyButton { button: 0 }, &"menu"));
    assert!(controls.joy_back(&Event::JoyButton { button: 1 }, &"menu"));
    assert!(!controls.joy_back(&Event::JoyButton { button: 0 }, &"menu"));
}

#[test]
fn test_timing_metadata() {
    let controls = controller();
    assert_eq!(controls.joy_deadzone(), 0.5);
    assert_eq!(controls.joy_delay(), Duration::from_millis(300));
    assert_eq!(controls.joy_repeat(), Duration::from_millis(100));
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_actions_lists_every_match_in_order() {
    let controls = controller();
    let actions = controls.actions(&Event::key(Key::Escape), &"menu");
    assert_eq!(actions, vec![Action::CloseMenu, Action::Escape]);
}

#[test]
fn test_actions_empty_for_unbound_input() {
    let controls = controller();
    assert!(controls.actions(&Event::key(Key::F(5)), &"menu").is_empty());
    assert!(controls.actions(&axis(0, 0.1), &"menu").is_empty());
}

#[test]
fn test_matches_agrees_with_predicates() {
    let controls = controller();
    let event = hat(0, -1);
    for action in Action::ALL {
        let expected = action == Action::JoyDown;
        assert_eq!(controls.matches(action, &event, &"menu"), expected, "{action:?}");
    }
}

/// Controls that only accept `apply` for one target.
struct Guarded {
    binding: ControllerBinding,
}

impl Controls for Guarded {
    fn binding(&self) -> &ControllerBinding {
        &self.binding
    }

    fn apply(&self, event: &Event, target: &dyn ControlTarget) -> bool {
        target.target_id() == "confirm"
            && matches!(event, Event::Key { key: Key::Enter, .. })
    }
}

#[test]
fn test_overridden_predicate_sees_target() {
    let controls = Guarded {
        binding: ControllerBinding::default(),
    };
    let enter = Event::key(Key::Enter);

    assert!(controls.apply(&enter, &"confirm"));
    assert!(!controls.apply(&enter, &"menu"));
    assert_eq!(controls.actions(&enter, &"menu"), Vec::<Action>::new());
    assert_eq!(controls.actions(&enter, &String::from("confirm")), vec![Action::Apply]);

    // Untouched predicates keep the binding defaults
    assert!(controls.escape(&Event::key(Key::Escape), &"menu"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_partial_json_keeps_defaults() {
    let json = r#"{ "keys": { "apply": "Tab" }, "joy": { "deadzone": 0.25 } }"#;
    let binding = ControllerBinding::from_json(json).unwrap();

    assert_eq!(binding.keys.apply, Key::Tab);
    assert_eq!(binding.keys.back, Key::Backspace);
    assert_eq!(binding.joy.deadzone, 0.25);
    assert_eq!(binding.joy.delay_ms, 300);

    let controls = Controller::new(Arc::new(binding));
    assert!(controls.apply(&Event::key(Key::Tab), &"menu"));
    assert!(controls.joy_axis_x_right(&axis(0, 0.3), &"menu"));
}

#[test]
fn test_json_round_trip() {
    let binding = ControllerBinding::default();
    let json = binding.to_json().unwrap();
    assert_eq!(ControllerBinding::from_json(&json).unwrap(), binding);
}

#[test]
fn test_invalid_deadzone_rejected() {
    let result = ControllerBinding::from_json(r#"{ "joy": { "deadzone": 1.5 } }"#);
    assert!(matches!(result, Err(ConfigError::InvalidDeadzone(value)) if value == 1.5));
}

#[test]
fn test_malformed_json_rejected() {
    let result = ControllerBinding::from_json("{ keys: ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_missing_file_rejected() {
    let result = ControllerBinding::from_path("/nonexistent/slidebar/binding.json");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
