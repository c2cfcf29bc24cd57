//! Controller binding: which raw inputs mean which action.

use std::path::Path;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use slidebar_input::Key;
use thiserror::Error;

static SHARED: OnceLock<Arc<ControllerBinding>> = OnceLock::new();

/// Errors that can occur when loading a controller binding.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read controller binding: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse controller binding: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Joystick deadzone shall be in [0, 1), got {0}")]
    InvalidDeadzone(f32),

    #[error("A process-wide controller binding is already installed")]
    AlreadyInstalled,
}

/// Keyboard bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyMap {
    pub apply: Key,
    pub back: Key,
    pub close_menu: Key,
    pub escape: Key,
    pub tab: Key,
    pub left: Key,
    pub right: Key,
    /// Moves the selection down. Bound to `Up` by default: menus are
    /// traversed bottom-up, so the keys are inverted.
    pub move_down: Key,
    pub move_up: Key,
    /// Scrollbar paging
    pub page_up: Key,
    pub page_down: Key,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            apply: Key::Enter,
            back: Key::Backspace,
            close_menu: Key::Escape,
            escape: Key::Escape,
            tab: Key::Tab,
            left: Key::Left,
            right: Key::Right,
            move_down: Key::Up,
            move_up: Key::Down,
            page_up: Key::PageUp,
            page_down: Key::PageDown,
        }
    }
}

/// Joystick bindings and timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoyMap {
    pub axis_x: u8,
    pub axis_y: u8,
    pub button_back: u8,
    pub button_select: u8,
    /// Axis magnitude at or below which motion is ignored.
    pub deadzone: f32,
    /// Delay before a held direction starts repeating, in milliseconds.
    pub delay_ms: u64,
    /// Interval between repeats of a held direction, in milliseconds.
    pub repeat_ms: u64,
    pub up: (i8, i8),
    pub down: (i8, i8),
    pub left: (i8, i8),
    pub right: (i8, i8),
}

impl Default for JoyMap {
    fn default() -> Self {
        Self {
            axis_x: 0,
            axis_y: 1,
            button_back: 1,
            button_select: 0,
            deadzone: 0.5,
            delay_ms: 300,
            repeat_ms: 100,
            up: (0, 1),
            down: (0, -1),
            left: (-1, 0),
            right: (1, 0),
        }
    }
}

/// Complete input configuration shared by the controller and widgets.
///
/// Loaded once and shared through an `Arc`; never mutated afterwards.
/// Missing fields in a JSON document fall back to the defaults, so an
/// override only has to name what it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerBinding {
    pub keys: KeyMap,
    pub joy: JoyMap,
}

impl ControllerBinding {
    /// Parse a binding from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let binding: Self = serde_json::from_str(json)?;
        binding.validate()?;
        Ok(binding)
    }

    /// Read and parse a binding from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let deadzone = self.joy.deadzone;
        if !(0.0..1.0).contains(&deadzone) {
            return Err(ConfigError::InvalidDeadzone(deadzone));
        }
        Ok(())
    }

    pub fn joy_delay(&self) -> Duration {
        Duration::from_millis(self.joy.delay_ms)
    }

    pub fn joy_repeat(&self) -> Duration {
        Duration::from_millis(self.joy.repeat_ms)
    }

    /// The process-wide binding. Defaults are installed on first access
    /// unless [`ControllerBinding::install`] ran before.
    pub fn shared() -> Arc<ControllerBinding> {
        SHARED
            .get_or_init(|| Arc::new(ControllerBinding::default()))
            .clone()
    }

    /// Install the process-wide binding. Fails once a binding is in place.
    pub fn install(self) -> Result<Arc<ControllerBinding>, ConfigError> {
        self.validate()?;
        let binding = Arc::new(self);
        SHARED
            .set(binding.clone())
            .map_err(|_| ConfigError::AlreadyInstalled)?;
        log::info!("Installed process-wide controller binding");
        Ok(binding)
    }
}
