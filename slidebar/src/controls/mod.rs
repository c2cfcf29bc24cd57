//! Input classification for the navigation layer.
//!
//! This module provides:
//! - `ControllerBinding`, the immutable key/joystick configuration
//! - `Controls`, the catalog of named predicates, and its default `Controller`
//! - `Action`, naming every predicate for table-driven dispatch

mod binding;
mod dispatch;

pub use binding::{ConfigError, ControllerBinding, JoyMap, KeyMap};
pub use dispatch::{Action, ControlTarget, Controller, Controls};
