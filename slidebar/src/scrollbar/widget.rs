//! The scrollbar widget and its builder.

use std::fmt;
use std::sync::Arc;

use log::debug;
use slidebar_input::{Orientation, Rect};
use uuid::Uuid;

use super::geometry::{DEFAULT_THICKNESS, TrackGeometry};
use super::range::ValueRange;
use super::state::InteractionState;
use crate::controls::{ControlTarget, ControllerBinding};
use crate::error::ScrollbarError;
use crate::transform::{Transform, TransformKind};

/// Change callback, invoked with the new value.
pub type ChangeCallback = Box<dyn FnMut(i32)>;

/// A scrollbar: a slider travelling along a track, mapping its pixel offset
/// onto a `[min, max]` value range.
///
/// All fields are private; geometry and position change only through the
/// validating setters and [`Scrollbar::update`].
pub struct Scrollbar {
    pub(super) id: String,
    pub(super) range: ValueRange,
    pub(super) track: TrackGeometry,
    pub(super) slider_position: i32,
    pub(super) state: InteractionState,
    pub(super) binding: Arc<ControllerBinding>,
    pub(super) scroll_region: Option<Rect>,
    pub(super) on_change: Option<ChangeCallback>,
    pub(super) readonly: bool,
    pub(super) visible: bool,
    pub(super) mouse_enabled: bool,
    pub(super) keyboard_enabled: bool,
}

impl Scrollbar {
    /// Start building a scrollbar with a track of `length` pixels over `[min, max]`.
    pub fn builder(length: i32, min: i32, max: i32) -> ScrollbarBuilder {
        ScrollbarBuilder::new(length, min, max)
    }

    /// Scrollbar with default thickness, padding and steps.
    pub fn new(
        length: i32,
        min: i32,
        max: i32,
        orientation: Orientation,
    ) -> Result<Self, ScrollbarError> {
        Self::builder(length, min, max)
            .orientation(orientation)
            .build()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    /// Current value, truncated to an integer.
    pub fn value(&self) -> i32 {
        self.range
            .value_from_position(self.slider_position, self.track.length()) as i32
    }

    /// Set the value. Values outside `[min, max]` are rejected, not clamped.
    pub fn set_value(&mut self, value: i32) -> Result<(), ScrollbarError> {
        let (min, max) = self.minmax();
        if value < min || value > max {
            return Err(ScrollbarError::ValueOutOfRange { value, min, max });
        }
        // Snap to the end of travel; rounding can land one pixel short.
        let target = if value == max {
            self.max_offset()
        } else {
            self.range
                .position_from_value(f64::from(value), self.track.length())
                .round() as i32
        };
        self.slider_position = target.clamp(0, self.max_offset());
        debug!(
            "Scrollbar '{}': value set to {} (position {})",
            self.id, value, self.slider_position
        );
        Ok(())
    }

    pub fn minimum(&self) -> i32 {
        self.range.min()
    }

    pub fn maximum(&self) -> i32 {
        self.range.max()
    }

    pub fn minmax(&self) -> (i32, i32) {
        (self.range.min(), self.range.max())
    }

    /// Value as a fraction of the range, in `[0, 1]`, rounded to three decimals.
    pub fn value_percent(&self) -> f64 {
        self.range.percent(self.value())
    }

    pub fn set_minimum(&mut self, value: i32) -> Result<(), ScrollbarError> {
        self.range.set_minimum(value).inspect_err(|e| {
            debug!("Scrollbar '{}': {}", self.id, e);
        })?;
        self.apply_size_changes();
        Ok(())
    }

    pub fn set_maximum(&mut self, value: i32) -> Result<(), ScrollbarError> {
        self.range.set_maximum(value).inspect_err(|e| {
            debug!("Scrollbar '{}': {}", self.id, e);
        })?;
        self.apply_size_changes();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Steps
    // -------------------------------------------------------------------------

    /// Page step in value units, truncated.
    pub fn page_step(&self) -> i32 {
        self.range.page_step() as i32
    }

    /// Set the page step in value units.
    ///
    /// The slider length represents the page step as a proportion of the range.
    pub fn set_page_step(&mut self, value: f64) -> Result<(), ScrollbarError> {
        self.range.set_page_step(value).inspect_err(|e| {
            debug!("Scrollbar '{}': {}", self.id, e);
        })?;
        self.apply_size_changes();
        Ok(())
    }

    pub fn page_step_px(&self) -> f64 {
        self.range.page_step_px(self.track.length())
    }

    /// Set the requested wheel step in pixels. Capped below the page step.
    pub fn set_single_step(&mut self, pixels: f64) -> Result<(), ScrollbarError> {
        self.range.set_single_step(pixels)
    }

    pub fn single_step_px(&self) -> f64 {
        self.range.single_step_px(self.track.length())
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    pub fn orientation(&self) -> Orientation {
        self.track.orientation()
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.track.set_orientation(orientation);
        self.apply_size_changes();
    }

    pub fn length(&self) -> i32 {
        self.track.length()
    }

    /// Set the track length in pixels.
    pub fn set_length(&mut self, length: i32) -> Result<(), ScrollbarError> {
        self.track.set_length(length).inspect_err(|e| {
            debug!("Scrollbar '{}': {}", self.id, e);
        })?;
        self.apply_size_changes();
        Ok(())
    }

    pub fn thickness(&self) -> i32 {
        self.track.thickness()
    }

    /// Place the track's top-left corner at an absolute position.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.track.set_origin(x, y);
    }

    /// Absolute track rectangle.
    pub fn rect(&self) -> Rect {
        self.track.rect()
    }

    /// Absolute slider rectangle.
    pub fn slider_rect(&self) -> Rect {
        self.track
            .slider_rect(self.slider_position, self.slider_extent())
    }

    /// Slider offset from the start of the track, in pixels.
    pub fn slider_position(&self) -> i32 {
        self.slider_position
    }

    /// Slider length along the axis before padding.
    pub(super) fn slider_extent(&self) -> i32 {
        self.page_step_px().trunc() as i32
    }

    /// Largest slider offset.
    pub(super) fn max_offset(&self) -> i32 {
        (self.track.length() - self.slider_extent()).max(0)
    }

    /// Re-clamp the slider after a range or size change.
    fn apply_size_changes(&mut self) {
        let max_offset = self.max_offset();
        self.slider_position = self.slider_position.clamp(0, max_offset);
        debug!(
            "Scrollbar '{}': geometry {:?}, slider {:?}",
            self.id,
            self.rect(),
            self.slider_rect()
        );
    }

    // -------------------------------------------------------------------------
    // Flags
    // -------------------------------------------------------------------------

    pub fn is_dragging(&self) -> bool {
        self.state.drag.is_dragging()
    }

    pub fn is_hovered(&self) -> bool {
        self.state.hovered
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_mouse_enabled(&mut self, enabled: bool) {
        self.mouse_enabled = enabled;
    }

    pub fn set_keyboard_enabled(&mut self, enabled: bool) {
        self.keyboard_enabled = enabled;
    }

    /// Area of the scroll region that owns this scrollbar. Wheel gestures are
    /// honoured only while the pointer is inside it. `None` accepts them anywhere.
    pub fn set_scroll_region(&mut self, region: Option<Rect>) {
        self.scroll_region = region;
    }

    /// Register the change callback, replacing any previous one.
    pub fn on_change(&mut self, callback: impl FnMut(i32) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn binding(&self) -> &ControllerBinding {
        &self.binding
    }
}

impl fmt::Debug for Scrollbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scrollbar")
            .field("id", &self.id)
            .field("range", &self.range)
            .field("track", &self.track)
            .field("slider_position", &self.slider_position)
            .field("state", &self.state)
            .field("readonly", &self.readonly)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

impl ControlTarget for Scrollbar {
    fn target_id(&self) -> &str {
        &self.id
    }
}

impl Transform for Scrollbar {
    fn widget_name(&self) -> &'static str {
        "Scrollbar"
    }

    fn supports(&self, kind: TransformKind) -> bool {
        kind == TransformKind::Translate
    }

    fn translate(&mut self, dx: i32, dy: i32) -> Result<(), ScrollbarError> {
        let (x, y) = self.track.origin();
        self.track.set_origin(x + dx, y + dy);
        Ok(())
    }
}

// =============================================================================
// ScrollbarBuilder
// =============================================================================

/// Builder for [`Scrollbar`]. Validation happens in [`ScrollbarBuilder::build`].
pub struct ScrollbarBuilder {
    length: i32,
    min: i32,
    max: i32,
    id: Option<String>,
    orientation: Orientation,
    thickness: i32,
    padding: i32,
    page_step: Option<f64>,
    single_step: Option<f64>,
    binding: Option<Arc<ControllerBinding>>,
    on_change: Option<ChangeCallback>,
}

impl ScrollbarBuilder {
    pub fn new(length: i32, min: i32, max: i32) -> Self {
        Self {
            length,
            min,
            max,
            id: None,
            orientation: Orientation::Horizontal,
            thickness: DEFAULT_THICKNESS,
            padding: 0,
            page_step: None,
            single_step: None,
            binding: None,
            on_change: None,
        }
    }

    /// Widget identifier. A random UUID is used when unset.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Track thickness across the orientation axis.
    pub fn thickness(mut self, thickness: i32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Space between the slider and the track edges.
    pub fn slider_padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    /// Page step in value units.
    pub fn page_step(mut self, value: f64) -> Self {
        self.page_step = Some(value);
        self
    }

    /// Requested wheel step in pixels.
    pub fn single_step(mut self, pixels: f64) -> Self {
        self.single_step = Some(pixels);
        self
    }

    /// Input binding for the paging keys. Defaults to the process-wide binding.
    pub fn binding(mut self, binding: Arc<ControllerBinding>) -> Self {
        self.binding = Some(binding);
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(i32) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> Result<Scrollbar, ScrollbarError> {
        let mut range = ValueRange::new(self.min, self.max, self.length)?;
        let track = TrackGeometry::new(
            self.length,
            self.thickness,
            self.padding,
            self.orientation,
        )?;
        if let Some(page_step) = self.page_step {
            range.set_page_step(page_step)?;
        }
        if let Some(single_step) = self.single_step {
            range.set_single_step(single_step)?;
        }

        let id = self.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        debug!(
            "Scrollbar '{}': created over [{}, {}], {:?}, length {}",
            id, self.min, self.max, self.orientation, self.length
        );

        let mut scrollbar = Scrollbar {
            id,
            range,
            track,
            slider_position: 0,
            state: InteractionState::default(),
            binding: self.binding.unwrap_or_else(ControllerBinding::shared),
            scroll_region: None,
            on_change: self.on_change,
            readonly: false,
            visible: true,
            mouse_enabled: true,
            keyboard_enabled: true,
        };
        scrollbar.apply_size_changes();
        Ok(scrollbar)
    }
}
