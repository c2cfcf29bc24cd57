use slidebar::{Orientation, Rect};
use slidebar::error::ScrollbarError;
use slidebar::scrollbar::{DEFAULT_SINGLE_STEP, TrackGeometry, ValueRange};

// ============================================================================
// ValueRange
// ============================================================================

#[test]
fn test_range_rejects_empty_and_inverted() {
    assert_eq!(
        ValueRange::new(10, 10, 200),
        Err(ScrollbarError::InvalidRange { min: 10, max: 10 })
    );
    assert_eq!(
        ValueRange::new(10, 5, 200),
        Err(ScrollbarError::InvalidRange { min: 10, max: 5 })
    );
}

#[test]
fn test_default_page_step_small_range() {
    let range = ValueRange::new(0, 100, 200).unwrap();
    assert_eq!(range.page_step(), 20.0);
    assert_eq!(range.page_step_px(200), 40.0);
}

#[test]
fn test_default_page_step_large_range() {
    let range = ValueRange::new(0, 1000, 200).unwrap();
    assert_eq!(range.page_step(), 200.0);
    assert_eq!(range.page_step_px(200), 40.0);
}

#[test]
fn test_page_step_px_capped_at_length() {
    let mut range = ValueRange::new(0, 100, 200).unwrap();
    range.set_page_step(500.0).unwrap();
    assert_eq!(range.page_step_px(200), 200.0);
    assert_eq!(range.travel(200), 0.0);
}

#[test]
fn test_full_page_pins_value_to_minimum() {
    let mut range = ValueRange::new(-5, 100, 200).unwrap();
    range.set_page_step(105.0).unwrap();
    assert_eq!(range.value_from_position(0, 200), -5.0);
    assert_eq!(range.value_from_position(150, 200), -5.0);
    assert_eq!(range.position_from_value(100.0, 200), 0.0);
}

#[test]
fn test_value_position_mapping() {
    let mut range = ValueRange::new(0, 100, 200).unwrap();
    range.set_page_step(50.0).unwrap();

    assert_eq!(range.page_step_px(200), 100.0);
    assert_eq!(range.position_from_value(50.0, 200), 50.0);
    assert_eq!(range.value_from_position(50, 200), 50.0);
    assert_eq!(range.value_from_position(100, 200), 100.0);
}

#[test]
fn test_mapping_clamps_out_of_range_inputs() {
    let range = ValueRange::new(0, 100, 200).unwrap();
    assert_eq!(range.value_from_position(1000, 200), 100.0);
    assert_eq!(range.value_from_position(-50, 200), 0.0);
    assert_eq!(range.position_from_value(-10.0, 200), 0.0);
    assert_eq!(range.position_from_value(500.0, 200), range.travel(200));
}

#[test]
fn test_single_step_below_page_step_is_kept() {
    let mut range = ValueRange::new(0, 100, 200).unwrap();
    range.set_page_step(50.0).unwrap();
    assert_eq!(range.single_step_px(200), DEFAULT_SINGLE_STEP);
}

#[test]
fn test_single_step_capped_to_half_page() {
    let mut range = ValueRange::new(0, 100, 200).unwrap();
    range.set_page_step(10.0).unwrap();
    // Page step is 20 px, equal to the default single step
    assert_eq!(range.single_step_px(200), 10.0);

    range.set_page_step(7.5).unwrap();
    assert_eq!(range.page_step_px(200), 15.0);
    assert_eq!(range.single_step_px(200), 7.0);
}

#[test]
fn test_percent_rounds_to_three_decimals() {
    let range = ValueRange::new(0, 3, 200).unwrap();
    assert_eq!(range.percent(0), 0.0);
    assert_eq!(range.percent(1), 0.333);
    assert_eq!(range.percent(2), 0.667);
    assert_eq!(range.percent(3), 1.0);
}

#[test]
fn test_minimum_and_maximum_setters() {
    let mut range = ValueRange::new(0, 100, 200).unwrap();

    assert_eq!(
        range.set_minimum(100),
        Err(ScrollbarError::MinimumTooLarge { value: 100, max: 100 })
    );
    assert_eq!(
        range.set_maximum(-1),
        Err(ScrollbarError::MaximumTooSmall { value: -1, min: 0 })
    );
    assert_eq!(range.min(), 0);
    assert_eq!(range.max(), 100);

    range.set_minimum(-100).unwrap();
    range.set_maximum(300).unwrap();
    assert_eq!(range.span(), 400.0);
}

#[test]
fn test_step_setters_reject_non_positive() {
    let mut range = ValueRange::new(0, 100, 200).unwrap();
    assert_eq!(
        range.set_page_step(0.0),
        Err(ScrollbarError::InvalidPageStep(0.0))
    );
    assert!(range.set_page_step(f64::NAN).is_err());
    assert_eq!(
        range.set_single_step(-3.0),
        Err(ScrollbarError::InvalidSingleStep(-3.0))
    );
    assert_eq!(range.page_step(), 20.0);
}

// ============================================================================
// TrackGeometry
// ============================================================================

#[test]
fn test_geometry_rejects_invisible_slider() {
    assert_eq!(
        TrackGeometry::new(200, 2, 1, Orientation::Vertical),
        Err(ScrollbarError::SliderNotVisible {
            thickness: 2,
            padding: 1
        })
    );
    assert!(TrackGeometry::new(200, 6, 2, Orientation::Vertical).is_ok());
}

#[test]
fn test_geometry_rejects_non_positive_length() {
    assert_eq!(
        TrackGeometry::new(0, 20, 0, Orientation::Horizontal),
        Err(ScrollbarError::InvalidLength(0))
    );
    let mut track = TrackGeometry::new(100, 20, 0, Orientation::Horizontal).unwrap();
    assert_eq!(track.set_length(-4), Err(ScrollbarError::InvalidLength(-4)));
    assert_eq!(track.length(), 100);
}

#[test]
fn test_track_rect_follows_orientation() {
    let mut track = TrackGeometry::new(200, 20, 0, Orientation::Horizontal).unwrap();
    assert_eq!(track.rect(), Rect::new(0, 0, 200, 20));

    track.set_orientation(Orientation::Vertical);
    track.set_origin(5, 7);
    assert_eq!(track.rect(), Rect::new(5, 7, 20, 200));
}

#[test]
fn test_slider_rect_is_padded_and_absolute() {
    let mut track = TrackGeometry::new(200, 20, 2, Orientation::Vertical).unwrap();
    track.set_origin(10, 100);

    let slider = track.slider_rect(30, 40);
    assert_eq!(slider, Rect::new(12, 132, 16, 36));
}
