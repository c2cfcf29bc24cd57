use slidebar_input::{Orientation, Rect};

// ============================================================================
// Rect
// ============================================================================

#[test]
fn test_contains_excludes_trailing_edges() {
    let rect = Rect::new(10, 20, 30, 5);

    assert!(rect.contains(10, 20));
    assert!(rect.contains(39, 24));
    assert!(!rect.contains(40, 24));
    assert!(!rect.contains(39, 25));
    assert!(!rect.contains(9, 20));
}

#[test]
fn test_inflate_shrinks_around_center() {
    let rect = Rect::new(0, 0, 20, 100);
    assert_eq!(rect.inflate(-4, -4), Rect::new(2, 2, 16, 96));
}

#[test]
fn test_inflate_saturates_at_zero() {
    let rect = Rect::new(0, 0, 4, 10);
    let shrunk = rect.inflate(-10, -2);
    assert_eq!(shrunk.width, 0);
    assert_eq!(shrunk.height, 8);
    assert!(shrunk.is_empty());
}

#[test]
fn test_translate() {
    assert_eq!(Rect::from_size(5, 5).translate(3, -2), Rect::new(3, -2, 5, 5));
}

#[test]
fn test_axis_accessors() {
    let rect = Rect::new(10, 20, 30, 40);

    assert_eq!(rect.start(Orientation::Horizontal), 10);
    assert_eq!(rect.end(Orientation::Horizontal), 40);
    assert_eq!(rect.extent(Orientation::Horizontal), 30);

    assert_eq!(rect.start(Orientation::Vertical), 20);
    assert_eq!(rect.end(Orientation::Vertical), 60);
    assert_eq!(rect.extent(Orientation::Vertical), 40);
}

// ============================================================================
// Orientation
// ============================================================================

#[test]
fn test_orientation_pick_and_compose() {
    assert_eq!(Orientation::Horizontal.pick(3, 7), 3);
    assert_eq!(Orientation::Vertical.pick(3, 7), 7);
    assert_eq!(Orientation::Horizontal.compose(100, 20), (100, 20));
    assert_eq!(Orientation::Vertical.compose(100, 20), (20, 100));
    assert_eq!(Orientation::Vertical.opposite(), Orientation::Horizontal);
}
