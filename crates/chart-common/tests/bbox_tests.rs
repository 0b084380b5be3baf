//! Tests for PixelBox and point geometry.

use chart_common::{distance, LocatorError, PixelBox, Point};

// ============================================================================
// Constructor tests
// ============================================================================

#[test]
fn test_pixel_box_new() {
    let bbox = PixelBox::new(10, 20, 110, 220).unwrap();
    assert_eq!(bbox.x1, 10);
    assert_eq!(bbox.y1, 20);
    assert_eq!(bbox.width(), 100);
    assert_eq!(bbox.height(), 200);
}

#[test]
fn test_pixel_box_rejects_degenerate() {
    let result = PixelBox::new(0, 0, 0, 100);
    assert_eq!(
        result,
        Err(LocatorError::InvalidBoundingBox {
            x1: 0,
            y1: 0,
            x2: 0,
            y2: 100
        })
    );
}

#[test]
fn test_pixel_box_rejects_inverted() {
    assert!(matches!(
        PixelBox::new(50, 50, 10, 10),
        Err(LocatorError::InvalidBoundingBox { .. })
    ));
}

#[test]
fn test_pixel_box_from_image_size() {
    let bbox = PixelBox::from_image_size(640, 480).unwrap();
    assert_eq!(bbox, PixelBox::new(0, 0, 640, 480).unwrap());
}

// ============================================================================
// Margin tests
// ============================================================================

#[test]
fn test_shrink_for_label_margins() {
    let image = PixelBox::from_image_size(400, 300).unwrap();
    let inner = image.shrink(20, 10).unwrap();
    assert_eq!(inner, PixelBox::new(20, 10, 380, 290).unwrap());
}

#[test]
fn test_shrink_too_far_is_an_error() {
    let image = PixelBox::from_image_size(40, 40).unwrap();
    assert!(image.shrink(20, 5).is_err());
}

#[test]
fn test_expand_for_symbol_margins() {
    let image = PixelBox::from_image_size(400, 300).unwrap();
    let outer = image.expand(30, 30).unwrap();
    assert_eq!(outer, PixelBox::new(-30, -30, 430, 330).unwrap());
    assert!(outer.contains(Point::new(-30, -30)));
    assert!(!outer.contains(Point::new(430, 0)));
}

// ============================================================================
// Geometry tests
// ============================================================================

#[test]
fn test_border_distance_uses_nearest_edge() {
    let bbox = PixelBox::new(0, 0, 100, 100).unwrap();
    assert_eq!(bbox.border_distance(Point::new(5, 50)), 5.0);
    assert_eq!(bbox.border_distance(Point::new(50, 98)), 2.0);
    assert_eq!(bbox.border_distance(Point::new(30, 40)), 30.0);
}

#[test]
fn test_distance_is_symmetric() {
    let a = Point::new(10, 10);
    let b = Point::new(12, 12);
    assert_eq!(distance(a, b), distance(b, a));
    assert!((distance(a, b) - 8f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_point_serde() {
    let point = Point::new(3, -4);
    let json = serde_json::to_string(&point).unwrap();
    assert_eq!(json, r#"{"x":3,"y":-4}"#);
    let back: Point = serde_json::from_str(&json).unwrap();
    assert_eq!(back, point);
}
