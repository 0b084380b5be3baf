//! Integration tests for candidate harvesting.

use placement::harvest::{
    add_contour_path, add_font_candidates, add_symbol_candidates, GridProjection, PathOp,
    PixelProjection, SymbolRange,
};
use placement::{LabelLocator, LocatorError, Point};
use test_utils::params;

fn boxed_locator(x2: i32, y2: i32) -> LabelLocator {
    let mut locator = LabelLocator::new();
    locator.bounding_box(0, 0, x2, y2).unwrap();
    locator
}

// ============================================================================
// Contour paths
// ============================================================================

#[test]
fn test_contour_path_uses_line_to_vertices() {
    let mut locator = boxed_locator(100, 100);
    let path = [
        PathOp::MoveTo { x: 1.0, y: 1.0 },
        PathOp::LineTo { x: 10.4, y: 20.5 },
        PathOp::LineTo { x: 30.0, y: 40.0 },
        PathOp::MoveTo { x: 50.0, y: 50.0 },
        PathOp::LineTo { x: 150.0, y: 50.0 },
    ];

    let added = add_contour_path(&mut locator, params::PRESSURE, 1010.0, &path).unwrap();
    assert_eq!(added, 2);
    assert_eq!(
        locator.coordinates(params::PRESSURE, 1010.0),
        Some(&[Point::new(10, 21), Point::new(30, 40)][..])
    );
}

#[test]
fn test_contour_path_skips_non_finite_vertices() {
    let mut locator = boxed_locator(100, 100);
    let path = [
        PathOp::MoveTo { x: 0.0, y: 0.0 },
        PathOp::LineTo { x: f64::NAN, y: 5.0 },
        PathOp::LineTo { x: 5.0, y: f64::INFINITY },
        PathOp::LineTo { x: f64::NEG_INFINITY, y: f64::NAN },
        PathOp::LineTo { x: 40.0, y: 60.0 },
    ];

    let added = add_contour_path(&mut locator, params::PRESSURE, 1000.0, &path).unwrap();
    assert_eq!(added, 1);
    assert_eq!(
        locator.coordinates(params::PRESSURE, 1000.0),
        Some(&[Point::new(40, 60)][..])
    );
}

#[test]
fn test_contour_path_rejects_sentinel_parameter() {
    let mut locator = boxed_locator(100, 100);
    let path = [PathOp::LineTo { x: 10.0, y: 10.0 }];
    assert_eq!(
        add_contour_path(&mut locator, 0, 1.0, &path),
        Err(LocatorError::InvalidParameter(0))
    );
    assert!(locator.is_empty());
}

#[test]
fn test_contour_path_json() {
    let json = r#"[
        {"op": "move_to", "x": 0.0, "y": 0.0},
        {"op": "line_to", "x": 5.0, "y": 5.0}
    ]"#;
    let path: Vec<PathOp> = serde_json::from_str(json).unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path[0], PathOp::MoveTo { x: 0.0, y: 0.0 });
}

// ============================================================================
// Grid candidates
// ============================================================================

#[test]
fn test_font_candidates_match_exact_values() {
    let mut locator = boxed_locator(100, 100);
    #[rustfmt::skip]
    let data = vec![
        1.0, 2.0, 3.0,
        2.0, 2.5, 1.0,
    ];
    let projection = GridProjection::new(5.0, 5.0, 10.0, 10.0);

    let added =
        add_font_candidates(&mut locator, 7, &data, 3, 2, &[2.0, 1.0], &projection).unwrap();
    assert_eq!(added, 4);
    assert_eq!(
        locator.coordinates(7, 2.0),
        Some(&[Point::new(15, 5), Point::new(5, 15)][..])
    );
    assert_eq!(
        locator.coordinates(7, 1.0),
        Some(&[Point::new(5, 5), Point::new(25, 15)][..])
    );
    assert!(locator.coordinates(7, 2.5).is_none());
}

#[test]
fn test_symbol_candidates_by_range() {
    let mut locator = boxed_locator(100, 100);
    #[rustfmt::skip]
    let data = vec![
        0.0, 0.5, f32::NAN,
        5.0, 12.0, 0.2,
    ];
    let projection = GridProjection::new(0.0, 0.0, 10.0, 10.0);
    let ranges = [
        SymbolRange::new(Some(0.1), Some(1.0)),
        SymbolRange::new(Some(10.0), None),
    ];

    let added =
        add_symbol_candidates(&mut locator, 20, &data, 3, 2, &ranges, &projection).unwrap();
    assert_eq!(added, 3);
    assert_eq!(locator.coordinates(20, 0.5), Some(&[Point::new(10, 0)][..]));
    assert_eq!(locator.coordinates(20, 0.2), Some(&[Point::new(20, 10)][..]));
    assert_eq!(locator.coordinates(20, 12.0), Some(&[Point::new(10, 10)][..]));
}

#[test]
fn test_symbol_candidates_for_missing_values() {
    let mut locator = boxed_locator(100, 100);
    let data = vec![1.0, f32::NAN, f32::NAN, 4.0];
    let projection = GridProjection::new(0.0, 0.0, 10.0, 10.0);
    let ranges = [SymbolRange::new(None, None)];

    let added =
        add_symbol_candidates(&mut locator, 20, &data, 2, 2, &ranges, &projection).unwrap();
    assert_eq!(added, 2);
    assert_eq!(
        locator.coordinates(20, f32::NAN),
        Some(&[Point::new(10, 0), Point::new(0, 10)][..])
    );
}

#[test]
fn test_grid_candidates_outside_box_are_not_counted() {
    let mut locator = boxed_locator(15, 15);
    let data = vec![1.0; 9];
    let projection = GridProjection::new(0.0, 0.0, 10.0, 10.0);

    let added = add_font_candidates(&mut locator, 3, &data, 3, 3, &[1.0], &projection).unwrap();
    assert_eq!(added, 4);
}

#[test]
fn test_grid_projection_fit_covers_image() {
    let projection = GridProjection::fit(41, 31, 801, 601);
    assert_eq!(projection.to_pixel(0, 0), (0.0, 0.0));
    assert_eq!(projection.to_pixel(40, 30), (800.0, 600.0));
    assert_eq!(projection.to_pixel(20, 15), (400.0, 300.0));
}
