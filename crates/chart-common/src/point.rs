//! Screen-space pixel coordinates.

use serde::{Deserialize, Serialize};

/// A pixel position in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snap a projected position to the nearest pixel.
    ///
    /// Halfway cases round away from zero, matching how path vertices are
    /// snapped before they are offered as label candidates.
    pub fn from_rounded(x: f64, y: f64) -> Self {
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = f64::from(b.x) - f64::from(a.x);
    let dy = f64::from(b.y) - f64::from(a.y);
    (dx * dx + dy * dy).sqrt()
}

/// Minimum distance from a point to any point in a collection.
///
/// Returns `None` for an empty collection.
pub fn min_distance(point: Point, others: &[Point]) -> Option<f64> {
    others
        .iter()
        .map(|other| distance(point, *other))
        .min_by(|a, b| a.total_cmp(b))
}
