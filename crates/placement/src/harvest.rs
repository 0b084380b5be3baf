//! Candidate harvesting from contour paths and data grids.
//!
//! These helpers turn the output of the contouring and projection stages
//! into locator candidates:
//! - Contour labels from projected isoline paths
//! - Contour fonts from grid points with an exact value
//! - Contour symbols from grid points inside a value range
//! - Pressure markers from detected extrema

use std::collections::BTreeSet;

use chart_common::{ContourValue, LocatorResult, Point};
use serde::{Deserialize, Serialize};

use crate::extrema::Extremum;
use crate::extrema_locator::{ExtremaLocator, ExtremumKind};
use crate::label_locator::LabelLocator;

/// Maps grid indices to pixel coordinates.
pub trait PixelProjection {
    fn to_pixel(&self, i: usize, j: usize) -> (f64, f64);
}

/// Axis-aligned linear grid to pixel mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridProjection {
    pub origin_x: f64,
    pub origin_y: f64,
    pub step_x: f64,
    pub step_y: f64,
}

impl GridProjection {
    pub fn new(origin_x: f64, origin_y: f64, step_x: f64, step_y: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            step_x,
            step_y,
        }
    }

    /// Spread a `width` x `height` grid evenly over an image.
    pub fn fit(width: usize, height: usize, image_width: u32, image_height: u32) -> Self {
        let step = |cells: usize, pixels: u32| {
            if cells > 1 {
                f64::from(pixels.saturating_sub(1)) / (cells - 1) as f64
            } else {
                0.0
            }
        };
        Self::new(0.0, 0.0, step(width, image_width), step(height, image_height))
    }
}

impl PixelProjection for GridProjection {
    fn to_pixel(&self, i: usize, j: usize) -> (f64, f64) {
        (
            self.origin_x + i as f64 * self.step_x,
            self.origin_y + j as f64 * self.step_y,
        )
    }
}

/// One element of a projected contour path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathOp {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
}

/// Value range selecting grid points for a contour symbol.
///
/// An open bound is `None`. A range with both bounds open matches only
/// missing values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymbolRange {
    pub lo: Option<f32>,
    pub hi: Option<f32>,
}

impl SymbolRange {
    pub fn new(lo: Option<f32>, hi: Option<f32>) -> Self {
        Self { lo, hi }
    }

    /// Check if a value (`NaN` for missing) falls in the range `[lo, hi)`.
    pub fn contains(&self, value: f32) -> bool {
        if value.is_nan() {
            return self.lo.is_none() && self.hi.is_none();
        }
        match (self.lo, self.hi) {
            (None, None) => false,
            (Some(lo), _) if value < lo => false,
            (_, Some(hi)) if value >= hi => false,
            _ => true,
        }
    }
}

/// Register the vertices of a contour path as label candidates.
///
/// Only line-to vertices are used; a move-to starts a new sub-path and does
/// not lie on a drawn line segment end. Non-finite vertices are skipped.
/// Returns the number of candidates kept by the bounding box.
pub fn add_contour_path(
    locator: &mut LabelLocator,
    param: i32,
    value: f32,
    path: &[PathOp],
) -> LocatorResult<usize> {
    locator.parameter(param)?;

    let mut added = 0;
    for op in path {
        if let PathOp::LineTo { x, y } = *op {
            // Projection failures come out as NaN or infinite vertices
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            let point = Point::from_rounded(x, y);
            if locator.add(value, point.x, point.y)? {
                added += 1;
            }
        }
    }
    Ok(added)
}

/// Register grid points whose value is one of `values` as font candidates.
pub fn add_font_candidates<P: PixelProjection>(
    locator: &mut LabelLocator,
    param: i32,
    data: &[f32],
    width: usize,
    height: usize,
    values: &[f32],
    projection: &P,
) -> LocatorResult<usize> {
    locator.parameter(param)?;

    let wanted: BTreeSet<ContourValue> = values.iter().copied().map(ContourValue::new).collect();

    let mut added = 0;
    for (i, j, value) in grid_values(data, width, height) {
        if !wanted.contains(&ContourValue::new(value)) {
            continue;
        }
        let (x, y) = projection.to_pixel(i, j);
        let point = Point::from_rounded(x, y);
        if locator.add(value, point.x, point.y)? {
            added += 1;
        }
    }
    Ok(added)
}

/// Register grid points inside any of the ranges as symbol candidates.
///
/// Candidates are stored under the grid value itself. A point matching
/// several ranges is registered once per range.
pub fn add_symbol_candidates<P: PixelProjection>(
    locator: &mut LabelLocator,
    param: i32,
    data: &[f32],
    width: usize,
    height: usize,
    ranges: &[SymbolRange],
    projection: &P,
) -> LocatorResult<usize> {
    locator.parameter(param)?;

    let mut added = 0;
    for range in ranges {
        for (i, j, value) in grid_values(data, width, height) {
            if !range.contains(value) {
                continue;
            }
            let (x, y) = projection.to_pixel(i, j);
            let point = Point::from_rounded(x, y);
            if locator.add(value, point.x, point.y)? {
                added += 1;
            }
        }
    }
    Ok(added)
}

/// Register detected extrema as pressure marker candidates.
pub fn add_extrema_candidates<P: PixelProjection>(
    locator: &mut ExtremaLocator,
    extrema: &[Extremum],
    projection: &P,
    want_high: bool,
    want_low: bool,
) -> usize {
    let mut added = 0;
    for extremum in extrema {
        let wanted = match extremum.kind {
            ExtremumKind::Maximum => want_high,
            ExtremumKind::Minimum => want_low,
        };
        if !wanted {
            continue;
        }
        let (x, y) = projection.to_pixel(extremum.i, extremum.j);
        let point = Point::from_rounded(x, y);
        if locator.add(extremum.kind, point.x, point.y) {
            added += 1;
        }
    }
    added
}

/// Iterate `(i, j, value)` over a row-major grid.
fn grid_values(
    data: &[f32],
    width: usize,
    height: usize,
) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
    let usable = if data.len() == width * height { data } else { &data[..0] };
    usable
        .iter()
        .enumerate()
        .map(move |(index, &value)| (index % width, index / width, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_range() {
        let range = SymbolRange::new(Some(0.0), Some(10.0));
        assert!(range.contains(0.0));
        assert!(range.contains(9.99));
        assert!(!range.contains(10.0));
        assert!(!range.contains(-0.1));
        assert!(!range.contains(f32::NAN));

        let above = SymbolRange::new(Some(5.0), None);
        assert!(above.contains(1000.0));
        assert!(!above.contains(4.0));

        let missing = SymbolRange::new(None, None);
        assert!(missing.contains(f32::NAN));
        assert!(!missing.contains(1.0));
    }

    #[test]
    fn test_grid_projection_fit() {
        let projection = GridProjection::fit(11, 6, 101, 51);
        assert_eq!(projection.to_pixel(0, 0), (0.0, 0.0));
        assert_eq!(projection.to_pixel(10, 5), (100.0, 50.0));
    }

    #[test]
    fn test_grid_values_rejects_mismatched_grid() {
        let data = vec![1.0; 5];
        assert_eq!(grid_values(&data, 2, 2).count(), 0);
        assert_eq!(grid_values(&data, 5, 1).count(), 5);
    }

    #[test]
    fn test_path_op_serde() {
        let op: PathOp = serde_json::from_str(r#"{"op":"line_to","x":1.5,"y":2.0}"#).unwrap();
        assert_eq!(op, PathOp::LineTo { x: 1.5, y: 2.0 });
    }
}
