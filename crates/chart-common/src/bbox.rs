//! Pixel bounding boxes used to filter placement candidates.

use serde::{Deserialize, Serialize};

use crate::error::{LocatorError, LocatorResult};
use crate::point::Point;

/// A half-open pixel rectangle `[x1, x2) x [y1, y2)`.
///
/// Normally this is the image area minus a safety margin, so that label
/// text centred on an accepted point is not clipped by the image border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl PixelBox {
    /// Create a new box. Empty or inverted boxes are rejected.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> LocatorResult<Self> {
        if x2 <= x1 || y2 <= y1 {
            return Err(LocatorError::InvalidBoundingBox { x1, y1, x2, y2 });
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Box covering an image of the given size.
    pub fn from_image_size(width: u32, height: u32) -> LocatorResult<Self> {
        Self::new(0, 0, saturating_i32(width), saturating_i32(height))
    }

    pub fn width(&self) -> i64 {
        i64::from(self.x2) - i64::from(self.x1)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.y2) - i64::from(self.y1)
    }

    /// Check if a point lies inside the box (upper edges excluded).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x1 && point.x < self.x2 && point.y >= self.y1 && point.y < self.y2
    }

    /// Distance from a point to the nearest of the four box edges.
    pub fn border_distance(&self, point: Point) -> f64 {
        let gap = |a: i32, b: i32| (i64::from(a) - i64::from(b)).abs();
        let xdist = gap(point.x, self.x1).min(gap(point.x, self.x2));
        let ydist = gap(point.y, self.y1).min(gap(point.y, self.y2));
        xdist.min(ydist) as f64
    }

    /// Move every edge inwards by the given margins.
    pub fn shrink(&self, dx: i32, dy: i32) -> LocatorResult<Self> {
        self.offset(-i64::from(dx), -i64::from(dy))
    }

    /// Move every edge outwards by the given margins.
    pub fn expand(&self, dx: i32, dy: i32) -> LocatorResult<Self> {
        self.offset(i64::from(dx), i64::from(dy))
    }

    /// Move every edge outwards by `dx`, `dy`; edges leaving the `i32` range are rejected.
    fn offset(&self, dx: i64, dy: i64) -> LocatorResult<Self> {
        let edges = (
            i32::try_from(i64::from(self.x1) - dx),
            i32::try_from(i64::from(self.y1) - dy),
            i32::try_from(i64::from(self.x2) + dx),
            i32::try_from(i64::from(self.y2) + dy),
        );
        match edges {
            (Ok(x1), Ok(y1), Ok(x2), Ok(y2)) => Self::new(x1, y1, x2, y2),
            _ => Err(LocatorError::InvalidBoundingBox {
                x1: self.x1,
                y1: self.y1,
                x2: self.x2,
                y2: self.y2,
            }),
        }
    }
}

fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
