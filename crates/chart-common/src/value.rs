//! Totally ordered contour values.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A contour or threshold value usable as an ordered map key.
///
/// Ordering follows IEEE 754 `totalOrder`. Build keys with [`ContourValue::new`]
/// or `From`, which fold `-0.0` into `0.0` so both label the same contour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContourValue(pub f32);

impl ContourValue {
    pub fn new(value: f32) -> Self {
        // -0.0 + 0.0 == +0.0
        Self(value + 0.0)
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl PartialEq for ContourValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ContourValue {}

impl PartialOrd for ContourValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ContourValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f32> for ContourValue {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ContourValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
