//! Placement of high and low pressure markers.
//!
//! Works like [`LabelLocator`](crate::LabelLocator), but candidates are only
//! split into minima and maxima. Markers of the same kind keep one minimum
//! distance, markers of different kinds another.

use std::collections::BTreeMap;
use std::fmt;

use chart_common::{distance, LocatorError, LocatorResult, PixelBox, Point};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::choice::{closest_to_border, closest_to_previous};
use crate::label_locator::validate_distance;

/// Class of a pressure extremum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtremumKind {
    /// Low pressure centre
    Minimum,
    /// High pressure centre
    Maximum,
}

impl fmt::Display for ExtremumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtremumKind::Minimum => write!(f, "minimum"),
            ExtremumKind::Maximum => write!(f, "maximum"),
        }
    }
}

/// Marker coordinates keyed by extremum kind.
pub type ExtremaCoordinates = BTreeMap<ExtremumKind, Vec<Point>>;

const DEFAULT_MIN_DISTANCE_TO_SAME: f64 = 100.0;
const DEFAULT_MIN_DISTANCE_TO_DIFFERENT: f64 = 50.0;

/// Chooses well separated, frame-to-frame stable extremum marker positions.
#[derive(Debug, Clone)]
pub struct ExtremaLocator {
    bbox: Option<PixelBox>,
    min_distance_to_same: f64,
    min_distance_to_different: f64,
    previous: ExtremaCoordinates,
    current: ExtremaCoordinates,
}

impl Default for ExtremaLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtremaLocator {
    pub fn new() -> Self {
        Self {
            bbox: None,
            min_distance_to_same: DEFAULT_MIN_DISTANCE_TO_SAME,
            min_distance_to_different: DEFAULT_MIN_DISTANCE_TO_DIFFERENT,
            previous: ExtremaCoordinates::new(),
            current: ExtremaCoordinates::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.previous.is_empty() && self.current.is_empty()
    }

    pub fn clear(&mut self) {
        self.previous.clear();
        self.current.clear();
    }

    /// Set the rectangle outside of which candidates are discarded.
    pub fn bounding_box(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> LocatorResult<()> {
        self.ensure_unlocked("bounding box")?;
        self.bbox = Some(PixelBox::new(x1, y1, x2, y2)?);
        Ok(())
    }

    /// Set the minimum distance between markers of the same kind.
    pub fn set_min_distance_to_same(&mut self, distance: f64) -> LocatorResult<()> {
        self.ensure_unlocked("minimum distances")?;
        self.min_distance_to_same = validate_distance("same extremum", distance)?;
        Ok(())
    }

    /// Set the minimum distance between a minimum and a maximum marker.
    pub fn set_min_distance_to_different(&mut self, distance: f64) -> LocatorResult<()> {
        self.ensure_unlocked("minimum distances")?;
        self.min_distance_to_different = validate_distance("different extremum", distance)?;
        Ok(())
    }

    /// Register a candidate marker position.
    ///
    /// Returns `false` if the point was outside the bounding box.
    pub fn add(&mut self, kind: ExtremumKind, x: i32, y: i32) -> bool {
        let point = Point::new(x, y);
        if !self.bbox.map_or(true, |bbox| bbox.contains(point)) {
            return false;
        }
        self.current.entry(kind).or_default().push(point);
        true
    }

    pub fn next_time(&mut self) {
        self.previous = std::mem::take(&mut self.current);
    }

    /// Choose the final marker positions of the current frame.
    pub fn choose_coordinates(&mut self) -> LocatorResult<&ExtremaCoordinates> {
        let mut candidates = std::mem::take(&mut self.current);
        let mut choices = ExtremaCoordinates::new();

        debug!(
            minima = candidates.get(&ExtremumKind::Minimum).map_or(0, Vec::len),
            maxima = candidates.get(&ExtremumKind::Maximum).map_or(0, Vec::len),
            "Choosing extremum locations"
        );

        while !candidates.is_empty() {
            let kinds: Vec<ExtremumKind> = candidates.keys().copied().collect();

            for kind in kinds {
                let Some(coords) = candidates.get_mut(&kind) else {
                    continue;
                };
                if coords.is_empty() {
                    continue;
                }

                let index = match self.previous.get(&kind) {
                    Some(earlier) if !earlier.is_empty() => closest_to_previous(coords, earlier),
                    _ => closest_to_border(coords, self.bbox.as_ref()),
                }
                .ok_or_else(|| LocatorError::Internal(format!("no {} candidate chosen", kind)))?;

                let best = coords.remove(index);
                choices.entry(kind).or_default().push(best);

                for (&other, coords) in candidates.iter_mut() {
                    let limit = if other == kind {
                        self.min_distance_to_same
                    } else {
                        self.min_distance_to_different
                    };
                    coords.retain(|point| distance(*point, best) >= limit);
                }
            }

            candidates.retain(|_, coords| !coords.is_empty());
        }

        debug!(
            minima = choices.get(&ExtremumKind::Minimum).map_or(0, Vec::len),
            maxima = choices.get(&ExtremumKind::Maximum).map_or(0, Vec::len),
            "Chose extremum locations"
        );

        self.current = choices;
        Ok(&self.current)
    }

    pub fn current(&self) -> &ExtremaCoordinates {
        &self.current
    }

    pub fn previous(&self) -> &ExtremaCoordinates {
        &self.previous
    }

    pub fn bbox(&self) -> Option<&PixelBox> {
        self.bbox.as_ref()
    }

    pub fn min_distance_to_same(&self) -> f64 {
        self.min_distance_to_same
    }

    pub fn min_distance_to_different(&self) -> f64 {
        self.min_distance_to_different
    }

    fn ensure_unlocked(&self, setting: &'static str) -> LocatorResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            warn!(
                setting,
                "Attempted to change extrema locator settings after adding coordinates"
            );
            Err(LocatorError::ConfigurationLocked(setting))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ordering_and_display() {
        assert!(ExtremumKind::Minimum < ExtremumKind::Maximum);
        assert_eq!(ExtremumKind::Maximum.to_string(), "maximum");
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&ExtremumKind::Minimum).unwrap();
        assert_eq!(json, "\"minimum\"");
    }

    #[test]
    fn test_add_outside_box() {
        let mut locator = ExtremaLocator::new();
        locator.bounding_box(0, 0, 10, 10).unwrap();
        assert!(!locator.add(ExtremumKind::Maximum, 10, 5));
        assert!(locator.is_empty());
        assert!(locator.add(ExtremumKind::Maximum, 9, 5));
        assert!(!locator.is_empty());
    }
}
