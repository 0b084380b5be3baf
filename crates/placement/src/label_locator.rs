//! Placement of contour labels, contour fonts and contour symbols.
//!
//! The [`LabelLocator`] collects candidate pixel positions for every
//! (parameter, contour value) pair of a frame and picks one position per
//! pair so that
//!
//! - every position is inside the bounding box (checked when added),
//! - accepted positions keep the configured minimum distances to each other,
//!   depending on whether they share the value, only the parameter, or
//!   nothing at all,
//! - a pair stays close to where it was drawn in the previous frame, or
//!   hugs the bounding box border when it is new.
//!
//! Selection is greedy: choose the best candidate of a pair, then remove
//! every remaining candidate of every pair that is too close to it, and
//! repeat until no candidates are left.
//!
//! All settings must be made before any candidates are added. The bounding
//! box in particular filters candidates as they arrive, so changing it later
//! would leave stale candidates behind.

use std::collections::BTreeMap;

use chart_common::{
    distance, ContourValue, LocatorError, LocatorResult, PixelBox, Point, NO_PARAMETER,
};
use tracing::{debug, trace, warn};

use crate::choice::{closest_to_border, closest_to_previous};

/// Coordinates stored for one contour value.
pub type Coordinates = Vec<Point>;

/// Coordinates of one parameter, keyed by contour value.
pub type ContourCoordinates = BTreeMap<ContourValue, Coordinates>;

/// Coordinates of all parameters, keyed by parameter id.
pub type ParamCoordinates = BTreeMap<i32, ContourCoordinates>;

const DEFAULT_MIN_DISTANCE_TO_SAME_VALUE: f64 = 100.0;
const DEFAULT_MIN_DISTANCE_TO_DIFFERENT_VALUE: f64 = 50.0;
const DEFAULT_MIN_DISTANCE_TO_DIFFERENT_PARAMETER: f64 = 50.0;

/// Chooses well separated, frame-to-frame stable label positions.
#[derive(Debug, Clone)]
pub struct LabelLocator {
    bbox: Option<PixelBox>,
    min_distance_to_same_value: f64,
    min_distance_to_different_value: f64,
    min_distance_to_different_parameter: f64,
    active_parameter: i32,
    previous: ParamCoordinates,
    current: ParamCoordinates,
    /// Candidates dropped by the bounding box since the last frame roll
    discarded: usize,
}

impl Default for LabelLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelLocator {
    pub fn new() -> Self {
        Self {
            bbox: None,
            min_distance_to_same_value: DEFAULT_MIN_DISTANCE_TO_SAME_VALUE,
            min_distance_to_different_value: DEFAULT_MIN_DISTANCE_TO_DIFFERENT_VALUE,
            min_distance_to_different_parameter: DEFAULT_MIN_DISTANCE_TO_DIFFERENT_PARAMETER,
            active_parameter: NO_PARAMETER,
            previous: ParamCoordinates::new(),
            current: ParamCoordinates::new(),
            discarded: 0,
        }
    }

    /// True if neither the previous nor the current frame holds coordinates.
    pub fn is_empty(&self) -> bool {
        self.previous.is_empty() && self.current.is_empty()
    }

    /// Forget all label locations and the active parameter.
    ///
    /// Settings are kept, but become changeable again.
    pub fn clear(&mut self) {
        self.active_parameter = NO_PARAMETER;
        self.previous.clear();
        self.current.clear();
        self.discarded = 0;
    }

    /// Set the rectangle outside of which candidates are discarded.
    ///
    /// `x2` and `y2` are exclusive.
    pub fn bounding_box(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> LocatorResult<()> {
        self.ensure_unlocked("bounding box")?;
        self.bbox = Some(PixelBox::new(x1, y1, x2, y2)?);
        Ok(())
    }

    /// Set the minimum distance between labels of the same contour value.
    pub fn set_min_distance_to_same_value(&mut self, distance: f64) -> LocatorResult<()> {
        self.ensure_unlocked("minimum distances")?;
        self.min_distance_to_same_value = validate_distance("same value", distance)?;
        Ok(())
    }

    /// Set the minimum distance between labels of different values of one parameter.
    pub fn set_min_distance_to_different_value(&mut self, distance: f64) -> LocatorResult<()> {
        self.ensure_unlocked("minimum distances")?;
        self.min_distance_to_different_value = validate_distance("different value", distance)?;
        Ok(())
    }

    /// Set the minimum distance between labels of different parameters.
    pub fn set_min_distance_to_different_parameter(&mut self, distance: f64) -> LocatorResult<()> {
        self.ensure_unlocked("minimum distances")?;
        self.min_distance_to_different_parameter =
            validate_distance("different parameter", distance)?;
        Ok(())
    }

    /// Set the parameter under which subsequent candidates are stored.
    ///
    /// Id 0 is reserved for "no parameter"; use [`clear`](Self::clear) to
    /// reset the active parameter instead.
    pub fn parameter(&mut self, id: i32) -> LocatorResult<()> {
        if id == NO_PARAMETER {
            return Err(LocatorError::InvalidParameter(id));
        }
        self.active_parameter = id;
        Ok(())
    }

    /// Register a candidate position for the active parameter.
    ///
    /// Returns `Ok(false)` if the point was outside the bounding box and
    /// was silently dropped.
    pub fn add(&mut self, value: f32, x: i32, y: i32) -> LocatorResult<bool> {
        if self.active_parameter == NO_PARAMETER {
            return Err(LocatorError::NoActiveParameter);
        }

        let point = Point::new(x, y);
        if !self.inside(point) {
            trace!(
                param = self.active_parameter,
                value,
                x,
                y,
                "Discarded candidate outside bounding box"
            );
            self.discarded += 1;
            return Ok(false);
        }

        self.current
            .entry(self.active_parameter)
            .or_default()
            .entry(ContourValue::new(value))
            .or_default()
            .push(point);

        Ok(true)
    }

    /// Roll the current frame into the previous one and start a new frame.
    ///
    /// Must be called before candidates of a new frame are added.
    pub fn next_time(&mut self) {
        self.previous = std::mem::take(&mut self.current);
        self.discarded = 0;
    }

    /// Choose the final label locations of the current frame.
    ///
    /// All unaccepted candidates are discarded and the accepted positions
    /// become the current frame state, which is also returned.
    pub fn choose_labels(&mut self) -> LocatorResult<&ParamCoordinates> {
        let mut candidates = std::mem::take(&mut self.current);
        let mut choices = ParamCoordinates::new();

        debug!(
            parameters = candidates.len(),
            candidates = count_coordinates(&candidates),
            discarded = self.discarded,
            "Choosing label locations"
        );

        while let Some(param) = candidates.keys().next().copied() {
            let values: Vec<ContourValue> = candidates
                .get(&param)
                .map(|contours| contours.keys().copied().collect())
                .unwrap_or_default();

            for value in values {
                // Earlier choices may have removed every candidate of this value
                let Some(coords) = candidates
                    .get_mut(&param)
                    .and_then(|contours| contours.get_mut(&value))
                else {
                    continue;
                };
                if coords.is_empty() {
                    continue;
                }

                let index = choose_one(&self.previous, self.bbox.as_ref(), coords, param, value)
                    .ok_or_else(|| {
                        LocatorError::Internal(format!(
                            "no label candidate chosen for parameter {} value {}",
                            param, value
                        ))
                    })?;

                // The winner always leaves the candidate list, even with a
                // zero same-value distance, so the loop terminates
                let best = coords.remove(index);

                trace!(
                    param,
                    value = value.value(),
                    x = best.x,
                    y = best.y,
                    "Accepted label location"
                );

                choices
                    .entry(param)
                    .or_default()
                    .entry(value)
                    .or_default()
                    .push(best);

                self.remove_candidates(&mut candidates, best, param, value);
            }

            remove_empties(&mut candidates);
        }

        debug!(
            parameters = choices.len(),
            accepted = count_coordinates(&choices),
            "Chose label locations"
        );

        self.current = choices;
        Ok(&self.current)
    }

    /// Accepted (or, before choosing, candidate) positions of the current frame.
    pub fn current(&self) -> &ParamCoordinates {
        &self.current
    }

    /// Positions accepted in the previous frame.
    pub fn previous(&self) -> &ParamCoordinates {
        &self.previous
    }

    /// Positions of the current frame for one (parameter, value) pair.
    pub fn coordinates(&self, param: i32, value: f32) -> Option<&[Point]> {
        self.current
            .get(&param)
            .and_then(|contours| contours.get(&ContourValue::new(value)))
            .map(Vec::as_slice)
    }

    /// Number of candidates of the current frame dropped by the bounding box.
    pub fn discarded_count(&self) -> usize {
        self.discarded
    }

    /// Number of coordinates held for the current frame.
    pub fn candidate_count(&self) -> usize {
        count_coordinates(&self.current)
    }

    pub fn active_parameter(&self) -> Option<i32> {
        (self.active_parameter != NO_PARAMETER).then_some(self.active_parameter)
    }

    pub fn bbox(&self) -> Option<&PixelBox> {
        self.bbox.as_ref()
    }

    pub fn min_distance_to_same_value(&self) -> f64 {
        self.min_distance_to_same_value
    }

    pub fn min_distance_to_different_value(&self) -> f64 {
        self.min_distance_to_different_value
    }

    pub fn min_distance_to_different_parameter(&self) -> f64 {
        self.min_distance_to_different_parameter
    }

    fn inside(&self, point: Point) -> bool {
        self.bbox.map_or(true, |bbox| bbox.contains(point))
    }

    fn ensure_unlocked(&self, setting: &'static str) -> LocatorResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            warn!(
                setting,
                "Attempted to change label locator settings after adding coordinates"
            );
            Err(LocatorError::ConfigurationLocked(setting))
        }
    }

    /// Minimum distance between a candidate and an accepted point.
    fn required_distance(
        &self,
        param: i32,
        value: ContourValue,
        chosen_param: i32,
        chosen_value: ContourValue,
    ) -> f64 {
        if param != chosen_param {
            self.min_distance_to_different_parameter
        } else if value != chosen_value {
            self.min_distance_to_different_value
        } else {
            self.min_distance_to_same_value
        }
    }

    /// Remove every candidate too close to the chosen point.
    ///
    /// Empty lists are left in place; `remove_empties` sweeps them once the
    /// current pass over the parameter is done.
    fn remove_candidates(
        &self,
        candidates: &mut ParamCoordinates,
        chosen: Point,
        chosen_param: i32,
        chosen_value: ContourValue,
    ) {
        for (&param, contours) in candidates.iter_mut() {
            for (&value, coords) in contours.iter_mut() {
                let limit = self.required_distance(param, value, chosen_param, chosen_value);
                coords.retain(|point| distance(*point, chosen) >= limit);
            }
        }
    }
}

/// Pick the best candidate index for one (parameter, value) pair.
fn choose_one(
    previous: &ParamCoordinates,
    bbox: Option<&PixelBox>,
    candidates: &[Point],
    param: i32,
    value: ContourValue,
) -> Option<usize> {
    match previous.get(&param).and_then(|contours| contours.get(&value)) {
        Some(earlier) if !earlier.is_empty() => closest_to_previous(candidates, earlier),
        _ => closest_to_border(candidates, bbox),
    }
}

fn remove_empties(candidates: &mut ParamCoordinates) {
    candidates.retain(|_, contours| {
        contours.retain(|_, coords| !coords.is_empty());
        !contours.is_empty()
    });
}

fn count_coordinates(coordinates: &ParamCoordinates) -> usize {
    coordinates
        .values()
        .flat_map(|contours| contours.values())
        .map(Vec::len)
        .sum()
}

pub(crate) fn validate_distance(name: &'static str, value: f64) -> LocatorResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LocatorError::InvalidDistance { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let locator = LabelLocator::new();
        assert!(locator.is_empty());
        assert_eq!(locator.min_distance_to_same_value(), 100.0);
        assert_eq!(locator.min_distance_to_different_value(), 50.0);
        assert_eq!(locator.min_distance_to_different_parameter(), 50.0);
        assert_eq!(locator.active_parameter(), None);
        assert!(locator.bbox().is_none());
    }

    #[test]
    fn test_remove_empties() {
        let mut candidates = ParamCoordinates::new();
        candidates
            .entry(1)
            .or_default()
            .insert(ContourValue(1.0), vec![]);
        candidates
            .entry(2)
            .or_default()
            .insert(ContourValue(1.0), vec![Point::new(1, 1)]);
        candidates
            .entry(2)
            .or_default()
            .insert(ContourValue(2.0), vec![]);

        remove_empties(&mut candidates);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[&2].len(), 1);
    }

    #[test]
    fn test_required_distance() {
        let mut locator = LabelLocator::new();
        locator.set_min_distance_to_same_value(30.0).unwrap();
        locator.set_min_distance_to_different_value(20.0).unwrap();
        locator.set_min_distance_to_different_parameter(10.0).unwrap();

        let v1 = ContourValue(1.0);
        let v2 = ContourValue(2.0);
        assert_eq!(locator.required_distance(1, v1, 1, v1), 30.0);
        assert_eq!(locator.required_distance(1, v2, 1, v1), 20.0);
        assert_eq!(locator.required_distance(2, v1, 1, v1), 10.0);
    }

    #[test]
    fn test_validate_distance() {
        assert_eq!(validate_distance("x", 0.0), Ok(0.0));
        assert!(validate_distance("x", -1.0).is_err());
        assert!(validate_distance("x", f64::NAN).is_err());
        assert!(validate_distance("x", f64::INFINITY).is_err());
    }
}
