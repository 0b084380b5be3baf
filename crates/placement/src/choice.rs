//! Candidate choice policies shared by the locators.
//!
//! Both functions return the index of the winning candidate. Ties keep the
//! earliest candidate, so the result only depends on insertion order.

use chart_common::point::min_distance;
use chart_common::{PixelBox, Point};

/// Choose the candidate closest to any of the previous frame's points.
///
/// Returns `None` if there are no candidates or no previous points.
pub fn closest_to_previous(candidates: &[Point], previous: &[Point]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let Some(dist) = min_distance(*candidate, previous) else {
            continue;
        };
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((index, dist)),
        }
    }
    best.map(|(index, _)| index)
}

/// Choose the candidate closest to the bounding box border.
///
/// Without a bounding box the first candidate wins.
pub fn closest_to_border(candidates: &[Point], bbox: Option<&PixelBox>) -> Option<usize> {
    if candidates.is_empty() {
        return None;
    }
    let Some(bbox) = bbox else {
        return Some(0);
    };

    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let dist = bbox.border_distance(*candidate);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((index, dist)),
        }
    }
    best.map(|(index, _)| index)
}
