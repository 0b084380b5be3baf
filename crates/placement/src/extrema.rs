//! Detection of pressure highs and lows on a data grid.
//!
//! A grid point is an extremum if every other value in a rectangular window
//! around it lies on the same side of it, and the values on the window rim
//! differ from the centre by at least a required gradient. Grids are
//! row-major `f32` slices with `NaN` marking missing values.

use serde::{Deserialize, Serialize};

use crate::extrema_locator::ExtremumKind;

/// Search window and gradient settings for extremum detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtremaSettings {
    /// Half width of the search window in grid cells
    pub dx: usize,
    /// Half height of the search window in grid cells
    pub dy: usize,
    /// Minimum change from the centre to the window rim
    pub min_gradient: f32,
}

impl Default for ExtremaSettings {
    fn default() -> Self {
        Self {
            dx: 7,
            dy: 7,
            min_gradient: 1.0,
        }
    }
}

/// An extremum found at grid index `(i, j)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extremum {
    pub i: usize,
    pub j: usize,
    pub kind: ExtremumKind,
    /// True if every other window value is strictly on one side
    pub strict: bool,
}

/// Classify the grid point `(i, j)`.
///
/// The window must fit inside the grid; points too close to the edge are
/// never extrema.
pub fn classify(
    data: &[f32],
    width: usize,
    height: usize,
    i: usize,
    j: usize,
    settings: &ExtremaSettings,
) -> Option<Extremum> {
    let (dx, dy) = (settings.dx, settings.dy);
    if data.len() != width * height || i < dx || j < dy || i + dx >= width || j + dy >= height {
        return None;
    }

    let centre = data[j * width + i];
    if centre.is_nan() {
        return None;
    }

    let mut smaller = 0usize;
    let mut bigger = 0usize;
    let mut rim_min = f32::INFINITY;
    let mut rim_max = f32::NEG_INFINITY;

    for y in (j - dy)..=(j + dy) {
        for x in (i - dx)..=(i + dx) {
            let value = data[y * width + x];
            if value.is_nan() {
                return None;
            }

            if x != i || y != j {
                if value < centre {
                    smaller += 1;
                } else if value > centre {
                    bigger += 1;
                }
            }

            if smaller > 0 && bigger > 0 {
                return None;
            }

            if x == i - dx || x == i + dx || y == j - dy || y == j + dy {
                rim_min = rim_min.min(value);
                rim_max = rim_max.max(value);
            }
        }
    }

    let change = (centre - rim_min).abs().min((centre - rim_max).abs());
    if change < settings.min_gradient {
        return None;
    }

    let compared = (2 * dx + 1) * (2 * dy + 1) - 1;
    let (kind, strict) = if smaller > 0 {
        (ExtremumKind::Maximum, smaller == compared)
    } else if bigger > 0 {
        (ExtremumKind::Minimum, bigger == compared)
    } else {
        return None;
    };

    Some(Extremum { i, j, kind, strict })
}

/// Find all extrema of a grid.
pub fn find_extrema(
    data: &[f32],
    width: usize,
    height: usize,
    settings: &ExtremaSettings,
) -> Vec<Extremum> {
    let (dx, dy) = (settings.dx, settings.dy);
    if data.len() != width * height || width <= 2 * dx || height <= 2 * dy {
        return vec![];
    }

    let mut extrema = Vec::new();
    for j in dy..(height - dy) {
        for i in dx..(width - dx) {
            if let Some(extremum) = classify(data, width, height, i, j, settings) {
                extrema.push(extremum);
            }
        }
    }

    tracing::debug!(
        width,
        height,
        found = extrema.len(),
        "Searched pressure extrema"
    );

    extrema
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_settings() -> ExtremaSettings {
        ExtremaSettings {
            dx: 1,
            dy: 1,
            min_gradient: 1.0,
        }
    }

    #[test]
    fn test_strict_maximum() {
        #[rustfmt::skip]
        let data = vec![
            0.0, 0.0, 0.0,
            0.0, 5.0, 0.0,
            0.0, 0.0, 0.0,
        ];
        let extremum = classify(&data, 3, 3, 1, 1, &small_settings()).unwrap();
        assert_eq!(extremum.kind, ExtremumKind::Maximum);
        assert!(extremum.strict);
    }

    #[test]
    fn test_weak_minimum() {
        #[rustfmt::skip]
        let data = vec![
            9.0, 9.0, 9.0,
            9.0, 2.0, 2.0,
            9.0, 9.0, 9.0,
        ];
        let extremum = classify(&data, 3, 3, 1, 1, &small_settings());
        // The rim still contains the centre value, so the gradient is zero
        assert_eq!(extremum, None);

        #[rustfmt::skip]

        let data = vec![
            9.0, 9.0, 9.0, 9.0, 9.0,
            9.0, 4.0, 4.0, 4.0, 9.0,
            9.0, 4.0, 2.0, 2.0, 9.0,
            9.0, 4.0, 4.0, 4.0, 9.0,
            9.0, 9.0, 9.0, 9.0, 9.0,
        ];
        let settings = ExtremaSettings {
            dx: 2,
            dy: 2,
            min_gradient: 1.0,
        };
        let extremum = classify(&data, 5, 5, 2, 2, &settings).unwrap();
        assert_eq!(extremum.kind, ExtremumKind::Minimum);
        assert!(!extremum.strict);
    }

    #[test]
    fn test_saddle_is_not_extremum() {
        #[rustfmt::skip]
        let data = vec![
            0.0, 9.0, 0.0,
            9.0, 5.0, 9.0,
            0.0, 9.0, 0.0,
        ];
        assert_eq!(classify(&data, 3, 3, 1, 1, &small_settings()), None);
    }

    #[test]
    fn test_missing_value_blocks_detection() {
        #[rustfmt::skip]
        let data = vec![
            0.0, 0.0, 0.0,
            0.0, 5.0, f32::NAN,
            0.0, 0.0, 0.0,
        ];
        assert_eq!(classify(&data, 3, 3, 1, 1, &small_settings()), None);
    }

    #[test]
    fn test_gradient_threshold() {
        #[rustfmt::skip]
        let data = vec![
            0.0, 0.0, 0.0,
            0.0, 0.5, 0.0,
            0.0, 0.0, 0.0,
        ];
        assert_eq!(classify(&data, 3, 3, 1, 1, &small_settings()), None);
    }

    #[test]
    fn test_edge_points_are_skipped() {
        let data = vec![5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        assert_eq!(classify(&data, 3, 3, 0, 0, &small_settings()), None);
        assert!(find_extrema(&data, 3, 3, &small_settings()).is_empty());
    }

    #[test]
    fn test_find_extrema_grid_too_small() {
        let data = vec![0.0; 4];
        assert!(find_extrema(&data, 2, 2, &small_settings()).is_empty());
    }
}
