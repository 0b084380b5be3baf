//! Test data generators for fields and placement candidates.
//!
//! These generators create predictable, verifiable patterns that can be used
//! across the test suite and benchmarks.

use chart_common::Point;

/// A pressure centre used to build synthetic pressure fields.
#[derive(Debug, Clone, Copy)]
pub struct PressureCentre {
    /// Column of the centre
    pub col: usize,
    /// Row of the centre
    pub row: usize,
    /// Pressure anomaly in hPa (positive for highs, negative for lows)
    pub amplitude: f32,
    /// Gaussian radius in grid cells
    pub radius: f32,
}

/// Creates a mean sea level pressure field in hPa.
///
/// The field is 1013 hPa plus one gaussian bump per centre, so each centre
/// is a well defined extremum when the centres are far enough apart.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `centres` - Highs and lows to superimpose
///
/// # Returns
///
/// A `Vec<f32>` in row-major order.
pub fn create_pressure_grid(width: usize, height: usize, centres: &[PressureCentre]) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let mut value = 1013.0f32;
            for centre in centres {
                let dx = col as f32 - centre.col as f32;
                let dy = row as f32 - centre.row as f32;
                let r2 = (dx * dx + dy * dy) / (centre.radius * centre.radius);
                value += centre.amplitude * (-r2).exp();
            }
            data.push(value);
        }
    }
    data
}

/// Creates a grid filled with a constant value.
pub fn create_constant_grid(width: usize, height: usize, value: f32) -> Vec<f32> {
    vec![value; width * height]
}

/// Creates a grid with NaN values at specified positions.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `nan_positions` - List of (col, row) positions that should be NaN
///
/// # Returns
///
/// A `Vec<f32>` with NaN at specified positions, zeros elsewhere.
pub fn create_grid_with_nans(
    width: usize,
    height: usize,
    nan_positions: &[(usize, usize)],
) -> Vec<f32> {
    let mut data = vec![0.0f32; width * height];
    for &(col, row) in nan_positions {
        if col < width && row < height {
            data[row * width + col] = f32::NAN;
        }
    }
    data
}

/// Creates candidate points along a circle, like the vertices of a closed
/// isoline around a pressure centre.
///
/// # Arguments
///
/// * `cx`, `cy` - Circle centre in pixels
/// * `radius` - Circle radius in pixels
/// * `count` - Number of vertices
pub fn create_ring_candidates(cx: f64, cy: f64, radius: f64, count: usize) -> Vec<Point> {
    (0..count)
        .map(|k| {
            let angle = k as f64 / count.max(1) as f64 * std::f64::consts::TAU;
            Point::from_rounded(cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

/// Creates candidate points along a horizontal line.
pub fn create_line_candidates(x0: i32, y: i32, step: i32, count: usize) -> Vec<Point> {
    (0..count as i32).map(|k| Point::new(x0 + k * step, y)).collect()
}

/// Creates deterministic pseudo-random candidates inside `[0, width) x [0, height)`.
///
/// Uses a simple hash-based approach for reproducibility.
pub fn create_scattered_candidates(width: u32, height: u32, count: usize, seed: u32) -> Vec<Point> {
    (0..count as u32)
        .map(|k| {
            let x = simple_hash(k, 0, seed) % width.max(1);
            let y = simple_hash(k, 1, seed) % height.max(1);
            Point::new(x as i32, y as i32)
        })
        .collect()
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}
