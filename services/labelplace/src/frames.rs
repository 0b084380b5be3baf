//! JSON frame file and result formats.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use placement::harvest::{GridProjection, PathOp};
use placement::{meta_parameter_id, ExtremaCoordinates, ExtremumKind, ParamCoordinates};
use serde::{Deserialize, Serialize};

/// An animation to place labels for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameFile {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    #[serde(default)]
    pub frames: Vec<Frame>,
}

impl FrameFile {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse frame file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read frame file {}", path.display()))?;
        Self::from_json_str(&content)
    }
}

/// Candidates of one animation frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Frame {
    /// Contour value label candidates
    pub labels: Vec<Candidate>,
    /// Projected isolines whose vertices are label candidates
    pub contours: Vec<ContourPath>,
    /// Contour font candidates
    pub symbols: Vec<Candidate>,
    /// Contour symbol image candidates
    pub images: Vec<Candidate>,
    /// Pressure field searched for highs and lows
    pub pressure: Option<PressureGrid>,
    /// Marker candidates given directly
    pub extrema: Vec<MarkerCandidate>,
}

/// A parameter given by id or by the name of a derived quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamRef {
    Id(i32),
    Name(String),
}

impl ParamRef {
    /// Resolve to the numeric parameter id.
    pub fn id(&self) -> Result<i32> {
        match self {
            ParamRef::Id(id) => Ok(*id),
            ParamRef::Name(name) => meta_parameter_id(name)
                .ok_or_else(|| anyhow!("Unknown parameter name '{}'", name)),
        }
    }
}

impl From<i32> for ParamRef {
    fn from(id: i32) -> Self {
        ParamRef::Id(id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub param: ParamRef,
    pub value: f32,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourPath {
    pub param: ParamRef,
    pub value: f32,
    pub path: Vec<PathOp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerCandidate {
    pub kind: ExtremumKind,
    pub x: i32,
    pub y: i32,
}

/// Row-major pressure grid. `null` values are missing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureGrid {
    pub width: usize,
    pub height: usize,
    pub values: Vec<Option<f32>>,
    /// Grid to pixel mapping; the grid is spread over the image if absent
    #[serde(default)]
    pub projection: Option<GridProjection>,
}

impl PressureGrid {
    /// Values with missing data as `NaN`.
    pub fn data(&self) -> Vec<f32> {
        self.values
            .iter()
            .map(|value| value.unwrap_or(f32::NAN))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcceptedLabel {
    pub param: i32,
    pub value: f32,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedMarker {
    pub kind: ExtremumKind,
    pub x: i32,
    pub y: i32,
}

/// Accepted positions of one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameResult {
    pub frame: usize,
    pub labels: Vec<AcceptedLabel>,
    pub symbols: Vec<AcceptedLabel>,
    pub images: Vec<AcceptedLabel>,
    pub pressure: Vec<AcceptedMarker>,
}

pub(crate) fn flatten_labels(coordinates: &ParamCoordinates) -> Vec<AcceptedLabel> {
    let mut labels = Vec::new();
    for (&param, contours) in coordinates {
        for (value, points) in contours {
            for point in points {
                labels.push(AcceptedLabel {
                    param,
                    value: value.value(),
                    x: point.x,
                    y: point.y,
                });
            }
        }
    }
    labels
}

pub(crate) fn flatten_markers(coordinates: &ExtremaCoordinates) -> Vec<AcceptedMarker> {
    coordinates
        .iter()
        .flat_map(|(&kind, points)| {
            points.iter().map(move |point| AcceptedMarker {
                kind,
                x: point.x,
                y: point.y,
            })
        })
        .collect()
}
