//! Label and marker placement for weather chart rendering.
//!
//! The render driver registers many candidate pixel positions per frame and
//! the locators pick a well separated, temporally stable subset:
//! - Contour value labels, contour font glyphs and contour symbol images
//!   ([`LabelLocator`])
//! - High/low pressure markers ([`ExtremaLocator`])
//!
//! Candidate harvesting from contour paths and data grids lives in
//! [`harvest`], pressure extremum detection in [`extrema`].

pub mod choice;
pub mod commands;
pub mod config;
pub mod extrema;
pub mod extrema_locator;
pub mod harvest;
pub mod label_locator;
pub mod locators;

pub use chart_common::{
    distance, meta_parameter_id, ContourValue, LocatorError, LocatorResult, PixelBox, Point,
};
pub use commands::{apply_command, apply_script, CommandError};
pub use config::{ConfigError, PlacementConfig};
pub use extrema::{find_extrema, Extremum, ExtremaSettings};
pub use extrema_locator::{ExtremaCoordinates, ExtremaLocator, ExtremumKind};
pub use label_locator::{ContourCoordinates, Coordinates, LabelLocator, ParamCoordinates};
pub use locators::LocatorSet;
