//! Common types shared by the chart placement crates.

pub mod bbox;
pub mod error;
pub mod param;
pub mod point;
pub mod value;

pub use bbox::PixelBox;
pub use error::{LocatorError, LocatorResult};
pub use param::{meta_parameter_id, NO_PARAMETER};
pub use point::{distance, min_distance, Point};
pub use value::ContourValue;
