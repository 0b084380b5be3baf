//! Label placement runner.
//!
//! Feeds candidate positions of an animation, frame by frame, through a
//! [`LocatorSet`](placement::LocatorSet) and reports the accepted positions.

pub mod frames;
pub mod run;

pub use frames::{AcceptedLabel, AcceptedMarker, Frame, FrameFile, FrameResult, ParamRef};
pub use run::{run_frame, run_frames};
