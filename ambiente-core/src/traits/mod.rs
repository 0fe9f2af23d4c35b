//! Hardware abstraction traits
//!
//! These traits define the interface between the panel logic and the
//! board-specific drivers. Async operations return `impl Future` so the
//! core stays executor-agnostic.

pub mod analog;
pub mod display;
pub mod matrix;
pub mod output;

pub use analog::{AnalogInput, Axis};
pub use display::{DisplayError, DisplayExt, DisplaySink};
pub use matrix::{MatrixSink, Rgb};
pub use output::{IntensityOutput, Tone, INTENSITY_MAX};
