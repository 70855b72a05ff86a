#![doc = include_str!("../README.md")]

pub mod annotate;
pub mod config;
pub mod filter;
pub mod host;
pub mod image;
pub mod module;

// --- High-level re-exports -------------------------------------------------

pub use crate::filter::FilterParams;
pub use crate::host::FrameTimer;
pub use crate::image::RgbFrame;
pub use crate::module::{EdgeDetect, Module};

/// Small prelude for quick experiments.
///
/// ```
/// use vision_module::prelude::*;
///
/// let mut module = EdgeDetect::new();
/// let mut input = StillInput::ramp(32, 24);
/// let mut serial = RecordingSerial::default();
///
/// module.process_no_usb(&mut input, &mut serial);
/// assert_eq!(module.frame_count(), 1);
/// ```
pub mod prelude {
    pub use crate::host::sim::{CollectOutput, RecordingSerial, StdoutSerial, StillInput};
    pub use crate::host::{FrameTimer, InputFrame, OutputFrame, SerialSink};
    pub use crate::image::{GrayFrame, GrayView, RgbFrame};
    pub use crate::module::{EdgeDetect, Module};
}
