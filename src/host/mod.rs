//! The engine boundary, modeled as small injected capabilities.
//!
//! The engine owns the capture pipeline, the USB video output and the serial
//! control channel. A module never talks to hardware; it receives these
//! capabilities per callback and borrows them only for the duration of the
//! call:
//!
//! - [`InputFrame`] – the next captured image, convertible to RGB.
//! - [`OutputFrame`] – the sink for the one displayed frame per `process`.
//! - [`SerialSink`] – the outbound half of the serial channel.
//! - [`FrameTimer`] – start/stop frame-rate measurement.
//!
//! [`sim`] provides in-process stand-ins for all of these, used by the demo
//! binary and the integration tests.

pub mod sim;
pub mod timer;

pub use timer::FrameTimer;

use crate::image::{GrayFrame, RgbFrame};

/// One captured camera frame, owned by the engine.
pub trait InputFrame {
    /// The frame as interleaved 8-bit RGB. May block inside the engine until
    /// capture completes; the conversion is performed once per call.
    fn rgb(&mut self) -> RgbFrame;

    /// The frame as 8-bit grayscale, for modules that do not need color.
    fn gray(&mut self) -> GrayFrame;
}

/// The display output for one processed frame.
pub trait OutputFrame {
    /// Hand the finished frame to the engine for video output. Called exactly
    /// once per `process` invocation.
    fn send(&mut self, frame: RgbFrame);
}

/// Outbound serial channel supplied by the engine.
pub trait SerialSink {
    /// Emit one line of free-text status output.
    fn send_line(&mut self, line: &str);
}
