//! In-process stand-ins for the engine.
//!
//! These implement the [`host`](crate::host) capability traits without any
//! hardware: a still image replayed as the capture source, a collecting
//! output frame, and serial sinks that record or print. The demo binary and
//! the integration tests drive the module through these.

use super::{InputFrame, OutputFrame, SerialSink};
use crate::image::{GrayFrame, GrayView, RgbFrame};

/// Capture source replaying one fixed frame forever.
pub struct StillInput {
    frame: RgbFrame,
}

impl StillInput {
    /// Replay the given frame.
    pub fn new(frame: RgbFrame) -> Self {
        Self { frame }
    }

    /// Replay a grayscale view expanded to RGB.
    pub fn from_gray(gray: &GrayView<'_>) -> Self {
        Self::new(RgbFrame::from_gray(gray))
    }

    /// Replay a synthetic horizontal intensity ramp, useful when no capture
    /// hardware or test asset is available.
    pub fn ramp(w: usize, h: usize) -> Self {
        let mut frame = RgbFrame::new(w, h);
        for y in 0..h {
            let row = frame.row_mut(y);
            for (x, px) in row.chunks_exact_mut(3).enumerate() {
                let v = if w > 1 {
                    (x * 255 / (w - 1)) as u8
                } else {
                    0
                };
                px.copy_from_slice(&[v, v, v]);
            }
        }
        Self::new(frame)
    }
}

impl InputFrame for StillInput {
    fn rgb(&mut self) -> RgbFrame {
        self.frame.clone()
    }

    fn gray(&mut self) -> GrayFrame {
        self.frame.to_gray()
    }
}

/// Output frame keeping the most recent processed frame.
#[derive(Default)]
pub struct CollectOutput {
    last: Option<RgbFrame>,
    sent: usize,
}

impl CollectOutput {
    /// Most recently sent frame, if any.
    pub fn last(&self) -> Option<&RgbFrame> {
        self.last.as_ref()
    }

    /// Number of frames sent so far.
    pub fn sent(&self) -> usize {
        self.sent
    }
}

impl OutputFrame for CollectOutput {
    fn send(&mut self, frame: RgbFrame) {
        self.last = Some(frame);
        self.sent += 1;
    }
}

/// Serial sink recording every line in order.
#[derive(Default)]
pub struct RecordingSerial {
    lines: Vec<String>,
}

impl RecordingSerial {
    /// All lines received so far, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl SerialSink for RecordingSerial {
    fn send_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Serial sink printing each line to stdout with a `serial>` prefix.
#[derive(Default)]
pub struct StdoutSerial;

impl SerialSink for StdoutSerial {
    fn send_line(&mut self, line: &str) {
        println!("serial> {line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn still_input_replays_identical_frames() {
        let mut input = StillInput::ramp(8, 4);
        let a = input.rgb();
        let b = input.rgb();
        assert_eq!(a, b);
        assert_eq!(a.w, 8);
        assert_eq!(a.h, 4);
    }

    #[test]
    fn ramp_spans_full_intensity_range() {
        let mut input = StillInput::ramp(16, 2);
        let frame = input.rgb();
        assert_eq!(frame.get(0, 0), [0, 0, 0]);
        assert_eq!(frame.get(15, 0), [255, 255, 255]);
    }

    #[test]
    fn gray_capture_matches_achromatic_input() {
        let mut input = StillInput::ramp(16, 2);
        let rgb = input.rgb();
        let gray = input.gray();
        for x in 0..16 {
            // R == G == B on the ramp, so luma equals any channel.
            assert_eq!(gray.as_view().get(x, 0), rgb.get(x, 0)[0]);
        }
    }

    #[test]
    fn collect_output_counts_frames() {
        let mut out = CollectOutput::default();
        assert!(out.last().is_none());
        out.send(RgbFrame::new(2, 2));
        out.send(RgbFrame::new(3, 1));
        assert_eq!(out.sent(), 2);
        assert_eq!(out.last().unwrap().w, 3);
    }
}
