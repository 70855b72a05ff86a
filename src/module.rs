//! The host-callback surface and the skeleton module implementing it.
//!
//! The engine constructs one module at load time and then drives it: once per
//! captured frame through [`Module::process`] (streaming) or
//! [`Module::process_no_usb`] (headless), and once per received serial
//! command through [`Module::parse_serial`]. Invocations are strictly
//! sequential on one logical thread of control, so the module keeps plain
//! unsynchronized state.
//!
//! [`EdgeDetect`] is the skeleton: it runs the placeholder Laplacian filter,
//! burns a title and the measured frame rate into the output, reports one
//! serial status line per frame, and answers a single `hello` command.
//! Replace the filter call with a real algorithm to turn the skeleton into a
//! module worth shipping.

use crate::annotate::draw_label;
use crate::filter::{laplacian, FilterParams};
use crate::host::{FrameTimer, InputFrame, OutputFrame, SerialSink};
use log::{debug, info};

/// The fixed callback set the engine drives.
///
/// Frame and serial capabilities are borrowed per call and must not be
/// retained. The engine guarantees callbacks never run concurrently.
pub trait Module {
    /// Process one captured frame and send exactly one displayed frame.
    fn process(
        &mut self,
        inframe: &mut dyn InputFrame,
        outframe: &mut dyn OutputFrame,
        serial: &mut dyn SerialSink,
    );

    /// Process one captured frame with no display output.
    fn process_no_usb(&mut self, inframe: &mut dyn InputFrame, serial: &mut dyn SerialSink);

    /// Handle one serial command line and return the response text.
    fn parse_serial(&mut self, command: &str) -> String;

    /// Describe the commands this module understands, one per line.
    fn supported_commands(&self) -> String;
}

/// Title burned into the top-left corner of every displayed frame.
pub const TITLE: &str = "EdgeDetect demo";
/// Response to the `hello` serial command.
pub const GREETING: &str = "Hello from Rust!";
/// Response to any serial command the module does not understand.
pub const ERR_UNSUPPORTED: &str = "ERR Unsupported command";

const WHITE: [u8; 3] = [255, 255, 255];
const TITLE_POS: (usize, usize) = (3, 10);
const FPS_MARGIN_BOTTOM: usize = 13;

/// Skeleton vision module: Laplacian placeholder + overlay + serial echo.
pub struct EdgeDetect {
    timer: FrameTimer,
    frame: u64,
    params: FilterParams,
}

impl EdgeDetect {
    /// Construct the module with a fresh timer and the frame counter at 0.
    pub fn new() -> Self {
        Self::with_params(FilterParams::default())
    }

    /// Construct with explicit placeholder-filter parameters.
    pub fn with_params(params: FilterParams) -> Self {
        Self {
            timer: FrameTimer::new("processing timer"),
            frame: 0,
            params,
        }
    }

    /// Frames processed since construction.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    fn hello(&self) -> String {
        GREETING.to_string()
    }
}

impl Default for EdgeDetect {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for EdgeDetect {
    fn process(
        &mut self,
        inframe: &mut dyn InputFrame,
        outframe: &mut dyn OutputFrame,
        serial: &mut dyn SerialSink,
    ) {
        // Input conversion happens outside the timed section.
        let img = inframe.rgb();

        self.timer.start();

        // Replace this call with a real algorithm.
        let mut out = laplacian(&img, self.params);

        draw_label(&mut out, TITLE, TITLE_POS.0, TITLE_POS.1, WHITE);

        let fps = self.timer.stop().to_owned();
        let fps_y = out.h.saturating_sub(FPS_MARGIN_BOTTOM);
        draw_label(&mut out, &fps, 3, fps_y, WHITE);

        outframe.send(out);

        serial.send_line(&format!("DONE frame {}", self.frame));
        self.frame += 1;
    }

    fn process_no_usb(&mut self, inframe: &mut dyn InputFrame, serial: &mut dyn SerialSink) {
        let _img = inframe.rgb();

        self.timer.start();
        debug!("processing video frame {} (headless)", self.frame);
        let fps = self.timer.stop().to_owned();

        serial.send_line(&format!("DONE frame {} - {}", self.frame, fps));
        self.frame += 1;
    }

    fn parse_serial(&mut self, command: &str) -> String {
        info!("received serial command [{command}]");
        // Exact match only: case and whitespace are significant.
        match command {
            "hello" => self.hello(),
            _ => ERR_UNSUPPORTED.to_string(),
        }
    }

    fn supported_commands(&self) -> String {
        // \n-separated once more commands exist.
        "hello - print a friendly greeting".to_string()
    }
}
