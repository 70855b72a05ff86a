mod common;

use common::synthetic::checkerboard_rgb;
use vision_module::host::sim::{CollectOutput, RecordingSerial, StillInput};
use vision_module::image::GrayFrame;
use vision_module::module::{ERR_UNSUPPORTED, GREETING};
use vision_module::{EdgeDetect, Module};

#[test]
fn three_frames_report_sequential_indices() {
    let mut module = EdgeDetect::new();
    let mut input = StillInput::new(checkerboard_rgb(64, 48, 8));
    let mut output = CollectOutput::default();
    let mut serial = RecordingSerial::default();

    for _ in 0..3 {
        module.process(&mut input, &mut output, &mut serial);
    }

    assert_eq!(module.frame_count(), 3);
    assert_eq!(output.sent(), 3, "exactly one output frame per call");
    assert_eq!(
        serial.lines(),
        &["DONE frame 0", "DONE frame 1", "DONE frame 2"],
        "exactly one serial line per frame, indices in order"
    );
}

#[test]
fn output_dimensions_match_input() {
    let mut module = EdgeDetect::new();
    let mut input = StillInput::new(checkerboard_rgb(97, 31, 5));
    let mut output = CollectOutput::default();
    let mut serial = RecordingSerial::default();

    module.process(&mut input, &mut output, &mut serial);

    let frame = output.last().expect("process must produce an output frame");
    assert_eq!((frame.w, frame.h), (97, 31));
}

#[test]
fn grayscale_capture_still_yields_color_output() {
    let gray_bytes: Vec<u8> = (0..64u8).cycle().take(40 * 30).collect();
    let gray = GrayFrame::new(40, 30, gray_bytes);
    let mut module = EdgeDetect::new();
    let mut input = StillInput::from_gray(&gray.as_view());
    let mut output = CollectOutput::default();
    let mut serial = RecordingSerial::default();

    module.process(&mut input, &mut output, &mut serial);

    let frame = output.last().unwrap();
    assert_eq!((frame.w, frame.h), (40, 30));
}

#[test]
fn headless_calls_advance_the_same_counter() {
    let mut module = EdgeDetect::new();
    let mut input = StillInput::new(checkerboard_rgb(32, 32, 4));
    let mut serial = RecordingSerial::default();

    let before = module.frame_count();
    for _ in 0..5 {
        module.process_no_usb(&mut input, &mut serial);
    }
    assert_eq!(module.frame_count(), before + 5);
    assert_eq!(serial.lines().len(), 5);
}

#[test]
fn hello_then_unknown_command() {
    let mut module = EdgeDetect::new();
    assert_eq!(module.parse_serial("hello"), GREETING);
    assert_eq!(module.parse_serial("bye"), ERR_UNSUPPORTED);
}

#[test]
fn greeting_survives_processing_history() {
    let mut module = EdgeDetect::new();
    let mut input = StillInput::new(checkerboard_rgb(32, 32, 4));
    let mut output = CollectOutput::default();
    let mut serial = RecordingSerial::default();

    for _ in 0..4 {
        module.process(&mut input, &mut output, &mut serial);
        assert_eq!(module.parse_serial("hello"), GREETING);
    }
}

#[test]
fn help_text_names_the_hello_command() {
    let module = EdgeDetect::new();
    let help = module.supported_commands();
    assert!(help.contains("hello"), "help text: {help}");
    // One command today, so no separator yet.
    assert!(!help.contains('\n'));
}
