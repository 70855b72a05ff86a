use serde::Serialize;
use std::env;
use std::path::Path;
use std::time::Instant;
use vision_module::config::load_config;
use vision_module::host::sim::{CollectOutput, StdoutSerial, StillInput};
use vision_module::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use vision_module::{EdgeDetect, Module};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunSummary {
    frames: usize,
    total_ms: f64,
    avg_ms_per_frame: f64,
    final_frame_count: u64,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: module_demo <config.json>".to_string())?;
    let config = load_config(Path::new(&config_path))?;

    let mut input = match &config.input {
        Some(path) => StillInput::new(load_rgb_image(path)?),
        None => StillInput::ramp(640, 480),
    };
    let mut module = EdgeDetect::with_params(config.filter);
    let mut output = CollectOutput::default();
    let mut serial = StdoutSerial;

    let run_start = Instant::now();
    for _ in 0..config.frames {
        if config.headless {
            module.process_no_usb(&mut input, &mut serial);
        } else {
            module.process(&mut input, &mut output, &mut serial);
        }
    }
    let total_ms = run_start.elapsed().as_secs_f64() * 1000.0;

    let summary = RunSummary {
        frames: config.frames,
        total_ms,
        avg_ms_per_frame: if config.frames > 0 {
            total_ms / config.frames as f64
        } else {
            0.0
        },
        final_frame_count: module.frame_count(),
    };
    println!(
        "processed {} frames in {:.1} ms ({:.3} ms/frame)",
        summary.frames, summary.total_ms, summary.avg_ms_per_frame
    );

    if let Some(path) = &config.output_png {
        match output.last() {
            Some(frame) => {
                save_rgb_image(frame, path)?;
                println!("Output frame written to {}", path.display());
            }
            None => println!("No output frame produced (headless run?)"),
        }
    }

    if let Some(path) = &config.summary_json {
        write_json_file(path, &summary)?;
        println!("Run summary written to {}", path.display());
    }

    Ok(())
}
