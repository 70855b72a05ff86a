//! Frame-rate measurement with a windowed average.
//!
//! `FrameTimer` brackets the timed section of each processing callback with
//! [`start`](FrameTimer::start) / [`stop`](FrameTimer::stop). The
//! frames-per-second text returned by `stop` is refreshed once per reporting
//! window (default 100 frames) so the overlay stays readable instead of
//! flickering every frame; a per-window summary is logged at info level.

use std::time::Instant;

const DEFAULT_WINDOW: usize = 100;

/// Start/stop frame timer with a windowed frames-per-second average.
pub struct FrameTimer {
    name: String,
    window: usize,
    started: Option<Instant>,
    count: usize,
    sum_ms: f64,
    min_ms: f64,
    max_ms: f64,
    fps_text: String,
}

impl FrameTimer {
    /// Create a timer reporting under `name` with the default 100-frame window.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_window(name, DEFAULT_WINDOW)
    }

    /// Create a timer with an explicit reporting window (>= 1 frames).
    pub fn with_window(name: impl Into<String>, window: usize) -> Self {
        Self {
            name: name.into(),
            window: window.max(1),
            started: None,
            count: 0,
            sum_ms: 0.0,
            min_ms: f64::INFINITY,
            max_ms: 0.0,
            fps_text: "-- fps".to_string(),
        }
    }

    /// Begin timing one frame. A second `start` before `stop` restarts the
    /// measurement for the current frame.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// End timing one frame and return the current frames-per-second text.
    ///
    /// The text only changes once per reporting window. A `stop` without a
    /// matching `start` is ignored apart from a debug trace.
    pub fn stop(&mut self) -> &str {
        let Some(started) = self.started.take() else {
            log::debug!("{}: stop() without start(), ignored", self.name);
            return &self.fps_text;
        };
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        self.count += 1;
        self.sum_ms += elapsed_ms;
        self.min_ms = self.min_ms.min(elapsed_ms);
        self.max_ms = self.max_ms.max(elapsed_ms);

        if self.count >= self.window {
            let avg_ms = self.sum_ms / self.count as f64;
            let fps = if avg_ms > 0.0 { 1000.0 / avg_ms } else { 0.0 };
            self.fps_text = format!("{fps:.1} fps");
            log::info!(
                "{}: {:.3} ms/frame over {} frames ({}), min {:.3} max {:.3}",
                self.name,
                avg_ms,
                self.count,
                self.fps_text,
                self.min_ms,
                self.max_ms
            );
            self.count = 0;
            self.sum_ms = 0.0;
            self.min_ms = f64::INFINITY;
            self.max_ms = 0.0;
        }
        &self.fps_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_without_start_is_harmless() {
        let mut timer = FrameTimer::new("test timer");
        assert_eq!(timer.stop(), "-- fps");
    }

    #[test]
    fn fps_text_refreshes_after_one_window() {
        let mut timer = FrameTimer::with_window("test timer", 3);
        for _ in 0..2 {
            timer.start();
            assert_eq!(timer.stop(), "-- fps", "text must hold until the window closes");
        }
        timer.start();
        let text = timer.stop().to_owned();
        assert!(text.ends_with(" fps"), "unexpected fps text: {text}");
        assert_ne!(text, "-- fps");
    }

    #[test]
    fn window_resets_after_report() {
        let mut timer = FrameTimer::with_window("test timer", 2);
        for _ in 0..2 {
            timer.start();
            timer.stop();
        }
        let first = timer.stop().to_owned();
        // Next window starts fresh; text holds steady meanwhile.
        timer.start();
        assert_eq!(timer.stop(), first);
    }
}
