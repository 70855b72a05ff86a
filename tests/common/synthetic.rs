use vision_module::image::RgbFrame;

/// Generates a simple high-contrast checkerboard frame.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> RgbFrame {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut frame = RgbFrame::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            frame.set(x, y, [val, val, val]);
        }
    }
    frame
}
