//! Placeholder image transform: a 5×5 Laplacian edge filter.
//!
//! This is the part of the module a real algorithm replaces. The filter
//! convolves each channel with a 5×5 Laplacian kernel, scales the response
//! and offsets it by a mid-gray bias so that flat regions render gray and
//! edges deviate towards black/white. Borders are handled by clamping
//! indices (replicate).
//!
//! Output dimensions always equal input dimensions; the operation is
//! deterministic. Rows are processed in parallel.

use crate::image::RgbFrame;
use rayon::prelude::*;
use serde::Deserialize;

type Kernel5 = [[f32; 5]; 5];

const LAPLACIAN_KERNEL: Kernel5 = [
    [0.0, 0.0, 1.0, 0.0, 0.0],
    [0.0, 1.0, 2.0, 1.0, 0.0],
    [1.0, 2.0, -16.0, 2.0, 1.0],
    [0.0, 1.0, 2.0, 1.0, 0.0],
    [0.0, 0.0, 1.0, 0.0, 0.0],
];

/// Response scaling of the placeholder filter.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterParams {
    /// Multiplier applied to the raw kernel response.
    pub scale: f32,
    /// Offset added after scaling; flat regions map to this value.
    pub bias: f32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            scale: 0.25,
            bias: 127.0,
        }
    }
}

/// Apply the Laplacian placeholder to every channel of `src`.
pub fn laplacian(src: &RgbFrame, params: FilterParams) -> RgbFrame {
    let w = src.w;
    let h = src.h;
    let mut out = RgbFrame::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    out.data
        .par_chunks_mut(w * 3)
        .enumerate()
        .for_each(|(y, out_row)| {
            let rows: [&[u8]; 5] =
                std::array::from_fn(|k| src.row((y + k).saturating_sub(2).min(h - 1)));
            for x in 0..w {
                let x_idx: [usize; 5] =
                    std::array::from_fn(|k| (x + k).saturating_sub(2).min(w - 1));
                for c in 0..3 {
                    let mut sum = 0.0f32;
                    for (krow, row) in LAPLACIAN_KERNEL.iter().zip(rows.iter()) {
                        for (tap, &xx) in krow.iter().zip(x_idx.iter()) {
                            if *tap != 0.0 {
                                sum += tap * f32::from(row[xx * 3 + c]);
                            }
                        }
                    }
                    let v = (sum * params.scale + params.bias).clamp(0.0, 255.0);
                    out_row[x * 3 + c] = v as u8;
                }
            }
        });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_frame(w: usize, h: usize, v: u8) -> RgbFrame {
        RgbFrame::from_raw(w, h, vec![v; w * h * 3])
    }

    fn step_frame(w: usize, h: usize, split_x: usize) -> RgbFrame {
        let mut frame = RgbFrame::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let v = if x < split_x { 0 } else { 255 };
                frame.set(x, y, [v, v, v]);
            }
        }
        frame
    }

    #[test]
    fn flat_input_maps_to_bias() {
        let params = FilterParams::default();
        let out = laplacian(&flat_frame(16, 12, 50), params);
        assert_eq!(out.w, 16);
        assert_eq!(out.h, 12);
        assert!(
            out.data.iter().all(|&v| v == params.bias as u8),
            "kernel must sum to zero on flat input"
        );
    }

    #[test]
    fn step_edge_produces_response() {
        let params = FilterParams::default();
        let out = laplacian(&step_frame(32, 8, 16), params);
        let bias = params.bias as u8;
        let at_edge = out.get(15, 4)[0];
        let far_left = out.get(3, 4)[0];
        assert_ne!(at_edge, bias, "expected a response at the step edge");
        assert_eq!(far_left, bias, "flat region away from the edge must stay at bias");
    }

    #[test]
    fn dimensions_follow_input() {
        let out = laplacian(&flat_frame(7, 3, 0), FilterParams::default());
        assert_eq!((out.w, out.h), (7, 3));
        assert_eq!(out.data.len(), 7 * 3 * 3);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let out = laplacian(&RgbFrame::new(0, 0), FilterParams::default());
        assert_eq!((out.w, out.h), (0, 0));
        assert!(out.data.is_empty());
    }
}
