//! Owned interleaved 8-bit RGB frame in row-major layout.
//!
//! This is the working format of the processing callbacks: the input frame is
//! converted to RGB on entry, the placeholder filter and the annotations
//! operate on it, and the result is handed to the output frame unchanged.

use super::{GrayFrame, GrayView};

/// Owned interleaved RGB buffer (row stride == `w * 3` bytes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbFrame {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage, `w * h * 3` bytes in row-major R,G,B order
    pub data: Vec<u8>,
}

impl RgbFrame {
    /// Construct a zero-initialized (black) frame of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0u8; w * h * 3],
        }
    }

    /// Construct from raw interleaved bytes; `data.len()` must equal `w * h * 3`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), w * h * 3, "rgb buffer size mismatch");
        Self { w, h, data }
    }

    /// Expand a grayscale view by replicating the intensity across channels.
    pub fn from_gray(gray: &GrayView<'_>) -> Self {
        let mut out = Self::new(gray.w, gray.h);
        for y in 0..gray.h {
            let src = gray.row(y);
            let dst = out.row_mut(y);
            for (px, &v) in dst.chunks_exact_mut(3).zip(src.iter()) {
                px[0] = v;
                px[1] = v;
                px[2] = v;
            }
        }
        out
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * 3
    }

    /// Get the pixel at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = self.idx(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Set the pixel at (x, y).
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: [u8; 3]) {
        let i = self.idx(x, y);
        self.data[i..i + 3].copy_from_slice(&px);
    }

    /// Collapse to 8-bit grayscale using integer Rec.601 luma weights.
    pub fn to_gray(&self) -> GrayFrame {
        let mut data = Vec::with_capacity(self.w * self.h);
        for px in self.data.chunks_exact(3) {
            let luma =
                (77 * u32::from(px[0]) + 150 * u32::from(px[1]) + 29 * u32::from(px[2])) >> 8;
            data.push(luma as u8);
        }
        GrayFrame::new(self.w, self.h, data)
    }

    /// Borrow row `y` as `w * 3` interleaved bytes.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w * 3;
        &self.data[start..start + self.w * 3]
    }

    /// Mutably borrow row `y` as `w * 3` interleaved bytes.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.w * 3;
        let end = start + self.w * 3;
        &mut self.data[start..end]
    }
}
