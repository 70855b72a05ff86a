//! Single-channel 8-bit buffers: a borrowed view and an owned frame.
//!
//! The engine hands captured frames to the module as borrowed views; the
//! module must not retain them past the callback. `GrayFrame` is the owned
//! counterpart used by the simulator and by I/O.

/// Borrowed 8-bit grayscale view with row stride.
#[derive(Clone, Debug)]
pub struct GrayView<'a> {
    pub w: usize,
    pub h: usize,
    /// Bytes between consecutive rows (>= `w`).
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> GrayView<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Owned 8-bit grayscale buffer (stride == width).
#[derive(Clone, Debug)]
pub struct GrayFrame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayFrame {
    /// Construct from raw bytes; `data.len()` must equal `width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), width * height, "gray buffer size mismatch");
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `GrayView`
    pub fn as_view(&self) -> GrayView<'_> {
        GrayView {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}
