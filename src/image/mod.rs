pub mod gray;
pub mod io;
pub mod rgb;

pub use self::gray::{GrayFrame, GrayView};
pub use self::rgb::RgbFrame;
