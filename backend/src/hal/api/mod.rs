mod buffer;
mod fft;
mod module;

pub use buffer::*;
pub use fft::*;
pub use module::*;
