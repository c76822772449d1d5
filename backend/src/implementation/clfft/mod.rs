//! Native GPU backend over the clFFT-based transform library. Requires
//! the native library at link time, so the whole backend sits behind the
//! `clfft` feature.

mod buffer;
mod fft;
mod module;

pub use module::ClFft;
