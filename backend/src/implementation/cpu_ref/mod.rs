//! Host reference backend. Device memory is plain aligned host memory and
//! the transform is rustfft, so every capability contract can be exercised
//! without a GPU. Allocation and release counters make leak checks cheap.

mod buffer;
mod fft;
mod module;

#[cfg(test)]
mod test;

pub use module::{CpuRef, allocation_count, live_buffer_count, release_count};
