//! Backend-agnostic test bodies. Each concrete backend instantiates these
//! from its own `test` module, so every implementation is held to the same
//! capability contracts.

pub mod buffer;
pub mod fft;
