mod buffer;
mod fft;
mod module;
