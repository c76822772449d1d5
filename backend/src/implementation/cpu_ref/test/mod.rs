mod buffer_cpu_ref;
mod fft_cpu_ref;
