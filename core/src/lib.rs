//! FFT-based linear convolution of 2D/3D images with a point-spread
//! function, orchestrated over device buffers supplied by a
//! `convfft-backend` module.

pub mod convolve;
pub mod dims;
pub mod normalize;
pub mod pad;


pub use convolve::{convolve, run_convolve};

use convfft_backend::hal::{
    api::{
        BufferAlloc, BufferCopy, BufferCopyRegion, BufferFill, FftDims, FftForward, FftInverse, FftVecMul,
    },
    layouts::Backend,
};

/// Everything a module must provide for one convolution request.
pub trait ConvolveOps<B: Backend>:
    BufferAlloc<B> + BufferCopy<B> + BufferFill<B> + BufferCopyRegion<B> + FftDims<B> + FftForward<B> + FftInverse<B> + FftVecMul<B>
{
}

impl<B: Backend, T> ConvolveOps<B> for T where
    T: BufferAlloc<B> + BufferCopy<B> + BufferFill<B> + BufferCopyRegion<B> + FftDims<B> + FftForward<B> + FftInverse<B> + FftVecMul<B>
{
}
