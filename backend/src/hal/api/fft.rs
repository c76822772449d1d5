use crate::{
    Result,
    hal::layouts::{Backend, ComplexBuffer, DeviceBuffer, Shape},
};

/// Size advisory of the transform backend: which extents it processes
/// efficiently, and the packed complex extent a spatial extent maps to.
pub trait FftDims<B: Backend> {
    /// Smallest per-axis size >= `n` the transform accepts efficiently.
    fn fft_next_size(&self, n: usize) -> usize;

    /// Extent of the packed complex buffer produced by a forward transform
    /// of a `spatial`-sized f32 buffer.
    fn fft_complex_shape(&self, spatial: Shape) -> Shape;
}

/// Forward real-to-complex transform. Requires an f32 buffer; yields a
/// freshly allocated `ComplexBuffer` in the backend's packing.
pub trait FftForward<B: Backend> {
    fn fft_forward(&self, src: &DeviceBuffer<B>) -> Result<ComplexBuffer<B>>;
}

/// Inverse complex-to-real transform, normalized so that
/// forward followed by inverse reproduces the input.
pub trait FftInverse<B: Backend> {
    /// Writes into a caller-supplied f32 buffer of the spectrum's spatial
    /// extent.
    fn fft_inverse(&self, src: &ComplexBuffer<B>, dst: &mut DeviceBuffer<B>) -> Result<()>;

    /// Allocating variant.
    fn fft_inverse_new(&self, src: &ComplexBuffer<B>) -> Result<DeviceBuffer<B>>;
}

/// Pointwise complex product of two spectra of the same spatial extent;
/// neither operand is mutated. The conjugate variant multiplies by the
/// conjugate of `b`, which turns convolution into correlation.
pub trait FftVecMul<B: Backend> {
    fn fft_mul(&self, a: &ComplexBuffer<B>, b: &ComplexBuffer<B>) -> Result<ComplexBuffer<B>>;
    fn fft_mul_conj(&self, a: &ComplexBuffer<B>, b: &ComplexBuffer<B>) -> Result<ComplexBuffer<B>>;
}
