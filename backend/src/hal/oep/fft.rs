use crate::{
    Result,
    hal::layouts::{Backend, ComplexBuffer, DeviceBuffer, Module, Shape},
};

/// # Safety
/// `fft_complex_shape_impl` must report exactly the extent
/// `fft_forward_impl` produces for the same spatial extent.
pub unsafe trait FftDimsImpl<B: Backend> {
    fn fft_next_size_impl(n: usize) -> usize;
    fn fft_complex_shape_impl(spatial: Shape) -> Shape;
}

/// # Safety
/// `src` is f32; its per-axis sizes satisfy the backend's size advisory.
/// The result buffer must be freshly allocated, never aliased with `src`.
pub unsafe trait FftForwardImpl<B: Backend> {
    fn fft_forward_impl(module: &Module<B>, src: &DeviceBuffer<B>) -> Result<ComplexBuffer<B>>;
}

/// # Safety
/// `dst` is f32 with `dst.shape() == src.spatial()`. The implementation
/// must apply whatever normalization makes forward-then-inverse the
/// identity, and must not mutate `src`.
pub unsafe trait FftInverseImpl<B: Backend> {
    fn fft_inverse_impl(module: &Module<B>, src: &ComplexBuffer<B>, dst: &mut DeviceBuffer<B>) -> Result<()>;
}

/// # Safety
/// `a`, `b` and `dst` share one packed extent; `dst` aliases neither input.
/// With `conj` set, `b` enters the product conjugated.
pub unsafe trait FftVecMulImpl<B: Backend> {
    fn fft_vec_mul_impl(
        module: &Module<B>,
        a: &ComplexBuffer<B>,
        b: &ComplexBuffer<B>,
        dst: &mut ComplexBuffer<B>,
        conj: bool,
    ) -> Result<()>;
}
