use crate::{
    Error, Result,
    hal::{
        api::{FftDims, FftForward, FftInverse, FftVecMul},
        layouts::{Backend, ComplexBuffer, DeviceBuffer, ElemType, Module, Shape},
        oep::{BufferAllocImpl, FftDimsImpl, FftForwardImpl, FftInverseImpl, FftVecMulImpl},
    },
};

impl<B> FftDims<B> for Module<B>
where
    B: Backend + FftDimsImpl<B>,
{
    fn fft_next_size(&self, n: usize) -> usize {
        B::fft_next_size_impl(n)
    }

    fn fft_complex_shape(&self, spatial: Shape) -> Shape {
        B::fft_complex_shape_impl(spatial)
    }
}

fn require_f32<B: Backend>(buf: &DeviceBuffer<B>, what: &str) -> Result<()> {
    if !buf.elem().is_float() {
        return Err(Error::contract(format!("{} requires f32, got {}", what, buf.elem())));
    }
    Ok(())
}

fn require_transform_size<B: Backend + FftDimsImpl<B>>(shape: Shape) -> Result<()> {
    let bad = shape.dims()[..shape.rank()]
        .iter()
        .any(|&d| B::fft_next_size_impl(d) != d);
    if bad {
        return Err(Error::contract(format!(
            "extent {} is not a supported transform size",
            shape
        )));
    }
    Ok(())
}

impl<B> FftForward<B> for Module<B>
where
    B: Backend + FftForwardImpl<B> + FftDimsImpl<B>,
{
    fn fft_forward(&self, src: &DeviceBuffer<B>) -> Result<ComplexBuffer<B>> {
        require_f32(src, "forward transform")?;
        require_transform_size::<B>(src.shape())?;
        B::fft_forward_impl(self, src)
    }
}

impl<B> FftInverse<B> for Module<B>
where
    B: Backend + FftInverseImpl<B> + BufferAllocImpl<B>,
{
    fn fft_inverse(&self, src: &ComplexBuffer<B>, dst: &mut DeviceBuffer<B>) -> Result<()> {
        require_f32(dst, "inverse transform")?;
        if dst.shape() != src.spatial() {
            return Err(Error::contract(format!(
                "inverse transform shape mismatch: spectrum is for {}, destination is {}",
                src.spatial(),
                dst.shape()
            )));
        }
        B::fft_inverse_impl(self, src, dst)
    }

    fn fft_inverse_new(&self, src: &ComplexBuffer<B>) -> Result<DeviceBuffer<B>> {
        let mut dst: DeviceBuffer<B> = B::buffer_alloc_impl(self, src.spatial(), ElemType::F32)?;
        B::fft_inverse_impl(self, src, &mut dst)?;
        Ok(dst)
    }
}

fn mul<B>(module: &Module<B>, a: &ComplexBuffer<B>, b: &ComplexBuffer<B>, conj: bool) -> Result<ComplexBuffer<B>>
where
    B: Backend + FftVecMulImpl<B> + BufferAllocImpl<B>,
{
    if a.spatial() != b.spatial() || a.packed() != b.packed() {
        return Err(Error::contract(format!(
            "complex multiply shape mismatch: {:?} vs {:?}",
            a, b
        )));
    }
    let buf: DeviceBuffer<B> = B::buffer_alloc_impl(module, a.packed(), ElemType::F32)?;
    let mut dst: ComplexBuffer<B> = ComplexBuffer::from_parts(buf, a.spatial());
    B::fft_vec_mul_impl(module, a, b, &mut dst, conj)?;
    Ok(dst)
}

impl<B> FftVecMul<B> for Module<B>
where
    B: Backend + FftVecMulImpl<B> + BufferAllocImpl<B>,
{
    fn fft_mul(&self, a: &ComplexBuffer<B>, b: &ComplexBuffer<B>) -> Result<ComplexBuffer<B>> {
        mul(self, a, b, false)
    }

    fn fft_mul_conj(&self, a: &ComplexBuffer<B>, b: &ComplexBuffer<B>) -> Result<ComplexBuffer<B>> {
        mul(self, a, b, true)
    }
}
