use crate::{
    Result, next_smooth,
    ffi::clfft::{cmul_32f_lp, fft2d_32f_lp, fft2dinv_32f_lp, fft3d_32f_lp, fft3dinv_32f_lp},
    hal::{
        layouts::{ComplexBuffer, DeviceBuffer, ElemType, Module, Shape},
        oep::{BufferAllocImpl, FftDimsImpl, FftForwardImpl, FftInverseImpl, FftVecMulImpl},
    },
    implementation::clfft::module::{ClFft, check},
};

unsafe impl FftDimsImpl<ClFft> for ClFft {
    fn fft_next_size_impl(n: usize) -> usize {
        next_smooth(n)
    }

    /// Hermitian-packed half spectrum: `w/2 + 1` complex values per row.
    fn fft_complex_shape_impl(spatial: Shape) -> Shape {
        spatial.with_width(2 * (spatial.width() / 2 + 1))
    }
}

unsafe impl FftForwardImpl<ClFft> for ClFft {
    fn fft_forward_impl(module: &Module<ClFft>, src: &DeviceBuffer<ClFft>) -> Result<ComplexBuffer<ClFft>> {
        let spatial: Shape = src.shape();
        let packed: Shape = Self::fft_complex_shape_impl(spatial);
        let out: DeviceBuffer<ClFft> = Self::buffer_alloc_impl(module, packed, ElemType::F32)?;
        let ctx = module.handle();
        let status: i32 = match spatial {
            Shape::D2(w, h) => unsafe {
                fft2d_32f_lp(w as u64, h as u64, src.ptr(), out.ptr(), ctx.context, ctx.queue)
            },
            Shape::D3(w, h, d) => unsafe {
                fft3d_32f_lp(w as u64, h as u64, d as u64, src.ptr(), out.ptr(), ctx.context, ctx.queue)
            },
        };
        check(status, "forward transform")?;
        Ok(ComplexBuffer::from_parts(out, spatial))
    }
}

unsafe impl FftInverseImpl<ClFft> for ClFft {
    fn fft_inverse_impl(module: &Module<ClFft>, src: &ComplexBuffer<ClFft>, dst: &mut DeviceBuffer<ClFft>) -> Result<()> {
        let ctx = module.handle();
        let status: i32 = match src.spatial() {
            Shape::D2(w, h) => unsafe {
                fft2dinv_32f_lp(w as u64, h as u64, src.buffer().ptr(), dst.ptr(), ctx.context, ctx.queue)
            },
            Shape::D3(w, h, d) => unsafe {
                fft3dinv_32f_lp(
                    w as u64,
                    h as u64,
                    d as u64,
                    src.buffer().ptr(),
                    dst.ptr(),
                    ctx.context,
                    ctx.queue,
                )
            },
        };
        check(status, "inverse transform")
    }
}

unsafe impl FftVecMulImpl<ClFft> for ClFft {
    fn fft_vec_mul_impl(
        module: &Module<ClFft>,
        a: &ComplexBuffer<ClFft>,
        b: &ComplexBuffer<ClFft>,
        dst: &mut ComplexBuffer<ClFft>,
        conj: bool,
    ) -> Result<()> {
        let ctx = module.handle();
        let count: u64 = (a.packed().volume() / 2) as u64;
        let status: i32 = unsafe {
            cmul_32f_lp(
                count,
                a.buffer().ptr(),
                b.buffer().ptr(),
                dst.buffer_mut().ptr(),
                conj as i32,
                ctx.context,
                ctx.queue,
            )
        };
        check(status, "complex multiply")
    }
}
