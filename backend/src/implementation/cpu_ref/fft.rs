use std::sync::Arc;

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::{
    Result, next_smooth,
    hal::{
        layouts::{ComplexBuffer, DeviceBuffer, ElemType, Module, Shape},
        oep::{BufferAllocImpl, FftDimsImpl, FftForwardImpl, FftInverseImpl, FftVecMulImpl},
    },
    implementation::cpu_ref::{
        buffer::{as_f32, as_f32_mut},
        module::CpuRef,
    },
};

unsafe impl FftDimsImpl<CpuRef> for CpuRef {
    fn fft_next_size_impl(n: usize) -> usize {
        next_smooth(n)
    }

    /// Full interleaved spectrum: one complex value per spatial sample.
    fn fft_complex_shape_impl(spatial: Shape) -> Shape {
        spatial.with_width(2 * spatial.width())
    }
}

/// Transforms every line of `data` along `axis`, in place. Lines along the
/// first axis are contiguous; the others are gathered through a stride.
fn fft_axis(planner: &mut FftPlanner<f32>, data: &mut [Complex<f32>], dims: [usize; 3], axis: usize, inverse: bool) {
    let n: usize = dims[axis];
    if n == 1 {
        return;
    }
    let fft: Arc<dyn Fft<f32>> = if inverse {
        planner.plan_fft_inverse(n)
    } else {
        planner.plan_fft_forward(n)
    };
    let strides: [usize; 3] = [1, dims[0], dims[0] * dims[1]];
    let (b, c) = match axis {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    };
    let mut line: Vec<Complex<f32>> = vec![Complex::new(0.0, 0.0); n];
    for ic in 0..dims[c] {
        for ib in 0..dims[b] {
            let base: usize = ib * strides[b] + ic * strides[c];
            if axis == 0 {
                fft.process(&mut data[base..base + n]);
            } else {
                for i in 0..n {
                    line[i] = data[base + i * strides[axis]];
                }
                fft.process(&mut line);
                for i in 0..n {
                    data[base + i * strides[axis]] = line[i];
                }
            }
        }
    }
}

unsafe impl FftForwardImpl<CpuRef> for CpuRef {
    fn fft_forward_impl(module: &Module<CpuRef>, src: &DeviceBuffer<CpuRef>) -> Result<ComplexBuffer<CpuRef>> {
        let spatial: Shape = src.shape();
        let dims: [usize; 3] = spatial.dims();

        let mut data: Vec<Complex<f32>> = as_f32(src).iter().map(|&v| Complex::new(v, 0.0)).collect();
        {
            let mut planner = module.handle().planner.borrow_mut();
            for axis in 0..spatial.rank() {
                fft_axis(&mut planner, &mut data, dims, axis, false);
            }
        }

        let packed: Shape = Self::fft_complex_shape_impl(spatial);
        let buf: DeviceBuffer<CpuRef> = Self::buffer_alloc_impl(module, packed, ElemType::F32)?;
        let mut out: ComplexBuffer<CpuRef> = ComplexBuffer::from_parts(buf, spatial);
        let floats: &mut [f32] = as_f32_mut(out.buffer_mut());
        for (pair, v) in floats.chunks_exact_mut(2).zip(data.iter()) {
            pair[0] = v.re;
            pair[1] = v.im;
        }
        Ok(out)
    }
}

unsafe impl FftInverseImpl<CpuRef> for CpuRef {
    fn fft_inverse_impl(module: &Module<CpuRef>, src: &ComplexBuffer<CpuRef>, dst: &mut DeviceBuffer<CpuRef>) -> Result<()> {
        let spatial: Shape = src.spatial();
        let dims: [usize; 3] = spatial.dims();

        let mut data: Vec<Complex<f32>> = as_f32(src.buffer())
            .chunks_exact(2)
            .map(|p| Complex::new(p[0], p[1]))
            .collect();
        {
            let mut planner = module.handle().planner.borrow_mut();
            for axis in 0..spatial.rank() {
                fft_axis(&mut planner, &mut data, dims, axis, true);
            }
        }

        // rustfft leaves the inverse unscaled; normalize here so that
        // forward followed by inverse is the identity.
        let scale: f32 = 1.0 / spatial.volume() as f32;
        let out: &mut [f32] = as_f32_mut(dst);
        for (o, v) in out.iter_mut().zip(data.iter()) {
            *o = v.re * scale;
        }
        Ok(())
    }
}

unsafe impl FftVecMulImpl<CpuRef> for CpuRef {
    fn fft_vec_mul_impl(
        _module: &Module<CpuRef>,
        a: &ComplexBuffer<CpuRef>,
        b: &ComplexBuffer<CpuRef>,
        dst: &mut ComplexBuffer<CpuRef>,
        conj: bool,
    ) -> Result<()> {
        let pa: &[f32] = as_f32(a.buffer());
        let pb: &[f32] = as_f32(b.buffer());
        let pr: &mut [f32] = as_f32_mut(dst.buffer_mut());
        let sign: f32 = if conj { -1.0 } else { 1.0 };
        for ((r, x), y) in pr.chunks_exact_mut(2).zip(pa.chunks_exact(2)).zip(pb.chunks_exact(2)) {
            let (ar, ai) = (x[0], x[1]);
            let (br, bi) = (y[0], y[1] * sign);
            r[0] = ar * br - ai * bi;
            r[1] = ar * bi + ai * br;
        }
        Ok(())
    }
}
