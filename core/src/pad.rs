//! Padding and cropping around the transform. All three operations agree
//! on one placement convention: the original data occupies the origin
//! corner of the extended buffer, and the kernel center maps to extended
//! index (0, 0[, 0]) with the remaining taps wrapped cyclically around the
//! far edges. Skipping the kernel shift would not crash anything; it would
//! silently shift the convolution result by half a kernel.

use itertools::iproduct;

use convfft_backend::{
    Error, Result,
    hal::{
        api::{BufferAlloc, BufferCopyRegion, BufferFill},
        layouts::{Backend, DeviceBuffer, ElemType, Module, ORIGIN, Shape},
    },
};

/// Zero-pads `src` into a new buffer of the `extended` extent, original
/// data at the origin corner. Everything outside the copied region stays
/// zero, which is what prevents the transform's implicit periodicity from
/// wrapping image content around the edges.
pub fn pad_input_zeros<B: Backend>(module: &Module<B>, src: &DeviceBuffer<B>, extended: Shape) -> Result<DeviceBuffer<B>>
where
    Module<B>: BufferAlloc<B> + BufferFill<B> + BufferCopyRegion<B>,
{
    let mut out: DeviceBuffer<B> = module.alloc(extended, ElemType::F32)?;
    module.fill(&mut out, 0.0)?;
    module.copy_region(src, ORIGIN, &mut out, ORIGIN, src.shape())?;
    Ok(out)
}

/// One axis of the cyclic kernel split: the taps at and above the center
/// go to the start of the extended axis, the taps below it wrap to its
/// far end.
#[derive(Clone, Copy)]
struct Seg {
    src: usize,
    dst: usize,
    len: usize,
}

fn axis_segments(kernel: usize, extended: usize) -> Vec<Seg> {
    let center: usize = kernel / 2;
    let mut segs: Vec<Seg> = vec![Seg {
        src: center,
        dst: 0,
        len: kernel - center,
    }];
    if center > 0 {
        segs.push(Seg {
            src: 0,
            dst: extended - center,
            len: center,
        });
    }
    segs
}

/// Writes `kernel` into the pre-allocated extended buffer `dst` so that
/// its center lands on index 0, decomposed into one region copy per
/// wrapped corner block (up to 2^rank copies).
pub fn pad_shift_kernel<B: Backend>(module: &Module<B>, kernel: &DeviceBuffer<B>, dst: &mut DeviceBuffer<B>) -> Result<()>
where
    Module<B>: BufferFill<B> + BufferCopyRegion<B>,
{
    let k: [usize; 3] = kernel.shape().dims();
    let e: [usize; 3] = dst.shape().dims();
    if kernel.rank() != dst.rank() {
        return Err(Error::contract(format!(
            "kernel rank {} does not match extended rank {}",
            kernel.rank(),
            dst.rank()
        )));
    }
    if (0..3).any(|ax| e[ax] < k[ax]) {
        return Err(Error::contract(format!(
            "extended extent {} smaller than kernel {}",
            dst.shape(),
            kernel.shape()
        )));
    }

    module.fill(dst, 0.0)?;

    match kernel.shape() {
        Shape::D2(..) => {
            for (sx, sy) in iproduct!(axis_segments(k[0], e[0]), axis_segments(k[1], e[1])) {
                module.copy_region(
                    kernel,
                    [sx.src, sy.src, 0],
                    dst,
                    [sx.dst, sy.dst, 0],
                    Shape::d2(sx.len, sy.len),
                )?;
            }
        }
        Shape::D3(..) => {
            for (sx, sy, sz) in iproduct!(
                axis_segments(k[0], e[0]),
                axis_segments(k[1], e[1]),
                axis_segments(k[2], e[2])
            ) {
                module.copy_region(
                    kernel,
                    [sx.src, sy.src, sz.src],
                    dst,
                    [sx.dst, sy.dst, sz.dst],
                    Shape::d3(sx.len, sy.len, sz.len),
                )?;
            }
        }
    }
    Ok(())
}

/// Copies the origin-corner region of an extended-size result back into
/// the caller's output buffer. The extents must stand in the crop
/// relationship; anything else is a caller error surfaced by the region
/// bounds check.
pub fn crop_extended<B: Backend>(module: &Module<B>, src: &DeviceBuffer<B>, dst: &mut DeviceBuffer<B>) -> Result<()>
where
    Module<B>: BufferCopyRegion<B>,
{
    module.copy_region(src, ORIGIN, dst, ORIGIN, dst.shape())
}
