use log::{debug, trace};

use convfft_backend::{
    Error, Result,
    hal::{
        api::{BufferAlloc, FftForward, FftInverse, FftVecMul},
        layouts::{Backend, ComplexBuffer, DeviceBuffer, ElemType, Module},
    },
};

use crate::{ConvolveOps, dims, normalize, pad};

/// Convolves `input` with `kernel` into the pre-allocated `output`.
///
/// Input and kernel may be any supported element type and any
/// matching-rank extents; `output` must be f32 of exactly `input`'s
/// extent. Neither input nor kernel is mutated, and `output` is written
/// only by the final crop, so on any failure it is left untouched. Every
/// intermediate buffer is owned by this function and released when its
/// binding drops, on success and error paths alike.
pub fn convolve<B: Backend>(
    module: &Module<B>,
    input: &DeviceBuffer<B>,
    kernel: &DeviceBuffer<B>,
    output: &mut DeviceBuffer<B>,
) -> Result<()>
where
    Module<B>: ConvolveOps<B>,
{
    if output.shape() != input.shape() {
        return Err(Error::contract(format!(
            "output extent {} does not match input extent {}",
            output.shape(),
            input.shape()
        )));
    }
    if !output.elem().is_float() {
        return Err(Error::contract(format!("output must be f32, got {}", output.elem())));
    }
    // Rejects rank mismatch as well, before anything is allocated.
    let extended = dims::extended_shape(module, input.shape(), kernel.shape())?;
    debug!(
        "convolve {} with kernel {} at extended extent {}",
        input.shape(),
        kernel.shape(),
        extended
    );

    let input_f = normalize::to_f32(module, input)?;
    let kernel_f = normalize::to_f32(module, kernel)?;
    trace!(
        "normalized input (converted: {}), kernel (converted: {})",
        input_f.is_owned(),
        kernel_f.is_owned()
    );

    let ext_input: DeviceBuffer<B> = pad::pad_input_zeros(module, input_f.buffer(), extended)?;
    let mut ext_kernel: DeviceBuffer<B> = module.alloc(extended, ElemType::F32)?;
    pad::pad_shift_kernel(module, kernel_f.buffer(), &mut ext_kernel)?;

    // The converted copies are only needed up to here.
    drop(input_f);
    drop(kernel_f);

    let mut ext_output: DeviceBuffer<B> = module.alloc(extended, ElemType::F32)?;
    run_convolve(module, &ext_input, &ext_kernel, &mut ext_output, false)?;

    drop(ext_input);
    drop(ext_kernel);

    pad::crop_extended(module, &ext_output, output)
}

/// Convolution core on pre-extended buffers: both spatial buffers must
/// already be padded to one shared transform-friendly extent, with the
/// kernel shift-padded. Callers that iterate (deconvolution loops) use
/// this directly to pad once and convolve many times. With `correlate`
/// set the kernel spectrum enters the product conjugated, turning the
/// convolution into a correlation.
pub fn run_convolve<B: Backend>(
    module: &Module<B>,
    ext_input: &DeviceBuffer<B>,
    ext_kernel: &DeviceBuffer<B>,
    ext_output: &mut DeviceBuffer<B>,
    correlate: bool,
) -> Result<()>
where
    Module<B>: BufferAlloc<B> + FftForward<B> + FftInverse<B> + FftVecMul<B>,
{
    if ext_input.shape() != ext_kernel.shape() || ext_input.shape() != ext_output.shape() {
        return Err(Error::contract(format!(
            "extended extents differ: input {}, kernel {}, output {}",
            ext_input.shape(),
            ext_kernel.shape(),
            ext_output.shape()
        )));
    }

    let input_spectrum: ComplexBuffer<B> = module.fft_forward(ext_input)?;
    let kernel_spectrum: ComplexBuffer<B> = module.fft_forward(ext_kernel)?;

    // The convolution theorem step; everything around it is staging.
    let product: ComplexBuffer<B> = if correlate {
        module.fft_mul_conj(&input_spectrum, &kernel_spectrum)?
    } else {
        module.fft_mul(&input_spectrum, &kernel_spectrum)?
    };

    drop(input_spectrum);
    drop(kernel_spectrum);

    module.fft_inverse(&product, ext_output)
}
