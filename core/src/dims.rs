use convfft_backend::{
    Result,
    hal::{
        api::FftDims,
        layouts::{Backend, Module, Shape},
    },
};

/// Extended per-axis size for one convolution: input plus kernel along
/// each axis, rounded up to the transform backend's advisory. Padding to
/// at least the summed extent is what turns the transform's circular
/// convolution into the linear one. Rank mismatch between the two shapes
/// is rejected here, before anything is allocated.
pub fn extended_shape<B: Backend>(module: &Module<B>, input: Shape, kernel: Shape) -> Result<Shape>
where
    Module<B>: FftDims<B>,
{
    let summed: Shape = input.zip_map(&kernel, |i, k| i + k)?;
    Ok(summed.map(|n| module.fft_next_size(n)))
}
