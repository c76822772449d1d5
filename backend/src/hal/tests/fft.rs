use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    Error,
    hal::{
        api::{BufferAlloc, BufferDownload, BufferUpload, FftForward, FftInverse, FftVecMul},
        layouts::{Backend, ComplexBuffer, DeviceBuffer, ElemType, Module, Shape},
    },
};

fn random_f32_buffer<B: Backend>(module: &Module<B>, shape: Shape, seed: u64) -> DeviceBuffer<B>
where
    Module<B>: BufferAlloc<B> + BufferUpload<B>,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data: Vec<f32> = (0..shape.volume()).map(|_| rng.random::<f32>()).collect();
    let mut buf: DeviceBuffer<B> = module.alloc(shape, ElemType::F32).unwrap();
    module.upload(&data, &mut buf).unwrap();
    buf
}

fn max_abs_diff(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).fold(0.0, f32::max)
}

fn round_trip<B: Backend>(module: &Module<B>, shape: Shape)
where
    Module<B>: BufferAlloc<B> + BufferUpload<B> + BufferDownload<B> + FftForward<B> + FftInverse<B>,
{
    let buf: DeviceBuffer<B> = random_f32_buffer(module, shape, 17);
    let original: Vec<f32> = module.download(&buf).unwrap();

    let spectrum: ComplexBuffer<B> = module.fft_forward(&buf).unwrap();
    assert_eq!(spectrum.spatial(), shape);

    let back: DeviceBuffer<B> = module.fft_inverse_new(&spectrum).unwrap();
    assert_eq!(back.shape(), shape);

    let result: Vec<f32> = module.download(&back).unwrap();
    let diff: f32 = max_abs_diff(&original, &result);
    assert!(diff < 1e-4, "round trip error {} on {}", diff, shape);
}

pub fn test_fft_round_trip_2d<B: Backend>(module: &Module<B>)
where
    Module<B>: BufferAlloc<B> + BufferUpload<B> + BufferDownload<B> + FftForward<B> + FftInverse<B>,
{
    round_trip(module, Shape::d2(16, 20));
}

pub fn test_fft_round_trip_3d<B: Backend>(module: &Module<B>)
where
    Module<B>: BufferAlloc<B> + BufferUpload<B> + BufferDownload<B> + FftForward<B> + FftInverse<B>,
{
    round_trip(module, Shape::d3(8, 12, 10));
}

/// The spectrum of a unit impulse at the origin is all ones, so
/// multiplying by it and inverting must reproduce the other operand.
pub fn test_fft_mul_impulse_identity<B: Backend>(module: &Module<B>)
where
    Module<B>: BufferAlloc<B> + BufferUpload<B> + BufferDownload<B> + FftForward<B> + FftInverse<B> + FftVecMul<B>,
{
    let shape: Shape = Shape::d2(16, 16);
    let buf: DeviceBuffer<B> = random_f32_buffer(module, shape, 23);
    let original: Vec<f32> = module.download(&buf).unwrap();

    let mut delta_host: Vec<f32> = vec![0.0; shape.volume()];
    delta_host[0] = 1.0;
    let mut delta: DeviceBuffer<B> = module.alloc(shape, ElemType::F32).unwrap();
    module.upload(&delta_host, &mut delta).unwrap();

    let spectrum: ComplexBuffer<B> = module.fft_forward(&buf).unwrap();
    let delta_spectrum: ComplexBuffer<B> = module.fft_forward(&delta).unwrap();
    let product: ComplexBuffer<B> = module.fft_mul(&spectrum, &delta_spectrum).unwrap();

    let back: DeviceBuffer<B> = module.fft_inverse_new(&product).unwrap();
    let result: Vec<f32> = module.download(&back).unwrap();
    let diff: f32 = max_abs_diff(&original, &result);
    assert!(diff < 1e-4, "impulse identity error {}", diff);
}

pub fn test_fft_mul_shape_mismatch<B: Backend>(module: &Module<B>)
where
    Module<B>: BufferAlloc<B> + BufferUpload<B> + FftForward<B> + FftVecMul<B>,
{
    let a: DeviceBuffer<B> = random_f32_buffer(module, Shape::d2(16, 20), 1);
    let b: DeviceBuffer<B> = random_f32_buffer(module, Shape::d2(20, 16), 2);
    let sa: ComplexBuffer<B> = module.fft_forward(&a).unwrap();
    let sb: ComplexBuffer<B> = module.fft_forward(&b).unwrap();
    let err = module.fft_mul(&sa, &sb).unwrap_err();
    assert!(matches!(err, Error::ContractViolation(_)));
}

pub fn test_fft_forward_rejects_non_f32<B: Backend>(module: &Module<B>)
where
    Module<B>: BufferAlloc<B> + FftForward<B>,
{
    let buf: DeviceBuffer<B> = module.alloc(Shape::d2(16, 16), ElemType::U16).unwrap();
    let err = module.fft_forward(&buf).unwrap_err();
    assert!(matches!(err, Error::ContractViolation(_)));
}
