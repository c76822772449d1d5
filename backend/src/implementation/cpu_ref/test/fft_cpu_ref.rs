use crate::{
    hal::{
        api::ModuleNew,
        layouts::Module,
        tests::fft::{
            test_fft_forward_rejects_non_f32, test_fft_mul_impulse_identity, test_fft_mul_shape_mismatch,
            test_fft_round_trip_2d, test_fft_round_trip_3d,
        },
    },
    implementation::cpu_ref::CpuRef,
};

#[test]
fn test_fft_round_trip_2d_cpu_ref() {
    let module: Module<CpuRef> = Module::<CpuRef>::new().unwrap();
    test_fft_round_trip_2d(&module);
}

#[test]
fn test_fft_round_trip_3d_cpu_ref() {
    let module: Module<CpuRef> = Module::<CpuRef>::new().unwrap();
    test_fft_round_trip_3d(&module);
}

#[test]
fn test_fft_mul_impulse_identity_cpu_ref() {
    let module: Module<CpuRef> = Module::<CpuRef>::new().unwrap();
    test_fft_mul_impulse_identity(&module);
}

#[test]
fn test_fft_mul_shape_mismatch_cpu_ref() {
    let module: Module<CpuRef> = Module::<CpuRef>::new().unwrap();
    test_fft_mul_shape_mismatch(&module);
}

#[test]
fn test_fft_forward_rejects_non_f32_cpu_ref() {
    let module: Module<CpuRef> = Module::<CpuRef>::new().unwrap();
    test_fft_forward_rejects_non_f32(&module);
}
