use crate::{
    hal::{
        api::ModuleNew,
        layouts::Module,
        tests::buffer::{
            test_buffer_copy_convert, test_buffer_copy_region, test_buffer_copy_shape_mismatch, test_buffer_fill,
            test_buffer_upload_download,
        },
    },
    implementation::cpu_ref::{CpuRef, live_buffer_count},
};

#[test]
fn test_buffer_upload_download_cpu_ref() {
    let module: Module<CpuRef> = Module::<CpuRef>::new().unwrap();
    test_buffer_upload_download(&module);
}

#[test]
fn test_buffer_copy_convert_cpu_ref() {
    let module: Module<CpuRef> = Module::<CpuRef>::new().unwrap();
    test_buffer_copy_convert(&module);
}

#[test]
fn test_buffer_copy_shape_mismatch_cpu_ref() {
    let module: Module<CpuRef> = Module::<CpuRef>::new().unwrap();
    test_buffer_copy_shape_mismatch(&module);
}

#[test]
fn test_buffer_fill_cpu_ref() {
    let module: Module<CpuRef> = Module::<CpuRef>::new().unwrap();
    test_buffer_fill(&module);
}

#[test]
fn test_buffer_copy_region_cpu_ref() {
    let module: Module<CpuRef> = Module::<CpuRef>::new().unwrap();
    test_buffer_copy_region(&module);
}

#[test]
fn test_buffer_release_balance_cpu_ref() {
    let module: Module<CpuRef> = Module::<CpuRef>::new().unwrap();
    test_buffer_copy_region(&module);
    test_buffer_copy_convert(&module);
    assert_eq!(live_buffer_count(&module), 0);
}
