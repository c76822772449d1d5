use crate::{
    Error, Result,
    ffi::clfft::{
        CL_MEM, clfft_copy_buffer, clfft_copy_buffer_region, clfft_create_buffer, clfft_fill_buffer_32f,
        clfft_read_buffer, clfft_write_buffer,
    },
    hal::{
        layouts::{DeviceBuffer, ElemType, Element, Module, Point, Shape},
        oep::{
            BufferAllocImpl, BufferCopyImpl, BufferCopyRegionImpl, BufferDownloadImpl, BufferFillImpl, BufferUploadImpl,
        },
    },
    implementation::clfft::module::{ClFft, check},
};

/// Scalar type codes of the native copy kernels.
fn type_code(elem: ElemType) -> i32 {
    match elem {
        ElemType::U8 => 0,
        ElemType::U16 => 1,
        ElemType::I32 => 2,
        ElemType::F32 => 3,
    }
}

unsafe impl BufferAllocImpl<ClFft> for ClFft {
    fn buffer_alloc_impl(module: &Module<ClFft>, shape: Shape, elem: ElemType) -> Result<DeviceBuffer<ClFft>> {
        let bytes: u64 = (shape.volume() * elem.size_of()) as u64;
        let mem: *mut CL_MEM = unsafe { clfft_create_buffer(module.handle().context, bytes) };
        if mem.is_null() {
            return Err(Error::AllocationFailure(format!("{} bytes on device", bytes)));
        }
        Ok(unsafe { DeviceBuffer::from_raw_parts(mem, shape, elem) })
    }
}

unsafe impl BufferCopyImpl<ClFft> for ClFft {
    fn buffer_copy_impl(module: &Module<ClFft>, src: &DeviceBuffer<ClFft>, dst: &mut DeviceBuffer<ClFft>) -> Result<()> {
        let status: i32 = unsafe {
            clfft_copy_buffer(
                module.handle().queue,
                src.ptr(),
                type_code(src.elem()),
                dst.ptr(),
                type_code(dst.elem()),
                src.shape().volume() as u64,
            )
        };
        check(status, "buffer copy")
    }
}

unsafe impl BufferFillImpl<ClFft> for ClFft {
    fn buffer_fill_impl(module: &Module<ClFft>, dst: &mut DeviceBuffer<ClFft>, value: f32) -> Result<()> {
        let status: i32 =
            unsafe { clfft_fill_buffer_32f(module.handle().queue, dst.ptr(), value, dst.shape().volume() as u64) };
        check(status, "buffer fill")
    }
}

unsafe impl BufferCopyRegionImpl<ClFft> for ClFft {
    fn buffer_copy_region_impl(
        module: &Module<ClFft>,
        src: &DeviceBuffer<ClFft>,
        src_origin: Point,
        dst: &mut DeviceBuffer<ClFft>,
        dst_origin: Point,
        extent: Shape,
    ) -> Result<()> {
        let so: [u64; 3] = src_origin.map(|v| v as u64);
        let do_: [u64; 3] = dst_origin.map(|v| v as u64);
        let sp: [u64; 3] = src.shape().dims().map(|v| v as u64);
        let dp: [u64; 3] = dst.shape().dims().map(|v| v as u64);
        let region: [u64; 3] = extent.dims().map(|v| v as u64);
        let status: i32 = unsafe {
            clfft_copy_buffer_region(
                module.handle().queue,
                src.ptr(),
                so.as_ptr(),
                sp.as_ptr(),
                dst.ptr(),
                do_.as_ptr(),
                dp.as_ptr(),
                region.as_ptr(),
                src.elem().size_of() as u64,
            )
        };
        check(status, "buffer region copy")
    }
}

unsafe impl BufferUploadImpl<ClFft> for ClFft {
    fn buffer_upload_impl<T: Element>(module: &Module<ClFft>, src: &[T], dst: &mut DeviceBuffer<ClFft>) -> Result<()> {
        let bytes: u64 = std::mem::size_of_val(src) as u64;
        let status: i32 = unsafe {
            clfft_write_buffer(module.handle().queue, dst.ptr(), src.as_ptr() as *const _, bytes)
        };
        check(status, "buffer upload")
    }
}

unsafe impl BufferDownloadImpl<ClFft> for ClFft {
    fn buffer_download_impl<T: Element>(module: &Module<ClFft>, src: &DeviceBuffer<ClFft>) -> Result<Vec<T>> {
        let count: usize = src.shape().volume();
        let mut out: Vec<T> = Vec::with_capacity(count);
        let bytes: u64 = (count * std::mem::size_of::<T>()) as u64;
        let status: i32 =
            unsafe { clfft_read_buffer(module.handle().queue, src.ptr(), out.as_mut_ptr() as *mut _, bytes) };
        check(status, "buffer download")?;
        unsafe { out.set_len(count) };
        Ok(out)
    }
}
