//! Bindings to the native clFFT-based transform library. All functions
//! take raw device-memory, context and queue pointers plus per-axis sizes;
//! status returns are zero on success. The `_lp` suffix marks the
//! long-pointer entry points.

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct cl_context_st {
    _unused: [u8; 0],
}
pub type CL_CONTEXT = cl_context_st;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct cl_queue_st {
    _unused: [u8; 0],
}
pub type CL_QUEUE = cl_queue_st;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct cl_mem_st {
    _unused: [u8; 0],
}
pub type CL_MEM = cl_mem_st;

unsafe extern "C" {
    pub unsafe fn clfft_default_context() -> *mut CL_CONTEXT;
    pub unsafe fn clfft_default_queue(context: *mut CL_CONTEXT) -> *mut CL_QUEUE;
    pub unsafe fn clfft_release_context(context: *mut CL_CONTEXT);
}

unsafe extern "C" {
    pub unsafe fn clfft_create_buffer(context: *mut CL_CONTEXT, bytes: u64) -> *mut CL_MEM;
    pub unsafe fn clfft_release_buffer(mem: *mut CL_MEM);
    pub unsafe fn clfft_write_buffer(
        queue: *mut CL_QUEUE,
        mem: *mut CL_MEM,
        src: *const ::std::os::raw::c_void,
        bytes: u64,
    ) -> i32;
    pub unsafe fn clfft_read_buffer(
        queue: *mut CL_QUEUE,
        mem: *mut CL_MEM,
        dst: *mut ::std::os::raw::c_void,
        bytes: u64,
    ) -> i32;
    pub unsafe fn clfft_fill_buffer_32f(queue: *mut CL_QUEUE, mem: *mut CL_MEM, value: f32, count: u64) -> i32;
    pub unsafe fn clfft_copy_buffer(
        queue: *mut CL_QUEUE,
        src: *mut CL_MEM,
        src_type: i32,
        dst: *mut CL_MEM,
        dst_type: i32,
        count: u64,
    ) -> i32;
    pub unsafe fn clfft_copy_buffer_region(
        queue: *mut CL_QUEUE,
        src: *mut CL_MEM,
        src_origin: *const u64,
        src_pitch: *const u64,
        dst: *mut CL_MEM,
        dst_origin: *const u64,
        dst_pitch: *const u64,
        region: *const u64,
        elem_bytes: u64,
    ) -> i32;
}

unsafe extern "C" {
    pub unsafe fn fft2d_32f_lp(
        width: u64,
        height: u64,
        d_in: *mut CL_MEM,
        d_out: *mut CL_MEM,
        context: *mut CL_CONTEXT,
        queue: *mut CL_QUEUE,
    ) -> i32;
    pub unsafe fn fft2dinv_32f_lp(
        width: u64,
        height: u64,
        d_in: *mut CL_MEM,
        d_out: *mut CL_MEM,
        context: *mut CL_CONTEXT,
        queue: *mut CL_QUEUE,
    ) -> i32;
    pub unsafe fn fft3d_32f_lp(
        width: u64,
        height: u64,
        depth: u64,
        d_in: *mut CL_MEM,
        d_out: *mut CL_MEM,
        context: *mut CL_CONTEXT,
        queue: *mut CL_QUEUE,
    ) -> i32;
    pub unsafe fn fft3dinv_32f_lp(
        width: u64,
        height: u64,
        depth: u64,
        d_in: *mut CL_MEM,
        d_out: *mut CL_MEM,
        context: *mut CL_CONTEXT,
        queue: *mut CL_QUEUE,
    ) -> i32;
    pub unsafe fn cmul_32f_lp(
        count: u64,
        d_a: *mut CL_MEM,
        d_b: *mut CL_MEM,
        d_out: *mut CL_MEM,
        conjugate: i32,
        context: *mut CL_CONTEXT,
        queue: *mut CL_QUEUE,
    ) -> i32;
}
