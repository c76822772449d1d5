use std::ptr::NonNull;

use log::debug;

use crate::{
    Error, Result,
    ffi::clfft::{CL_CONTEXT, CL_MEM, CL_QUEUE, clfft_default_context, clfft_default_queue, clfft_release_buffer, clfft_release_context},
    hal::{
        layouts::{Backend, Module},
        oep::ModuleNewImpl,
    },
};

pub struct ClFft;

/// The native context/queue pair. The queue is owned by the context and
/// released with it.
pub struct ClCtx {
    pub(crate) context: *mut CL_CONTEXT,
    pub(crate) queue: *mut CL_QUEUE,
}

impl Backend for ClFft {
    type Handle = ClCtx;
    type Mem = CL_MEM;

    unsafe fn destroy(handle: NonNull<Self::Handle>) {
        let ctx: Box<ClCtx> = unsafe { Box::from_raw(handle.as_ptr()) };
        unsafe { clfft_release_context(ctx.context) };
    }

    unsafe fn release(mem: NonNull<Self::Mem>) {
        unsafe { clfft_release_buffer(mem.as_ptr()) };
    }
}

unsafe impl ModuleNewImpl<ClFft> for ClFft {
    fn module_new_impl() -> Result<Module<ClFft>> {
        let context: *mut CL_CONTEXT = unsafe { clfft_default_context() };
        if context.is_null() {
            return Err(Error::backend("no OpenCL context available"));
        }
        let queue: *mut CL_QUEUE = unsafe { clfft_default_queue(context) };
        if queue.is_null() {
            unsafe { clfft_release_context(context) };
            return Err(Error::backend("no OpenCL queue available"));
        }
        debug!("acquired OpenCL context {:p}, queue {:p}", context, queue);
        let ctx: Box<ClCtx> = Box::new(ClCtx { context, queue });
        Ok(unsafe { Module::from_raw_parts(Box::into_raw(ctx)) })
    }
}

pub(super) fn check(status: i32, what: &str) -> Result<()> {
    if status != 0 {
        return Err(Error::backend(format!("{} failed with status {}", what, status)));
    }
    Ok(())
}
