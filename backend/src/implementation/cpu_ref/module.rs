use std::{
    cell::RefCell,
    ptr::NonNull,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use log::debug;
use rustfft::FftPlanner;

use crate::{
    Result,
    hal::{
        layouts::{Backend, Module},
        oep::ModuleNewImpl,
    },
};

pub struct CpuRef;

/// Host stand-in for the native context/queue pair: a cached rustfft
/// planner plus allocation bookkeeping. Counters are per module so leak
/// checks stay deterministic when tests run in parallel.
pub struct CpuCtx {
    pub(crate) planner: RefCell<FftPlanner<f32>>,
    pub(crate) allocations: AtomicUsize,
    pub(crate) releases: Arc<AtomicUsize>,
}

/// One "device" allocation. Carries a handle to its context's release
/// counter so the release is counted even after the context is gone.
pub struct HostMem {
    pub(crate) bytes: Vec<u8>,
    pub(crate) releases: Arc<AtomicUsize>,
}

/// Buffers allocated through `module` so far.
pub fn allocation_count(module: &Module<CpuRef>) -> usize {
    module.handle().allocations.load(Ordering::Relaxed)
}

/// Buffers allocated through `module` and released again.
pub fn release_count(module: &Module<CpuRef>) -> usize {
    module.handle().releases.load(Ordering::Relaxed)
}

/// Buffers currently alive. Zero after any balanced sequence of
/// operations; the convolution tests assert exactly that.
pub fn live_buffer_count(module: &Module<CpuRef>) -> usize {
    allocation_count(module) - release_count(module)
}

impl Backend for CpuRef {
    type Handle = CpuCtx;
    type Mem = HostMem;

    unsafe fn destroy(handle: NonNull<Self::Handle>) {
        drop(unsafe { Box::from_raw(handle.as_ptr()) });
    }

    unsafe fn release(mem: NonNull<Self::Mem>) {
        let mem: Box<HostMem> = unsafe { Box::from_raw(mem.as_ptr()) };
        mem.releases.fetch_add(1, Ordering::Relaxed);
        drop(mem);
    }
}

unsafe impl ModuleNewImpl<CpuRef> for CpuRef {
    fn module_new_impl() -> Result<Module<CpuRef>> {
        debug!("creating host reference module");
        let ctx: Box<CpuCtx> = Box::new(CpuCtx {
            planner: RefCell::new(FftPlanner::new()),
            allocations: AtomicUsize::new(0),
            releases: Arc::new(AtomicUsize::new(0)),
        });
        Ok(unsafe { Module::from_raw_parts(Box::into_raw(ctx)) })
    }
}
