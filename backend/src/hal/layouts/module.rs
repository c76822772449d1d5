use std::{marker::PhantomData, ptr::NonNull};

/// A concrete backend. `Handle` is the native compute context (device
/// context plus execution queue, or a host planner cache), `Mem` a single
/// device allocation. Both are torn down exactly once through the unsafe
/// destructors below, driven by `Drop` on `Module` and `DeviceBuffer`.
pub trait Backend: Sized {
    type Handle: 'static;
    type Mem: 'static;

    unsafe fn destroy(handle: NonNull<Self::Handle>);
    unsafe fn release(mem: NonNull<Self::Mem>);
}

/// The explicitly constructed, explicitly passed compute context. Every
/// capability is invoked through a `&Module<B>`; the handle is only ever
/// read, never mutated, so one module serves all calls of a request.
pub struct Module<B: Backend> {
    ptr: NonNull<B::Handle>,
    _marker: PhantomData<B>,
}

impl<B: Backend> Module<B> {
    /// # Safety
    /// `ptr` must be a live handle owned by no other `Module`.
    pub unsafe fn from_raw_parts(ptr: *mut B::Handle) -> Self {
        Self {
            ptr: NonNull::new(ptr).expect("null module handle"),
            _marker: PhantomData,
        }
    }

    pub fn ptr(&self) -> *mut B::Handle {
        self.ptr.as_ptr()
    }

    pub fn handle(&self) -> &B::Handle {
        unsafe { self.ptr.as_ref() }
    }
}

impl<B: Backend> Drop for Module<B> {
    fn drop(&mut self) {
        unsafe { B::destroy(self.ptr) }
    }
}
