use std::{fmt, marker::PhantomData, ptr::NonNull};

use crate::hal::layouts::{Backend, ElemType, Shape};

/// A typed, dimensioned block of device memory. Shape and element type are
/// fixed at creation; the allocation is released exactly once when the
/// buffer drops. Whoever holds the value owns the memory, so "did I
/// allocate this or borrow it" is a question about `&DeviceBuffer` vs
/// `DeviceBuffer`, never about pointer identity.
pub struct DeviceBuffer<B: Backend> {
    ptr: NonNull<B::Mem>,
    shape: Shape,
    elem: ElemType,
    _marker: PhantomData<B>,
}

impl<B: Backend> DeviceBuffer<B> {
    /// # Safety
    /// `ptr` must be a live allocation of at least `shape.volume() *
    /// elem.size_of()` bytes, owned by no other buffer.
    pub unsafe fn from_raw_parts(ptr: *mut B::Mem, shape: Shape, elem: ElemType) -> Self {
        Self {
            ptr: NonNull::new(ptr).expect("null buffer handle"),
            shape,
            elem,
            _marker: PhantomData,
        }
    }

    pub fn ptr(&self) -> *mut B::Mem {
        self.ptr.as_ptr()
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn elem(&self) -> ElemType {
        self.elem
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }
}

impl<B: Backend> fmt::Debug for DeviceBuffer<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DeviceBuffer<{} {}>", self.elem, self.shape)
    }
}

impl<B: Backend> Drop for DeviceBuffer<B> {
    fn drop(&mut self) {
        unsafe { B::release(self.ptr) }
    }
}
