pub mod hal;
pub mod implementation;

#[cfg(feature = "clfft")]
#[allow(
    non_camel_case_types,
    non_snake_case,
    non_upper_case_globals,
    dead_code,
    improper_ctypes
)]
pub mod ffi;

mod error;

pub use error::*;

pub const DEFAULTALIGN: usize = 64;

use std::alloc::{Layout, alloc};

/// Allocates a zeroed, aligned byte vector. `align` must be a power of two;
/// the allocation length is rounded up to a multiple of `align`.
pub fn alloc_aligned_u8(size: usize, align: usize) -> Result<Vec<u8>> {
    assert_eq!(align & (align - 1), 0, "align={} must be a power of two", align);
    let padded: usize = size.div_ceil(align) * align;
    let layout: Layout =
        Layout::from_size_align(padded.max(align), align).map_err(|e| Error::AllocationFailure(e.to_string()))?;
    unsafe {
        let ptr: *mut u8 = alloc(layout);
        if ptr.is_null() {
            return Err(Error::AllocationFailure(format!("host allocation of {} bytes failed", padded)));
        }
        ptr.write_bytes(0, padded.max(align));
        Ok(Vec::from_raw_parts(ptr, padded.max(align), padded.max(align)))
    }
}

pub fn cast<T, V>(data: &[T]) -> &[V] {
    let ptr: *const V = data.as_ptr() as *const V;
    let len: usize = data.len() * std::mem::size_of::<T>() / std::mem::size_of::<V>();
    unsafe { std::slice::from_raw_parts(ptr, len) }
}

pub fn cast_mut<T, V>(data: &mut [T]) -> &mut [V] {
    let ptr: *mut V = data.as_mut_ptr() as *mut V;
    let len: usize = data.len() * std::mem::size_of::<T>() / std::mem::size_of::<V>();
    unsafe { std::slice::from_raw_parts_mut(ptr, len) }
}

/// Smallest m >= n whose prime factors are all in {2, 3, 5, 7}, the radix
/// set the native transform handles without falling back to Bluestein.
pub fn next_smooth(n: usize) -> usize {
    debug_assert!(n > 0);
    let mut m: usize = n;
    loop {
        let mut r: usize = m;
        for p in [2usize, 3, 5, 7] {
            while r % p == 0 {
                r /= p;
            }
        }
        if r == 1 {
            return m;
        }
        m += 1;
    }
}
