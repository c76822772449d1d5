//! Unsafe extension points implemented by concrete backends. Arguments are
//! pre-validated by the delegates on `Module<B>`; implementations may rely
//! on shapes, ranks and element types having been checked.

use crate::{
    Result,
    hal::layouts::{Backend, DeviceBuffer, ElemType, Element, Module, Point, Shape},
};

/// # Safety
/// The returned buffer must own an allocation of at least
/// `shape.volume() * elem.size_of()` bytes.
pub unsafe trait BufferAllocImpl<B: Backend> {
    fn buffer_alloc_impl(module: &Module<B>, shape: Shape, elem: ElemType) -> Result<DeviceBuffer<B>>;
}

/// # Safety
/// `src.shape() == dst.shape()` has been validated; element types may
/// differ and must be converted value-wise.
pub unsafe trait BufferCopyImpl<B: Backend> {
    fn buffer_copy_impl(module: &Module<B>, src: &DeviceBuffer<B>, dst: &mut DeviceBuffer<B>) -> Result<()>;
}

/// # Safety
/// `dst` is f32.
pub unsafe trait BufferFillImpl<B: Backend> {
    fn buffer_fill_impl(module: &Module<B>, dst: &mut DeviceBuffer<B>, value: f32) -> Result<()>;
}

/// # Safety
/// Matching element types, matching ranks, and in-bounds regions on both
/// sides have been validated.
pub unsafe trait BufferCopyRegionImpl<B: Backend> {
    fn buffer_copy_region_impl(
        module: &Module<B>,
        src: &DeviceBuffer<B>,
        src_origin: Point,
        dst: &mut DeviceBuffer<B>,
        dst_origin: Point,
        extent: Shape,
    ) -> Result<()>;
}

/// # Safety
/// `T::ELEM == dst.elem()` and `src.len() == dst.shape().volume()` have
/// been validated.
pub unsafe trait BufferUploadImpl<B: Backend> {
    fn buffer_upload_impl<T: Element>(module: &Module<B>, src: &[T], dst: &mut DeviceBuffer<B>) -> Result<()>;
}

/// # Safety
/// `T::ELEM == src.elem()` has been validated.
pub unsafe trait BufferDownloadImpl<B: Backend> {
    fn buffer_download_impl<T: Element>(module: &Module<B>, src: &DeviceBuffer<B>) -> Result<Vec<T>>;
}
