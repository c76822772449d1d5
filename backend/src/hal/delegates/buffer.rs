//! Delegates from `Module<B>` to the backend extension points. Every
//! caller-facing contract of the buffer capabilities is enforced here, so
//! no invalid argument ever reaches a backend (or the device behind it).

use crate::{
    Error, Result,
    hal::{
        api::{BufferAlloc, BufferCopy, BufferCopyRegion, BufferDownload, BufferFill, BufferUpload},
        layouts::{Backend, DeviceBuffer, ElemType, Element, Module, Point, Shape},
        oep::{
            BufferAllocImpl, BufferCopyImpl, BufferCopyRegionImpl, BufferDownloadImpl, BufferFillImpl, BufferUploadImpl,
        },
    },
};

impl<B> BufferAlloc<B> for Module<B>
where
    B: Backend + BufferAllocImpl<B>,
{
    fn alloc(&self, shape: Shape, elem: ElemType) -> Result<DeviceBuffer<B>> {
        B::buffer_alloc_impl(self, shape, elem)
    }
}

impl<B> BufferCopy<B> for Module<B>
where
    B: Backend + BufferCopyImpl<B>,
{
    fn copy(&self, src: &DeviceBuffer<B>, dst: &mut DeviceBuffer<B>) -> Result<()> {
        if src.shape() != dst.shape() {
            return Err(Error::contract(format!(
                "copy shape mismatch: {} vs {}",
                src.shape(),
                dst.shape()
            )));
        }
        B::buffer_copy_impl(self, src, dst)
    }
}

impl<B> BufferFill<B> for Module<B>
where
    B: Backend + BufferFillImpl<B>,
{
    fn fill(&self, dst: &mut DeviceBuffer<B>, value: f32) -> Result<()> {
        if !dst.elem().is_float() {
            return Err(Error::contract(format!("fill requires f32, got {}", dst.elem())));
        }
        B::buffer_fill_impl(self, dst, value)
    }
}

fn region_in_bounds(shape: Shape, origin: Point, extent: Shape) -> bool {
    let dims = shape.dims();
    let ext = extent.dims();
    (0..3).all(|ax| origin[ax] + ext[ax] <= dims[ax])
}

impl<B> BufferCopyRegion<B> for Module<B>
where
    B: Backend + BufferCopyRegionImpl<B>,
{
    fn copy_region(
        &self,
        src: &DeviceBuffer<B>,
        src_origin: Point,
        dst: &mut DeviceBuffer<B>,
        dst_origin: Point,
        extent: Shape,
    ) -> Result<()> {
        if src.elem() != dst.elem() {
            return Err(Error::contract(format!(
                "region copy element mismatch: {} vs {}",
                src.elem(),
                dst.elem()
            )));
        }
        if extent.rank() != src.rank() || extent.rank() != dst.rank() {
            return Err(Error::contract(format!(
                "region copy rank mismatch: extent {} src {} dst {}",
                extent.rank(),
                src.rank(),
                dst.rank()
            )));
        }
        if !region_in_bounds(src.shape(), src_origin, extent) {
            return Err(Error::contract(format!(
                "source region {:?}+{} exceeds {}",
                src_origin,
                extent,
                src.shape()
            )));
        }
        if !region_in_bounds(dst.shape(), dst_origin, extent) {
            return Err(Error::contract(format!(
                "destination region {:?}+{} exceeds {}",
                dst_origin,
                extent,
                dst.shape()
            )));
        }
        B::buffer_copy_region_impl(self, src, src_origin, dst, dst_origin, extent)
    }
}

impl<B> BufferUpload<B> for Module<B>
where
    B: Backend + BufferUploadImpl<B>,
{
    fn upload<T: Element>(&self, src: &[T], dst: &mut DeviceBuffer<B>) -> Result<()> {
        if T::ELEM != dst.elem() {
            return Err(Error::contract(format!(
                "upload element mismatch: host {} vs device {}",
                T::ELEM,
                dst.elem()
            )));
        }
        if src.len() != dst.shape().volume() {
            return Err(Error::contract(format!(
                "upload length {} does not fill {}",
                src.len(),
                dst.shape()
            )));
        }
        B::buffer_upload_impl(self, src, dst)
    }
}

impl<B> BufferDownload<B> for Module<B>
where
    B: Backend + BufferDownloadImpl<B>,
{
    fn download<T: Element>(&self, src: &DeviceBuffer<B>) -> Result<Vec<T>> {
        if T::ELEM != src.elem() {
            return Err(Error::contract(format!(
                "download element mismatch: host {} vs device {}",
                T::ELEM,
                src.elem()
            )));
        }
        B::buffer_download_impl(self, src)
    }
}
