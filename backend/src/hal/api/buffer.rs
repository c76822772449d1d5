use crate::{
    Result,
    hal::layouts::{Backend, DeviceBuffer, ElemType, Element, Point, Shape},
};

pub trait BufferAlloc<B: Backend> {
    fn alloc(&self, shape: Shape, elem: ElemType) -> Result<DeviceBuffer<B>>;

    fn alloc_like(&self, src: &DeviceBuffer<B>) -> Result<DeviceBuffer<B>> {
        self.alloc(src.shape(), src.elem())
    }
}

/// Whole-buffer copy. Shapes must match; when the element types differ the
/// values are converted in transit.
pub trait BufferCopy<B: Backend> {
    fn copy(&self, src: &DeviceBuffer<B>, dst: &mut DeviceBuffer<B>) -> Result<()>;
}

/// Fills an f32 buffer with a constant.
pub trait BufferFill<B: Backend> {
    fn fill(&self, dst: &mut DeviceBuffer<B>, value: f32) -> Result<()>;
}

/// Copies an `extent`-sized sub-region from `src` at `src_origin` to `dst`
/// at `dst_origin`. Element types must match exactly; both regions must lie
/// within their buffers.
pub trait BufferCopyRegion<B: Backend> {
    fn copy_region(
        &self,
        src: &DeviceBuffer<B>,
        src_origin: Point,
        dst: &mut DeviceBuffer<B>,
        dst_origin: Point,
        extent: Shape,
    ) -> Result<()>;
}

pub trait BufferUpload<B: Backend> {
    fn upload<T: Element>(&self, src: &[T], dst: &mut DeviceBuffer<B>) -> Result<()>;
}

pub trait BufferDownload<B: Backend> {
    fn download<T: Element>(&self, src: &DeviceBuffer<B>) -> Result<Vec<T>>;
}
