use crate::{
    DEFAULTALIGN, Result, alloc_aligned_u8, cast, cast_mut,
    hal::{
        layouts::{DeviceBuffer, ElemType, Element, Module, Point, Shape},
        oep::{
            BufferAllocImpl, BufferCopyImpl, BufferCopyRegionImpl, BufferDownloadImpl, BufferFillImpl, BufferUploadImpl,
        },
    },
    implementation::cpu_ref::module::{CpuRef, HostMem},
};

use std::sync::atomic::Ordering;

/// Logical byte view of a buffer's memory. The backing vector may be
/// longer than the buffer because allocations are rounded up to the
/// default alignment.
pub(super) fn bytes(buf: &DeviceBuffer<CpuRef>) -> &[u8] {
    let len: usize = buf.shape().volume() * buf.elem().size_of();
    unsafe { &(&(*buf.ptr()).bytes)[..len] }
}

pub(super) fn bytes_mut(buf: &mut DeviceBuffer<CpuRef>) -> &mut [u8] {
    let len: usize = buf.shape().volume() * buf.elem().size_of();
    unsafe { &mut (&mut (*buf.ptr()).bytes)[..len] }
}

pub(super) fn as_f32(buf: &DeviceBuffer<CpuRef>) -> &[f32] {
    debug_assert!(buf.elem().is_float());
    cast(bytes(buf))
}

pub(super) fn as_f32_mut(buf: &mut DeviceBuffer<CpuRef>) -> &mut [f32] {
    debug_assert!(buf.elem().is_float());
    cast_mut(bytes_mut(buf))
}

fn load(bytes: &[u8], elem: ElemType, i: usize) -> f32 {
    match elem {
        ElemType::U8 => bytes[i] as f32,
        ElemType::U16 => cast::<u8, u16>(bytes)[i] as f32,
        ElemType::I32 => cast::<u8, i32>(bytes)[i] as f32,
        ElemType::F32 => cast::<u8, f32>(bytes)[i],
    }
}

fn store(bytes: &mut [u8], elem: ElemType, i: usize, v: f32) {
    match elem {
        ElemType::U8 => bytes[i] = v as u8,
        ElemType::U16 => cast_mut::<u8, u16>(bytes)[i] = v as u16,
        ElemType::I32 => cast_mut::<u8, i32>(bytes)[i] = v as i32,
        ElemType::F32 => cast_mut::<u8, f32>(bytes)[i] = v,
    }
}

unsafe impl BufferAllocImpl<CpuRef> for CpuRef {
    fn buffer_alloc_impl(module: &Module<CpuRef>, shape: Shape, elem: ElemType) -> Result<DeviceBuffer<CpuRef>> {
        let data: Vec<u8> = alloc_aligned_u8(shape.volume() * elem.size_of(), DEFAULTALIGN)?;
        let ctx = module.handle();
        let mem: Box<HostMem> = Box::new(HostMem {
            bytes: data,
            releases: ctx.releases.clone(),
        });
        ctx.allocations.fetch_add(1, Ordering::Relaxed);
        Ok(unsafe { DeviceBuffer::from_raw_parts(Box::into_raw(mem), shape, elem) })
    }
}

unsafe impl BufferCopyImpl<CpuRef> for CpuRef {
    fn buffer_copy_impl(_module: &Module<CpuRef>, src: &DeviceBuffer<CpuRef>, dst: &mut DeviceBuffer<CpuRef>) -> Result<()> {
        if src.elem() == dst.elem() {
            let sb: &[u8] = bytes(src);
            bytes_mut(dst).copy_from_slice(sb);
            return Ok(());
        }
        let n: usize = src.shape().volume();
        let (src_elem, dst_elem) = (src.elem(), dst.elem());
        let sb: &[u8] = bytes(src);
        let db: &mut [u8] = bytes_mut(dst);
        for i in 0..n {
            store(db, dst_elem, i, load(sb, src_elem, i));
        }
        Ok(())
    }
}

unsafe impl BufferFillImpl<CpuRef> for CpuRef {
    fn buffer_fill_impl(_module: &Module<CpuRef>, dst: &mut DeviceBuffer<CpuRef>, value: f32) -> Result<()> {
        as_f32_mut(dst).fill(value);
        Ok(())
    }
}

unsafe impl BufferCopyRegionImpl<CpuRef> for CpuRef {
    fn buffer_copy_region_impl(
        _module: &Module<CpuRef>,
        src: &DeviceBuffer<CpuRef>,
        src_origin: Point,
        dst: &mut DeviceBuffer<CpuRef>,
        dst_origin: Point,
        extent: Shape,
    ) -> Result<()> {
        let es: usize = src.elem().size_of();
        let [sw, sh, _] = src.shape().dims();
        let [dw, dh, _] = dst.shape().dims();
        let [ew, eh, ed] = extent.dims();
        let row_bytes: usize = ew * es;

        // Rows are contiguous along the first axis; one memcpy per row.
        let src_bytes: &[u8] = bytes(src);
        let dst_bytes: &mut [u8] = bytes_mut(dst);
        for z in 0..ed {
            for y in 0..eh {
                let s: usize =
                    (((src_origin[2] + z) * sh + src_origin[1] + y) * sw + src_origin[0]) * es;
                let d: usize =
                    (((dst_origin[2] + z) * dh + dst_origin[1] + y) * dw + dst_origin[0]) * es;
                dst_bytes[d..d + row_bytes].copy_from_slice(&src_bytes[s..s + row_bytes]);
            }
        }
        Ok(())
    }
}

unsafe impl BufferUploadImpl<CpuRef> for CpuRef {
    fn buffer_upload_impl<T: Element>(_module: &Module<CpuRef>, src: &[T], dst: &mut DeviceBuffer<CpuRef>) -> Result<()> {
        bytes_mut(dst).copy_from_slice(cast::<T, u8>(src));
        Ok(())
    }
}

unsafe impl BufferDownloadImpl<CpuRef> for CpuRef {
    fn buffer_download_impl<T: Element>(_module: &Module<CpuRef>, src: &DeviceBuffer<CpuRef>) -> Result<Vec<T>> {
        Ok(cast::<u8, T>(bytes(src)).to_vec())
    }
}
