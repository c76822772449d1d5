use crate::{
    Error,
    hal::{
        api::{BufferAlloc, BufferCopy, BufferCopyRegion, BufferDownload, BufferFill, BufferUpload},
        layouts::{Backend, DeviceBuffer, ElemType, Module, ORIGIN, Shape},
    },
};

pub fn test_buffer_upload_download<B: Backend>(module: &Module<B>)
where
    Module<B>: BufferAlloc<B> + BufferUpload<B> + BufferDownload<B>,
{
    let shape: Shape = Shape::d2(8, 5);
    let data: Vec<u16> = (0..shape.volume() as u16).collect();

    let mut buf: DeviceBuffer<B> = module.alloc(shape, ElemType::U16).unwrap();
    module.upload(&data, &mut buf).unwrap();
    let back: Vec<u16> = module.download(&buf).unwrap();
    assert_eq!(data, back);

    // Host/device element mismatch is rejected before any transfer.
    let err = module.download::<f32>(&buf).unwrap_err();
    assert!(matches!(err, Error::ContractViolation(_)));
}

pub fn test_buffer_copy_convert<B: Backend>(module: &Module<B>)
where
    Module<B>: BufferAlloc<B> + BufferCopy<B> + BufferUpload<B> + BufferDownload<B>,
{
    let shape: Shape = Shape::d2(6, 7);
    let data: Vec<u16> = (0..shape.volume() as u16).map(|v| v * 3).collect();

    let mut src: DeviceBuffer<B> = module.alloc(shape, ElemType::U16).unwrap();
    module.upload(&data, &mut src).unwrap();

    let mut dst: DeviceBuffer<B> = module.alloc(shape, ElemType::F32).unwrap();
    module.copy(&src, &mut dst).unwrap();

    let out: Vec<f32> = module.download(&dst).unwrap();
    for (o, v) in out.iter().zip(data.iter()) {
        assert_eq!(*o, *v as f32);
    }

    // Copies preserve the source.
    let same: Vec<u16> = module.download(&src).unwrap();
    assert_eq!(data, same);
}

pub fn test_buffer_copy_shape_mismatch<B: Backend>(module: &Module<B>)
where
    Module<B>: BufferAlloc<B> + BufferCopy<B>,
{
    let src: DeviceBuffer<B> = module.alloc(Shape::d2(4, 4), ElemType::F32).unwrap();
    let mut dst: DeviceBuffer<B> = module.alloc(Shape::d2(4, 5), ElemType::F32).unwrap();
    let err = module.copy(&src, &mut dst).unwrap_err();
    assert!(matches!(err, Error::ContractViolation(_)));
}

pub fn test_buffer_fill<B: Backend>(module: &Module<B>)
where
    Module<B>: BufferAlloc<B> + BufferFill<B> + BufferDownload<B>,
{
    let mut buf: DeviceBuffer<B> = module.alloc(Shape::d3(4, 3, 2), ElemType::F32).unwrap();
    module.fill(&mut buf, 2.5).unwrap();
    let out: Vec<f32> = module.download(&buf).unwrap();
    assert!(out.iter().all(|&v| v == 2.5));

    let mut ints: DeviceBuffer<B> = module.alloc(Shape::d2(4, 3), ElemType::I32).unwrap();
    let err = module.fill(&mut ints, 0.0).unwrap_err();
    assert!(matches!(err, Error::ContractViolation(_)));
}

pub fn test_buffer_copy_region<B: Backend>(module: &Module<B>)
where
    Module<B>: BufferAlloc<B> + BufferFill<B> + BufferCopyRegion<B> + BufferUpload<B> + BufferDownload<B>,
{
    let src_shape: Shape = Shape::d2(6, 4);
    let data: Vec<f32> = (0..src_shape.volume()).map(|v| v as f32).collect();
    let mut src: DeviceBuffer<B> = module.alloc(src_shape, ElemType::F32).unwrap();
    module.upload(&data, &mut src).unwrap();

    let dst_shape: Shape = Shape::d2(7, 5);
    let mut dst: DeviceBuffer<B> = module.alloc(dst_shape, ElemType::F32).unwrap();
    module.fill(&mut dst, 0.0).unwrap();

    let extent: Shape = Shape::d2(3, 2);
    module.copy_region(&src, [1, 1, 0], &mut dst, [2, 0, 0], extent).unwrap();

    let out: Vec<f32> = module.download(&dst).unwrap();
    for y in 0..5 {
        for x in 0..7 {
            let expect: f32 = if (2..5).contains(&x) && y < 2 {
                data[(y + 1) * 6 + (x - 1)]
            } else {
                0.0
            };
            assert_eq!(out[y * 7 + x], expect, "at ({}, {})", x, y);
        }
    }

    // Out-of-bounds regions are rejected.
    let err = module
        .copy_region(&src, [4, 3, 0], &mut dst, ORIGIN, Shape::d2(3, 2))
        .unwrap_err();
    assert!(matches!(err, Error::ContractViolation(_)));
}
