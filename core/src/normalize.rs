use convfft_backend::{
    Result,
    hal::{
        api::{BufferAlloc, BufferCopy},
        layouts::{Backend, DeviceBuffer, ElemType, Module},
    },
};

/// A buffer guaranteed to be f32, remembering whether the normalization
/// allocated a converted copy. An `Owned` copy is released when this
/// value drops; a `Borrowed` buffer stays with its caller.
pub enum Normalized<'a, B: Backend> {
    Borrowed(&'a DeviceBuffer<B>),
    Owned(DeviceBuffer<B>),
}

impl<'a, B: Backend> Normalized<'a, B> {
    pub fn buffer(&self) -> &DeviceBuffer<B> {
        match self {
            Normalized::Borrowed(buf) => buf,
            Normalized::Owned(buf) => buf,
        }
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, Normalized::Owned(_))
    }
}

/// Returns `buf` itself when it is already f32, otherwise a freshly
/// allocated f32 copy with the values converted. The source is never
/// mutated.
pub fn to_f32<'a, B: Backend>(module: &Module<B>, buf: &'a DeviceBuffer<B>) -> Result<Normalized<'a, B>>
where
    Module<B>: BufferAlloc<B> + BufferCopy<B>,
{
    if buf.elem().is_float() {
        return Ok(Normalized::Borrowed(buf));
    }
    let mut out: DeviceBuffer<B> = module.alloc(buf.shape(), ElemType::F32)?;
    module.copy(buf, &mut out)?;
    Ok(Normalized::Owned(out))
}
