use std::fmt;

use crate::hal::layouts::{Backend, DeviceBuffer, Shape};

/// A frequency-domain buffer in the backend's packed complex layout,
/// together with the spatial extent that produced it. The packing (full
/// interleaved spectrum vs Hermitian half-spectrum) is a backend
/// convention; the two operands of a complex multiply and the input of an
/// inverse transform must come from the same backend and spatial extent.
pub struct ComplexBuffer<B: Backend> {
    pub(crate) buf: DeviceBuffer<B>,
    pub(crate) spatial: Shape,
}

impl<B: Backend> ComplexBuffer<B> {
    pub fn from_parts(buf: DeviceBuffer<B>, spatial: Shape) -> Self {
        Self { buf, spatial }
    }

    /// Spatial extent of the signal this spectrum was taken from.
    pub fn spatial(&self) -> Shape {
        self.spatial
    }

    /// Extent of the underlying float buffer (real/imaginary interleaved).
    pub fn packed(&self) -> Shape {
        self.buf.shape()
    }

    pub fn buffer(&self) -> &DeviceBuffer<B> {
        &self.buf
    }

    pub fn buffer_mut(&mut self) -> &mut DeviceBuffer<B> {
        &mut self.buf
    }
}

impl<B: Backend> fmt::Debug for ComplexBuffer<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ComplexBuffer<spatial {} packed {}>", self.spatial, self.buf.shape())
    }
}
