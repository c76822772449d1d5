use std::fmt;

use crate::{Error, Result};

/// Element type of a device buffer. The pipeline operates on `F32`; the
/// integer types exist so callers can hand over raw acquisition data and
/// have it converted on copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElemType {
    U8,
    U16,
    I32,
    F32,
}

impl ElemType {
    pub fn size_of(&self) -> usize {
        match self {
            ElemType::U8 => 1,
            ElemType::U16 => 2,
            ElemType::I32 | ElemType::F32 => 4,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, ElemType::F32)
    }
}

impl fmt::Display for ElemType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ElemType::U8 => write!(f, "u8"),
            ElemType::U16 => write!(f, "u16"),
            ElemType::I32 => write!(f, "i32"),
            ElemType::F32 => write!(f, "f32"),
        }
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for f32 {}
}

/// Host scalars that can travel through typed upload/download.
pub trait Element: Copy + private::Sealed {
    const ELEM: ElemType;
}

impl Element for u8 {
    const ELEM: ElemType = ElemType::U8;
}
impl Element for u16 {
    const ELEM: ElemType = ElemType::U16;
}
impl Element for i32 {
    const ELEM: ElemType = ElemType::I32;
}
impl Element for f32 {
    const ELEM: ElemType = ElemType::F32;
}

/// Buffer extent. The native transform paths exist for rank 2 and rank 3
/// only, so the rank is a closed variant rather than a runtime length.
/// Dimension sizes are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    D2(usize, usize),
    D3(usize, usize, usize),
}

/// Per-axis offset into a buffer. The third coordinate is ignored for
/// rank-2 shapes.
pub type Point = [usize; 3];

pub const ORIGIN: Point = [0, 0, 0];

impl Shape {
    pub fn d2(w: usize, h: usize) -> Self {
        assert!(w > 0 && h > 0, "dimensions must be positive, got {}x{}", w, h);
        Shape::D2(w, h)
    }

    pub fn d3(w: usize, h: usize, d: usize) -> Self {
        assert!(w > 0 && h > 0 && d > 0, "dimensions must be positive, got {}x{}x{}", w, h, d);
        Shape::D3(w, h, d)
    }

    pub fn rank(&self) -> usize {
        match self {
            Shape::D2(..) => 2,
            Shape::D3(..) => 3,
        }
    }

    /// Dimension sizes padded to three axes; the depth of a rank-2 shape
    /// reads as 1 so row/plane arithmetic works uniformly.
    pub fn dims(&self) -> [usize; 3] {
        match *self {
            Shape::D2(w, h) => [w, h, 1],
            Shape::D3(w, h, d) => [w, h, d],
        }
    }

    pub fn dim(&self, axis: usize) -> usize {
        self.dims()[axis]
    }

    pub fn width(&self) -> usize {
        self.dim(0)
    }

    pub fn volume(&self) -> usize {
        let [w, h, d] = self.dims();
        w * h * d
    }

    /// Applies `f` to every axis size, preserving rank.
    pub fn map(&self, f: impl Fn(usize) -> usize) -> Shape {
        match *self {
            Shape::D2(w, h) => Shape::d2(f(w), f(h)),
            Shape::D3(w, h, d) => Shape::d3(f(w), f(h), f(d)),
        }
    }

    /// Combines two shapes axis by axis. Rank mismatch is a caller
    /// contract violation.
    pub fn zip_map(&self, other: &Shape, f: impl Fn(usize, usize) -> usize) -> Result<Shape> {
        match (*self, *other) {
            (Shape::D2(a0, a1), Shape::D2(b0, b1)) => Ok(Shape::d2(f(a0, b0), f(a1, b1))),
            (Shape::D3(a0, a1, a2), Shape::D3(b0, b1, b2)) => Ok(Shape::d3(f(a0, b0), f(a1, b1), f(a2, b2))),
            _ => Err(Error::contract(format!(
                "rank mismatch: {} vs {}",
                self.rank(),
                other.rank()
            ))),
        }
    }

    /// Replaces the first (fastest-varying) axis, used to derive the packed
    /// complex extent from a spatial extent.
    pub fn with_width(&self, w: usize) -> Shape {
        match *self {
            Shape::D2(_, h) => Shape::d2(w, h),
            Shape::D3(_, h, d) => Shape::d3(w, h, d),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Shape::D2(w, h) => write!(f, "{}x{}", w, h),
            Shape::D3(w, h, d) => write!(f, "{}x{}x{}", w, h, d),
        }
    }
}
