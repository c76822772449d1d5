mod buffer;
mod complex;
mod module;
mod shape;

pub use buffer::*;
pub use complex::*;
pub use module::*;
pub use shape::*;
