#[cfg(feature = "clfft")]
pub mod clfft;
#[cfg(feature = "cpu-ref")]
pub mod cpu_ref;
