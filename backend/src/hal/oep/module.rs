use crate::{
    Result,
    hal::layouts::{Backend, Module},
};

/// # Safety
/// The returned module must own a live, exclusively held native handle.
pub unsafe trait ModuleNewImpl<B: Backend> {
    fn module_new_impl() -> Result<Module<B>>;
}
