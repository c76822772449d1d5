use crate::{
    Result,
    hal::{
        api::ModuleNew,
        layouts::{Backend, Module},
        oep::ModuleNewImpl,
    },
};

impl<B> ModuleNew<B> for Module<B>
where
    B: Backend + ModuleNewImpl<B>,
{
    fn new() -> Result<Module<B>> {
        B::module_new_impl()
    }
}
