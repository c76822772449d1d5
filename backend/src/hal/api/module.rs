use crate::{
    Result,
    hal::layouts::{Backend, Module},
};

pub trait ModuleNew<B: Backend> {
    fn new() -> Result<Module<B>>;
}
