pub mod api;
pub mod delegates;
pub mod layouts;
pub mod oep;
pub mod tests;
