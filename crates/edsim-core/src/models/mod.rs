pub mod form;
pub mod snapshot;
