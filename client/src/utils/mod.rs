pub mod runtime;
pub mod validation;
