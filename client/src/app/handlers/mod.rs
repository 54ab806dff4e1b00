//! Internal handler functions behind the public [`crate::app::App`] methods.

pub(crate) mod auth;
pub(crate) mod navigation;
pub(crate) mod quotes;
