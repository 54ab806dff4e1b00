//! Data Transfer Objects for backend API communication.

pub mod auth;
pub mod chart;
pub mod quote;

pub use auth::*;
pub use chart::*;
pub use quote::*;
