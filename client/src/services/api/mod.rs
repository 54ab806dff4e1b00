//! Backend API adapter: one resource module per backend controller, all
//! sharing the configured [`ApiClient`].

pub mod auth;
pub mod chart;
pub mod client;
pub mod quote;

pub use client::ApiClient;
