//! Screen render functions, one module per screen

pub mod auth;
pub mod chart;
pub mod quotes;
