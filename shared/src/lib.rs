//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the QuoteDeck desktop client
//! and the backend REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication payloads (login, register)
//!   - **[`dto::quote`]**: Quote resources and list queries
//!   - **[`dto::chart`]**: Aggregate chart payloads
//! - **[`utils`]**: Small display helpers shared by the client UI
//!
//! ## Wire Format
//!
//! Field names match the backend exactly. Most fields are snake_case on the
//! wire; the few camelCase fields (`sortBy`, `quoteCount`, `voteCount`) and
//! the `_count` relation carry explicit `#[serde(rename)]` attributes so the
//! Rust side can stay idiomatic.

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
