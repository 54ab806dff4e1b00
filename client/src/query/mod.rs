//! Data-fetching layer: keyed query cache, search debouncing.

pub mod cache;
pub mod debounce;
pub mod key;

pub use cache::{QueryCache, QueryState};
pub use debounce::Debouncer;
pub use key::QueryKey;
