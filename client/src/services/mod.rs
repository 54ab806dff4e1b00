//! Service layer: backend API adapter and session lifecycle.

pub mod api;
pub mod session;

pub use api::ApiClient;
pub use session::{Session, SessionManager};
