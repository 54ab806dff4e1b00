//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::core::error::Result;
use async_trait::async_trait;
use shared::{AuthResponse, CreatorQuoteCount, Quote, QuoteBody, SortBy, TopVotedQuote};

/// Trait covering every backend operation the client performs.
///
/// The app state holds an `Arc<dyn ApiService>`, so tests can swap the real
/// [`crate::services::api::ApiClient`] for a mock backend.
///
/// Mutation operations return `Ok(())` on the documented success status; the
/// client never parses mutation response bodies because every mutation is
/// followed by a refetch of the dependent query.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Register a new user (`POST /auth/register`, 201)
    async fn register(&self, username: String, email: String, password: String)
        -> Result<AuthResponse>;

    /// Exchange credentials for a user record and access token
    /// (`POST /auth/login`, 200)
    async fn login(&self, identifier: String, password: String) -> Result<AuthResponse>;

    /// List/search quotes (`GET /quote?content=&sortBy=`, 200)
    async fn list_quotes(&self, token: &str, content: &str, sort_by: SortBy)
        -> Result<Vec<Quote>>;

    /// Create a quote (`POST /quote`, 201)
    async fn create_quote(&self, token: &str, body: QuoteBody) -> Result<()>;

    /// Update a quote (`PATCH /quote/:id`, 200)
    async fn update_quote(&self, token: &str, id: &str, body: QuoteBody) -> Result<()>;

    /// Toggle the current user's vote on a quote (`PATCH /quote/vote/:id`, 200)
    async fn vote_quote(&self, token: &str, id: &str) -> Result<()>;

    /// Quotes-per-creator aggregate (`GET /chart/quotes-by-creator`, 200)
    async fn quotes_by_creator(&self, token: &str) -> Result<Vec<CreatorQuoteCount>>;

    /// Top-voted-quotes aggregate (`GET /chart/top-voted-quotes`, 200)
    async fn top_voted_quotes(&self, token: &str) -> Result<Vec<TopVotedQuote>>;
}
