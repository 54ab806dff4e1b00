//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use crate::core::error::AppError;
use crate::query::QueryKey;
use crate::services::session::Session;

/// Async task results sent to the main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed
    LoginResult(Result<Session, AppError>),
    /// Registration completed
    RegisterResult(Result<Session, AppError>),
    /// Quote list fetch resolved for one query key
    QuotesResult {
        key: QueryKey,
        result: Result<Vec<shared::Quote>, AppError>,
    },
    /// Quote creation completed
    CreateQuoteResult(Result<(), AppError>),
    /// Quote update completed
    UpdateQuoteResult(Result<(), AppError>),
    /// Vote toggle completed
    VoteQuoteResult {
        id: String,
        result: Result<(), AppError>,
    },
    /// Quotes-per-creator aggregate resolved
    QuotesByCreatorResult(Result<Vec<shared::CreatorQuoteCount>, AppError>),
    /// Top-voted-quotes aggregate resolved
    TopVotedQuotesResult(Result<Vec<shared::TopVotedQuote>, AppError>),
}
