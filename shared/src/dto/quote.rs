use serde::{Deserialize, Serialize};

/// Vote relation counter as serialized by the backend (`"_count": {"voted_by": n}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteCount {
    #[serde(default)]
    pub voted_by: u32,
}

/// A quote as returned by the backend. Read-mostly on the client: vote counts
/// and the `has_voted` flag always come from the backend, never from local
/// bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub id: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub created_by_id: Option<String>,
    /// Whether the current user has voted for this quote.
    #[serde(default)]
    pub has_voted: bool,
    #[serde(rename = "_count", default)]
    pub count: VoteCount,
}

impl Quote {
    /// Backend-reported vote count.
    pub fn vote_count(&self) -> u32 {
        self.count.voted_by
    }
}

/// Quote list envelope: `{ "data": [Quote, ...] }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteListResponse {
    pub data: Vec<Quote>,
}

/// Create/update body. The backend names the content field `quote`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteBody {
    pub quote: String,
    pub author: String,
}

/// Sort keys accepted by `GET /quote?sortBy=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortBy {
    UpdatedAt,
    CreatedAt,
    Votes,
}

impl SortBy {
    /// All sort keys in display order.
    pub fn all() -> &'static [SortBy] {
        &[SortBy::UpdatedAt, SortBy::CreatedAt, SortBy::Votes]
    }

    /// Wire value for the `sortBy` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::UpdatedAt => "updated_at",
            SortBy::CreatedAt => "created_at",
            SortBy::Votes => "votes",
        }
    }

    /// Label for the sort selector.
    pub fn label(&self) -> &'static str {
        match self {
            SortBy::UpdatedAt => "Last updated",
            SortBy::CreatedAt => "Newest first",
            SortBy::Votes => "Most voted",
        }
    }
}

impl Default for SortBy {
    fn default() -> Self {
        SortBy::UpdatedAt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_wire_format() {
        let json = r#"{
            "id": "q1",
            "content": "Stay hungry",
            "author": "Jobs",
            "created_at": "2024-05-01T10:00:00.000Z",
            "updated_at": "2024-05-02T10:00:00.000Z",
            "created_by_id": "1",
            "has_voted": true,
            "_count": { "voted_by": 3 }
        }"#;

        let quote: Quote = serde_json::from_str(json).expect("valid quote");
        assert_eq!(quote.id, "q1");
        assert_eq!(quote.content, "Stay hungry");
        assert_eq!(quote.author, "Jobs");
        assert_eq!(quote.vote_count(), 3);
        assert!(quote.has_voted);
    }

    #[test]
    fn test_quote_missing_count_defaults_to_zero() {
        let json = r#"{
            "id": "q2",
            "content": "c",
            "author": "a",
            "created_at": "2024-05-01T10:00:00.000Z",
            "updated_at": "2024-05-01T10:00:00.000Z"
        }"#;

        let quote: Quote = serde_json::from_str(json).expect("valid quote");
        assert_eq!(quote.vote_count(), 0);
        assert!(!quote.has_voted);
        assert!(quote.created_by_id.is_none());
    }

    #[test]
    fn test_quote_list_envelope() {
        let json = r#"{"data":[]}"#;
        let list: QuoteListResponse = serde_json::from_str(json).expect("valid list");
        assert!(list.data.is_empty());
    }

    #[test]
    fn test_sort_by_wire_values() {
        assert_eq!(SortBy::UpdatedAt.as_str(), "updated_at");
        assert_eq!(SortBy::CreatedAt.as_str(), "created_at");
        assert_eq!(SortBy::Votes.as_str(), "votes");
        assert_eq!(SortBy::default(), SortBy::UpdatedAt);
    }
}
