use serde::{Deserialize, Serialize};

/// One bar of the quotes-by-creator chart (`GET /chart/quotes-by-creator`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatorQuoteCount {
    pub username: String,
    #[serde(rename = "quoteCount")]
    pub quote_count: u32,
}

/// One bar of the top-voted-quotes chart (`GET /chart/top-voted-quotes`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopVotedQuote {
    pub content: String,
    #[serde(rename = "voteCount")]
    pub vote_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creator_quote_count_wire_format() {
        let json = r#"[{"username":"alice","quoteCount":5},{"username":"bob","quoteCount":2}]"#;
        let items: Vec<CreatorQuoteCount> = serde_json::from_str(json).expect("valid payload");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].username, "alice");
        assert_eq!(items[0].quote_count, 5);
    }

    #[test]
    fn test_top_voted_wire_format() {
        let json = r#"[{"content":"Stay hungry","voteCount":9}]"#;
        let items: Vec<TopVotedQuote> = serde_json::from_str(json).expect("valid payload");
        assert_eq!(items[0].content, "Stay hungry");
        assert_eq!(items[0].vote_count, 9);
    }
}
