//! Query keys identifying cached server reads.

/// Identifies one cached server read: an operation name plus the parameters
/// the read depends on. Two keys with the same operation but different
/// parameters are distinct cache entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    operation: &'static str,
    params: Vec<String>,
}

impl QueryKey {
    /// The quote list, keyed on the committed search text and sort order.
    pub fn quotes(content: &str, sort_by: shared::SortBy) -> Self {
        Self {
            operation: "quotes",
            params: vec![content.to_string(), sort_by.as_str().to_string()],
        }
    }

    /// The quotes-per-creator aggregate.
    pub fn quotes_by_creator() -> Self {
        Self {
            operation: "quotes_by_creator",
            params: Vec::new(),
        }
    }

    /// The top-voted-quotes aggregate.
    pub fn top_voted_quotes() -> Self {
        Self {
            operation: "top_voted_quotes",
            params: Vec::new(),
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SortBy;

    #[test]
    fn test_same_params_same_key() {
        assert_eq!(
            QueryKey::quotes("life", SortBy::Votes),
            QueryKey::quotes("life", SortBy::Votes)
        );
    }

    #[test]
    fn test_different_params_different_keys() {
        assert_ne!(
            QueryKey::quotes("life", SortBy::Votes),
            QueryKey::quotes("life", SortBy::CreatedAt)
        );
        assert_ne!(
            QueryKey::quotes("life", SortBy::Votes),
            QueryKey::quotes("", SortBy::Votes)
        );
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(QueryKey::quotes("", SortBy::UpdatedAt).operation(), "quotes");
        assert_eq!(QueryKey::quotes_by_creator().operation(), "quotes_by_creator");
        assert_eq!(QueryKey::top_voted_quotes().operation(), "top_voted_quotes");
    }
}
