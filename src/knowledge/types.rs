use serde::{Deserialize, Serialize};
use std::fmt;

/// Which lookup pass produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Query and category key contain one another
    Direct,
    /// One of the category keywords occurs in the query
    Fuzzy,
    /// Nothing matched
    Fallback,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Direct => write!(f, "direct"),
            MatchKind::Fuzzy => write!(f, "fuzzy"),
            MatchKind::Fallback => write!(f, "fallback"),
        }
    }
}

/// Outcome of resolving one customer question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    /// The query exactly as received
    pub query: String,
    pub category: String,
    pub answer: String,
    pub match_kind: MatchKind,
    /// Keyword that triggered a fuzzy match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_keyword: Option<String>,
}

impl QueryResult {
    pub fn is_fallback(&self) -> bool {
        self.match_kind == MatchKind::Fallback
    }
}
