pub mod providers;

use serde::Deserialize;

/// Search provider abstraction - the dispatcher only sees this trait
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    /// Perform one search and return the parsed organic results
    async fn search(&self, query: &str) -> Result<SearchResults, SearchError>;
}

/// Search results container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    /// Organic result entries, in upstream order
    pub items: Vec<SearchResult>,
}

/// Individual organic search result
///
/// The upstream payload may omit any of these fields; each falls back to
/// "N/A" during deserialization so the formatter never sees missing data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    /// Page title
    #[serde(default = "placeholder")]
    pub title: String,
    /// Page URL
    #[serde(default = "placeholder")]
    pub link: String,
    /// Snippet of the page content
    #[serde(default = "placeholder")]
    pub snippet: String,
}

pub(crate) fn placeholder() -> String {
    "N/A".to_string()
}

/// Search-related errors
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The provider answered with an explicit error payload
    #[error("upstream error: {0}")]
    Api(String),

    /// The bounded request timeout elapsed
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(reqwest::Error),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout
        } else {
            SearchError::Network(err)
        }
    }
}
