//! Contact finder (web search) port

use async_trait::async_trait;
use takedown_domain::SearchResult;

/// Free-text web search.
///
/// Never fails: transport or parse problems are logged by the adapter and
/// reported as an empty result.
#[async_trait]
pub trait ContactFinderPort: Send + Sync {
    async fn search(&self, query: &str) -> SearchResult;
}
