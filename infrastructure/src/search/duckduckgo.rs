//! DuckDuckGo HTML results page search.
//!
//! Queries `html.duckduckgo.com/html/` and scrapes the result list:
//!
//! | Selector | Field |
//! |----------|-------|
//! | `.result` | one hit (ads, `.result--ad`, are skipped) |
//! | `.result__a` | title and link |
//! | `.result__snippet` | snippet text |
//!
//! Result links are DuckDuckGo redirects; the target is taken from the
//! `uddg` query parameter when present.
//!
//! Search never fails: transport and parse problems are logged and an empty
//! result is returned.

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use std::time::Duration;
use takedown_application::ports::contact_finder::ContactFinderPort;
use takedown_domain::core::string::collapse_whitespace;
use takedown_domain::{SearchResult, Snippet};
use tracing::{debug, warn};

use crate::config::FileSearchConfig;

static RESULT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".result").expect("result selector is valid"));
static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".result__a").expect("title selector is valid"));
static SNIPPET: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".result__snippet").expect("snippet selector is valid"));

/// Fetches the raw results page for a query.
#[async_trait]
pub trait HtmlSource: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<String, String>;
}

/// [`HtmlSource`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestHtmlSource {
    client: reqwest::Client,
    endpoint: String,
}

impl ReqwestHtmlSource {
    pub fn new(config: &FileSearchConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl HtmlSource for ReqwestHtmlSource {
    async fn fetch(&self, query: &str) -> Result<String, String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| format!("Search request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ));
        }

        response
            .text()
            .await
            .map_err(|e| format!("Failed to read response body: {}", e))
    }
}

/// Contact finder backed by DuckDuckGo.
pub struct DuckDuckGoSearch<H: HtmlSource = ReqwestHtmlSource> {
    source: H,
    max_results: usize,
}

impl DuckDuckGoSearch {
    pub fn from_config(config: &FileSearchConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(ReqwestHtmlSource::new(config)?, config.max_results))
    }
}

impl<H: HtmlSource> DuckDuckGoSearch<H> {
    pub fn new(source: H, max_results: usize) -> Self {
        Self {
            source,
            max_results,
        }
    }
}

#[async_trait]
impl<H: HtmlSource> ContactFinderPort for DuckDuckGoSearch<H> {
    async fn search(&self, query: &str) -> SearchResult {
        let html = match self.source.fetch(query).await {
            Ok(html) => html,
            Err(e) => {
                warn!(query = %query, error = %e, "Web search failed, returning no results");
                return SearchResult::empty(query);
            }
        };

        let snippets = parse_results(&html, self.max_results);
        if snippets.is_empty() && !html.contains("result") {
            warn!(query = %query, "Search page had no recognizable result list");
        }
        debug!(query = %query, hits = snippets.len(), "Web search finished");
        SearchResult::new(query, snippets)
    }
}

/// Parse a DuckDuckGo HTML results page into at most `max` snippets, in page order.
pub fn parse_results(html: &str, max: usize) -> Vec<Snippet> {
    let document = Html::parse_document(html);
    document
        .select(&RESULT)
        .filter(|result| !is_ad(result))
        .filter_map(|result| {
            let anchor = result.select(&TITLE).next()?;
            let title = text_of(&anchor);
            if title.is_empty() {
                return None;
            }
            let url = anchor.value().attr("href").map(target_url).unwrap_or_default();
            let snippet = result
                .select(&SNIPPET)
                .next()
                .map(|s| text_of(&s))
                .unwrap_or_default();
            Some(Snippet::new(title, snippet, url))
        })
        .take(max)
        .collect()
}

fn is_ad(result: &ElementRef<'_>) -> bool {
    result.value().classes().any(|c| c == "result--ad")
}

fn text_of(element: &ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Unwrap `//duckduckgo.com/l/?uddg=<target>` redirect links.
fn target_url(href: &str) -> String {
    let absolute = if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    };
    reqwest::Url::parse(&absolute)
        .ok()
        .and_then(|url| {
            url.query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or(absolute)
}
