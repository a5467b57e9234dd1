//! Web search adapters

pub mod duckduckgo;

pub use duckduckgo::{DuckDuckGoSearch, HtmlSource, ReqwestHtmlSource, parse_results};
