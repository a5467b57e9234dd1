//! Web search results and contact extraction

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[a-z0-9._%+-]+@[a-z0-9-]+(?:\.[a-z0-9-]+)*\.[a-z]{2,}\b")
        .expect("email pattern is valid")
});

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub title: String,
    pub snippet: String,
    pub url: String,
}

impl Snippet {
    pub fn new(
        title: impl Into<String>,
        snippet: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            url: url.into(),
        }
    }
}

/// Ordered search hits for one query. Empty is a valid result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub snippets: Vec<Snippet>,
}

impl SearchResult {
    pub fn new(query: impl Into<String>, snippets: Vec<Snippet>) -> Self {
        Self {
            query: query.into(),
            snippets,
        }
    }

    pub fn empty(query: impl Into<String>) -> Self {
        Self::new(query, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// Text handed back to the planner as a tool result
    pub fn render(&self) -> String {
        if self.snippets.is_empty() {
            return format!("No results found for: {}", self.query);
        }
        let mut output = format!("Search results for: {}\n\n", self.query);
        for (i, s) in self.snippets.iter().enumerate() {
            output.push_str(&format!("{}. {}\n   {}\n   {}\n\n", i + 1, s.title, s.url, s.snippet));
        }
        output.trim_end().to_string()
    }

    /// First plausible contact address in the snippets.
    ///
    /// Addresses containing `abuse` win over any other address; otherwise the
    /// first address in result order is returned.
    pub fn contact_email(&self) -> Option<String> {
        let all: Vec<String> = self
            .snippets
            .iter()
            .flat_map(|s| {
                extract_emails(&s.title)
                    .into_iter()
                    .chain(extract_emails(&s.snippet))
            })
            .collect();

        all.iter()
            .find(|e| e.contains("abuse"))
            .or_else(|| all.first())
            .cloned()
    }
}

/// All email addresses in `text`, lowercased, in order of appearance
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches('.').to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_emails() {
        let emails = extract_emails("Write to Abuse@Example-Registrar.com or legal@example.org.");
        assert_eq!(emails, vec!["abuse@example-registrar.com", "legal@example.org"]);
    }

    #[test]
    fn test_contact_email_prefers_abuse() {
        let result = SearchResult::new(
            "q",
            vec![
                Snippet::new("Support", "Contact support@registrar.com", "https://a"),
                Snippet::new("Abuse", "Abuse contact: abuse@registrar.com", "https://b"),
            ],
        );
        assert_eq!(result.contact_email().as_deref(), Some("abuse@registrar.com"));
    }

    #[test]
    fn test_contact_email_falls_back_to_first() {
        let result = SearchResult::new(
            "q",
            vec![Snippet::new("Legal", "legal@registrar.com handles notices", "https://a")],
        );
        assert_eq!(result.contact_email().as_deref(), Some("legal@registrar.com"));
        assert_eq!(SearchResult::empty("q").contact_email(), None);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(SearchResult::empty("abc").render(), "No results found for: abc");
    }
}
