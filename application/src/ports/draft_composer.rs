//! Draft composer port
//!
//! Writes the subject and body once a planner has gathered the facts.

use crate::use_cases::draft_takedown::TakedownError;
use async_trait::async_trait;
use takedown_domain::DraftFacts;

/// Subject and body of a composed email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedEmail {
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait DraftComposer: Send + Sync {
    async fn compose(&self, facts: &DraftFacts<'_>) -> Result<ComposedEmail, TakedownError>;
}
