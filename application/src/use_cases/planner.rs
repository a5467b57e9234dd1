//! Planner strategy

use crate::ports::progress::TakedownProgressNotifier;
use crate::use_cases::draft_takedown::TakedownError;
use async_trait::async_trait;
use takedown_domain::{TakedownDraft, TakedownRequest};

/// Decides which capability to call next and when to stop.
///
/// Every implementation honors the same contract: the registrar is looked up
/// before any web search, a search is attempted before the answer, and the
/// result is a complete [`TakedownDraft`] or an error, never a partial draft.
#[async_trait]
pub trait TakedownPlanner: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Whether this planner needs a hosted-model API key
    fn requires_api_key(&self) -> bool;

    async fn plan(
        &self,
        request: &TakedownRequest,
        progress: &dyn TakedownProgressNotifier,
    ) -> Result<TakedownDraft, TakedownError>;
}
