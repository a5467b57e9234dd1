//! Draft Takedown use case
//!
//! Validates the request, runs the configured planner and applies the
//! not-found gate to the final text.

use crate::ports::llm_gateway::GatewayError;
use crate::ports::progress::TakedownProgressNotifier;
use crate::use_cases::planner::TakedownPlanner;
use std::sync::Arc;
use takedown_domain::{
    DomainError, TakedownDraft, TakedownRequestInput, contains_not_found_sentinel,
    export_filename, is_safe_export_name,
};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while preparing a takedown request
#[derive(Error, Debug)]
pub enum TakedownError {
    #[error("{0}")]
    InputValidation(#[from] DomainError),

    #[error("Could not complete the draft: {0}")]
    Orchestration(String),

    #[error(
        "Could not find the email address for takedown requests. Please try again or manually search for the domain registrar's contact information."
    )]
    EmailNotFound {
        /// The gated text, kept for an explicit incomplete export
        text: String,
        export_filename: String,
    },

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

impl TakedownError {
    /// Check if this error was raised before any network call
    pub fn is_input_error(&self) -> bool {
        matches!(self, TakedownError::InputValidation(_))
    }
}

/// Input for the DraftTakedown use case
#[derive(Debug, Clone)]
pub struct DraftTakedownInput {
    pub request: TakedownRequestInput,
    /// Whether a hosted-model API key was supplied
    pub has_api_key: bool,
    /// Whether the caller will write the draft to `export_filename`
    pub export: bool,
}

impl DraftTakedownInput {
    pub fn new(request: TakedownRequestInput, has_api_key: bool) -> Self {
        Self {
            request,
            has_api_key,
            export: false,
        }
    }

    pub fn with_export(mut self, export: bool) -> Self {
        self.export = export;
        self
    }
}

/// Output of the DraftTakedown use case
#[derive(Debug, Clone)]
pub struct DraftTakedownOutput {
    pub draft: TakedownDraft,
    /// Canonical rendering of the draft, the exact text to show and export
    pub text: String,
    /// `{domain}_takedown_request.txt`, with the domain as entered
    pub export_filename: String,
}

/// Use case for preparing one takedown request
pub struct DraftTakedownUseCase {
    planner: Arc<dyn TakedownPlanner>,
}

impl DraftTakedownUseCase {
    pub fn new(planner: Arc<dyn TakedownPlanner>) -> Self {
        Self { planner }
    }

    pub async fn execute(
        &self,
        input: DraftTakedownInput,
        progress: &dyn TakedownProgressNotifier,
    ) -> Result<DraftTakedownOutput, TakedownError> {
        if self.planner.requires_api_key() && !input.has_api_key {
            return Err(DomainError::MissingApiKey.into());
        }
        let request = input.request.validate()?;
        let export_filename = export_filename(request.domain.as_entered());
        if input.export && !is_safe_export_name(&export_filename) {
            return Err(
                DomainError::UnexportableDomain(request.domain.as_entered().to_string()).into(),
            );
        }

        info!(
            domain = %request.domain,
            protocol = %request.lookup_protocol,
            planner = self.planner.name(),
            "Preparing takedown request"
        );

        let draft = self.planner.plan(&request, progress).await?;
        let text = draft.render();

        if contains_not_found_sentinel(&text) {
            warn!(domain = %request.domain, "No takedown contact address found");
            return Err(TakedownError::EmailNotFound {
                text,
                export_filename,
            });
        }

        Ok(DraftTakedownOutput {
            draft,
            text,
            export_filename,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use takedown_domain::{TakedownReason, TakedownRequest};

    struct FixedPlanner {
        draft: TakedownDraft,
        calls: AtomicUsize,
        needs_key: bool,
    }

    impl FixedPlanner {
        fn new(email: Option<&str>) -> Self {
            Self {
                draft: TakedownDraft::new(
                    Some("Example Registrar LLC".to_string()),
                    email.map(str::to_string),
                    "Takedown request",
                    "Please remove it.",
                ),
                calls: AtomicUsize::new(0),
                needs_key: true,
            }
        }
    }

    #[async_trait]
    impl TakedownPlanner for FixedPlanner {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn requires_api_key(&self) -> bool {
            self.needs_key
        }

        async fn plan(
            &self,
            _request: &TakedownRequest,
            _progress: &dyn TakedownProgressNotifier,
        ) -> Result<TakedownDraft, TakedownError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.draft.clone())
        }
    }

    fn input(domain: &str) -> DraftTakedownInput {
        DraftTakedownInput::new(
            TakedownRequestInput::new(domain, TakedownReason::CopyrightInfringement),
            true,
        )
    }

    #[tokio::test]
    async fn test_success_uses_entered_domain_for_filename() {
        let planner = Arc::new(FixedPlanner::new(Some("abuse@example-registrar.com")));
        let use_case = DraftTakedownUseCase::new(planner.clone());

        let output = use_case.execute(input("Example.COM"), &NoProgress).await.unwrap();

        assert_eq!(output.export_filename, "Example.COM_takedown_request.txt");
        assert!(output.text.starts_with("- Registrar name: Example Registrar LLC\n"));
        assert_eq!(planner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_domains_never_reach_planner() {
        let planner = Arc::new(FixedPlanner::new(Some("a@b.com")));
        let use_case = DraftTakedownUseCase::new(planner.clone());

        for domain in ["not a domain", "", "http://"] {
            let err = use_case.execute(input(domain), &NoProgress).await.unwrap_err();
            assert!(err.is_input_error(), "{domain:?} should fail validation");
        }
        assert_eq!(planner.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_url_shaped_domain_refused_before_planning_when_exporting() {
        let planner = Arc::new(FixedPlanner::new(Some("abuse@example-registrar.com")));
        let use_case = DraftTakedownUseCase::new(planner.clone());

        let err = use_case
            .execute(input("https://example.com/page").with_export(true), &NoProgress)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TakedownError::InputValidation(DomainError::UnexportableDomain(ref d))
                if d == "https://example.com/page"
        ));
        assert_eq!(planner.calls.load(Ordering::SeqCst), 0);

        // Without an export the same input is drafted normally
        let output = use_case
            .execute(input("https://example.com/page"), &NoProgress)
            .await
            .unwrap();
        assert!(output.text.contains("abuse@example-registrar.com"));
        assert_eq!(planner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_api_key_checked_first() {
        let planner = Arc::new(FixedPlanner::new(Some("a@b.com")));
        let use_case = DraftTakedownUseCase::new(planner.clone());
        let mut input = input("");
        input.has_api_key = false;

        let err = use_case.execute(input, &NoProgress).await.unwrap_err();
        assert!(matches!(
            err,
            TakedownError::InputValidation(DomainError::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn test_api_key_not_needed_for_keyless_planner() {
        let mut planner = FixedPlanner::new(Some("a@b.com"));
        planner.needs_key = false;
        let use_case = DraftTakedownUseCase::new(Arc::new(planner));
        let mut input = input("example.com");
        input.has_api_key = false;

        assert!(use_case.execute(input, &NoProgress).await.is_ok());
    }

    #[tokio::test]
    async fn test_sentinel_trips_email_not_found() {
        let use_case = DraftTakedownUseCase::new(Arc::new(FixedPlanner::new(None)));

        let err = use_case.execute(input("example.com"), &NoProgress).await.unwrap_err();
        match err {
            TakedownError::EmailNotFound {
                text,
                export_filename,
            } => {
                assert!(text.contains("Email address for takedown requests: [not found]"));
                assert_eq!(export_filename, "example.com_takedown_request.txt");
            }
            other => panic!("expected EmailNotFound, got {other:?}"),
        }
    }
}
