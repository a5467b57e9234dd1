//! Prompt templates for takedown drafting

use crate::draft::{DraftParseError, NOT_FOUND};
use crate::request::TakedownRequest;
use crate::tool::Capability;

/// Facts gathered by a planner, handed to a draft composer
#[derive(Debug, Clone, Copy)]
pub struct DraftFacts<'a> {
    pub request: &'a TakedownRequest,
    pub registrar_name: Option<&'a str>,
    pub registrar_email: Option<&'a str>,
}

/// Templates for the takedown planning conversation
pub struct TakedownPromptTemplate;

impl TakedownPromptTemplate {
    /// System prompt for the drafting model
    pub fn system() -> &'static str {
        r#"You are an assistant that helps people prepare domain takedown requests.
You identify a domain's registrar, find the registrar's contact address for abuse or takedown reports, and draft a clear, professional takedown request email.
Only state facts that came from your tools. If a fact could not be found, write [not found] instead of guessing."#
    }

    /// The task prompt for one request
    pub fn task(request: &TakedownRequest) -> String {
        format!(
            r#"Task:
1. Use the {lookup} tool ({protocol} lookup) to find the domain registrar for {domain}.
2. Perform a web search with the {search} tool to find the email address for takedown requests for that domain registrar.
3. Prepare a draft email takedown request to the hosting provider citing the following reason: {reason}. Include the additional information provided: {info}.

Your response must be in the following format and should not include any other information:
- Registrar name: [registrar]
- Email address for takedown requests: [registrar_email]
- Email subject: [subject]
- Email body: [body]"#,
            lookup = Capability::ResolveRegistrar,
            protocol = request.lookup_protocol.display_name(),
            domain = request.domain.registrable(),
            search = Capability::SearchWeb,
            reason = request.reason.label(),
            info = request.additional_info_or_none(),
        )
    }

    /// Sent when the model answers before searching for a contact address
    pub fn search_first_reminder() -> String {
        format!(
            "You have not searched for the registrar's takedown contact yet. \
             Use the {} tool before giving your final answer.",
            Capability::SearchWeb
        )
    }

    /// Sent when the final answer does not match the four-line format
    pub fn format_correction(error: &DraftParseError) -> String {
        format!(
            r#"Your answer could not be read ({error}). Reply again using exactly this format and nothing else:
- Registrar name: [registrar]
- Email address for takedown requests: [registrar_email]
- Email subject: [subject]
- Email body: [body]"#
        )
    }

    /// Query the scripted planner uses to find a registrar's contact
    pub fn contact_query(registrar_name: &str) -> String {
        format!("{} abuse takedown contact email", registrar_name)
    }

    /// Prompt asking a model to write the subject and body for known facts
    pub fn compose(facts: &DraftFacts<'_>) -> String {
        format!(
            r#"Write a takedown request email about the domain {domain}, addressed to its registrar.
Reason: {reason}
Additional information: {info}

Reply in exactly this format and nothing else, keeping the first two lines as given:
- Registrar name: {registrar}
- Email address for takedown requests: {email}
- Email subject: [subject]
- Email body: [body]"#,
            domain = facts.request.domain.registrable(),
            reason = facts.request.reason.label(),
            info = facts.request.additional_info_or_none(),
            registrar = facts.registrar_name.unwrap_or(NOT_FOUND),
            email = facts.registrar_email.unwrap_or(NOT_FOUND),
        )
    }
}
