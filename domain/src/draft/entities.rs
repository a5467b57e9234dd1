//! Takedown draft entity

use super::gate::NOT_FOUND;
use thiserror::Error;

const REGISTRAR_LABEL: &str = "Registrar name:";
const EMAIL_LABEL: &str = "Email address for takedown requests:";
const SUBJECT_LABEL: &str = "Email subject:";
const BODY_LABEL: &str = "Email body:";

/// Why a text could not be read as a draft
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftParseError {
    #[error("missing '{0}' line")]
    MissingLabel(&'static str),

    #[error("'{0}' appears out of order")]
    OutOfOrder(&'static str),

    #[error("'{0}' is empty")]
    EmptyField(&'static str),
}

/// A finished takedown request draft (immutable once produced).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakedownDraft {
    registrar_name: Option<String>,
    registrar_email: Option<String>,
    email_subject: String,
    email_body: String,
}

impl TakedownDraft {
    pub fn new(
        registrar_name: Option<String>,
        registrar_email: Option<String>,
        email_subject: impl Into<String>,
        email_body: impl Into<String>,
    ) -> Self {
        Self {
            registrar_name: registrar_name.filter(|s| !s.trim().is_empty()),
            registrar_email: registrar_email.filter(|s| !s.trim().is_empty()),
            email_subject: email_subject.into(),
            email_body: email_body.into(),
        }
    }

    pub fn registrar_name(&self) -> Option<&str> {
        self.registrar_name.as_deref()
    }

    pub fn registrar_email(&self) -> Option<&str> {
        self.registrar_email.as_deref()
    }

    pub fn email_subject(&self) -> &str {
        &self.email_subject
    }

    pub fn email_body(&self) -> &str {
        &self.email_body
    }

    /// Copy of this draft with the registrar line replaced by `[not found]`
    pub fn without_registrar(&self) -> Self {
        Self {
            registrar_name: None,
            ..self.clone()
        }
    }

    /// Canonical four-label rendering
    pub fn render(&self) -> String {
        format!(
            "- {} {}\n- {} {}\n- {} {}\n- {} {}",
            REGISTRAR_LABEL,
            self.registrar_name.as_deref().unwrap_or(NOT_FOUND),
            EMAIL_LABEL,
            self.registrar_email.as_deref().unwrap_or(NOT_FOUND),
            SUBJECT_LABEL,
            self.email_subject,
            BODY_LABEL,
            self.email_body,
        )
    }

    /// Read a draft from model output.
    ///
    /// Labels must appear in order, each at the start of a line, optionally
    /// after a list marker (`-`, `*`) or bold markers. Anything before the first
    /// label is ignored. The body runs to the end of the text.
    pub fn parse(text: &str) -> Result<Self, DraftParseError> {
        let lines: Vec<&str> = text.lines().collect();

        let registrar_at = find_label(&lines, REGISTRAR_LABEL, 0)?;
        let email_at = find_label(&lines, EMAIL_LABEL, registrar_at + 1)
            .map_err(|e| order_error(e, &lines, EMAIL_LABEL))?;
        let subject_at = find_label(&lines, SUBJECT_LABEL, email_at + 1)
            .map_err(|e| order_error(e, &lines, SUBJECT_LABEL))?;
        let body_at = find_label(&lines, BODY_LABEL, subject_at + 1)
            .map_err(|e| order_error(e, &lines, BODY_LABEL))?;

        let registrar = field_value(lines[registrar_at], REGISTRAR_LABEL);
        let email = field_value(lines[email_at], EMAIL_LABEL);
        let subject = field_value(lines[subject_at], SUBJECT_LABEL);

        let mut body = field_value(lines[body_at], BODY_LABEL).to_string();
        for line in &lines[body_at + 1..] {
            body.push('\n');
            body.push_str(line);
        }
        let body = body.trim().to_string();

        if subject.is_empty() {
            return Err(DraftParseError::EmptyField(SUBJECT_LABEL));
        }
        if body.is_empty() {
            return Err(DraftParseError::EmptyField(BODY_LABEL));
        }

        Ok(Self::new(
            present(registrar),
            present(email).map(|e| e.trim_matches(['[', ']', '<', '>']).to_string()),
            subject,
            body,
        ))
    }
}

impl std::fmt::Display for TakedownDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

fn strip_marker(line: &str) -> &str {
    line.trim_start()
        .trim_start_matches(['-', '*', '•'])
        .trim_start()
        .trim_start_matches("**")
}

fn find_label(lines: &[&str], label: &'static str, from: usize) -> Result<usize, DraftParseError> {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, line)| strip_marker(line).starts_with(label))
        .map(|(i, _)| i)
        .ok_or(DraftParseError::MissingLabel(label))
}

fn order_error(err: DraftParseError, lines: &[&str], label: &'static str) -> DraftParseError {
    if find_label(lines, label, 0).is_ok() {
        DraftParseError::OutOfOrder(label)
    } else {
        err
    }
}

fn field_value<'a>(line: &'a str, label: &str) -> &'a str {
    strip_marker(line)[label.len()..]
        .trim_start_matches("**")
        .trim()
}

fn present(value: &str) -> Option<String> {
    let bare = value.trim_matches(['[', ']']).trim();
    if bare.is_empty() || bare.eq_ignore_ascii_case("not found") {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Here is your draft:\n\
        - Registrar name: Example Registrar LLC\n\
        - Email address for takedown requests: abuse@example-registrar.com\n\
        - Email subject: Takedown request for example.com\n\
        - Email body: Dear Example Registrar LLC,\n\
        \n\
        Please remove the content.\n\
        Regards";

    #[test]
    fn test_parse_sample() {
        let draft = TakedownDraft::parse(SAMPLE).unwrap();
        assert_eq!(draft.registrar_name(), Some("Example Registrar LLC"));
        assert_eq!(draft.registrar_email(), Some("abuse@example-registrar.com"));
        assert_eq!(draft.email_subject(), "Takedown request for example.com");
        assert!(draft.email_body().starts_with("Dear Example Registrar LLC,"));
        assert!(draft.email_body().ends_with("Regards"));
    }

    #[test]
    fn test_render_labels_in_order() {
        let text = TakedownDraft::parse(SAMPLE).unwrap().render();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("- Registrar name: "));
        assert!(lines[1].starts_with("- Email address for takedown requests: "));
        assert!(lines[2].starts_with("- Email subject: "));
        assert!(lines[3].starts_with("- Email body: "));
    }

    #[test]
    fn test_not_found_fields() {
        let text = "Registrar name: [not found]\n\
            Email address for takedown requests: [Not Found]\n\
            Email subject: Request\n\
            Email body: Hello";
        let draft = TakedownDraft::parse(text).unwrap();
        assert_eq!(draft.registrar_name(), None);
        assert_eq!(draft.registrar_email(), None);
        assert!(draft.render().contains("Email address for takedown requests: [not found]"));
    }

    #[test]
    fn test_bracketed_email_is_unwrapped() {
        let text = "- Registrar name: R\n\
            - Email address for takedown requests: [abuse@r.com]\n\
            - Email subject: S\n\
            - Email body: B";
        let draft = TakedownDraft::parse(text).unwrap();
        assert_eq!(draft.registrar_email(), Some("abuse@r.com"));
    }

    #[test]
    fn test_bold_markdown_labels() {
        let text = "- **Registrar name:** R\n\
            - **Email address for takedown requests:** a@r.com\n\
            - **Email subject:** S\n\
            - **Email body:** B";
        let draft = TakedownDraft::parse(text).unwrap();
        assert_eq!(draft.registrar_name(), Some("R"));
        assert_eq!(draft.email_body(), "B");
    }

    #[test]
    fn test_missing_label() {
        let err = TakedownDraft::parse("Registrar name: R\nEmail subject: S").unwrap_err();
        assert_eq!(err, DraftParseError::MissingLabel(EMAIL_LABEL));
    }

    #[test]
    fn test_out_of_order() {
        let text = "Email subject: S\n\
            Registrar name: R\n\
            Email address for takedown requests: a@r.com\n\
            Email body: B";
        let err = TakedownDraft::parse(text).unwrap_err();
        assert_eq!(err, DraftParseError::OutOfOrder(SUBJECT_LABEL));
    }

    #[test]
    fn test_empty_body() {
        let text = "Registrar name: R\n\
            Email address for takedown requests: a@r.com\n\
            Email subject: S\n\
            Email body:   ";
        assert_eq!(
            TakedownDraft::parse(text).unwrap_err(),
            DraftParseError::EmptyField(BODY_LABEL)
        );
    }
}
