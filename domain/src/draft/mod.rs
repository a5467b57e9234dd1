//! Takedown draft subdomain
//!
//! The four-label text contract shared by every planner:
//!
//! ```text
//! - Registrar name: <registrar>
//! - Email address for takedown requests: <email or [not found]>
//! - Email subject: <subject>
//! - Email body: <body>
//! ```
//!
//! [`TakedownDraft`] parses and renders this shape; [`gate`] holds the pure
//! sentinel check applied to the final text.

pub mod entities;
pub mod gate;

pub use entities::{DraftParseError, TakedownDraft};
pub use gate::{
    NOT_FOUND, NOT_FOUND_SENTINEL, contains_not_found_sentinel, export_filename, is_safe_export_name,
};
