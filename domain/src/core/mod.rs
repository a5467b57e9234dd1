//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — hosted chat models that can drive the planner
//! - [`error::DomainError`] — input validation errors raised before any network call

pub mod error;
pub mod model;
pub mod string;
