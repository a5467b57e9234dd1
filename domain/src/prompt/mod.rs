//! Prompt domain
//!
//! Templates for the takedown planning conversation.

pub mod takedown;

pub use takedown::{DraftFacts, TakedownPromptTemplate};
