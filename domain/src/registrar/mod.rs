//! Registrar subdomain
//!
//! The result of a WHOIS or RDAP lookup and the ways it can fail.

pub mod error;
pub mod record;

pub use error::LookupError;
pub use record::RegistrarRecord;
