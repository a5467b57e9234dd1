//! Takedown request subdomain
//!
//! Everything the user supplies before the pipeline starts: the domain name,
//! the reason, free-text context and the lookup protocol. A raw
//! [`TakedownRequestInput`] is validated into a [`TakedownRequest`] before any
//! network call is made.

pub mod domain_name;
pub mod input;
pub mod protocol;
pub mod reason;

pub use domain_name::DomainName;
pub use input::{TakedownRequest, TakedownRequestInput};
pub use protocol::LookupProtocol;
pub use reason::TakedownReason;
