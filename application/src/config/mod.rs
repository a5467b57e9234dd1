//! Application-level configuration.
//!
//! - [`ExecutionParams`]: planning loop control (tool turns, format retries)

pub mod execution_params;

pub use execution_params::ExecutionParams;
