//! Output formatting and draft export

pub mod console;
pub mod export;
