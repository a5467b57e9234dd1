//! Output gate and export naming

/// Placeholder used for any field that could not be determined
pub const NOT_FOUND: &str = "[not found]";

/// Literal that marks a draft without a usable contact address
pub const NOT_FOUND_SENTINEL: &str = "Email address for takedown requests: [not found]";

/// Check the raw final text for the not-found sentinel.
pub fn contains_not_found_sentinel(text: &str) -> bool {
    text.contains(NOT_FOUND_SENTINEL)
}

/// File name for an exported draft, built from the domain exactly as entered
pub fn export_filename(domain_as_entered: &str) -> String {
    format!("{}_takedown_request.txt", domain_as_entered)
}

/// Whether `filename` names a file directly inside the export directory.
pub fn is_safe_export_name(filename: &str) -> bool {
    !filename.is_empty() && !filename.contains(['/', '\\']) && !filename.starts_with("..")
}
