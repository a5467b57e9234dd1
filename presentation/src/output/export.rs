//! Draft export to `{domain}_takedown_request.txt`

use std::path::{Path, PathBuf};
use takedown_domain::is_safe_export_name;
use thiserror::Error;

/// Errors writing a draft file
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Refusing to write '{0}': the file name contains a path separator")]
    UnsafeFileName(String),

    #[error("Could not create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write `text` to `dir/filename` exactly as given.
///
/// The file name is used verbatim; names that would escape `dir` are refused.
pub fn write_export(dir: &Path, filename: &str, text: &str) -> Result<PathBuf, ExportError> {
    if !is_safe_export_name(filename) {
        return Err(ExportError::UnsafeFileName(filename.to_string()));
    }

    std::fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(filename);
    std::fs::write(&path, text).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_exact_text_with_verbatim_name() {
        let dir = tempfile::tempdir().unwrap();
        let text = "- Registrar name: Example Registrar LLC\n- Email address for takedown requests: abuse@example-registrar.com\n- Email subject: s\n- Email body: b";

        let path = write_export(dir.path(), "Example.COM_takedown_request.txt", text).unwrap();

        assert_eq!(path.file_name().unwrap(), "Example.COM_takedown_request.txt");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("drafts").join("2024");
        let path = write_export(&nested, "example.com_takedown_request.txt", "x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_refuses_path_separators() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_export(
            dir.path(),
            "https://example.com/page_takedown_request.txt",
            "x",
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::UnsafeFileName(_)));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        write_export(dir.path(), "a.txt", "first").unwrap();
        let path = write_export(dir.path(), "a.txt", "second").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
    }
}
