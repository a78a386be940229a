//! Error types for collecting and writing combined documents

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CombineError {
    /// A matched file could not be opened or decoded as UTF-8
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The combined document could not be written
    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CombineError {
    /// The path the error refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            CombineError::ReadFile { path, .. } | CombineError::WriteOutput { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_error_message() {
        let err = CombineError::ReadFile {
            path: PathBuf::from("/proj/__test__/bad.test.ts"),
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/proj/__test__/bad.test.ts"));
        assert!(msg.contains("valid UTF-8"));
        assert_eq!(err.path(), &PathBuf::from("/proj/__test__/bad.test.ts"));
    }

    #[test]
    fn test_write_error_has_source() {
        use std::error::Error as _;

        let err = CombineError::WriteOutput {
            path: PathBuf::from("/proj/combined_tests.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("failed to write"));
    }
}
