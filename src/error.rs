use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for word counting operations
pub type Result<T> = std::result::Result<T, WordCountError>;

/// Errors that can occur while counting words
#[derive(Error, Debug)]
pub enum WordCountError {
    /// Input file could not be opened or read
    #[error("Failed to open file: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reader failed and no path is known
    #[error("Read error: {0}")]
    Read(#[from] io::Error),

    /// Writing the report failed
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),

    /// topK argument is not a non-negative integer
    #[error("Invalid topK value {value:?}: expected a non-negative integer")]
    InvalidTopK { value: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Worker thread error
    #[error("Worker thread error: {0}")]
    ThreadError(String),
}

impl WordCountError {
    /// Attach `path` to a bare read error. Other variants pass through.
    pub fn at_path(self, path: &Path) -> Self {
        match self {
            WordCountError::Read(source) => WordCountError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = WordCountError::Io {
            path: PathBuf::from("/no/such/corpus.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/no/such/corpus.txt"));
        assert!(msg.starts_with("Failed to open file"));
    }

    #[test]
    fn test_at_path_rewraps_read_errors() {
        let err = WordCountError::Read(io::Error::new(io::ErrorKind::Other, "boom"));
        match err.at_path(Path::new("corpus.txt")) {
            WordCountError::Io { path, .. } => assert_eq!(path, PathBuf::from("corpus.txt")),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = WordCountError::ConfigError("workers".into());
        assert!(matches!(
            err.at_path(Path::new("corpus.txt")),
            WordCountError::ConfigError(_)
        ));
    }
}
