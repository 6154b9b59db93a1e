//! Error handling for line sorting

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("Input file '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error processing files: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl SortError {
    /// Create a file not found error
    pub fn file_not_found(path: &Path) -> Self {
        SortError::FileNotFound {
            path: path.to_path_buf(),
        }
    }

    /// Wrap an I/O error with a short description of what was being done
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        SortError::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether the input file was missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, SortError::FileNotFound { .. })
    }

    /// The missing path, for not found errors
    pub fn path(&self) -> Option<&Path> {
        match self {
            SortError::FileNotFound { path } => Some(path),
            SortError::Io { .. } => None,
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for turning raw I/O errors into [`SortError`]s
pub trait SortContext<T> {
    fn with_read_context(self, path: &Path) -> SortResult<T>;

    fn with_write_context(self, path: &Path) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_read_context(self, path: &Path) -> SortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::NotFound => SortError::file_not_found(path),
            _ => SortError::io(format!("reading '{}'", path.display()), io_err),
        })
    }

    // A missing output directory is a write failure, not a missing input.
    fn with_write_context(self, path: &Path) -> SortResult<T> {
        self.map_err(|io_err| SortError::io(format!("writing '{}'", path.display()), io_err))
    }
}
