//! Errors of file-level operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::DocumentError;

/// Errors that can occur when loading, checking or storing a document.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The source file does not exist.
    #[error("Missing source file: {}", .0.display())]
    Missing(PathBuf),

    /// IO error during read/write.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source parsed with errors.
    #[error("Errors encountered when parsing {}: {errors} error(s), {warnings} warning(s)", path.display())]
    Parse {
        path: PathBuf,
        errors: usize,
        warnings: usize,
    },

    /// A parser was used after it finished.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Resolved versions violate their constraints.
    #[error("One or more version constraints were violated ({0}).")]
    ConstraintViolation(usize),
}

impl ProjectError {
    /// Wrap an IO error for `path`, mapping a missing file to [`Self::Missing`].
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            return Self::Missing(path);
        }
        Self::Io { path, source }
    }

    /// Whether the error concerns the input rather than the output.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}
