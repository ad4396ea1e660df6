//! Line parse failures and parser state errors.

use smol_str::SmolStr;
use text_size::TextSize;
use thiserror::Error;

use crate::base::VersionError;
use crate::diagnostics::{Diagnostic, ErrorCode};

/// A line that failed to parse at a given offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ParseFailure {
    /// Categorized error code
    pub code: ErrorCode,
    /// Byte offset in the line where parsing stopped
    pub offset: TextSize,
    /// Human-readable message
    pub message: String,
    /// Optional suggestion for fixing the line
    pub hint: Option<String>,
}

impl ParseFailure {
    pub fn new(code: ErrorCode, offset: TextSize, message: impl Into<String>) -> Self {
        Self {
            code,
            offset,
            message: message.into(),
            hint: None,
        }
    }

    /// Wrap a version value error found at `offset`.
    pub fn from_version_error(error: VersionError, offset: TextSize) -> Self {
        let code = match error {
            VersionError::InvalidVersion(_) => ErrorCode::E0101,
            VersionError::UnknownVariance(_) => ErrorCode::E0102,
        };
        Self::new(code, offset, error.to_string())
    }

    /// Add a hint to this failure
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Convert into a diagnostic located at `line` of the source.
    pub fn into_diagnostic(self, line: u32, source: impl Into<SmolStr>) -> Diagnostic {
        let mut message = self.message;
        if let Some(hint) = self.hint {
            message.push_str(" (");
            message.push_str(&hint);
            message.push(')');
        }
        Diagnostic::new(self.code, message)
            .at_line(line, source)
            .at_offset(self.offset)
    }
}

/// Errors from using a document parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Input was fed to, or a result requested from, a finished parser.
    #[error("the parser has already finished")]
    AlreadyFinished,
}
