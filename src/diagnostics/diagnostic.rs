//! Diagnostic records.

use std::fmt;

use smol_str::SmolStr;
use text_size::TextSize;

use super::ErrorCode;

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// A problem found in the source, with its location when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: Option<ErrorCode>,
    pub message: String,
    /// Line number (1-based), when the diagnostic belongs to a line.
    pub line: Option<u32>,
    /// Byte offset within the line.
    pub offset: Option<TextSize>,
    /// The offending line as read.
    pub source: Option<SmolStr>,
}

impl Diagnostic {
    /// Create a diagnostic with the severity implied by its code.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: code.severity(),
            code: Some(code),
            message: message.into(),
            line: None,
            offset: None,
            source: None,
        }
    }

    /// Create an error without a code.
    pub fn error(message: impl Into<String>) -> Self {
        Self::uncoded(Severity::Error, message)
    }

    /// Create a warning without a code.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::uncoded(Severity::Warning, message)
    }

    fn uncoded(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            line: None,
            offset: None,
            source: None,
        }
    }

    /// Attach the line the diagnostic refers to.
    pub fn at_line(mut self, line: u32, source: impl Into<SmolStr>) -> Self {
        self.line = Some(line);
        self.source = Some(source.into());
        self
    }

    /// Attach the offset within the line.
    pub fn at_offset(mut self, offset: TextSize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// A reference to the offending line, e.g. `See line 3: pkg: abc`.
    pub fn reference(&self) -> Option<String> {
        let source = self.source.as_ref()?;
        Some(match self.line {
            Some(line) => format!("See line {line}: {source}"),
            None => format!("See: {source}"),
        })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = self.code {
            write!(f, "{code}: ")?;
        }
        f.write_str(&self.message)?;
        if let Some(line) = self.line {
            write!(f, " (line {line}")?;
            if let Some(offset) = self.offset {
                write!(f, ", column {}", u32::from(offset) + 1)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}
