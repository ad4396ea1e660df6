//! Diagnostic code definitions
//!
//! Codes follow a naming convention: {E|W}{category}{number}
//! - E01xx: Value errors (versions, variances)
//! - E02xx: Line structure errors
//! - E03xx: Reference errors
//! - E04xx: Document errors
//! - E05xx: Resolution errors
//! - W01xx: Recoverable problems reported as warnings

use std::fmt;

use super::Severity;

/// Codes for diagnostics recorded while parsing and resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Value errors
    // =========================================================================
    /// Malformed version text
    E0101,
    /// Unknown variance keyword
    E0102,

    // =========================================================================
    // E02xx: Line structure errors
    // =========================================================================
    /// Line matches none of the known constructs
    E0201,
    /// Declaration without a baseline
    E0202,
    /// Baseline is neither a version nor a reference
    E0203,
    /// Attribute line without a preceding export
    E0204,

    // =========================================================================
    // E03xx: Reference errors
    // =========================================================================
    /// Baseline refers to an undeclared group
    E0301,
    /// The module version statement cannot inherit
    E0302,

    // =========================================================================
    // E04xx: Document errors
    // =========================================================================
    /// No module version statement declared
    E0401,

    // =========================================================================
    // E05xx: Resolution errors
    // =========================================================================
    /// Resolved version is not below its constraint
    E0501,

    // =========================================================================
    // W01xx: Warnings
    // =========================================================================
    /// Name declared more than once, the first declaration wins
    W0101,
    /// Unrecognized text at the end of a line
    W0102,
}

impl ErrorCode {
    /// Get the string representation of the code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0401 => "E0401",
            Self::E0501 => "E0501",
            Self::W0101 => "W0101",
            Self::W0102 => "W0102",
        }
    }

    /// Get a short description of the code category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 => "value error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 => "syntax error",
            Self::E0301 | Self::E0302 => "reference error",
            Self::E0401 => "document error",
            Self::E0501 => "resolution error",
            Self::W0101 | Self::W0102 => "warning",
        }
    }

    /// Get the default message for this code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid version",
            Self::E0102 => "unknown variance",
            Self::E0201 => "unknown construct",
            Self::E0202 => "missing version baseline",
            Self::E0203 => "invalid version baseline",
            Self::E0204 => "export attributes without preceding export",
            Self::E0301 => "reference to undefined group",
            Self::E0302 => "module version cannot inherit",
            Self::E0401 => "module version declaration missing",
            Self::E0501 => "version constraint violated",
            Self::W0101 => "duplicate definition",
            Self::W0102 => "unknown construct at the end of the line",
        }
    }

    /// Severity a diagnostic with this code is recorded with
    pub fn severity(&self) -> Severity {
        match self {
            Self::W0101 | Self::W0102 => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
