//! Options of the bnd output.

use chrono::{DateTime, Utc};

use crate::base::Version;

/// Which `Bundle-Version` header the bnd output carries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BundleVersionMode {
    /// The resolved module version.
    #[default]
    Resolved,
    /// No header at all.
    Omitted,
    /// A fixed version instead of the resolved one.
    Override(Version),
}

/// Formatting options for bnd files
#[derive(Debug, Clone)]
pub struct BndOptions {
    /// Number of spaces indenting the export lines
    pub indentation: usize,
    /// The `Bundle-Version` header to emit
    pub bundle_version: BundleVersionMode,
    /// Generation time written as a comment, if any
    pub timestamp: Option<DateTime<Utc>>,
}

impl Default for BndOptions {
    fn default() -> Self {
        Self {
            indentation: 4,
            bundle_version: BundleVersionMode::default(),
            timestamp: None,
        }
    }
}

impl BndOptions {
    pub fn with_indentation(mut self, indentation: usize) -> Self {
        self.indentation = indentation;
        self
    }

    pub fn with_bundle_version(mut self, mode: BundleVersionMode) -> Self {
        self.bundle_version = mode;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Indentation string for export lines; at least one space.
    pub fn indent(&self) -> String {
        " ".repeat(self.indentation.max(1))
    }
}
