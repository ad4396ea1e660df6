//! Diagnostic collection.

use super::{Diagnostic, Feedback, Severity};

/// Collects diagnostics; also usable as a [`Feedback`] sink.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    infos: Vec<String>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Informational messages received through [`Feedback::info`].
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

impl Feedback for DiagnosticCollector {
    fn fail(&mut self, message: &str) {
        self.add(Diagnostic::error(message));
    }

    fn warn(&mut self, message: &str) {
        self.add(Diagnostic::warning(message));
    }

    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn report(&mut self, diagnostic: &Diagnostic) {
        self.add(diagnostic.clone());
    }
}
