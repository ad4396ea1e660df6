//! Feedback sinks receiving diagnostics as they are produced.

use super::{Diagnostic, Severity};

/// Receives failures, warnings and informational messages.
pub trait Feedback {
    fn fail(&mut self, message: &str);

    fn warn(&mut self, message: &str);

    fn info(&mut self, message: &str);

    /// Report a diagnostic, followed by a reference to its line if known.
    fn report(&mut self, diagnostic: &Diagnostic) {
        let message = diagnostic.to_string();
        let reference = diagnostic.reference();
        match diagnostic.severity {
            Severity::Error => {
                self.fail(&message);
                if let Some(reference) = reference {
                    self.fail(&reference);
                }
            }
            Severity::Warning => {
                self.warn(&message);
                if let Some(reference) = reference {
                    self.warn(&reference);
                }
            }
            Severity::Info => self.info(&message),
        }
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl Feedback for NoFeedback {
    fn fail(&mut self, _message: &str) {}

    fn warn(&mut self, _message: &str) {}

    fn info(&mut self, _message: &str) {}
}

/// Forwards everything to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFeedback;

impl Feedback for TracingFeedback {
    fn fail(&mut self, message: &str) {
        tracing::error!("{message}");
    }

    fn warn(&mut self, message: &str) {
        tracing::warn!("{message}");
    }

    fn info(&mut self, message: &str) {
        tracing::info!("{message}");
    }

    fn report(&mut self, diagnostic: &Diagnostic) {
        let code = diagnostic.code.map(|c| c.as_str()).unwrap_or("-");
        let line = diagnostic.line.unwrap_or(0);
        match diagnostic.severity {
            Severity::Error => tracing::error!(code, line, "{}", diagnostic.message),
            Severity::Warning => tracing::warn!(code, line, "{}", diagnostic.message),
            Severity::Info => tracing::info!(code, line, "{}", diagnostic.message),
        }
    }
}

impl<F: Feedback + ?Sized> Feedback for &mut F {
    fn fail(&mut self, message: &str) {
        (**self).fail(message);
    }

    fn warn(&mut self, message: &str) {
        (**self).warn(message);
    }

    fn info(&mut self, message: &str) {
        (**self).info(message);
    }

    fn report(&mut self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }
}

impl<F: Feedback + ?Sized> Feedback for Box<F> {
    fn fail(&mut self, message: &str) {
        (**self).fail(message);
    }

    fn warn(&mut self, message: &str) {
        (**self).warn(message);
    }

    fn info(&mut self, message: &str) {
        (**self).info(message);
    }

    fn report(&mut self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }
}
