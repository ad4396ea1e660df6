//! Diagnostics: error codes, diagnostic records and feedback sinks.
//!
//! Parsing and resolution never stop at the first problem. Every problem
//! becomes a [`Diagnostic`], is counted by a [`DiagnosticCollector`] and is
//! forwarded to the caller's [`Feedback`] sink as it happens.

mod codes;
mod collector;
mod diagnostic;
mod feedback;

#[cfg(test)]
mod tests;

pub use codes::ErrorCode;
pub use collector::DiagnosticCollector;
pub use diagnostic::{Diagnostic, Severity};
pub use feedback::{Feedback, NoFeedback, TracingFeedback};
