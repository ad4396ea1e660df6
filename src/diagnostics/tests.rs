//! Tests for diagnostics and feedback sinks

use super::*;
use text_size::TextSize;

#[test]
fn test_diagnostic_takes_severity_from_code() {
    let error = Diagnostic::new(ErrorCode::E0203, "Version baseline invalid.");
    assert_eq!(error.severity, Severity::Error);

    let warning = Diagnostic::new(ErrorCode::W0101, "duplicate");
    assert_eq!(warning.severity, Severity::Warning);
}

#[test]
fn test_diagnostic_display_with_location() {
    let diagnostic = Diagnostic::new(ErrorCode::E0203, "Version baseline invalid.")
        .at_line(3, "pkg.c: abc")
        .at_offset(TextSize::new(7));
    assert_eq!(
        diagnostic.to_string(),
        "E0203: Version baseline invalid. (line 3, column 8)"
    );
    assert_eq!(
        diagnostic.reference().as_deref(),
        Some("See line 3: pkg.c: abc")
    );
}

#[test]
fn test_diagnostic_without_location_has_no_reference() {
    let diagnostic = Diagnostic::error("boom");
    assert_eq!(diagnostic.to_string(), "boom");
    assert_eq!(diagnostic.reference(), None);
}

#[test]
fn test_collector_counts() {
    let mut collector = DiagnosticCollector::new();
    collector.add(Diagnostic::new(ErrorCode::E0201, "x"));
    collector.add(Diagnostic::new(ErrorCode::W0102, "y"));
    collector.add(Diagnostic::new(ErrorCode::W0101, "z"));

    assert_eq!(collector.error_count(), 1);
    assert_eq!(collector.warning_count(), 2);
    assert!(collector.has_errors());

    let taken = collector.take();
    assert_eq!(taken.len(), 3);
    assert!(!collector.has_errors());
}

#[test]
fn test_collector_as_feedback() {
    let mut collector = DiagnosticCollector::new();
    {
        let feedback: &mut dyn Feedback = &mut collector;
        feedback.fail("failed");
        feedback.warn("warned");
        feedback.info("informed");
        feedback.report(&Diagnostic::new(ErrorCode::E0401, "missing"));
    }
    assert_eq!(collector.error_count(), 2);
    assert_eq!(collector.warning_count(), 1);
    assert_eq!(collector.infos(), ["informed".to_string()]);
}

#[test]
fn test_default_report_forwards_reference() {
    #[derive(Default)]
    struct Lines(Vec<String>);

    impl Feedback for Lines {
        fn fail(&mut self, message: &str) {
            self.0.push(format!("[ERROR] {message}"));
        }

        fn warn(&mut self, message: &str) {
            self.0.push(format!("[WARNING] {message}"));
        }

        fn info(&mut self, message: &str) {
            self.0.push(message.to_string());
        }
    }

    let mut lines = Lines::default();
    lines.report(&Diagnostic::new(ErrorCode::W0101, "dup").at_line(2, "a: 1"));
    assert_eq!(
        lines.0,
        [
            "[WARNING] W0101: dup (line 2)".to_string(),
            "[WARNING] See line 2: a: 1".to_string()
        ]
    );
}

#[test]
fn test_no_feedback_is_silent() {
    let mut feedback = NoFeedback;
    feedback.report(&Diagnostic::error("ignored"));
    feedback.info("ignored");
}
