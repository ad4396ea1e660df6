//! Load, check, generate and restore against files on disk.

use std::fs;

use exportver::diagnostics::DiagnosticCollector;
use exportver::format::{BndFormat, BndOptions, OutputFormat};
use exportver::project::{ProjectError, check_document, load_document, store_document};
use tempfile::TempDir;

use crate::helpers::source_fixtures::{CONSTRAINT_VIOLATION, FULL_SOURCE, MALFORMED_VERSION};

#[test]
fn test_release_workflow() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("exports.ver");
    let bnd = dir.path().join("exports.bnd");
    fs::write(&source, FULL_SOURCE).unwrap();

    let mut feedback = DiagnosticCollector::new();
    let mut document = load_document(&source, &mut feedback).unwrap();
    check_document(&mut document, &mut feedback).unwrap();
    assert!(feedback.diagnostics().is_empty());

    BndFormat::new(&document, BndOptions::default())
        .store(&bnd)
        .unwrap();
    assert!(fs::read_to_string(&bnd).unwrap().contains("pkg.impl;version=\"1.0.0.beta\""));

    document.restore();
    store_document(&source, &document).unwrap();

    // The next cycle starts from the released versions
    let mut document = load_document(&source, &mut feedback).unwrap();
    check_document(&mut document, &mut feedback).unwrap();
    assert_eq!(document.module_version().to_string(), "2.0.0");
    assert!(fs::read_to_string(&source).unwrap().contains("pkg.impl: 1.0.0.beta @ none"));
}

#[test]
fn test_invalid_source_is_an_input_error() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("exports.ver");
    fs::write(&source, MALFORMED_VERSION).unwrap();

    let error = load_document(&source, &mut DiagnosticCollector::new()).unwrap_err();
    assert!(matches!(error, ProjectError::Parse { errors: 1, .. }));
    assert!(error.is_input_error());
}

#[test]
fn test_violation_is_an_input_error() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("exports.ver");
    fs::write(&source, CONSTRAINT_VIOLATION).unwrap();

    let mut feedback = DiagnosticCollector::new();
    let mut document = load_document(&source, &mut feedback).unwrap();
    let error = check_document(&mut document, &mut feedback).unwrap_err();

    assert!(matches!(error, ProjectError::ConstraintViolation(1)));
    assert!(error.is_input_error());
    assert_eq!(feedback.error_count(), 1);
}
