//! Resolution scenarios: variance propagation, constraints and restore.

use exportver::diagnostics::DiagnosticCollector;
use exportver::model::{LoggingHandler, ViolationPolicy};
use exportver::{DocumentParser, Version, VersionResolver, resolve};

use crate::helpers::document_helpers::{export_version, parse_clean, resolved};
use crate::helpers::source_fixtures::*;

#[test]
fn test_full_source_resolution() {
    let document = resolved(FULL_SOURCE);

    // pkg.impl declares a major change, so the module takes a major step
    assert_eq!(document.module_version(), Version::from_parts(2, 0, 0));
    assert_eq!(export_version(&document, "pkg.api"), "1.6.0");
    assert_eq!(export_version(&document, "pkg.api.spi"), "1.6.0");
    assert_eq!(export_version(&document, "pkg.impl"), "1.0.0.beta");
    assert_eq!(export_version(&document, "pkg.util"), "2.0.0");
}

#[test]
fn test_constraint_violation() {
    let mut document = parse_clean(CONSTRAINT_VIOLATION);
    let mut resolver = VersionResolver::new(&mut document);

    assert!(!resolver.resolve().test());
    assert_eq!(
        resolver.document().module_version(),
        Version::from_parts(2, 0, 0)
    );
}

#[test]
fn test_constraint_violation_is_reported() {
    let mut document = parse_clean(CONSTRAINT_VIOLATION);
    let handler =
        LoggingHandler::new(DiagnosticCollector::new()).with_policy(ViolationPolicy::Continue);
    let mut resolver = VersionResolver::with_handler(&mut document, handler);

    assert!(!resolver.resolve().test());
    assert_eq!(resolver.handler().violations(), 1);

    let collector = resolver.into_handler().into_feedback();
    assert_eq!(collector.error_count(), 1);
    assert_eq!(
        collector.diagnostics()[0].message,
        "Target module version 2.0.0 violates version restriction to 2.0.0."
    );
}

#[test]
fn test_group_inheritance() {
    let document = resolved(GROUP_INHERITANCE);

    let group = document.group("$g").unwrap();
    assert_eq!(document.resolution(group.id()), Version::from_parts(1, 6, 0));
    assert_eq!(export_version(&document, "pkg.b"), "1.6.0");
}

#[test]
fn test_restore_then_resolve_is_a_fixed_point() {
    let mut document = resolved(FULL_SOURCE);
    document.restore();
    let restored = document.to_source();

    resolve(&mut document);
    for export in document.exports().filter(|e| !e.is_inheriting()) {
        assert_eq!(
            document.resolution(export.id()),
            document.baseline(export.id()),
            "{} moved after restore",
            export.identifier()
        );
    }
    assert_eq!(document.module_version(), Version::from_parts(2, 0, 0));

    document.restore();
    assert_eq!(document.to_source(), restored);
}

#[test]
fn test_restore_write_back() {
    let mut document = resolved(FULL_SOURCE);
    document.restore();

    let expected = "\
# Version definitions
$bundle: 2.0.0 < 3.0.0 @ none

$api: 1.6.0 @ none # shared API packages
pkg.api: $api
pkg.api.spi: $api @ none
+ mandatory:=provider

pkg.impl: 1.0.0.beta @ none
pkg.util: inherit
";
    assert_eq!(document.to_source(), expected);
}

#[test]
fn test_incremental_parser_matches_whole_text() {
    let mut parser = DocumentParser::new();
    for line in FULL_SOURCE.lines() {
        parser.accept(line).unwrap();
    }
    let mut document = parser.finish().unwrap();
    resolve(&mut document);

    assert_eq!(document.to_source(), FULL_SOURCE);
    assert_eq!(document.module_version(), resolved(FULL_SOURCE).module_version());
}
