//! Parsing scenarios: lossless round-trip and recovery from bad input.

use exportver::{ErrorCode, Severity, Version};
use rstest::rstest;

use crate::helpers::document_helpers::{parse_clean, parse_with_diagnostics};
use crate::helpers::source_fixtures::*;

#[rstest]
#[case(FULL_SOURCE)]
#[case(GROUP_INHERITANCE)]
#[case(DUPLICATE_EXPORT)]
#[case(EXPORTS_ONLY)]
#[case(MALFORMED_VERSION)]
#[case("$bundle: 1\r\npkg:\t1.2  @micro#c\r\n")]
#[case("$bundle: 1.0.0\n\n\n   \n# end")]
fn test_unmodified_document_round_trips(#[case] source: &str) {
    let result = parse_with_diagnostics(source);
    assert_eq!(result.document.to_source(), source);
}

#[test]
fn test_full_source_structure() {
    let document = parse_clean(FULL_SOURCE);

    assert_eq!(document.module().identifier(), "$bundle");
    assert_eq!(document.groups().count(), 1);

    let names: Vec<&str> = document.exports().map(|e| e.identifier()).collect();
    assert_eq!(names, ["pkg.api", "pkg.api.spi", "pkg.impl", "pkg.util"]);

    let spi = document.export("pkg.api.spi").unwrap();
    assert_eq!(spi.attributes(), Some("mandatory:=provider"));
    assert!(spi.is_inheriting());

    let util = document.export("pkg.util").unwrap();
    assert_eq!(util.inheritance(), Some(document.module_id()));
}

#[test]
fn test_duplicate_export_keeps_first() {
    let result = parse_with_diagnostics(DUPLICATE_EXPORT);

    assert_eq!(result.error_count(), 0);
    assert!(result.warning_count() >= 1);
    let export = result.document.export("pkg.a").unwrap();
    assert_eq!(result.document.baseline(export.id()), Version::from_parts(1, 0, 0));
    assert_eq!(result.document.exports().count(), 2);
}

#[test]
fn test_missing_module_is_synthesized() {
    let result = parse_with_diagnostics(EXPORTS_ONLY);

    assert!(result.error_count() >= 1);
    assert!(result.diagnostics.iter().any(|d| d.code == Some(ErrorCode::E0401)));
    assert_eq!(
        result.document.baseline(result.document.module_id()),
        Version::from_parts(0, 0, 0)
    );
    assert_eq!(result.document.to_source(), EXPORTS_ONLY);
}

#[test]
fn test_malformed_version_is_kept_verbatim() {
    let result = parse_with_diagnostics(MALFORMED_VERSION);

    assert_eq!(result.error_count(), 1);
    let error = result
        .diagnostics
        .iter()
        .find(|d| d.severity == Severity::Error)
        .unwrap();
    assert_eq!(error.line, Some(2));
    assert!(result.document.export("pkg.c").is_none());
    assert!(result.document.export("pkg.d").is_some());
    assert_eq!(result.document.representation()[1].render(result.document.statements()), "pkg.c: abc");
}
