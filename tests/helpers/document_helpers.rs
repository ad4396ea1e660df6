//! Parsing and resolution helpers.

use exportver::{Document, ParseResult, parse_str, resolve};

/// Parse a source that must not produce any diagnostic.
pub fn parse_clean(source: &str) -> Document {
    let result = parse_str(source);
    assert!(
        result.diagnostics.is_empty(),
        "Expected no diagnostics, got:\n{}",
        result
            .diagnostics
            .iter()
            .map(|d| format!("  {d}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
    result.document
}

/// Parse and resolve a source that must not produce any diagnostic.
pub fn resolved(source: &str) -> Document {
    let mut document = parse_clean(source);
    resolve(&mut document);
    document
}

/// Parse a source, keeping its diagnostics.
pub fn parse_with_diagnostics(source: &str) -> ParseResult {
    parse_str(source)
}

/// Resolved version of an export, as text.
pub fn export_version(document: &Document, name: &str) -> String {
    let export = document
        .export(name)
        .unwrap_or_else(|| panic!("export '{name}' is missing"));
    document.resolution(export.id()).to_string()
}
