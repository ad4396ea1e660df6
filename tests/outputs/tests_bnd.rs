//! Generated bnd export instructions for a complete source.

use exportver::format::{BndFormat, BndOptions, BundleVersionMode, OutputFormat, PropertiesFormat};

use crate::helpers::document_helpers::resolved;
use crate::helpers::source_fixtures::FULL_SOURCE;

fn continued(text: &str) -> String {
    format!("{text:<52}\\")
}

#[test]
fn test_bnd_output() {
    let document = resolved(FULL_SOURCE);
    let format = BndFormat::new(&document, BndOptions::default());

    // Longest entry is 47 wide: continuations start at column 52
    let expected = [
        "# Generated by the exportver tool".to_string(),
        String::new(),
        "Bundle-Version: 2.0.0".to_string(),
        String::new(),
        continued("Export-Package:"),
        continued("    pkg.api;version=\"1.6.0\","),
        continued("    pkg.api.spi;version=\"1.6.0\";mandatory:=provider,"),
        continued("    pkg.impl;version=\"1.0.0.beta\","),
        "    pkg.util;version=\"2.0.0\"".to_string(),
        String::new(),
    ];
    assert_eq!(format.render(), expected.join("\n") + "\n");
}

#[test]
fn test_bnd_without_bundle_version() {
    let document = resolved(FULL_SOURCE);
    let options = BndOptions::default().with_bundle_version(BundleVersionMode::Omitted);
    let output = BndFormat::new(&document, options).render();

    assert!(!output.contains("Bundle-Version"));
    assert!(output.contains("Export-Package:"));
}

#[test]
fn test_properties_output() {
    let document = resolved(FULL_SOURCE);
    let expected = "\
# Generated by the exportver tool
$bundle=2.0.0
pkg.api=1.6.0
pkg.api.spi=1.6.0
pkg.impl=1.0.0.beta
pkg.util=2.0.0
";
    assert_eq!(PropertiesFormat::new(&document).render(), expected);
}
