//! Common version source fixtures for tests.

/// Module, one group and exports using every statement form.
pub const FULL_SOURCE: &str = "\
# Version definitions
$bundle: 1.0.0 < 3.0.0 @ micro

$api: 1.5.0 @ minor # shared API packages
pkg.api: $api
pkg.api.spi: $api @ micro
+ mandatory:=provider

pkg.impl: 0.9.3.beta @ major
pkg.util: inherit
";

pub const CONSTRAINT_VIOLATION: &str = "$bundle-version: 1.0.0 < 2.0.0 @ major\n";

pub const GROUP_INHERITANCE: &str = "\
$bundle: 1.0.0
$g: 1.5.0
pkg.b: $g @ minor
";

pub const DUPLICATE_EXPORT: &str = "\
$bundle: 1.0.0
pkg.a: 1.0.0
pkg.b: 1.1.0
pkg.a: 2.0.0
";

pub const EXPORTS_ONLY: &str = "\
pkg.a: 1.0.0
pkg.b: 1.1.0 @ micro
";

pub const MALFORMED_VERSION: &str = "\
$bundle: 1.0.0
pkg.c: abc
pkg.d: 1.0.0
";
