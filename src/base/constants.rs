//! Reserved names and textual defaults of the source format.

/// Canonical name of the module-version statement.
pub const MODULE_VERSION_NAME: &str = "$bundle";

/// Alternative spelling of the module-version statement name.
pub const MODULE_VERSION_ALIAS: &str = "$bundle-version";

/// Baseline directive inheriting from the module-version statement.
pub const INHERIT_DIRECTIVE: &str = "inherit";

/// Prefix of group names.
pub const GROUP_PREFIX: char = '$';

/// Separator used when a constraint is added to a line that had none.
pub const DEFAULT_CONSTRAINT_PREFIX: &str = " < ";

/// Separator used when a variance is added to a line that had none.
pub const DEFAULT_VARIANCE_PREFIX: &str = " @ ";

/// Source file used when none is given.
pub const DEFAULT_SOURCE_FILE: &str = "exports.ver";

/// Check whether a name denotes the module-version statement.
pub fn is_module_version_name(name: &str) -> bool {
    name == MODULE_VERSION_NAME || name == MODULE_VERSION_ALIAS
}
