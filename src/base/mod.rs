//! Foundation types for version tracking.
//!
//! This module provides the value types everything else is built on:
//! - [`Version`] - `major.minor.micro[.qualifier]`, totally ordered
//! - [`VersionVariance`] - the bump rule applied to a baseline
//! - [`VersionError`] - failures constructing either of them
//! - [`StatementId`] - arena handle for statements
//! - Reserved names and textual defaults of the source format
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod error;
mod id;
mod variance;
mod version;


pub use error::VersionError;
pub use id::StatementId;
pub use variance::VersionVariance;
pub use version::Version;

use regex::Regex;

/// Compile a pattern written into the source code.
pub(crate) fn static_pattern(source: &'static str) -> Regex {
    Regex::new(source).unwrap_or_else(|e| panic!("static pattern {source:?} is invalid: {e}"))
}
