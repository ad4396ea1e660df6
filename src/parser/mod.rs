//! Parser for version source files.
//!
//! The grammar is line oriented; every physical line is one of:
//!
//! ```text
//! # comment or blank line
//! $bundle: 1.2.0 < 2.0.0 @ minor       module version (also `$bundle-version`)
//! $group: 1.0.0 @ micro                group, an inheritance source
//! com.example.api: $group < 2.0.0      export inheriting from `$group`
//! com.example.impl: 1.4 @ micro        export with its own baseline
//! + include:="*"                       attributes of the preceding export
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source text
//!     ↓
//! DocumentParser → splits lines, tracks the pending export and counters
//!     ↓
//! LineParser     → anchored recognizers, one cursor per line
//!     ↓
//! Document       → statements plus placeholder-bound TextLines
//! ```
//!
//! Parsing never stops at the first problem: a line that fails is kept
//! verbatim, recorded as a [`Diagnostic`](crate::diagnostics::Diagnostic)
//! and parsing continues with the next line.

mod document;
pub mod errors;
mod line;


pub use document::{DocumentParser, ParseResult, parse_str, parse_str_with};
pub use errors::{DocumentError, ParseFailure};
pub use line::LineParser;
