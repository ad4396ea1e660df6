//! # exportver
//!
//! Declarative version tracking for exported packages.
//!
//! A version source file declares the module version, optional version
//! groups and the exported packages, each with a baseline, an optional
//! constraint and an optional variance. The library parses the file without
//! losing a single character, resolves the target versions, checks the
//! constraints, generates bnd export instructions and writes the file back
//! with restored baselines.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! cli         → clap arguments, command flow, exit codes
//!   ↓
//! project     → file loading and storing
//!   ↓
//! format      → bnd, properties and JSON outputs
//!   ↓
//! parser      → line recognizers, document parser
//!   ↓
//! model       → statements, document, resolution
//!   ↓
//! diagnostics → error codes, collector, feedback sinks
//!   ↓
//! syntax      → lossless line representation
//!   ↓
//! base        → Version, VersionVariance, StatementId
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → diagnostics → model → parser → format → project → cli)
// ============================================================================

/// Foundation types: versions, variances, statement ids
pub mod base;

/// Lossless representation of source lines
pub mod syntax;

/// Diagnostic codes, collection and reporting
pub mod diagnostics;

/// Statements, documents and version resolution
pub mod model;

/// Version source file parser
pub mod parser;

/// Generated outputs
pub mod format;

/// Loading and storing source files
pub mod project;

/// Command-line interface
pub mod cli;

// Re-export foundation types
pub use base::{StatementId, Version, VersionError, VersionVariance};

// Re-export the main entry points
pub use diagnostics::{Diagnostic, ErrorCode, Feedback, Severity};
pub use model::{Document, VersionResolver, resolve};
pub use parser::{DocumentParser, ParseResult, parse_str};
