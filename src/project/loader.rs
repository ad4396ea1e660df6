//! Loading, checking and storing documents.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use super::ProjectError;
use crate::diagnostics::Feedback;
use crate::model::{Document, LoggingHandler, VersionResolver, ViolationPolicy};
use crate::parser::parse_str_with;

/// Load and parse a source file.
///
/// Every diagnostic goes to `feedback` as it is found. The document is
/// returned only if no errors were recorded; warnings are summarized.
pub fn load_document(path: &Path, feedback: &mut dyn Feedback) -> Result<Document, ProjectError> {
    let content = fs::read_to_string(path).map_err(|e| ProjectError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded source");

    let result = parse_str_with(&content, &mut *feedback);
    let (errors, warnings) = (result.error_count(), result.warning_count());

    if errors > 0 {
        return Err(ProjectError::Parse {
            path: path.to_path_buf(),
            errors,
            warnings,
        });
    }

    if warnings > 0 {
        feedback.warn("Warnings encountered when parsing the definition file. Build might not be stable.");
    }

    Ok(result.document)
}

/// Resolve a document and check its constraints, reporting every violation.
pub fn check_document(document: &mut Document, feedback: &mut dyn Feedback) -> Result<(), ProjectError> {
    let handler = LoggingHandler::new(&mut *feedback).with_policy(ViolationPolicy::Continue);
    let mut resolver = VersionResolver::with_handler(document, handler);
    if resolver.resolve().test() {
        return Ok(());
    }

    let violations = resolver.into_handler().violations();
    Err(ProjectError::ConstraintViolation(violations))
}

/// Write a document back to `path`.
pub fn store_document(path: &Path, document: &Document) -> Result<(), ProjectError> {
    let output_error = |source| ProjectError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(output_error)?;
    document
        .write_to(BufWriter::new(file))
        .map_err(output_error)?;
    tracing::debug!(path = %path.display(), "stored source");
    Ok(())
}
