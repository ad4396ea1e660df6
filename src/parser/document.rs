//! Whole-file parser.
//!
//! [`DocumentParser`] consumes lines one at a time. A line that fails to
//! parse is kept verbatim and reported; parsing always continues, so a
//! single pass reports every problem of the file. An export stays pending
//! until the next line shows whether an attribute line follows it.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::errors::{DocumentError, ParseFailure};
use super::line::LineParser;
use crate::base::StatementId;
use crate::base::constants::{MODULE_VERSION_NAME, is_module_version_name};
use crate::diagnostics::{
    Diagnostic, DiagnosticCollector, ErrorCode, Feedback, NoFeedback, Severity,
};
use crate::model::{Baseline, Document, Statement, StatementRole, Statements};
use crate::syntax::TextLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Collecting,
    Finished,
}

/// An export waiting for a possible attribute line.
#[derive(Debug, Clone, Copy)]
struct Pending {
    id: StatementId,
    line: u32,
}

/// Line-by-line parser producing a [`Document`].
pub struct DocumentParser<'f> {
    state: State,
    statements: Statements,
    module: Option<StatementId>,
    groups: IndexMap<SmolStr, StatementId>,
    exports: BTreeMap<SmolStr, StatementId>,
    representation: Vec<TextLine>,
    pending: Option<Pending>,
    diagnostics: DiagnosticCollector,
    feedback: Box<dyn Feedback + 'f>,
    line_number: u32,
    trailing_newline: bool,
}

impl Default for DocumentParser<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'f> DocumentParser<'f> {
    pub fn new() -> Self {
        Self {
            state: State::Collecting,
            statements: Statements::new(),
            module: None,
            groups: IndexMap::new(),
            exports: BTreeMap::new(),
            representation: Vec::new(),
            pending: None,
            diagnostics: DiagnosticCollector::new(),
            feedback: Box::new(NoFeedback),
            line_number: 0,
            trailing_newline: true,
        }
    }

    /// Forward every diagnostic to `feedback` as it is recorded.
    pub fn with_feedback(mut self, feedback: impl Feedback + 'f) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.error_count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.warning_count()
    }

    /// Everything recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.diagnostics()
    }

    /// Number of lines accepted so far.
    pub fn line_count(&self) -> u32 {
        self.line_number
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Feed one line, without its `\n` terminator.
    pub fn accept(&mut self, line: &str) -> Result<(), DocumentError> {
        self.check_collecting()?;
        self.accept_line(line);
        Ok(())
    }

    /// Feed a whole source text.
    ///
    /// Lines are split at `\n` only, so `\r` stays part of the line and is
    /// written back unchanged. Whether the text ends with a terminator is
    /// remembered for write-back.
    pub fn accept_str(&mut self, source: &str) -> Result<(), DocumentError> {
        self.check_collecting()?;
        self.accept_source(source);
        Ok(())
    }

    /// Close the input and produce the document.
    ///
    /// A missing module version is reported and replaced by a `0.0.0`
    /// baseline so that the document is still usable for diagnostics.
    pub fn finish(&mut self) -> Result<Document, DocumentError> {
        self.check_collecting()?;
        Ok(self.build())
    }

    /// Consume the parser, returning what it recorded.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        let mut diagnostics = self.diagnostics;
        diagnostics.take()
    }

    fn accept_line(&mut self, line: &str) {
        self.line_number += 1;

        match self.parse_line(LineParser::new(line)) {
            Ok(text) => self.representation.push(text),
            Err(failure) => {
                self.representation.push(TextLine::literal(line));
                let diagnostic = failure.into_diagnostic(self.line_number, line);
                self.record(diagnostic);
            }
        }
    }

    fn accept_source(&mut self, source: &str) {
        if source.is_empty() {
            return;
        }

        let body = source.strip_suffix('\n');
        self.trailing_newline = body.is_some();
        for line in body.unwrap_or(source).split('\n') {
            self.accept_line(line);
        }
    }

    fn build(&mut self) -> Document {
        self.close_pending(None);

        let module = match self.module {
            Some(module) => module,
            None => {
                self.record(Diagnostic::new(
                    ErrorCode::E0401,
                    format!("The {MODULE_VERSION_NAME} declaration required, but missing."),
                ));
                let id = self.statements.next_id();
                self.statements
                    .push(Statement::new(id, StatementRole::Module, MODULE_VERSION_NAME))
            }
        };

        self.state = State::Finished;
        tracing::debug!(
            lines = self.line_number,
            exports = self.exports.len(),
            groups = self.groups.len(),
            errors = self.error_count(),
            warnings = self.warning_count(),
            "document parsed"
        );

        Document::new(
            std::mem::take(&mut self.statements),
            module,
            std::mem::take(&mut self.groups),
            std::mem::take(&mut self.exports),
            std::mem::take(&mut self.representation),
            self.trailing_newline,
        )
    }

    fn check_collecting(&self) -> Result<(), DocumentError> {
        match self.state {
            State::Collecting => Ok(()),
            State::Finished => Err(DocumentError::AlreadyFinished),
        }
    }

    // =========================================================================
    // Line grammar
    // =========================================================================

    fn parse_line(&mut self, mut parser: LineParser<'_>) -> Result<TextLine, ParseFailure> {
        if parser.parse_ignorable() {
            return Ok(parser.into_text());
        }

        if let Some(attributes) = parser.parse_attributes() {
            let attributes = (!attributes.is_empty()).then(|| attributes.to_string());
            if self.close_pending(Some(attributes)) {
                return Ok(parser.into_text());
            }
            return Err(parser.failure(
                ErrorCode::E0204,
                "Export attribute definition missing preceding package export.",
            ));
        }

        self.close_pending(None);

        if let Some(name) = parser.parse_group_declaration() {
            return self.parse_group(parser, name);
        }

        let Some(name) = parser.parse_export_declaration() else {
            return Err(parser.failure(ErrorCode::E0201, "Unknown construct found."));
        };

        let id = self.statements.next_id();
        let mut statement = Statement::new(id, StatementRole::Export, name);
        self.parse_statement(&mut parser, &mut statement)?;
        self.statements.push(statement);
        self.pending = Some(Pending {
            id,
            line: self.line_number,
        });
        Ok(parser.into_text())
    }

    fn parse_group(&mut self, mut parser: LineParser<'_>, name: &str) -> Result<TextLine, ParseFailure> {
        let is_module = is_module_version_name(name);
        let duplicate = if is_module {
            self.module.is_some()
        } else {
            self.groups.contains_key(name)
        };

        if duplicate {
            let line = parser.line();
            self.record(
                Diagnostic::new(
                    ErrorCode::W0101,
                    format!("Declaration of '{name}' duplicated. Using the first occurrence."),
                )
                .at_line(self.line_number, line),
            );
            return Ok(TextLine::literal(line));
        }

        let role = if is_module {
            StatementRole::Module
        } else {
            StatementRole::Group
        };
        let id = self.statements.next_id();
        let mut statement = Statement::new(id, role, name);
        self.parse_statement(&mut parser, &mut statement)?;
        self.statements.push(statement);

        if is_module {
            self.module = Some(id);
        } else {
            self.groups.insert(SmolStr::new(name), id);
        }
        Ok(parser.into_text())
    }

    /// Baseline, constraint, variance and trailing text of a declaration.
    fn parse_statement(
        &mut self,
        parser: &mut LineParser<'_>,
        statement: &mut Statement,
    ) -> Result<(), ParseFailure> {
        let id = statement.id();
        let baseline = parser.parse_baseline(id, |name| self.lookup(name))?;
        match baseline {
            Baseline::Explicit(version) => statement.set_baseline(version),
            Baseline::Inherited(_) if !statement.role().can_inherit() => {
                return Err(parser.failure(
                    ErrorCode::E0302,
                    "The module version must declare its own baseline.",
                ));
            }
            Baseline::Inherited(source) => statement.inherit(source),
        }

        statement.set_constraint(parser.parse_constraint(id)?);
        statement.set_variance(parser.parse_variance(id)?);

        let trailing = parser.position();
        if !parser.consume_trailing() {
            let diagnostic = Diagnostic::new(
                ErrorCode::W0102,
                "Unknown construct found at the end of the line.",
            )
            .at_line(self.line_number, parser.line())
            .at_offset(trailing);
            self.record(diagnostic);
        }

        tracing::debug!(
            statement = statement.identifier(),
            role = statement.role().as_str(),
            line = self.line_number,
            "parsed statement"
        );
        Ok(())
    }

    /// Statement denoted by a reference name.
    fn lookup(&self, name: &str) -> Option<StatementId> {
        if is_module_version_name(name) {
            return self.module;
        }
        self.groups.get(name).copied()
    }

    /// Move the pending export into the export map.
    ///
    /// Returns `false` if nothing was pending. A duplicate name is reported
    /// and the later definition stays out of the map.
    fn close_pending(&mut self, attributes: Option<Option<String>>) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };

        let Some(statement) = self.statements.get_mut(pending.id) else {
            return false;
        };
        if let Some(attributes) = attributes {
            statement.set_attributes(attributes);
        }

        let name = SmolStr::new(statement.identifier());
        if self.exports.contains_key(&name) {
            let source = self
                .representation
                .get(pending.line as usize - 1)
                .map(|line| line.render(&self.statements))
                .unwrap_or_default();
            self.record(
                Diagnostic::new(
                    ErrorCode::W0101,
                    format!("Duplicated definition for '{name}'. Using only the first occurrence."),
                )
                .at_line(pending.line, source),
            );
            return true;
        }

        self.exports.insert(name, pending.id);
        true
    }

    fn record(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(
            severity = diagnostic.severity.as_str(),
            line = ?diagnostic.line,
            "{}",
            diagnostic.message
        );
        self.feedback.report(&diagnostic);
        self.diagnostics.add(diagnostic);
    }
}

/// A parsed document together with the diagnostics recorded for it.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Whether the document can be trusted for further processing.
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Parse a whole source text.
pub fn parse_str(source: &str) -> ParseResult {
    parse_str_with(source, NoFeedback)
}

/// Parse a whole source text, reporting diagnostics to `feedback` as well.
pub fn parse_str_with<'f>(source: &str, feedback: impl Feedback + 'f) -> ParseResult {
    let mut parser = DocumentParser::new().with_feedback(feedback);
    parser.accept_source(source);
    let document = parser.build();
    ParseResult {
        document,
        diagnostics: parser.into_diagnostics(),
    }
}
