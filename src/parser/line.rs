//! Single-line recognizer.
//!
//! A [`LineParser`] walks one source line strictly left to right. Every
//! recognizer matches at the cursor only; consumed text is appended to the
//! line's [`TextLine`] as literal fragments or, for values, as placeholders
//! bound to statement fields.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use text_size::TextSize;

use super::errors::ParseFailure;
use crate::base::constants::{
    DEFAULT_CONSTRAINT_PREFIX, DEFAULT_VARIANCE_PREFIX, INHERIT_DIRECTIVE, MODULE_VERSION_NAME,
};
use crate::base::{StatementId, Version, VersionVariance, static_pattern};
use crate::diagnostics::ErrorCode;
use crate::model::Baseline;
use crate::syntax::{Field, FieldValue, Placeholder, TextLine};

// ============================================================================
// PATTERNS (all anchored at the cursor)
// ============================================================================

static IGNORABLE: LazyLock<Regex> = LazyLock::new(|| static_pattern(r"^\s*(?:#.*)?$"));

static ATTRIBUTES: LazyLock<Regex> =
    LazyLock::new(|| static_pattern(r"^\s*\+\s*(?P<value>.*?)\s*$"));

static GROUP_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| static_pattern(r"^\s*(?P<value>\$[^\s$:=<@#]+)\s*:\s*"));

static EXPORT_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| static_pattern(r"^\s*(?P<value>[^\s$:=<@#]+)\s*:\s*"));

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| static_pattern(r"^(?P<value>\$[^\s$:=<@#]+)"));

static DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| static_pattern(r"^(?P<value>[A-Za-z]+)(?:[\s<@#]|$)"));

static BASELINE: LazyLock<Regex> = LazyLock::new(|| {
    static_pattern(r"^(?P<value>[0-9]+(?:\.[0-9]+)?(?:\.[0-9]+)?(?:\.[^\s:=<@#]+)?)")
});

static CONSTRAINT: LazyLock<Regex> = LazyLock::new(|| {
    static_pattern(
        r"^(?P<prefix>\s*<\s*)(?P<value>[0-9]+(?:\.[0-9]+)?(?:\.[0-9]+)?(?:\.[^\s:=<@#]+)?)",
    )
});

static VARIANCE: LazyLock<Regex> =
    LazyLock::new(|| static_pattern(r"^(?P<prefix>\s*@\s*)(?P<value>[A-Za-z]+)"));

// ============================================================================
// LINE PARSER
// ============================================================================

/// Recognizer state for one line: the input, a cursor and the text built so far.
#[derive(Debug)]
pub struct LineParser<'a> {
    line: &'a str,
    position: usize,
    text: TextLine,
}

impl<'a> LineParser<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            position: 0,
            text: TextLine::new(),
        }
    }

    /// The whole input line.
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Cursor offset in bytes.
    pub fn position(&self) -> TextSize {
        offset(self.position)
    }

    /// The unconsumed rest of the line.
    pub fn rest(&self) -> &'a str {
        &self.line[self.position..]
    }

    /// The fragments recognized so far.
    pub fn text(&self) -> &TextLine {
        &self.text
    }

    pub fn into_text(self) -> TextLine {
        self.text
    }

    /// A failure at the current cursor position.
    pub fn failure(&self, code: ErrorCode, message: impl Into<String>) -> ParseFailure {
        ParseFailure::new(code, self.position(), message)
    }

    // ========================================================================
    // Recognizers
    // ========================================================================

    /// Blank or comment-only rest of the line.
    pub fn parse_ignorable(&mut self) -> bool {
        if IGNORABLE.is_match(self.rest()) {
            self.consume_literal(self.line.len() - self.position);
            return true;
        }
        false
    }

    /// `+ attributes`, returning the attribute text without surrounding space.
    pub fn parse_attributes(&mut self) -> Option<&'a str> {
        let captures = self.captures(&ATTRIBUTES)?;
        let value = captures.name("value").map_or("", |m| m.as_str());
        self.consume_literal(whole(&captures));
        Some(value)
    }

    /// `$name:`, returning the group name.
    pub fn parse_group_declaration(&mut self) -> Option<&'a str> {
        self.parse_declaration(&GROUP_DECLARATION)
    }

    /// `name:`, returning the export name.
    pub fn parse_export_declaration(&mut self) -> Option<&'a str> {
        self.parse_declaration(&EXPORT_DECLARATION)
    }

    fn parse_declaration(&mut self, pattern: &Regex) -> Option<&'a str> {
        let captures = self.captures(pattern)?;
        let value = captures.name("value")?.as_str();
        self.consume_literal(whole(&captures));
        tracing::trace!(name = value, "declaration");
        Some(value)
    }

    /// The mandatory baseline of `statement`.
    ///
    /// Accepts a literal version, a `$name` reference or the `inherit`
    /// directive; `lookup` maps a reference name (the directive looks up the
    /// module version) to the statement it denotes.
    pub fn parse_baseline(
        &mut self,
        statement: StatementId,
        lookup: impl FnOnce(&str) -> Option<StatementId>,
    ) -> Result<Baseline, ParseFailure> {
        if self.rest().is_empty() {
            return Err(self.failure(ErrorCode::E0202, "Missing version baseline."));
        }

        let reference = self
            .captures(&REFERENCE)
            .and_then(|c| c.name("value"))
            .map(|m| (m.as_str(), m.as_str()))
            .or_else(|| {
                self.captures(&DIRECTIVE)
                    .and_then(|c| c.name("value"))
                    .filter(|m| m.as_str() == INHERIT_DIRECTIVE)
                    .map(|m| (m.as_str(), MODULE_VERSION_NAME))
            });

        if let Some((text, name)) = reference {
            let Some(target) = lookup(name) else {
                return Err(self.failure(
                    ErrorCode::E0301,
                    format!("Reference to undefined group '{name}'."),
                ));
            };
            self.bind(
                Placeholder::new(statement, Field::Baseline, "")
                    .with_source(FieldValue::Reference(target), text),
                text.len(),
            );
            return Ok(Baseline::Inherited(target));
        }

        let Some(text) = self
            .captures(&BASELINE)
            .and_then(|c| c.name("value"))
            .map(|m| m.as_str())
        else {
            return Err(self.failure(ErrorCode::E0203, "Version baseline invalid."));
        };

        let version = self.version(text)?;
        self.bind(
            Placeholder::new(statement, Field::Baseline, "")
                .with_source(FieldValue::Version(version.clone()), text),
            text.len(),
        );
        Ok(Baseline::Explicit(version))
    }

    /// Optional `< version`.
    pub fn parse_constraint(&mut self, statement: StatementId) -> Result<Option<Version>, ParseFailure> {
        let Some(captures) = self.captures(&CONSTRAINT) else {
            self.text.push_placeholder(Placeholder::new(
                statement,
                Field::Constraint,
                DEFAULT_CONSTRAINT_PREFIX,
            ));
            return Ok(None);
        };

        let prefix = captures.name("prefix").map_or("", |m| m.as_str());
        let text = captures.name("value").map_or("", |m| m.as_str());
        let version = self.version(text)?;
        self.bind(
            Placeholder::new(statement, Field::Constraint, prefix)
                .with_source(FieldValue::Version(version.clone()), text),
            whole(&captures),
        );
        Ok(Some(version))
    }

    /// Optional `@ variance`.
    pub fn parse_variance(
        &mut self,
        statement: StatementId,
    ) -> Result<Option<VersionVariance>, ParseFailure> {
        let Some(captures) = self.captures(&VARIANCE) else {
            self.text.push_placeholder(Placeholder::new(
                statement,
                Field::Variance,
                DEFAULT_VARIANCE_PREFIX,
            ));
            return Ok(None);
        };

        let prefix = captures.name("prefix").map_or("", |m| m.as_str());
        let text = captures.name("value").map_or("", |m| m.as_str());
        let variance: VersionVariance = text
            .parse()
            .map_err(|e| ParseFailure::from_version_error(e, self.position()))?;
        self.bind(
            Placeholder::new(statement, Field::Variance, prefix)
                .with_source(FieldValue::Variance(variance), text),
            whole(&captures),
        );
        Ok(Some(variance))
    }

    /// Keep the rest of the line; `false` if it is more than space or a comment.
    pub fn consume_trailing(&mut self) -> bool {
        let rest = self.rest();
        let ignorable = IGNORABLE.is_match(rest);
        self.consume_literal(rest.len());
        ignorable
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn captures(&self, pattern: &Regex) -> Option<Captures<'a>> {
        let rest: &'a str = &self.line[self.position..];
        pattern.captures(rest)
    }

    fn version(&self, text: &str) -> Result<Version, ParseFailure> {
        Version::parse(text).map_err(|e| ParseFailure::from_version_error(e, self.position()))
    }

    fn consume_literal(&mut self, length: usize) {
        let end = self.position + length;
        self.text.push_literal(&self.line[self.position..end]);
        self.position = end;
    }

    /// Append a placeholder covering `length` bytes at the cursor.
    fn bind(&mut self, placeholder: Placeholder, length: usize) {
        tracing::trace!(field = ?placeholder.field, offset = self.position, "bound value");
        self.text.push_placeholder(placeholder);
        self.position += length;
    }
}

fn whole(captures: &Captures<'_>) -> usize {
    captures.get(0).map_or(0, |m| m.end())
}

fn offset(position: usize) -> TextSize {
    TextSize::try_from(position).unwrap_or(TextSize::new(u32::MAX))
}
