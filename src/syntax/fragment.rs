//! Fragments of a source line.
//!
//! A fragment is either literal text, emitted verbatim, or a placeholder
//! bound to one field of a statement. Placeholders look the field up at
//! render time, so a line rendered after a statement changed shows the new
//! value in the position (and with the separator) the old one had.

use std::fmt::Write;

use smol_str::SmolStr;

use crate::base::{StatementId, Version, VersionVariance};

/// The statement field a placeholder is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Baseline,
    Constraint,
    Variance,
}

/// The current value of a bound field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Version(Version),
    Variance(VersionVariance),
    /// The baseline is inherited from another statement.
    Reference(StatementId),
}

/// Lookup used by placeholders when rendering.
pub trait FieldSource {
    /// Current value of a field, `None` if the field is unset.
    fn field_value(&self, statement: StatementId, field: Field) -> Option<FieldValue>;

    /// Text naming `target` when used as an inheritance reference.
    fn reference_name(&self, target: StatementId) -> SmolStr;
}

/// Original text a placeholder was parsed from, with the value it denoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub value: FieldValue,
    pub text: SmolStr,
}

/// A fragment bound to a statement field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub statement: StatementId,
    pub field: Field,
    /// Separator emitted before the value; nothing is emitted for an unset field.
    pub prefix: SmolStr,
    /// Present when the value was written in the source line.
    pub source: Option<SourceText>,
}

impl Placeholder {
    pub fn new(statement: StatementId, field: Field, prefix: impl Into<SmolStr>) -> Self {
        Self {
            statement,
            field,
            prefix: prefix.into(),
            source: None,
        }
    }

    /// Remember the text the current value was parsed from.
    pub fn with_source(mut self, value: FieldValue, text: impl Into<SmolStr>) -> Self {
        self.source = Some(SourceText {
            value,
            text: text.into(),
        });
        self
    }

    /// Append the rendered placeholder to `out`.
    pub fn render_into(&self, source: &impl FieldSource, out: &mut String) {
        let Some(value) = source.field_value(self.statement, self.field) else {
            return;
        };

        out.push_str(&self.prefix);

        // Unchanged values keep their original spelling
        if let Some(original) = self.source.as_ref().filter(|s| s.value == value) {
            out.push_str(&original.text);
            return;
        }

        match value {
            FieldValue::Version(version) => {
                let _ = write!(out, "{version}");
            }
            FieldValue::Variance(variance) => out.push_str(variance.as_str()),
            FieldValue::Reference(target) => out.push_str(&source.reference_name(target)),
        }
    }
}

/// One unit of a line's textual reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Literal(String),
    Bound(Placeholder),
}

impl Fragment {
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}
