//! The parsed document: statements plus their textual representation.

use std::collections::BTreeMap;
use std::io::{self, Write};

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::statement::{Statement, Statements};
use crate::base::{StatementId, Version};
use crate::syntax::TextLine;

/// A finished document.
///
/// The structure (which statements exist, which lines they came from) is
/// fixed once the parser produced the document; only whole-statement
/// operations such as resolving or [`Document::restore`] change field values.
#[derive(Debug, Clone)]
pub struct Document {
    statements: Statements,
    module: StatementId,
    groups: IndexMap<SmolStr, StatementId>,
    exports: BTreeMap<SmolStr, StatementId>,
    representation: Vec<TextLine>,
    trailing_newline: bool,
}

impl Document {
    pub(crate) fn new(
        statements: Statements,
        module: StatementId,
        groups: IndexMap<SmolStr, StatementId>,
        exports: BTreeMap<SmolStr, StatementId>,
        representation: Vec<TextLine>,
        trailing_newline: bool,
    ) -> Self {
        Self {
            statements,
            module,
            groups,
            exports,
            representation,
            trailing_newline,
        }
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn statements(&self) -> &Statements {
        &self.statements
    }

    pub(crate) fn statements_mut(&mut self) -> &mut Statements {
        &mut self.statements
    }

    pub fn statement(&self, id: StatementId) -> Option<&Statement> {
        self.statements.get(id)
    }

    pub fn module_id(&self) -> StatementId {
        self.module
    }

    /// The module version statement.
    pub fn module(&self) -> &Statement {
        self.expect_statement(self.module)
    }

    /// Exports in name order.
    pub fn exports(&self) -> impl Iterator<Item = &Statement> {
        self.exports.values().map(|id| self.expect_statement(*id))
    }

    /// Export ids in name order.
    pub fn export_ids(&self) -> impl Iterator<Item = StatementId> {
        self.exports.values().copied()
    }

    pub fn export(&self, name: &str) -> Option<&Statement> {
        self.exports.get(name).and_then(|id| self.statements.get(*id))
    }

    /// Groups in declaration order, without the module statement.
    pub fn groups(&self) -> impl Iterator<Item = &Statement> {
        self.groups.values().map(|id| self.expect_statement(*id))
    }

    pub fn group(&self, name: &str) -> Option<&Statement> {
        self.groups.get(name).and_then(|id| self.statements.get(*id))
    }

    /// Effective baseline of a statement.
    pub fn baseline(&self, id: StatementId) -> Version {
        self.statements.baseline(id)
    }

    /// Effective resolution of a statement.
    pub fn resolution(&self, id: StatementId) -> Version {
        self.statements.resolution(id)
    }

    /// Resolution of the module version statement.
    pub fn module_version(&self) -> Version {
        self.resolution(self.module)
    }

    fn expect_statement(&self, id: StatementId) -> &Statement {
        // Ids stored in the maps were issued by this document's arena
        &self.statements[id]
    }

    // =========================================================================
    // Restore
    // =========================================================================

    /// Make the resolutions the new baselines.
    ///
    /// Every statement that owns its baseline gets its current resolution as
    /// the baseline. Inheriting statements keep their reference. All present
    /// variances are reset to `none`. Duplicate definitions that were dropped
    /// during parsing are left untouched.
    pub fn restore(&mut self) {
        let ids: Vec<StatementId> = std::iter::once(self.module)
            .chain(self.groups.values().copied())
            .chain(self.exports.values().copied())
            .collect();

        for id in ids {
            let resolution = self.statements.resolution(id);
            let Some(statement) = self.statements.get_mut(id) else {
                continue;
            };
            if !statement.is_inheriting() {
                statement.set_baseline(resolution);
                statement.resolve(None);
            }
            statement.settle_variance();
            tracing::debug!(
                statement = statement.identifier(),
                role = statement.role().as_str(),
                "restored baseline"
            );
        }
    }

    // =========================================================================
    // Representation
    // =========================================================================

    pub fn representation(&self) -> &[TextLine] {
        &self.representation
    }

    /// Whether the source ended with a line terminator.
    pub fn has_trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Render every line with the current field values.
    pub fn render_lines(&self) -> impl Iterator<Item = String> {
        self.representation
            .iter()
            .map(|line| line.render(&self.statements))
    }

    /// Render the whole document as source text.
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        let count = self.representation.len();
        for (index, line) in self.render_lines().enumerate() {
            out.push_str(&line);
            if index + 1 < count || self.trailing_newline {
                out.push('\n');
            }
        }
        out
    }

    /// Write the rendered source text.
    pub fn write_to(&self, mut sink: impl Write) -> io::Result<()> {
        sink.write_all(self.to_source().as_bytes())?;
        sink.flush()
    }
}
