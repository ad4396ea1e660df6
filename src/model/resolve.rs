//! Version resolution and constraint checking.
//!
//! Resolution runs in two passes:
//!
//! 1. The module version takes the largest variance declared by itself or by
//!    any export, applied to its baseline. Every other inheritance root takes
//!    the largest variance of itself and the exports inheriting from it.
//!    Groups between an export and its root count as part of that export.
//! 2. Exports are resolved: an inheriting export equals its source's
//!    resolution (its own variance is settled, not applied again), any other
//!    export applies its own variance to its baseline.
//!
//! Checking is independent of resolving: a resolution is always available
//! on demand, so [`VersionResolver::test`] works on unresolved documents too.

use std::ops::ControlFlow;

use rustc_hash::FxHashMap;

use super::document::Document;
use super::statement::{Statement, Statements};
use crate::base::{StatementId, VersionVariance};
use crate::diagnostics::{Diagnostic, ErrorCode, Feedback};

/// Hooks invoked for statements whose resolution violates their constraint.
pub trait ViolationHandler {
    /// An export failed; `Break` stops checking immediately.
    fn export_violated(&mut self, _document: &Document, _export: &Statement) -> ControlFlow<()> {
        ControlFlow::Break(())
    }

    /// The module version failed.
    fn module_violated(&mut self, _document: &Document, _module: &Statement) {}
}

/// Reports nothing and stops at the first violation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl ViolationHandler for Silent {}

/// What to do after reporting a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViolationPolicy {
    /// Stop at the first violation.
    Abort,
    /// Check everything so that all violations are reported.
    #[default]
    Continue,
}

/// Reports each violation to a feedback sink.
#[derive(Debug, Clone, Default)]
pub struct LoggingHandler<F> {
    feedback: F,
    policy: ViolationPolicy,
    violations: usize,
}

impl<F: Feedback> LoggingHandler<F> {
    pub fn new(feedback: F) -> Self {
        Self {
            feedback,
            policy: ViolationPolicy::default(),
            violations: 0,
        }
    }

    pub fn with_policy(mut self, policy: ViolationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Number of violations reported so far.
    pub fn violations(&self) -> usize {
        self.violations
    }

    pub fn into_feedback(self) -> F {
        self.feedback
    }

    fn report(&mut self, message: String) {
        self.violations += 1;
        self.feedback
            .report(&Diagnostic::new(ErrorCode::E0501, message));
    }
}

impl<F: Feedback> ViolationHandler for LoggingHandler<F> {
    fn export_violated(&mut self, document: &Document, export: &Statement) -> ControlFlow<()> {
        let constraint = export
            .constraint()
            .map(ToString::to_string)
            .unwrap_or_default();
        self.report(format!(
            "Export '{}': target version {} violates version constraint {}.",
            export.identifier(),
            document.resolution(export.id()),
            constraint
        ));

        match self.policy {
            ViolationPolicy::Abort => ControlFlow::Break(()),
            ViolationPolicy::Continue => ControlFlow::Continue(()),
        }
    }

    fn module_violated(&mut self, document: &Document, module: &Statement) {
        let constraint = module
            .constraint()
            .map(ToString::to_string)
            .unwrap_or_default();
        self.report(format!(
            "Target module version {} violates version restriction to {}.",
            document.resolution(module.id()),
            constraint
        ));
    }
}

/// Resolves a document and checks its constraints.
pub struct VersionResolver<'d, H = Silent> {
    document: &'d mut Document,
    handler: H,
}

impl<'d> VersionResolver<'d, Silent> {
    pub fn new(document: &'d mut Document) -> Self {
        Self::with_handler(document, Silent)
    }
}

impl<'d, H: ViolationHandler> VersionResolver<'d, H> {
    pub fn with_handler(document: &'d mut Document, handler: H) -> Self {
        Self { document, handler }
    }

    pub fn document(&self) -> &Document {
        self.document
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Compute the resolution of every statement.
    pub fn resolve(&mut self) -> &mut Self {
        resolve(self.document);
        self
    }

    /// Check every export, then the module, against its constraint.
    ///
    /// Returns `true` only if all of them pass. The handler decides whether
    /// checking stops at the first failing export.
    pub fn test(&mut self) -> bool {
        let document: &Document = self.document;
        let mut result = true;

        for export in document.exports() {
            if document.statements().test(export.id()) {
                continue;
            }
            result = false;
            if self.handler.export_violated(document, export).is_break() {
                return false;
            }
        }

        if !document.statements().test(document.module_id()) {
            self.handler.module_violated(document, document.module());
            return false;
        }

        result
    }
}

/// Compute the resolution of every statement of a document.
pub fn resolve(document: &mut Document) {
    let module_id = document.module_id();

    // Pass 1: the module takes the largest variance of all
    let statements = document.statements();
    let mut variance = document.module().variance().unwrap_or_default();
    if variance != VersionVariance::Major {
        for export in document.exports() {
            let inherited = if statements.inheritance_root(export.id()) == module_id {
                chain_variance(statements, export, module_id)
            } else {
                export.variance().unwrap_or_default()
            };
            variance = variance.max(inherited);
            if variance == VersionVariance::Major {
                break;
            }
        }
    }

    let module_resolution = variance.apply(&document.baseline(module_id));
    tracing::debug!(%variance, resolution = %module_resolution, "resolved module version");
    if let Some(module) = document.statements_mut().get_mut(module_id) {
        module.resolve(Some(module_resolution));
        module.settle_variance();
    }

    // Other inheritance roots take the largest variance of their heirs
    let mut sources: FxHashMap<StatementId, VersionVariance> = FxHashMap::default();
    let statements = document.statements();
    for export in document.exports().filter(|e| e.is_inheriting()) {
        let root = statements.inheritance_root(export.id());
        if root == module_id {
            continue;
        }
        let inherited = chain_variance(statements, export, root);
        let current = sources
            .entry(root)
            .or_insert_with(|| statements[root].variance().unwrap_or_default());
        *current = (*current).max(inherited);
    }

    for (root, variance) in sources {
        let resolution = variance.apply(&document.baseline(root));
        if let Some(source) = document.statements_mut().get_mut(root) {
            tracing::debug!(group = source.identifier(), %variance, %resolution, "resolved group");
            source.resolve(Some(resolution));
        }
    }

    // Pass 2: exports
    let exports: Vec<StatementId> = document.export_ids().collect();
    for id in exports {
        let inheriting = document.statements()[id].is_inheriting();
        let resolution = if inheriting {
            document.resolution(document.statements().inheritance_root(id))
        } else {
            let baseline = document.baseline(id);
            document.statements()[id]
                .variance()
                .unwrap_or_default()
                .apply(&baseline)
        };

        if let Some(export) = document.statements_mut().get_mut(id) {
            export.resolve(Some(resolution));
            if inheriting {
                export.settle_variance();
            }
            tracing::trace!(
                export = export.identifier(),
                resolution = ?export.resolved(),
                "resolved export"
            );
        }
    }

    tracing::info!(
        module = %document.module_version(),
        exports = document.export_ids().count(),
        "resolution finished"
    );
}

/// Largest variance of an export and the groups between it and `root`.
fn chain_variance(statements: &Statements, export: &Statement, root: StatementId) -> VersionVariance {
    let mut variance = export.variance().unwrap_or_default();
    let mut link = export.inheritance();
    while let Some(id) = link.filter(|id| *id != root) {
        // Intermediate groups pass their own variance on to the root
        variance = variance.max(statements[id].variance().unwrap_or_default());
        link = statements[id].inheritance();
    }
    variance
}
