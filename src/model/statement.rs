//! Version statements and the arena holding them.
//!
//! All three statement roles share one shape: a baseline, an optional
//! exclusive upper-bound constraint, an optional variance and a resolution
//! that is derived on demand unless set explicitly. Inheritance is stored as
//! a [`StatementId`] into the owning [`Statements`] arena and followed by
//! lookup, so the chain `export -> group -> module` involves no references
//! between statements.

use std::ops::Index;

use smol_str::SmolStr;

use crate::base::{StatementId, Version, VersionVariance};
use crate::syntax::{Field, FieldSource, FieldValue};

/// The role a statement plays in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementRole {
    /// The module version; exactly one per document.
    Module,
    /// A named inheritance source, not exported itself.
    Group,
    /// An exported unit.
    Export,
}

impl StatementRole {
    /// Whether statements of this role may take their baseline from another.
    pub fn can_inherit(self) -> bool {
        !matches!(self, Self::Module)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Group => "group",
            Self::Export => "export",
        }
    }
}

/// Where a statement's baseline comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Baseline {
    /// A version written in the statement itself.
    Explicit(Version),
    /// The baseline (and resolution) of another statement.
    Inherited(StatementId),
}

/// One version statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    id: StatementId,
    role: StatementRole,
    identifier: SmolStr,
    baseline: Baseline,
    constraint: Option<Version>,
    variance: Option<VersionVariance>,
    resolution: Option<Version>,
    attributes: Option<String>,
}

impl Statement {
    pub(crate) fn new(id: StatementId, role: StatementRole, identifier: impl Into<SmolStr>) -> Self {
        Self {
            id,
            role,
            identifier: identifier.into(),
            baseline: Baseline::Explicit(Version::ZERO),
            constraint: None,
            variance: None,
            resolution: None,
            attributes: None,
        }
    }

    pub fn id(&self) -> StatementId {
        self.id
    }

    pub fn role(&self) -> StatementRole {
        self.role
    }

    /// The name the statement was declared with.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The local baseline, which may be a reference to another statement.
    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// The statement this one inherits from, if any.
    pub fn inheritance(&self) -> Option<StatementId> {
        match self.baseline {
            Baseline::Inherited(source) => Some(source),
            Baseline::Explicit(_) => None,
        }
    }

    pub fn is_inheriting(&self) -> bool {
        self.inheritance().is_some()
    }

    pub fn constraint(&self) -> Option<&Version> {
        self.constraint.as_ref()
    }

    pub fn variance(&self) -> Option<VersionVariance> {
        self.variance
    }

    /// The explicitly set resolution, if any.
    pub fn resolved(&self) -> Option<&Version> {
        self.resolution.as_ref()
    }

    /// Free-form attribute text of an export.
    pub fn attributes(&self) -> Option<&str> {
        self.attributes.as_deref()
    }

    /// Set an explicit baseline, dropping any inheritance.
    pub fn set_baseline(&mut self, version: Version) {
        self.baseline = Baseline::Explicit(version);
    }

    pub fn set_constraint(&mut self, constraint: Option<Version>) {
        self.constraint = constraint;
    }

    pub fn set_variance(&mut self, variance: Option<VersionVariance>) {
        self.variance = variance;
    }

    /// Override the resolution; `None` restores on-demand derivation.
    pub fn resolve(&mut self, resolution: Option<Version>) {
        self.resolution = resolution;
    }

    /// Reset a present variance to `none`, recording that it was applied.
    pub fn settle_variance(&mut self) {
        if self.variance.is_some() {
            self.variance = Some(VersionVariance::None);
        }
    }

    pub(crate) fn inherit(&mut self, source: StatementId) {
        debug_assert!(self.role.can_inherit(), "{} cannot inherit", self.identifier);
        self.baseline = Baseline::Inherited(source);
    }

    pub(crate) fn set_attributes(&mut self, attributes: Option<String>) {
        self.attributes = attributes;
    }
}

/// Arena of statements, indexed by [`StatementId`].
#[derive(Debug, Clone, Default)]
pub struct Statements {
    items: Vec<Statement>,
}

impl Statements {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next pushed statement will get.
    pub fn next_id(&self) -> StatementId {
        StatementId::from(self.items.len())
    }

    /// Store a statement built for [`Self::next_id`].
    pub fn push(&mut self, statement: Statement) -> StatementId {
        let id = self.next_id();
        debug_assert_eq!(statement.id, id);
        self.items.push(statement);
        id
    }

    pub fn get(&self, id: StatementId) -> Option<&Statement> {
        self.items.get(id.index())
    }

    pub fn get_mut(&mut self, id: StatementId) -> Option<&mut Statement> {
        self.items.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.items.iter()
    }

    /// Follow the inheritance chain to the statement owning a concrete baseline.
    pub fn inheritance_root(&self, id: StatementId) -> StatementId {
        let mut current = id;
        // Sources are always declared earlier, so a chain is never longer than the arena
        for _ in 0..=self.items.len() {
            match self.get(current).and_then(Statement::inheritance) {
                Some(source) => current = source,
                None => return current,
            }
        }
        current
    }

    /// Effective baseline: the local version or the inheritance root's one.
    pub fn baseline(&self, id: StatementId) -> Version {
        let root = self.inheritance_root(id);
        match self.get(root).map(Statement::baseline) {
            Some(Baseline::Explicit(version)) => version.clone(),
            _ => Version::ZERO,
        }
    }

    /// Effective resolution.
    ///
    /// An explicit resolution wins. Otherwise an inheriting statement takes
    /// its source's resolution (its own variance does not apply) and any
    /// other statement applies its variance to its baseline.
    pub fn resolution(&self, id: StatementId) -> Version {
        let mut current = id;
        for _ in 0..=self.items.len() {
            let Some(statement) = self.get(current) else {
                break;
            };
            if let Some(resolution) = &statement.resolution {
                return resolution.clone();
            }
            match &statement.baseline {
                Baseline::Inherited(source) => current = *source,
                Baseline::Explicit(version) => {
                    return statement.variance.unwrap_or_default().apply(version);
                }
            }
        }
        Version::ZERO
    }

    /// Check the resolution against the constraint; no constraint always passes.
    pub fn test(&self, id: StatementId) -> bool {
        let Some(statement) = self.get(id) else {
            return true;
        };
        match &statement.constraint {
            Some(constraint) => self.resolution(id) < *constraint,
            None => true,
        }
    }
}

impl Index<StatementId> for Statements {
    type Output = Statement;

    fn index(&self, id: StatementId) -> &Statement {
        &self.items[id.index()]
    }
}

impl FieldSource for Statements {
    fn field_value(&self, statement: StatementId, field: Field) -> Option<FieldValue> {
        let statement = self.get(statement)?;
        match field {
            Field::Baseline => Some(match &statement.baseline {
                Baseline::Explicit(version) => FieldValue::Version(version.clone()),
                Baseline::Inherited(source) => FieldValue::Reference(*source),
            }),
            Field::Constraint => statement.constraint.clone().map(FieldValue::Version),
            Field::Variance => statement.variance.map(FieldValue::Variance),
        }
    }

    fn reference_name(&self, target: StatementId) -> SmolStr {
        self.get(target)
            .map(|statement| statement.identifier.clone())
            .unwrap_or_default()
    }
}
