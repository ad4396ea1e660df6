//! The version model: statements, documents and resolution.
//!
//! A [`Document`] owns an arena of [`Statement`]s (the module version, groups
//! and exports) together with the [`TextLine`](crate::syntax::TextLine)s they
//! were parsed from. Statements reference each other through
//! [`StatementId`](crate::base::StatementId) handles only.
//!
//! [`VersionResolver`] computes the effective version of every statement and
//! checks it against the statement's constraint.

mod document;
mod resolve;
mod statement;


pub use document::Document;
pub use resolve::{
    LoggingHandler, Silent, VersionResolver, ViolationHandler, ViolationPolicy, resolve,
};
pub use statement::{Baseline, Statement, StatementRole, Statements};
