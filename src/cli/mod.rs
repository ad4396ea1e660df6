//! Command-line interface of the `exportver` binary.
//!
//! One invocation loads the source file, resolves and checks it, and then
//! performs the requested actions in a fixed order:
//! bnd file, properties file, JSON dump, restore, report.

mod args;
mod commands;


pub use args::Cli;
pub use commands::{Exit, init_tracing, run};
