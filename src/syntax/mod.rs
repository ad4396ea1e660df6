//! Lossless text representation of source lines.
//!
//! Every parsed line is kept as a [`TextLine`]: literal fragments hold the
//! bytes the parser consumed without interpreting them, placeholders hold
//! a handle to the statement field they were parsed into. Rendering all
//! lines of an unmodified document reproduces the input exactly.

mod fragment;
mod line;


pub use fragment::{Field, FieldSource, FieldValue, Fragment, Placeholder, SourceText};
pub use line::TextLine;
