//! Parser error handling
//!
//! - [`ParseFailure`]: a line that does not match the grammar at the cursor
//! - [`DocumentError`]: misuse of a [`DocumentParser`](super::DocumentParser)
//!
//! Failures are recoverable: the parser records them as diagnostics, keeps
//! the offending line verbatim and continues with the next line.

mod error;

pub use error::{DocumentError, ParseFailure};
