//! Source files on disk.
//!
//! Loading reads the whole file, parses it and refuses documents with
//! errors. Storing writes the document back with its original layout.

mod error;
mod loader;


pub use error::ProjectError;
pub use loader::{check_document, load_document, store_document};
