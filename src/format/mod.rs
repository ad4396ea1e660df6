//! Output formats generated from a resolved document.
//!
//! Every format consumes the same view of a [`Document`]: the module
//! version and, per export, its resolved version and attributes.
//!
//! - [`BndFormat`] - `Bundle-Version` and `Export-Package` headers for bnd
//! - [`PropertiesFormat`] - one `name=version` entry per statement
//! - `JsonFormat` - the same data as JSON (feature `json`)

mod bnd;
#[cfg(feature = "json")]
mod json;
mod options;
mod properties;


use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub use bnd::BndFormat;
#[cfg(feature = "json")]
pub use json::JsonFormat;
pub use options::{BndOptions, BundleVersionMode};
pub use properties::PropertiesFormat;

use crate::base::Version;
use crate::model::Document;

/// Header comment identifying generated files.
pub const GENERATED_COMMENT: &str = "# Generated by the exportver tool";

/// One export as seen by output formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry<'d> {
    pub name: &'d str,
    pub version: Version,
    pub attributes: Option<&'d str>,
}

/// Exports of `document` in name order with their resolved versions.
pub fn export_entries(document: &Document) -> Vec<ExportEntry<'_>> {
    document
        .exports()
        .map(|export| ExportEntry {
            name: export.identifier(),
            version: document.resolution(export.id()),
            attributes: export.attributes().filter(|a| !a.is_empty()),
        })
        .collect()
}

/// A generated output that can be written to a sink.
pub trait OutputFormat {
    fn write_to(&self, sink: &mut dyn Write) -> io::Result<()>;

    /// The complete output as a string.
    fn render(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into memory cannot fail
        let _ = self.write_to(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Write the output to a file, replacing its content.
    fn store(&self, path: &Path) -> io::Result<()> {
        let mut sink = BufWriter::new(File::create(path)?);
        self.write_to(&mut sink)?;
        sink.flush()
    }
}
