//! bnd instructions: `Bundle-Version` and an aligned `Export-Package`.

use std::io::{self, Write};

use chrono::SecondsFormat;

use super::{BndOptions, BundleVersionMode, GENERATED_COMMENT, OutputFormat, export_entries};
use crate::base::Version;
use crate::model::Document;

const BUNDLE_VERSION_HEADER: &str = "Bundle-Version:";
const EXPORT_PACKAGE_HEADER: &str = "Export-Package:";

/// bnd file content for a resolved document.
///
/// Export lines are joined with `\` continuations aligned to a common column,
/// the column being the longest line rounded up to the next indentation stop.
#[derive(Debug, Clone)]
pub struct BndFormat {
    bundle_version: Option<Version>,
    exports: Vec<String>,
    line_length: usize,
    options: BndOptions,
}

impl BndFormat {
    pub fn new(document: &Document, options: BndOptions) -> Self {
        let bundle_version = match &options.bundle_version {
            BundleVersionMode::Resolved => Some(document.module_version()),
            BundleVersionMode::Omitted => None,
            BundleVersionMode::Override(version) => Some(version.clone()),
        };

        let exports: Vec<String> = export_entries(document)
            .into_iter()
            .map(|entry| {
                let mut line = format!("{};version=\"{}\"", entry.name, entry.version);
                if let Some(attributes) = entry.attributes {
                    line.push(';');
                    line.push_str(attributes);
                }
                line
            })
            .collect();

        let line_length = exports
            .iter()
            .map(|line| width(line))
            .fold(width(EXPORT_PACKAGE_HEADER), usize::max);

        Self {
            bundle_version,
            exports,
            line_length,
            options,
        }
    }

    /// The `name;version="..."` entries in name order.
    pub fn exports(&self) -> &[String] {
        &self.exports
    }

    pub fn bundle_version(&self) -> Option<&Version> {
        self.bundle_version.as_ref()
    }
}

impl OutputFormat for BndFormat {
    fn write_to(&self, sink: &mut dyn Write) -> io::Result<()> {
        writeln!(sink, "{GENERATED_COMMENT}")?;
        if let Some(timestamp) = &self.options.timestamp {
            writeln!(sink, "# {}", timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true))?;
        }
        writeln!(sink)?;

        if let Some(version) = &self.bundle_version {
            writeln!(sink, "{BUNDLE_VERSION_HEADER} {version}")?;
            writeln!(sink)?;
        }

        let Some((last, leading)) = self.exports.split_last() else {
            return Ok(());
        };

        let indent = self.options.indent();
        let stop = indent.len();
        // Column where the continuation backslashes start, minus the indentation
        let join = self.line_length + stop - (self.line_length % stop);

        let padding = join + stop - width(EXPORT_PACKAGE_HEADER);
        writeln!(sink, "{EXPORT_PACKAGE_HEADER}{}\\", " ".repeat(padding))?;

        for export in leading {
            let padding = (join - width(export)).saturating_sub(1);
            writeln!(sink, "{indent}{export},{}\\", " ".repeat(padding))?;
        }

        writeln!(sink, "{indent}{last}")?;
        writeln!(sink)?;
        Ok(())
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}
