//! `name=version` properties for build tools.
//!
//! The module version is stored under `$bundle`, each export under its own
//! name. Keys and values are escaped the way Java properties files expect.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{self, Write};

use super::{GENERATED_COMMENT, OutputFormat, export_entries};
use crate::base::constants::MODULE_VERSION_NAME;
use crate::model::Document;

/// Properties file content for a resolved document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertiesFormat {
    content: BTreeMap<String, String>,
}

impl PropertiesFormat {
    pub fn new(document: &Document) -> Self {
        let mut content = BTreeMap::new();
        content.insert(
            MODULE_VERSION_NAME.to_string(),
            document.module_version().to_string(),
        );
        for entry in export_entries(document) {
            content.insert(entry.name.to_string(), entry.version.to_string());
        }
        Self { content }
    }

    /// Entries in key order, unescaped.
    pub fn content(&self) -> &BTreeMap<String, String> {
        &self.content
    }
}

impl OutputFormat for PropertiesFormat {
    fn write_to(&self, sink: &mut dyn Write) -> io::Result<()> {
        writeln!(sink, "{GENERATED_COMMENT}")?;
        for (key, value) in &self.content {
            writeln!(sink, "{}={}", escape(key, true), escape(value, false))?;
        }
        Ok(())
    }
}

/// Escape text for a properties file.
///
/// Spaces are escaped everywhere in keys and only at the start of values.
pub(crate) fn escape(text: &str, key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (index, c) in text.chars().enumerate() {
        match c {
            ' ' if key || index == 0 => out.push_str("\\ "),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{unit:04X}");
                }
            }
        }
    }
    out
}
