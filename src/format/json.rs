//! JSON dump of a resolved document.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

use super::{OutputFormat, export_entries};
use crate::base::Version;
use crate::model::Document;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct JsonExport {
    version: Version,
    #[serde(skip_serializing_if = "Option::is_none")]
    attributes: Option<String>,
}

/// JSON object with the module version and every export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonFormat {
    module: Version,
    exports: BTreeMap<String, JsonExport>,
}

impl JsonFormat {
    pub fn new(document: &Document) -> Self {
        let exports = export_entries(document)
            .into_iter()
            .map(|entry| {
                let export = JsonExport {
                    version: entry.version,
                    attributes: entry.attributes.map(str::to_string),
                };
                (entry.name.to_string(), export)
            })
            .collect();

        Self {
            module: document.module_version(),
            exports,
        }
    }
}

impl OutputFormat for JsonFormat {
    fn write_to(&self, sink: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *sink, self)?;
        writeln!(sink)
    }
}
