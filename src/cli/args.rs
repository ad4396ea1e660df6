//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::Parser;

use crate::base::constants::DEFAULT_SOURCE_FILE;
use crate::format::{BndOptions, BundleVersionMode};

/// Package exports tracker: resolves export versions and generates bnd files
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "exportver")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Version source file [default: exports.ver]
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Generate a bnd file with the export instructions
    #[arg(long, value_name = "PATH")]
    pub bnd: Option<PathBuf>,

    /// Generate a properties file with the resolved versions
    #[arg(long, value_name = "PATH")]
    pub properties: Option<PathBuf>,

    /// Generate a JSON dump of the resolved versions (needs the `json` feature)
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Include the Bundle-Version header in the bnd file
    #[arg(long)]
    pub bundle_version: bool,

    /// Write the generation time into the bnd file
    #[arg(long)]
    pub timestamp: bool,

    /// Make the resolved versions the new baselines and update the source file
    #[arg(long)]
    pub restore: bool,

    /// Print the resolved module version on stdout
    #[arg(long)]
    pub report: bool,

    /// Log the generated content
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The source file, falling back to the default name.
    pub fn source_path(&self) -> PathBuf {
        self.source
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_FILE))
    }

    /// bnd options selected by the flags.
    pub fn bnd_options(&self) -> BndOptions {
        let mode = if self.bundle_version {
            BundleVersionMode::Resolved
        } else {
            BundleVersionMode::Omitted
        };
        let options = BndOptions::default().with_bundle_version(mode);
        if self.timestamp {
            options.with_timestamp(chrono::Utc::now())
        } else {
            options
        }
    }
}
