//! Command execution and exit codes.

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use super::Cli;
use crate::diagnostics::TracingFeedback;
use crate::format::{BndFormat, OutputFormat, PropertiesFormat};
use crate::model::Document;
use crate::project::{ProjectError, check_document, load_document, store_document};

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    /// Invalid command line.
    Syntax,
    /// Unreadable or invalid source, or violated constraints.
    Input,
    /// Failed to write an output.
    Output,
}

impl Exit {
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Syntax => 1,
            Self::Input => 2,
            Self::Output => 3,
        }
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit.code())
    }
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the level.
pub fn init_tracing(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Execute one invocation.
pub fn run(cli: &Cli) -> Exit {
    if cli.json.is_some() && !cfg!(feature = "json") {
        tracing::error!("JSON output is not available in this build.");
        return Exit::Syntax;
    }

    if cli.source.is_none() {
        tracing::warn!("No source file specified, trying to use the default.");
    }
    let source = cli.source_path();

    let mut feedback = TracingFeedback;
    tracing::info!("Loading source file: {}", source.display());

    let mut document = match load_document(&source, &mut feedback) {
        Ok(document) => document,
        Err(error) => {
            tracing::error!("{error}");
            return Exit::Input;
        }
    };

    if let Err(error) = check_document(&mut document, &mut feedback) {
        tracing::error!("{error}");
        return Exit::Input;
    }

    match generate(cli, &source, &mut document) {
        Ok(()) => {
            tracing::info!("Done.");
            Exit::Success
        }
        Err(error) => {
            tracing::error!("{error}");
            if error.is_input_error() {
                Exit::Input
            } else {
                Exit::Output
            }
        }
    }
}

fn generate(cli: &Cli, source: &Path, document: &mut Document) -> Result<(), ProjectError> {
    let version = document.module_version();

    if let Some(path) = &cli.bnd {
        tracing::info!("Generating bnd file: {}", path.display());
        let format = BndFormat::new(document, cli.bnd_options());
        store(&format, path)?;

        if cli.verbose {
            tracing::info!("Package exports:");
            for export in format.exports() {
                tracing::info!("{export}");
            }
        }
    }

    if let Some(path) = &cli.properties {
        tracing::info!("Generating properties file: {}", path.display());
        let format = PropertiesFormat::new(document);
        store(&format, path)?;

        if cli.verbose {
            tracing::info!("Generated properties:");
            for (name, value) in format.content() {
                tracing::info!("{name} = {value}");
            }
        }
    }

    if let Some(path) = &cli.json {
        store_json(document, path)?;
    }

    if cli.restore {
        tracing::info!("Restoring baselines and updating the source file.");
        document.restore();
        store_document(source, document)?;
    }

    if cli.report {
        tracing::info!("Dumping the target module version.");
        println!("{version}");
    }

    Ok(())
}

#[cfg(feature = "json")]
fn store_json(document: &Document, path: &Path) -> Result<(), ProjectError> {
    tracing::info!("Generating JSON file: {}", path.display());
    store(&crate::format::JsonFormat::new(document), path)
}

// Rejected by `run` before anything is loaded
#[cfg(not(feature = "json"))]
fn store_json(_document: &Document, _path: &Path) -> Result<(), ProjectError> {
    Ok(())
}

fn store(format: &impl OutputFormat, path: &Path) -> Result<(), ProjectError> {
    format.store(path).map_err(|source| ProjectError::Io {
        path: path.to_path_buf(),
        source,
    })
}
