//! `exportver` binary entry point.

use std::process::ExitCode;

use clap::Parser;

use exportver::cli::{self, Cli, Exit};

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            return if error.use_stderr() {
                Exit::Syntax.into()
            } else {
                Exit::Success.into()
            };
        }
    };

    cli::init_tracing(args.debug);
    cli::run(&args).into()
}
