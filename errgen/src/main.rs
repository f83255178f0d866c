//! errgen command-line entry point.
//!
//! Usage: `errgen <BASENAME> <SPEC>`

use clap::Parser;
use errgen::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("errgen: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
