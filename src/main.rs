//! rolodex - Interpret contact-book argument lines from the command line

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use rolodex_args::cli;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();

    // Diagnostics go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    cli::run(cli)
}
