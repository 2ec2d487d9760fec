// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! doscan: find the commands a project documents and check that they run.

mod color;
mod commands;
mod exit_error;
mod logging;
mod setup;

use clap::{Parser, Subcommand};
use exit_error::ExitError;

/// Exit code for configuration, I/O and other fatal errors.
const EXIT_FATAL: i32 = 2;

#[derive(Parser)]
#[command(
    name = "doscan",
    version = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH")),
    about = "Detect the commands a project documents, run the safe ones, and report what broke",
    styles = color::styles(),
    arg_required_else_help = true
)]
struct Cli {
    /// Show debug logs and skipped commands
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a project, execute safe commands, and write a report
    Scan(commands::scan::ScanArgs),
    /// Detect commands and show each verdict without running anything
    List(commands::list::ListArgs),
    /// Manage the ignore file
    Ignore(commands::ignore::IgnoreArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Scan(args) => commands::scan::handle(args, cli.verbose).await,
        Commands::List(args) => commands::list::handle(args).await,
        Commands::Ignore(args) => commands::ignore::handle(args),
    };

    if let Err(e) = result {
        std::process::exit(exit_code(&e));
    }
}

/// Report `error` on stderr and pick the process exit code for it.
fn exit_code(error: &anyhow::Error) -> i32 {
    if let Some(exit) = error.downcast_ref::<ExitError>() {
        if !exit.message.is_empty() {
            eprintln!("{}", exit.message);
        }
        return exit.code;
    }
    tracing::error!(error = %format!("{error:#}"), "doscan failed");
    eprintln!("error: {error:#}");
    EXIT_FATAL
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
