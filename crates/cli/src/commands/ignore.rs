// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `doscan ignore` - manage the ignore file

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use doscan_core::{IgnoreEntry, IgnoreRule};
use doscan_engine::{CliOverrides, IgnoreFile, Settings};

use crate::color;
use crate::setup;

#[derive(Args, Debug)]
pub struct IgnoreArgs {
    #[command(subcommand)]
    pub command: IgnoreCommand,
}

#[derive(Subcommand, Debug)]
pub enum IgnoreCommand {
    /// Add a command to the ignore file
    Add {
        /// Exact command text, as it appears in reports
        command: String,
        /// Why the command is ignored; written as a comment above it
        #[arg(long)]
        reason: Option<String>,
        /// Ignore file to update (default: <PATH>/.doignore)
        #[arg(long, value_name = "FILE")]
        ignore_file: Option<PathBuf>,
        /// Project directory (default: current directory)
        #[arg(long, value_name = "DIR")]
        path: Option<PathBuf>,
    },
    /// Show ignore entries, including patterns from .doscan.toml
    List {
        /// Ignore file to read (default: <PATH>/.doignore)
        #[arg(long, value_name = "FILE")]
        ignore_file: Option<PathBuf>,
        /// Project directory (default: current directory)
        #[arg(long, value_name = "DIR")]
        path: Option<PathBuf>,
    },
}

pub fn handle(args: IgnoreArgs) -> Result<()> {
    match args.command {
        IgnoreCommand::Add { command, reason, ignore_file, path } => {
            let settings = resolve(path, ignore_file)?;
            let command = command.trim();
            if command.is_empty() {
                anyhow::bail!("command must not be empty");
            }
            if command.contains('\n') {
                anyhow::bail!("multi-line commands cannot be added to the ignore file");
            }
            let mut entry = IgnoreEntry::exact(command);
            if let Some(reason) = reason.filter(|r| !r.trim().is_empty()) {
                entry = entry.with_reason(reason.trim());
            }
            let path = &settings.ignore_file;
            if IgnoreFile::append(path, &[entry])? == 0 {
                println!("already ignored: {command}");
            } else {
                println!("ignored {} in {}", color::literal(command), path.display());
            }
        }
        IgnoreCommand::List { ignore_file, path } => {
            let settings = resolve(path, ignore_file)?;
            let entries = settings.ignore_entries()?;
            if entries.is_empty() {
                println!("No ignore entries");
            } else {
                print!("{}", render(&entries));
            }
        }
    }
    Ok(())
}

fn resolve(path: Option<PathBuf>, ignore_file: Option<PathBuf>) -> Result<Settings> {
    let root = setup::project_root(path.as_deref())?;
    setup::settings(&root, CliOverrides { ignore_file, ..CliOverrides::default() })
}

pub(crate) fn render(entries: &[IgnoreEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let text = match &entry.rule {
            IgnoreRule::Exact(command) => color::literal(command),
            IgnoreRule::Pattern(pattern) => {
                format!("{} {}", color::muted("pattern"), color::literal(pattern))
            }
        };
        match &entry.reason {
            Some(reason) => out.push_str(&format!("{text}  {}\n", color::context(&format!("# {reason}")))),
            None => out.push_str(&format!("{text}\n")),
        }
    }
    out
}

#[cfg(test)]
#[path = "ignore_tests.rs"]
mod tests;
