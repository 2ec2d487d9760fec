// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project tree walk feeding files to the parser registry.

use crate::error::ScanError;
use crate::registry::ParserRegistry;
use doscan_core::{meta, Command, CommandType, IgnoreSet, ScanWarning};
use glob::Pattern;
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Excludes applied unless the caller opts out.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "**/node_modules/**",
    "**/.git/**",
    "**/target/**",
    "**/.venv/**",
    "**/venv/**",
    "**/__pycache__/**",
    "**/dist/**",
    "**/build/**",
];

/// Files larger than this are skipped.
pub const MAX_FILE_SIZE: u64 = 2 * 1024 * 1024;

/// Include/exclude filters over root-relative paths.
#[derive(Debug, Clone, Default)]
struct Filters {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

fn compile(patterns: &[String]) -> Result<Vec<Pattern>, ScanError> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| ScanError::InvalidPattern { pattern: p.clone(), source })
        })
        .collect()
}

/// True if `pattern` matches `rel`, or `name` when the pattern has no `/`.
fn pattern_matches(pattern: &Pattern, rel: &str, name: &str) -> bool {
    pattern.matches(rel) || (!pattern.as_str().contains('/') && pattern.matches(name))
}

impl Filters {
    fn excludes_file(&self, rel: &str, name: &str) -> bool {
        self.exclude.iter().any(|p| pattern_matches(p, rel, name))
    }

    fn includes_file(&self, rel: &str, name: &str) -> bool {
        self.include.is_empty() || self.include.iter().any(|p| pattern_matches(p, rel, name))
    }

    /// A directory is pruned when an exclude pattern would match anything
    /// beneath it, or names the directory itself.
    fn excludes_dir(&self, rel: &str, name: &str) -> bool {
        let probe = format!("{rel}/_");
        self.exclude.iter().any(|p| p.matches(&probe) || pattern_matches(p, rel, name))
    }
}

/// Walks a project and yields the commands its files declare.
///
/// Stateless between scans: every [`FileScanner::scan`] starts from scratch.
#[derive(Debug, Clone)]
pub struct FileScanner {
    registry: ParserRegistry,
    filters: Filters,
    ignore: IgnoreSet,
}

impl FileScanner {
    /// Scanner with the given glob filters and ignore list. Exclude
    /// patterns take precedence over include patterns.
    pub fn new(include: &[String], exclude: &[String], ignore: IgnoreSet) -> Result<Self, ScanError> {
        let filters = Filters { include: compile(include)?, exclude: compile(exclude)? };
        Ok(Self { registry: ParserRegistry::default(), filters, ignore })
    }

    pub fn with_registry(mut self, registry: ParserRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn ignore(&self) -> &IgnoreSet {
        &self.ignore
    }

    /// Lazily scan `root`.
    pub fn scan(&self, root: &Path) -> Result<Scan<'_>, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::InvalidRoot(root.to_path_buf()));
        }
        let root = root.to_path_buf();
        let filters = &self.filters;
        let prune_root = root.clone();
        let walker = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                let rel = relative(&prune_root, entry.path());
                !filters.excludes_dir(&rel, &entry.file_name().to_string_lossy())
            });
        Ok(Scan {
            scanner: self,
            root,
            walker: Box::new(walker),
            pending: VecDeque::new(),
            warnings: Vec::new(),
            suppressed: Vec::new(),
            modules: HashSet::new(),
        })
    }
}

/// Root-relative path with `/` separators.
fn relative(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// A scan in progress. Iterates commands in walk order, then declaration
/// order within each file.
pub struct Scan<'s> {
    scanner: &'s FileScanner,
    root: PathBuf,
    walker: Box<dyn Iterator<Item = walkdir::Result<DirEntry>> + 's>,
    pending: VecDeque<Command>,
    warnings: Vec<ScanWarning>,
    suppressed: Vec<Command>,
    /// Terraform module directories whose commands were already yielded.
    modules: HashSet<String>,
}

impl Scan<'_> {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files skipped or not understood so far.
    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }

    /// Commands withheld so far because the ignore list matched them.
    pub fn suppressed(&self) -> &[Command] {
        &self.suppressed
    }

    /// Consume the scan, returning warnings and suppressed commands.
    pub fn into_parts(self) -> (Vec<ScanWarning>, Vec<Command>) {
        (self.warnings, self.suppressed)
    }

    fn warn(&mut self, path: &Path, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(path = %path.display(), error = %message, "skipping file");
        self.warnings.push(ScanWarning { path: path.to_path_buf(), message });
    }

    fn visit(&mut self, entry: &DirEntry) {
        if !entry.file_type().is_file() {
            return;
        }
        let path = entry.path();
        let rel = relative(&self.root, path);
        let name = entry.file_name().to_string_lossy();
        let filters = &self.scanner.filters;
        if filters.excludes_file(&rel, &name) || !filters.includes_file(&rel, &name) {
            return;
        }
        if !self.scanner.registry.wants(path) {
            return;
        }

        match entry.metadata() {
            Ok(meta) if meta.len() > MAX_FILE_SIZE => {
                self.warn(path, format!("file exceeds {MAX_FILE_SIZE} bytes"));
                return;
            }
            Ok(_) => {}
            Err(e) => {
                self.warn(path, e.to_string());
                return;
            }
        }
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.warn(path, e.to_string());
                return;
            }
        };
        let Ok(content) = String::from_utf8(bytes) else {
            self.warn(path, "file is not valid UTF-8");
            return;
        };

        let parsed = self.scanner.registry.parse(path, &content);
        self.warnings.extend(parsed.warnings);
        let mut claimed = Vec::new();
        for command in parsed.commands {
            if let Some(dir) = self.repeated_module(&command) {
                tracing::debug!(module = dir, path = %path.display(), "module already scanned");
                continue;
            }
            if command.command_type() == CommandType::TerraformCommand {
                claimed.extend(command.meta(meta::MODULE_DIR).map(str::to_string));
            }
            if self.scanner.ignore.contains(command.raw_text()) {
                tracing::debug!(command = command.raw_text(), "suppressed by ignore list");
                self.suppressed.push(command);
            } else {
                self.pending.push_back(command);
            }
        }
        self.modules.extend(claimed);
    }

    /// Module directory of a Terraform command whose module an earlier
    /// file already covered.
    fn repeated_module<'c>(&self, command: &'c Command) -> Option<&'c str> {
        if command.command_type() != CommandType::TerraformCommand {
            return None;
        }
        command.meta(meta::MODULE_DIR).filter(|dir| self.modules.contains(*dir))
    }
}

impl Iterator for Scan<'_> {
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        loop {
            if let Some(command) = self.pending.pop_front() {
                return Some(command);
            }
            match self.walker.next()? {
                Ok(entry) => self.visit(&entry),
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| self.root.clone());
                    self.warn(&path, e.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
