//! Shared fixtures for CLI specs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

pub use similar_asserts::assert_eq as assert_eq_diff;

/// Environment variables that would leak the developer's setup into specs.
const SCRUBBED_ENV: &[&str] = &["DOSCAN_LOG", "DOSCAN_TIMEOUT_SECS", "DOSCAN_JOBS", "COLOR"];

/// A temporary project directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.join(rel).exists()
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.join(rel)).unwrap()
    }

    pub fn read_json(&self, rel: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(rel)).unwrap()
    }

    /// `doscan` running inside the project directory.
    pub fn doscan(&self) -> CliBuilder {
        cli().current_dir(self.path())
    }
}

/// The `doscan` binary in the target directory shared by the workspace.
pub fn doscan_bin() -> PathBuf {
    if let Some(path) = option_env!("CARGO_BIN_EXE_doscan") {
        return PathBuf::from(path);
    }
    let exe = std::env::current_exe().unwrap();
    let mut dir = exe.parent().unwrap();
    if dir.ends_with("deps") {
        dir = dir.parent().unwrap();
    }
    let bin = dir.join(format!("doscan{}", std::env::consts::EXE_SUFFIX));
    assert!(bin.exists(), "{} not found; build the workspace first", bin.display());
    bin
}

/// `doscan` with a scrubbed environment.
pub fn cli() -> CliBuilder {
    CliBuilder { args: Vec::new(), dir: None, env: Vec::new() }
}

pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    env: Vec<(String, String)>,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.dir = Some(dir.to_path_buf());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    fn output(self) -> Output {
        let mut cmd = assert_cmd::Command::new(doscan_bin());
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        cmd.env("NO_COLOR", "1");
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        cmd.args(&self.args).output().unwrap()
    }

    /// Run and expect exit code 0.
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Run and expect a non-zero exit code.
    pub fn fails(self) -> RunAssert {
        let run = RunAssert { output: self.output() };
        assert!(!run.output.status.success(), "expected failure\n{}", run.describe());
        run
    }

    /// Run and expect exactly `code`.
    pub fn exits(self, code: i32) -> RunAssert {
        let run = RunAssert { output: self.output() };
        assert_eq!(run.output.status.code(), Some(code), "unexpected exit status\n{}", run.describe());
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).unwrap()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout().contains(needle), "stdout lacks {needle:?}\n{}", self.describe());
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout().contains(needle), "stdout has {needle:?}\n{}", self.describe());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr().contains(needle), "stderr lacks {needle:?}\n{}", self.describe());
        self
    }

    fn describe(&self) -> String {
        format!(
            "status: {:?}\n--- stdout ---\n{}\n--- stderr ---\n{}",
            self.output.status.code(),
            self.stdout(),
            self.stderr()
        )
    }
}
