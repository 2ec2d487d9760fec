// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort fix suggestions for failed commands.
//!
//! Signatures are matched against stderr and stdout; every signature that
//! matches contributes, in table order.

use doscan_core::{Command, ExecutionResult, Remediation};
use regex::Regex;
use std::sync::LazyLock;

/// `(signature, pattern, suggested actions)`
const SIGNATURES: &[(&str, &str, &[&str])] = &[
    (
        "missing-module",
        r"(?i)(ModuleNotFoundError|No module named|Cannot find module|cannot find package|could not import)",
        &[
            "Install the project's dependencies (e.g. `npm install`, `pip install -r requirements.txt`)",
            "Check the module name and the active virtual environment",
        ],
    ),
    (
        "command-not-found",
        r"(?i)(command not found|: not found|is not recognized as an internal or external command)",
        &["Install the missing tool or add it to PATH", "Check the command for typos"],
    ),
    (
        "permission-denied",
        r"(?i)(permission denied|EACCES|operation not permitted)",
        &["Check file permissions (`chmod +x` for scripts)", "Avoid commands that need elevated privileges"],
    ),
    (
        "connection-refused",
        r"(?i)(connection refused|ECONNREFUSED)",
        &["Start the service the command connects to", "Check host and port settings"],
    ),
    (
        "address-in-use",
        r"(?i)(address already in use|EADDRINUSE)",
        &["Stop the process holding the port or configure a different one"],
    ),
    (
        "no-such-file",
        r"(?i)(no such file or directory|ENOENT)",
        &["Check that referenced paths exist relative to the working directory", "Run any build or generate step first"],
    ),
    (
        "missing-npm-script",
        r#"(?i)(missing script:|npm ERR! missing script)"#,
        &["Add the script to package.json or remove the reference"],
    ),
    (
        "missing-make-rule",
        r"No rule to make target",
        &["Check the target name and its prerequisites in the Makefile"],
    ),
    (
        "missing-env-var",
        r"(?i)(environment variable .* (is )?not set|unbound variable|KeyError: '[A-Z_][A-Z0-9_]*')",
        &["Export the required environment variables before running", "Pass values with `--env KEY=VALUE`"],
    ),
    (
        "out-of-memory",
        r"(?i)(out of memory|heap out of memory|MemoryError|Killed\s*$)",
        &["Increase available memory or reduce the workload"],
    ),
    (
        "network-resolution",
        r"(?i)(could not resolve host|Name or service not known|getaddrinfo|Temporary failure in name resolution|ENOTFOUND)",
        &["Check network connectivity and DNS", "Configure proxies or offline mirrors if required"],
    ),
    (
        "authentication",
        r"(?i)(authentication failed|unauthorized|401 Unauthorized|403 Forbidden|access denied|invalid credentials)",
        &["Provide valid credentials or tokens", "Log in to the registry or service first"],
    ),
];

#[allow(clippy::expect_used)]
static TABLE: LazyLock<Vec<(&'static str, Regex, &'static [&'static str])>> = LazyLock::new(|| {
    SIGNATURES
        .iter()
        .map(|(id, pattern, actions)| {
            (*id, Regex::new(pattern).expect("constant regex pattern is valid"), *actions)
        })
        .collect()
});

fn entry(signature: &str, actions: &[&str]) -> Remediation {
    Remediation {
        signature: signature.to_string(),
        actions: actions.iter().map(|a| (*a).to_string()).collect(),
    }
}

/// Suggestions for a finished command; empty for successes.
pub fn suggest(command: &Command, result: &ExecutionResult) -> Vec<Remediation> {
    if result.succeeded() || result.interrupted {
        return Vec::new();
    }
    if result.timed_out {
        return vec![entry(
            "timeout",
            &["Increase --timeout or check for interactive prompts", "Make sure the command terminates on its own"],
        )];
    }
    if result.crashed {
        return vec![entry(
            "launch-failure",
            &["Verify the interpreter is installed", "Check that the file is executable and the working directory exists"],
        )];
    }

    let mut found: Vec<Remediation> = TABLE
        .iter()
        .filter(|(_, pattern, _)| pattern.is_match(&result.stderr) || pattern.is_match(&result.stdout))
        .map(|(id, _, actions)| entry(id, actions))
        .collect();
    let missing = command.required_env();
    if !missing.is_empty() && !found.iter().any(|r| r.signature == "missing-env-var") {
        let unset: Vec<&str> = missing.into_iter().filter(|var| std::env::var_os(var).is_none()).collect();
        if !unset.is_empty() {
            found.push(Remediation {
                signature: "missing-env-var".to_string(),
                actions: vec![format!("Set {} before running", unset.join(", "))],
            });
        }
    }
    found
}

#[cfg(test)]
#[path = "remediation_tests.rs"]
mod tests;
