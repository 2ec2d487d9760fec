// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_defaults_working_directory_to_source_parent() {
    let cmd = Command::new("make build", CommandType::MakeTarget, "/repo/sub/Makefile", "build")
        .unwrap();
    assert_eq!(cmd.working_directory(), Path::new("/repo/sub"));
    assert_eq!(cmd.description(), "Make target - build");
    assert_eq!(cmd.raw_text(), "make build");
}

#[yare::parameterized(
    empty      = { "" },
    spaces     = { "   " },
    newlines   = { "\n\t\n" },
)]
fn new_rejects_blank_text(text: &str) {
    let err = Command::new(text, CommandType::GenericShell, "/repo/Procfile", "web").unwrap_err();
    assert_eq!(err, CommandError::Empty { source_path: PathBuf::from("/repo/Procfile") });
}

#[test]
fn with_meta_drops_empty_values() {
    let cmd = Command::builder()
        .build()
        .with_meta(meta::INVENTORY, "")
        .with_meta(meta::JOB, "lint");
    assert_eq!(cmd.meta(meta::INVENTORY), None);
    assert_eq!(cmd.meta(meta::JOB), Some("lint"));
}

#[test]
fn required_env_splits_metadata() {
    let cmd = Command::builder().build().with_meta(meta::REQUIRED_ENV, "HOME,API_KEY");
    assert_eq!(cmd.required_env(), vec!["HOME", "API_KEY"]);
    assert!(Command::builder().build().required_env().is_empty());
}

#[yare::parameterized(
    npm_install   = { "npm install",              CommandType::NpmScript,     true },
    npm_ci        = { "npm ci --silent",          CommandType::NpmScript,     true },
    pip           = { "pip install -r req.txt",   CommandType::GenericShell,  true },
    pip_type      = { "echo hi",                  CommandType::PipRequirements, true },
    galaxy_type   = { "ansible-galaxy install -r requirements.yml", CommandType::AnsibleGalaxy, true },
    npm_run       = { "npm run build",            CommandType::NpmScript,     false },
    make          = { "make install",             CommandType::MakeTarget,    false },
)]
fn global_side_effects(text: &str, ty: CommandType, expected: bool) {
    let cmd = Command::builder().raw_text(text).command_type(ty).build();
    assert_eq!(cmd.has_global_side_effects(), expected);
}

#[test]
fn command_type_serializes_kebab_case() {
    let json = serde_json::to_string(&CommandType::DockerComposeService).unwrap();
    assert_eq!(json, "\"docker-compose-service\"");
    assert_eq!(CommandType::DockerComposeService.to_string(), "docker-compose-service");
    let parsed: CommandType = serde_json::from_str("\"make-target\"").unwrap();
    assert_eq!(parsed, CommandType::MakeTarget);
}

#[test]
fn key_pairs_text_and_source() {
    let cmd = Command::builder().raw_text("npm run test").source_path("/p/package.json").build();
    assert_eq!(cmd.key(), ("npm run test", Path::new("/p/package.json")));
}
