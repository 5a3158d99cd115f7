//! Behavioral specs for whiplace.toml.
//!
//! Tests that whiplace correctly handles:
//! - discovery in the working directory
//! - explicit -C and WHIPLACE_CONFIG
//! - flags overriding config values
//! - version validation and unknown key warnings

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Discovered config sets the separator
#[test]
fn discovered_config_sets_separator() {
    let project = Project::empty();
    project.config("[patterns]\nseparator = \"|\"\n");
    project.file("keys.txt", "cat|dog\n");

    whiplace()
        .pwd(project.path())
        .args(&["keys.txt"])
        .stdin("cat\n")
        .passes()
        .stdout_eq("dog\n");
}

/// > Config is found from a subdirectory
#[test]
fn config_found_in_parent_directory() {
    let project = Project::empty();
    project.config("[patterns]\nseparator = \"|\"\n");
    project.file("sub/keys.txt", "cat|dog\n");

    whiplace()
        .pwd(project.path().join("sub"))
        .args(&["keys.txt"])
        .stdin("cat\n")
        .passes()
        .stdout_eq("dog\n");
}

/// > Flags override config values
#[test]
fn separator_flag_overrides_config() {
    let project = Project::empty();
    project.config("[patterns]\nseparator = \"|\"\n");
    project.file("keys.txt", "cat=dog\n");

    whiplace()
        .pwd(project.path())
        .args(&["-s", "=", "keys.txt"])
        .stdin("cat\n")
        .passes()
        .stdout_eq("dog\n");
}

/// > Config can request whole-input chunking
#[test]
fn config_sets_whole_chunking() {
    let project = Project::empty();
    project.config("[input]\nchunking = \"whole\"\n");
    project.file("keys.tsv", "a\tb\n");

    whiplace()
        .pwd(project.path())
        .args(&["-v", "keys.tsv"])
        .stdin("a\na\na\n")
        .passes()
        .stdout_eq("b\nb\nb\n")
        .stderr_has("[verbose] chunks: 1");
}

/// > -C loads an explicit config file
#[test]
fn explicit_config_flag() {
    let project = Project::empty();
    project.file("custom.toml", "version = 1\n[patterns]\nseparator = \":\"\n");
    project.file("keys.txt", "cat:dog\n");

    whiplace()
        .pwd(project.path())
        .args(&["-C", "custom.toml", "keys.txt"])
        .stdin("cat\n")
        .passes()
        .stdout_eq("dog\n");
}

/// > WHIPLACE_CONFIG names the config file
#[test]
fn config_env_var() {
    let project = Project::empty();
    project.file("custom.toml", "version = 1\n[patterns]\nseparator = \":\"\n");
    project.file("keys.txt", "cat:dog\n");

    whiplace()
        .pwd(project.path())
        .env("WHIPLACE_CONFIG", "custom.toml")
        .args(&["keys.txt"])
        .stdin("cat\n")
        .passes()
        .stdout_eq("dog\n");
}

/// > A missing explicit config exits with code 2
#[test]
fn missing_explicit_config_fails() {
    let project = Project::empty();
    project.file("keys.tsv", "a\tb\n");

    whiplace()
        .pwd(project.path())
        .args(&["-C", "missing.toml", "keys.tsv"])
        .exits(2)
        .stderr_has("config file not found");
}

/// > Unsupported config versions exit with code 2
#[test]
fn unsupported_version_fails() {
    let project = Project::empty();
    project.file("whiplace.toml", "version = 9\n");
    project.file("keys.tsv", "a\tb\n");

    whiplace()
        .pwd(project.path())
        .args(&["keys.tsv"])
        .stdin("a\n")
        .exits(2)
        .stdout_eq("")
        .stderr_has("unsupported config version 9");
}

/// > Unknown keys warn but do not fail
#[test]
fn unknown_keys_warn() {
    let project = Project::empty();
    project.config("[patterns]\nfancy = true\n");
    project.file("keys.tsv", "a\tb\n");

    whiplace()
        .pwd(project.path())
        .args(&["keys.tsv"])
        .stdin("a\n")
        .passes()
        .stdout_eq("b\n")
        .stderr_has("unrecognized field `patterns.fancy`");
}
