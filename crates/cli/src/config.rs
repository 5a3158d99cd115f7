// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles whiplace.toml parsing with version validation and unknown key
//! warnings. Command-line flags take precedence over anything set here.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::patterns::DEFAULT_SEPARATOR;
use crate::stream::Chunking;

/// Config file name looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "whiplace.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Pattern file settings.
    #[serde(default)]
    pub patterns: PatternsConfig,

    /// Input stream settings.
    #[serde(default)]
    pub input: InputConfig,
}

/// Pattern file settings.
#[derive(Debug, Deserialize)]
pub struct PatternsConfig {
    /// Character splitting each line into pattern and replacement.
    #[serde(default = "PatternsConfig::default_separator")]
    pub separator: char,
}

impl Default for PatternsConfig {
    fn default() -> Self {
        Self {
            separator: Self::default_separator(),
        }
    }
}

impl PatternsConfig {
    fn default_separator() -> char {
        DEFAULT_SEPARATOR
    }
}

/// Input stream settings.
#[derive(Debug, Default, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub chunking: Chunking,
}

/// Known keys, by section. The empty section is the top level.
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("", &["version", "patterns", "input"]),
    ("patterns", &["separator"]),
    ("input", &["chunking"]),
];

/// Load config, warning about unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("loading config from {}", path.display());
    parse(&content, path)
}

/// Parse config from string content, warning about unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_err = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let table: toml::Table = toml::from_str(content).map_err(|e| config_err(e.to_string()))?;

    let version = table
        .get("version")
        .and_then(|v| v.as_integer())
        .ok_or_else(|| config_err("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_err(format!(
            "unsupported config version {} (supported: {})\n  Upgrade whiplace to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    for key in unknown_keys(&table) {
        warn_unknown_key(path, &key);
    }

    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| config_err(e.to_string()))
}

/// Dotted paths of keys whiplace does not recognize.
fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown = Vec::new();
    collect_unknown(table, "", &mut unknown);
    unknown
}

fn collect_unknown(table: &toml::Table, section: &str, unknown: &mut Vec<String>) {
    let Some((_, known)) = KNOWN_KEYS.iter().find(|(name, _)| *name == section) else {
        return;
    };

    for (key, value) in table {
        let dotted = if section.is_empty() {
            key.clone()
        } else {
            format!("{section}.{key}")
        };

        if !known.contains(&key.as_str()) {
            unknown.push(dotted);
        } else if let toml::Value::Table(nested) = value {
            collect_unknown(nested, &dotted, unknown);
        }
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "whiplace: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
