// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for
//! whiplace.toml.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::error::{Error, Result};

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by `-C`/`--config` or `WHIPLACE_CONFIG`.
    Explicit(PathBuf),
    /// Found by walking up from the working directory.
    Discovered(PathBuf),
    /// No file; built-in defaults apply.
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => Some(path),
            ConfigSource::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) => write!(f, "{} (explicit)", path.display()),
            ConfigSource::Discovered(path) => write!(f, "{} (discovered)", path.display()),
            ConfigSource::Defaults => f.write_str("defaults"),
        }
    }
}

/// Find whiplace.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .find_map(|dir| {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                Some(Some(candidate))
            } else if dir.join(".git").exists() {
                // Stop at git root
                Some(None)
            } else {
                None
            }
        })
        .flatten()
}

/// Resolve the config source from the CLI arg or discovery.
///
/// `-C`/`--config` wins (clap also reads it from `WHIPLACE_CONFIG`). A
/// relative explicit path is taken relative to `cwd`.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<ConfigSource> {
    let Some(path) = explicit else {
        return Ok(find_config(cwd).map_or(ConfigSource::Defaults, ConfigSource::Discovered));
    };

    let path = cwd.join(path);
    if !path.is_file() {
        return Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path),
        });
    }
    Ok(ConfigSource::Explicit(path))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
