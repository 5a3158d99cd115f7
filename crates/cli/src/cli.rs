// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::stream::{Chunking, Input};

/// Replace every occurrence of many literal patterns in one pass
#[derive(Parser, Debug)]
#[command(name = "whiplace")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "WHIPLACE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Pattern file with one `pattern<TAB>replacement` pair per line
    #[arg(value_name = "PATTERNS")]
    pub patterns: PathBuf,

    /// Input files, `-` for stdin (default: stdin)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Character separating pattern from replacement (default: tab)
    #[arg(short, long, value_name = "CHAR")]
    pub separator: Option<char>,

    /// Match each input as a single chunk instead of line by line
    #[arg(long)]
    pub whole: bool,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Validate the pattern file and exit without reading input
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Separator from the command line, else from config.
    pub fn separator(&self, config: &Config) -> char {
        self.separator.unwrap_or(config.patterns.separator)
    }

    /// Chunking from the command line, else from config.
    pub fn chunking(&self, config: &Config) -> Chunking {
        if self.whole {
            Chunking::Whole
        } else {
            config.input.chunking
        }
    }

    /// Reject option combinations that cannot work.
    ///
    /// A line-break separator never occurs inside a pattern line, and an
    /// output file that is also an input would be truncated before it is read.
    pub fn validate(&self, separator: char) -> Result<()> {
        if matches!(separator, '\n' | '\r') {
            return Err(Error::Argument(
                "separator cannot be a line break".to_string(),
            ));
        }
        if let Some(output) = &self.output
            && self
                .inputs
                .iter()
                .any(|input| Input::from_arg(input) != Input::Stdin && same_file(input, output))
        {
            return Err(Error::Argument(format!(
                "output file {} is also an input",
                output.display()
            )));
        }
        Ok(())
    }

    /// Inputs in command-line order, stdin when none are given.
    pub fn inputs(&self) -> Vec<Input> {
        if self.inputs.is_empty() {
            vec![Input::Stdin]
        } else {
            self.inputs.iter().map(|p| Input::from_arg(p)).collect()
        }
    }
}

/// Whether two paths name the same file, however they are spelled.
///
/// Symlinks and `.`/`..` components are resolved. A path that does not
/// exist yet is resolved through its parent directory.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (resolve(a), resolve(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn resolve(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = path.canonicalize() {
        return Some(resolved);
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Some(parent.canonicalize().ok()?.join(path.file_name()?))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
