// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern file parsing.
//!
//! One pair per line, `pattern<SEP>replacement`, split on the first
//! separator. Line endings (`\n` or `\r\n`) are stripped and empty lines
//! are skipped. Everything after the first separator, further separators
//! included, is the replacement. No other whitespace is trimmed, so
//! trailing spaces and tabs stay in the replacement.

use std::path::Path;

use crate::error::{Error, Result};
use crate::reader::FileReader;
use crate::trie::RadixTrie;

/// Default pattern/replacement separator.
pub const DEFAULT_SEPARATOR: char = '\t';

/// Split pattern file content into pattern/replacement pairs.
///
/// `path` is only used for error reporting.
pub fn parse(content: &str, separator: char, path: &Path) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    for (index, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let Some((pattern, replacement)) = line.split_once(separator) else {
            return Err(Error::MissingSeparator {
                path: path.to_path_buf(),
                line: index + 1,
                separator,
            });
        };
        pairs.push((pattern.to_string(), replacement.to_string()));
    }

    Ok(pairs)
}

/// Read a pattern file and build its trie.
pub fn load(path: &Path, separator: char, reader: &FileReader) -> Result<RadixTrie> {
    let content = reader.read_to_string(path)?;
    let pairs = parse(&content, separator, path)?;
    tracing::debug!(path = %path.display(), pairs = pairs.len(), "parsed pattern file");
    Ok(RadixTrie::build(pairs)?)
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
