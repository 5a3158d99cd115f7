// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose run summary.
//!
//! Writes `[verbose]` prefixed lines to stderr so they never mix with the
//! substituted output. Enabled with `--verbose` or `WHIPLACE_DEBUG=1`.

use crate::stream::StreamStats;
use crate::trie::RadixTrie;

/// Verbose output logger. All output is conditional on verbose mode.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Print a verbose line to stderr.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// Print a verbose section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("[verbose] === {} ===", title);
        }
    }

    /// Summarize a built trie.
    pub fn trie(&self, trie: &RadixTrie) {
        if self.enabled {
            self.section("Patterns");
            for line in trie_lines(trie) {
                self.log(&line);
            }
        }
    }

    /// Summarize processed input.
    pub fn stream(&self, stats: &StreamStats) {
        if self.enabled {
            self.section("Input");
            for line in stream_lines(stats) {
                self.log(&line);
            }
        }
    }
}

fn trie_lines(trie: &RadixTrie) -> Vec<String> {
    vec![
        format!("patterns: {}", trie.len()),
        format!("trie nodes: {}", trie.node_count()),
    ]
}

fn stream_lines(stats: &StreamStats) -> Vec<String> {
    vec![
        format!("chunks: {}", stats.chunks),
        format!("bytes: {}", stats.totals.bytes),
        format!("replacements: {}", stats.totals.replacements),
        format!("literal bytes: {}", stats.totals.literals),
    ]
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
