// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Streaming substitution over a built [`RadixTrie`].
//!
//! At each position the matcher asks the trie for the longest pattern
//! starting there. A match emits its replacement and skips the pattern;
//! otherwise one byte is passed through unchanged.
//!
//! Each chunk is matched on its own. A pattern straddling two chunks is
//! never replaced, so callers that need matches across line breaks must
//! hand over the whole input as one chunk.

use std::io::{self, Write};

use crate::trie::RadixTrie;

/// One unit of matcher output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// A single input byte with no pattern starting at it.
    Literal(u8),
    /// Replacement for a matched pattern of `len` bytes.
    Replacement { text: &'a str, len: usize },
}

impl Fragment<'_> {
    /// Number of input bytes this fragment stands for.
    pub fn consumed(&self) -> usize {
        match self {
            Fragment::Literal(_) => 1,
            Fragment::Replacement { len, .. } => *len,
        }
    }

    /// Output bytes of this fragment.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Fragment::Literal(byte) => std::slice::from_ref(byte),
            Fragment::Replacement { text, .. } => text.as_bytes(),
        }
    }
}

/// Counters for one or more processed chunks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChunkStats {
    /// Input bytes consumed.
    pub bytes: usize,
    /// Patterns replaced.
    pub replacements: usize,
    /// Bytes passed through unchanged.
    pub literals: usize,
}

impl ChunkStats {
    fn record(&mut self, fragment: &Fragment<'_>) {
        self.bytes += fragment.consumed();
        match fragment {
            Fragment::Literal(_) => self.literals += 1,
            Fragment::Replacement { .. } => self.replacements += 1,
        }
    }
}

impl std::ops::AddAssign for ChunkStats {
    fn add_assign(&mut self, other: Self) {
        self.bytes += other.bytes;
        self.replacements += other.replacements;
        self.literals += other.literals;
    }
}

/// Drives longest-prefix lookups across chunks of input.
#[derive(Debug, Clone, Copy)]
pub struct StreamMatcher<'a> {
    trie: &'a RadixTrie,
}

impl<'a> StreamMatcher<'a> {
    pub fn new(trie: &'a RadixTrie) -> Self {
        Self { trie }
    }

    /// Iterate over the output fragments for `chunk`.
    pub fn fragments<'t>(&self, chunk: &'t [u8]) -> Fragments<'a, 't> {
        Fragments {
            trie: self.trie,
            rest: chunk,
        }
    }

    /// Substitute `chunk` into `out`.
    ///
    /// Only fails when writing to `out` fails.
    pub fn process<W: Write + ?Sized>(&self, chunk: &[u8], out: &mut W) -> io::Result<ChunkStats> {
        let mut stats = ChunkStats::default();
        // Runs of literal bytes are written as one slice.
        let mut pending = 0..0;

        for fragment in self.fragments(chunk) {
            match fragment {
                Fragment::Literal(_) => {
                    pending.end += 1;
                }
                Fragment::Replacement { text, len } => {
                    out.write_all(&chunk[pending.clone()])?;
                    out.write_all(text.as_bytes())?;
                    pending = pending.end + len..pending.end + len;
                }
            }
            stats.record(&fragment);
        }
        out.write_all(&chunk[pending])?;

        Ok(stats)
    }

    /// Substitute `chunk` into a new buffer.
    pub fn replace(&self, chunk: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(chunk.len());
        for fragment in self.fragments(chunk) {
            out.extend_from_slice(fragment.as_bytes());
        }
        out
    }
}

/// Iterator returned by [`StreamMatcher::fragments`].
#[derive(Debug, Clone)]
pub struct Fragments<'a, 't> {
    trie: &'a RadixTrie,
    rest: &'t [u8],
}

impl<'a> Iterator for Fragments<'a, '_> {
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (&first, tail) = self.rest.split_first()?;
        match self.trie.lookup_longest_prefix(self.rest) {
            (Some(m), rest) => {
                self.rest = rest;
                Some(Fragment::Replacement {
                    text: m.replacement,
                    len: m.len,
                })
            }
            (None, _) => {
                self.rest = tail;
                Some(Fragment::Literal(first))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(!self.rest.is_empty()), Some(self.rest.len()))
    }
}

impl std::iter::FusedIterator for Fragments<'_, '_> {}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
