// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Radix trie indexing literal patterns for longest-prefix lookup.
//!
//! Patterns are byte strings. Each edge carries a segment of one or more
//! bytes, and sibling segments never share a first byte, so a lookup picks
//! at most one child per level with a single comparison.

pub mod node;
pub mod radix;

pub use node::{Node, NodeId};
pub use radix::{Iter, PrefixMatch, RadixTrie, TrieError};
