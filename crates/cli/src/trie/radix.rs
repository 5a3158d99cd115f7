// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Radix trie construction and longest-prefix lookup.

use std::collections::HashSet;

use super::node::{ArenaFull, Node, NodeArena, NodeId};

/// Error during trie construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    #[error("pattern `{0}` is duplicated")]
    DuplicateKey(String),

    #[error("empty pattern is not allowed")]
    EmptyPattern,

    #[error("pattern set needs more than {max_nodes} trie nodes")]
    TooManyNodes { max_nodes: usize },
}

/// The longest registered pattern found at the start of some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch<'a> {
    /// Replacement registered for the matched pattern.
    pub replacement: &'a str,
    /// Length of the matched pattern in bytes.
    pub len: usize,
}

/// Prefix-compressed trie mapping literal patterns to replacements.
///
/// Built once with [`RadixTrie::build`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct RadixTrie {
    arena: NodeArena,
    patterns: usize,
}

/// Where a descent from the root stopped.
struct Walk<'a> {
    /// Deepest node whose segment chain is a prefix of the text.
    node: NodeId,
    /// Bytes consumed reaching `node`.
    depth: usize,
    /// Deepest tail passed on the way down.
    tail: Option<PrefixMatch<'a>>,
}

impl RadixTrie {
    /// Build a trie from pattern/replacement pairs.
    ///
    /// Fails with [`TrieError::DuplicateKey`] if a pattern occurs more than
    /// once and with [`TrieError::EmptyPattern`] for a zero-length pattern.
    /// No trie is produced on failure.
    ///
    /// Pairs are sorted by pattern before insertion, so the node layout is
    /// the same whatever order the pairs arrive in. Incremental insertion
    /// is not exposed.
    pub fn build<I, K, V>(items: I) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::build_in(NodeArena::new(), items)
    }

    fn build_in<I, K, V>(arena: NodeArena, items: I) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut items: Vec<(String, String)> = items
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        {
            let mut seen = HashSet::with_capacity(items.len());
            for (pattern, _) in &items {
                if !seen.insert(pattern.as_str()) {
                    return Err(TrieError::DuplicateKey(pattern.clone()));
                }
            }
        }

        items.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let mut trie = Self {
            arena,
            patterns: 0,
        };
        for (pattern, replacement) in items {
            trie.insert(&pattern, replacement)?;
        }

        tracing::debug!(
            patterns = trie.patterns,
            nodes = trie.node_count(),
            "built radix trie"
        );
        Ok(trie)
    }

    /// Insert one pattern.
    pub(crate) fn insert(&mut self, pattern: &str, replacement: String) -> Result<(), TrieError> {
        if pattern.is_empty() {
            return Err(TrieError::EmptyPattern);
        }

        let key = pattern.as_bytes();
        let Walk { node, depth, .. } = self.walk(key);
        let suffix = &key[depth..];

        let Some(&first) = suffix.first() else {
            // The pattern ends exactly on an existing node.
            let node = self.arena.get_mut(node);
            if node.is_tail() {
                return Err(TrieError::DuplicateKey(pattern.to_string()));
            }
            node.replacement = Some(replacement);
            self.patterns += 1;
            return Ok(());
        };

        match self.find_child(node, first) {
            Err(slot) => {
                let leaf = self
                    .arena
                    .allocate(Node::new(suffix.to_vec(), Some(replacement)))?;
                self.arena.get_mut(node).children.insert(slot, leaf);
            }
            Ok(slot) => self.split(node, slot, suffix, replacement)?,
        }

        self.patterns += 1;
        Ok(())
    }

    /// Split the child at `slot` of `parent` around its common prefix with
    /// `suffix`, then hang `replacement` off the new branching node.
    ///
    /// The child's segment is never a prefix of `suffix` here, otherwise the
    /// descent would have entered it. A failed allocation leaves the trie
    /// half split; `build` discards it.
    fn split(
        &mut self,
        parent: NodeId,
        slot: usize,
        suffix: &[u8],
        replacement: String,
    ) -> Result<(), TrieError> {
        let child_id = self.arena.get(parent).children[slot];
        let child = self.arena.get_mut(child_id);
        let common = common_prefix_len(&child.segment, suffix);
        debug_assert!(common > 0 && common < child.segment.len());

        let residual = child.segment.split_off(common);
        let residual_first = residual[0];
        let prefix = std::mem::replace(&mut child.segment, residual);

        let rest = &suffix[common..];
        let mut branch = Node::new(prefix, None);
        match rest.first() {
            None => {
                branch.replacement = Some(replacement);
                branch.children.push(child_id);
            }
            Some(&rest_first) => {
                let leaf = self
                    .arena
                    .allocate(Node::new(rest.to_vec(), Some(replacement)))?;
                branch.children = if rest_first < residual_first {
                    vec![leaf, child_id]
                } else {
                    vec![child_id, leaf]
                };
            }
        }

        let branch_id = self.arena.allocate(branch)?;
        self.arena.get_mut(parent).children[slot] = branch_id;
        Ok(())
    }

    /// Find the longest registered pattern that prefixes `text`.
    ///
    /// Returns the match (if any) and the text that follows it. Without a
    /// match the whole of `text` is returned as the remainder and the caller
    /// is expected to pass one byte through literally.
    pub fn lookup_longest_prefix<'t>(&self, text: &'t [u8]) -> (Option<PrefixMatch<'_>>, &'t [u8]) {
        match self.walk(text).tail {
            Some(m) => (Some(m), &text[m.len..]),
            None => (None, text),
        }
    }

    /// Replacement registered for exactly `pattern`.
    pub fn get(&self, pattern: &str) -> Option<&str> {
        self.walk(pattern.as_bytes())
            .tail
            .filter(|m| m.len == pattern.len())
            .map(|m| m.replacement)
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn root(&self) -> &Node {
        self.arena.get(NodeId::ROOT)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.get(id)
    }

    /// All nodes in allocation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.arena.iter()
    }

    /// Registered pattern/replacement pairs in sorted pattern order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            trie: self,
            stack: vec![(NodeId::ROOT, 0)],
            path: Vec::new(),
        }
    }

    /// Descend from the root while some child's segment prefixes the
    /// remaining text.
    fn walk(&self, text: &[u8]) -> Walk<'_> {
        let mut walk = Walk {
            node: NodeId::ROOT,
            depth: 0,
            tail: None,
        };

        while let Some(&next) = text.get(walk.depth) {
            let Ok(slot) = self.find_child(walk.node, next) else {
                break;
            };
            let child_id = self.arena.get(walk.node).children[slot];
            let child = self.arena.get(child_id);
            if !text[walk.depth..].starts_with(&child.segment) {
                break;
            }

            walk.node = child_id;
            walk.depth += child.segment.len();
            if let Some(replacement) = child.replacement.as_deref() {
                walk.tail = Some(PrefixMatch {
                    replacement,
                    len: walk.depth,
                });
            }
        }

        walk
    }

    /// Binary search `parent`'s children by the first byte of their segment.
    fn find_child(&self, parent: NodeId, byte: u8) -> Result<usize, usize> {
        self.arena
            .get(parent)
            .children
            .binary_search_by_key(&Some(byte), |&id| self.arena.get(id).first_byte())
    }
}

/// Pre-order iterator over a trie's patterns.
pub struct Iter<'a> {
    trie: &'a RadixTrie,
    stack: Vec<(NodeId, usize)>,
    path: Vec<u8>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (String, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, depth)) = self.stack.pop() {
            let node = self.trie.arena.get(id);
            self.path.truncate(depth);
            self.path.extend_from_slice(&node.segment);

            let depth = self.path.len();
            self.stack
                .extend(node.children.iter().rev().map(|&child| (child, depth)));

            if let Some(replacement) = node.replacement.as_deref() {
                return Some((String::from_utf8_lossy(&self.path).into_owned(), replacement));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a RadixTrie {
    type Item = (String, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<ArenaFull> for TrieError {
    fn from(full: ArenaFull) -> Self {
        TrieError::TooManyNodes {
            max_nodes: full.max_nodes,
        }
    }
}

fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
#[path = "radix_tests.rs"]
mod tests;
