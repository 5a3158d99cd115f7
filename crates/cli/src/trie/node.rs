// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Arena-allocated trie nodes.

/// Index of a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root is always the first slot of the arena.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node of the radix trie.
///
/// A node is a *tail* when `replacement` is set: the path from the root to
/// it spells a registered pattern. Tails need not be leaves, because one
/// pattern can prefix another.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Bytes on the edge leading into this node (empty only for the root).
    pub(crate) segment: Vec<u8>,
    /// Replacement text, present on tail nodes only.
    pub(crate) replacement: Option<String>,
    /// Child ids, ordered by the first byte of their segment.
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(segment: Vec<u8>, replacement: Option<String>) -> Self {
        Self {
            segment,
            replacement,
            children: Vec::new(),
        }
    }

    pub fn segment(&self) -> &[u8] {
        &self.segment
    }

    pub fn replacement(&self) -> Option<&str> {
        self.replacement.as_deref()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_tail(&self) -> bool {
        self.replacement.is_some()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First byte of the segment. Only the root has none.
    pub(crate) fn first_byte(&self) -> Option<u8> {
        self.segment.first().copied()
    }
}

/// Contiguous node storage. Nodes are never removed.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
    max_nodes: usize,
}

/// Largest node count a [`NodeId`] can address.
pub(crate) const MAX_NODES: usize = u32::MAX as usize;

/// The arena is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ArenaFull {
    pub(crate) max_nodes: usize,
}

impl NodeArena {
    /// Create an arena holding only the root node.
    pub(crate) fn new() -> Self {
        Self::with_max_nodes(MAX_NODES)
    }

    /// Create an arena that refuses to grow past `max_nodes`, root included.
    pub(crate) fn with_max_nodes(max_nodes: usize) -> Self {
        Self {
            nodes: vec![Node::default()],
            max_nodes: max_nodes.min(MAX_NODES),
        }
    }

    pub(crate) fn allocate(&mut self, node: Node) -> Result<NodeId, ArenaFull> {
        let full = ArenaFull {
            max_nodes: self.max_nodes,
        };
        if self.nodes.len() >= self.max_nodes {
            return Err(full);
        }
        let id = u32::try_from(self.nodes.len()).map_err(|_| full)?;
        self.nodes.push(node);
        Ok(NodeId(id))
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Every slot was filled by `allocate`, so ids stay below `MAX_NODES`.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        (0..u32::MAX).map(NodeId).zip(&self.nodes)
    }
}
