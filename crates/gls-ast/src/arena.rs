//! Node storage and parent links.
//!
//! Nodes are appended by the indexer and never removed. Parent links live in a
//! side table so the nodes themselves stay plain data.

use crate::base::NodeIndex;
use crate::node::{ClassDecl, Node, NodeKind};
use gls_common::limits::MAX_SCOPE_CHAIN_DEPTH;
use gls_common::position::{Position, Range};

/// Per-node data that is not part of the node's shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtendedNodeInfo {
    pub parent: NodeIndex,
}

/// Arena holding every node of one document.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
    pub(crate) extended_info: Vec<ExtendedNodeInfo>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
            extended_info: Vec::with_capacity(capacity),
        }
    }

    /// Append a root-level node (no parent yet).
    pub fn add_node(&mut self, kind: NodeKind, range: Range) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node::new(kind, range));
        self.extended_info.push(ExtendedNodeInfo::default());
        index
    }

    /// Append a node under `parent`.
    pub fn add_child(&mut self, parent: NodeIndex, kind: NodeKind, range: Range) -> NodeIndex {
        let index = self.add_node(kind, range);
        self.set_parent(index, parent);
        index
    }

    /// Re-link `child` under `parent`. Returns `false` when `child` is unknown.
    pub fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) -> bool {
        match self.get_extended_mut(child) {
            Some(ext) => {
                ext.parent = parent;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    #[inline]
    fn get_extended_mut(&mut self, index: NodeIndex) -> Option<&mut ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get_mut(index.0 as usize)
        }
    }

    /// Parent of `index`, or `None` at the root and for unknown handles.
    pub fn parent_of(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.get_extended(index)?.parent.into_option()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex(i as u32), node))
    }

    /// Innermost node whose range contains `position`.
    ///
    /// When two candidates have the same range the one added later wins,
    /// because indexers add children after their parents.
    pub fn find_node_at(&self, position: Position) -> Option<NodeIndex> {
        let mut best: Option<(NodeIndex, &Range)> = None;
        for (index, node) in self.iter() {
            if node.range.is_inverted() || !node.range.contains(position) {
                continue;
            }
            match best {
                Some((_, best_range)) if !best_range.encloses(&node.range) => {}
                _ => best = Some((index, &node.range)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// `index` followed by its ancestors, innermost first.
    ///
    /// Stops at the root, at an unknown handle, or after
    /// `MAX_SCOPE_CHAIN_DEPTH` steps.
    pub fn ancestors(&self, index: NodeIndex) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: index.into_option(),
            steps: 0,
        }
    }

    /// Nearest class declaration enclosing `index` (inclusive).
    pub fn enclosing_class(&self, index: NodeIndex) -> Option<(NodeIndex, &ClassDecl)> {
        self.ancestors(index)
            .find_map(|(idx, node)| match &node.kind {
                NodeKind::Class(decl) => Some((idx, decl)),
                _ => None,
            })
    }
}

/// Iterator returned by [`NodeArena::ancestors`].
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    next: Option<NodeIndex>,
    steps: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (NodeIndex, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if self.steps >= MAX_SCOPE_CHAIN_DEPTH {
            return None;
        }
        let index = self.next.take()?;
        let node = self.arena.get(index)?;
        self.steps += 1;
        self.next = self.arena.parent_of(index).filter(|&parent| parent != index);
        Some((index, node))
    }
}
