//! Cursor-to-node resolution.

use super::*;

/// The node under the cursor and its parent, borrowed from the index.
pub(super) struct Anchor<'n> {
    pub index: NodeIndex,
    pub node: &'n Node,
    pub parent: Option<&'n Node>,
}

impl<'a> Completions<'a> {
    /// Find the anchor node for `position`.
    ///
    /// `None` when the document is not indexed or no node covers the cursor.
    /// A parent link that points nowhere is treated as no parent.
    pub(super) fn resolve_anchor(&self, uri: &str, position: Position) -> Option<Anchor<'a>> {
        let index = self.index;
        let node_idx = index.node_at(uri, position)?;
        let node = index.node(uri, node_idx)?;
        let parent = index
            .parent_of(uri, node_idx)
            .and_then(|parent_idx| index.node(uri, parent_idx));
        tracing::trace!(
            node = %node_idx,
            kind = node.kind.tag(),
            parent = parent.map(|p| p.kind.tag()),
            "anchor resolved"
        );
        Some(Anchor {
            index: node_idx,
            node,
            parent,
        })
    }
}
