//! Serialized node lists handed over by the indexer.
//!
//! A snapshot is a flat list of records; a record's position in the list is
//! its `NodeIndex`. Validation rejects references that point outside the
//! list. Longer parent cycles are left for the walkers to cut off.

use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::node::NodeKind;
use gls_common::position::Range;

/// One node of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NodeRecord {
    pub node: NodeKind,
    pub range: Range,
    #[serde(default)]
    pub parent: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("node {node} names parent {parent}, but the snapshot has only {len} nodes")]
    DanglingParent { node: u32, parent: u32, len: usize },
    #[error("node {node} is its own parent")]
    SelfParent { node: u32 },
    #[error("node {node} refers to node {target}, but the snapshot has only {len} nodes")]
    DanglingReference { node: u32, target: u32, len: usize },
}

impl NodeArena {
    /// Build an arena from snapshot records.
    pub fn from_records(records: Vec<NodeRecord>) -> Result<NodeArena, SnapshotError> {
        let len = records.len();
        let in_bounds = |index: u32| (index as usize) < len;

        for (i, record) in records.iter().enumerate() {
            let node = i as u32;
            if let Some(parent) = record.parent {
                if parent == node {
                    return Err(SnapshotError::SelfParent { node });
                }
                if !in_bounds(parent) {
                    return Err(SnapshotError::DanglingParent { node, parent, len });
                }
            }
            for target in record.node.referenced_nodes() {
                if target.is_some() && !in_bounds(target.0) {
                    return Err(SnapshotError::DanglingReference {
                        node,
                        target: target.0,
                        len,
                    });
                }
            }
        }

        let mut arena = NodeArena::with_capacity(len);
        let mut parents = Vec::with_capacity(len);
        for record in records {
            let index = arena.add_node(record.node, record.range);
            parents.push((index, record.parent));
        }
        for (index, parent) in parents {
            if let Some(parent) = parent {
                arena.set_parent(index, NodeIndex(parent));
            }
        }
        tracing::trace!(nodes = arena.len(), "loaded snapshot");
        Ok(arena)
    }

    /// Serialize the arena back into records.
    pub fn to_records(&self) -> Vec<NodeRecord> {
        self.iter()
            .map(|(index, node)| NodeRecord {
                node: node.kind.clone(),
                range: node.range,
                parent: self.parent_of(index).map(|parent| parent.0),
            })
            .collect()
    }
}
