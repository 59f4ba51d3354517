//! Open documents and the class table built from them.

use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::node::{ClassDecl, NodeKind};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;

/// Where a class is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ClassLocation {
    uri: String,
    node: NodeIndex,
}

/// All documents currently indexed, keyed by URI.
///
/// Class names are global. When two documents declare the same name, the one
/// opened first owns it until it is closed; ownership then passes to the
/// earliest opened document that still declares it.
#[derive(Debug, Default)]
pub struct Workspace {
    documents: IndexMap<String, NodeArena>,
    classes: FxHashMap<String, ClassLocation>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `arena` under `uri`, replacing any previous version.
    pub fn open(&mut self, uri: impl Into<String>, arena: NodeArena) {
        let uri = uri.into();
        if self.documents.contains_key(&uri) {
            self.close(&uri);
        }
        for (index, node) in arena.iter() {
            if let NodeKind::Class(decl) = &node.kind {
                self.classes
                    .entry(decl.name.clone())
                    .or_insert_with(|| ClassLocation {
                        uri: uri.clone(),
                        node: index,
                    });
            }
        }
        tracing::debug!(uri = %uri, nodes = arena.len(), "document opened");
        self.documents.insert(uri, arena);
    }

    /// Drop a document. Returns `false` if it was not open.
    pub fn close(&mut self, uri: &str) -> bool {
        if self.documents.shift_remove(uri).is_none() {
            return false;
        }
        let orphaned: Vec<String> = self
            .classes
            .iter()
            .filter(|(_, location)| location.uri == uri)
            .map(|(name, _)| name.clone())
            .collect();
        for name in &orphaned {
            self.classes.remove(name);
        }
        // Earliest opened document declaring the name takes it over.
        for (other_uri, arena) in &self.documents {
            for (index, node) in arena.iter() {
                if let NodeKind::Class(decl) = &node.kind
                    && orphaned.contains(&decl.name)
                {
                    self.classes
                        .entry(decl.name.clone())
                        .or_insert_with(|| ClassLocation {
                            uri: other_uri.clone(),
                            node: index,
                        });
                }
            }
        }
        tracing::debug!(uri, "document closed");
        true
    }

    pub fn document(&self, uri: &str) -> Option<&NodeArena> {
        self.documents.get(uri)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Look up a class declaration by name across all open documents.
    pub fn class(&self, name: &str) -> Option<&ClassDecl> {
        let location = self.classes.get(name)?;
        let node = self.documents.get(&location.uri)?.get(location.node)?;
        match &node.kind {
            NodeKind::Class(decl) => Some(decl),
            _ => None,
        }
    }
}
