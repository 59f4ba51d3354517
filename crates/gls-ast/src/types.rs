//! Static member lookup.
//!
//! Types are nominal: the static type of an expression is a class name, and a
//! class's members are its own members followed by those of each superclass in
//! turn. Nothing here checks that the program is well typed; an expression
//! whose type cannot be named simply has no members.

use crate::base::NodeIndex;
use crate::node::{ClassDecl, NodeKind, Symbol};
use crate::workspace::Workspace;
use gls_common::limits::{MAX_INHERITANCE_DEPTH, MAX_SCOPE_CHAIN_DEPTH};
use rustc_hash::FxHashSet;

/// Members visible on a type, subclass members first.
///
/// Overrides and overloads are kept; callers decide how to collapse them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemberSet<'a> {
    pub properties: Vec<&'a Symbol>,
    pub fields: Vec<&'a Symbol>,
    pub methods: Vec<&'a Symbol>,
}

impl<'a> MemberSet<'a> {
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.fields.is_empty() && self.methods.is_empty()
    }

    fn extend_from(&mut self, decl: &'a ClassDecl) {
        self.properties.extend(decl.properties.iter());
        self.fields.extend(decl.fields.iter());
        self.methods.extend(decl.methods.iter());
    }
}

impl Workspace {
    /// Members of `class_name` and all of its superclasses.
    pub fn members_of_class(&self, class_name: &str) -> MemberSet<'_> {
        match self.class(class_name) {
            Some(decl) => self.members_of_decl(decl),
            None => MemberSet::default(),
        }
    }

    /// Members of `decl` itself, then of its superclasses by name.
    ///
    /// Starting from the declaration rather than its name keeps two classes
    /// that share a name apart.
    pub fn members_of_decl<'s>(&'s self, decl: &'s ClassDecl) -> MemberSet<'s> {
        let mut members = MemberSet::default();
        for decl in self.class_chain(decl) {
            members.extend_from(decl);
        }
        members
    }

    /// Members visible on the static type of `expr` in document `uri`.
    pub fn members_of_expression(&self, uri: &str, expr: NodeIndex) -> MemberSet<'_> {
        match self.receiver_decl(uri, expr, 0) {
            Some(decl) => self.members_of_decl(decl),
            None => {
                tracing::trace!(uri, expr = %expr, "no static type");
                MemberSet::default()
            }
        }
    }

    /// Declaration of the static type of `expr`. A class node and `this` name
    /// the declaration in the tree; everything else goes through the class
    /// table.
    fn receiver_decl(&self, uri: &str, expr: NodeIndex, depth: usize) -> Option<&ClassDecl> {
        let arena = self.document(uri)?;
        match &arena.get(expr)?.kind {
            NodeKind::Class(decl) => Some(decl),
            NodeKind::Identifier { name } if name == "this" => {
                arena.enclosing_class(expr).map(|(_, decl)| decl)
            }
            _ => self.class(self.type_of_node(uri, expr, depth)?),
        }
    }

    /// Name of the static type of `expr`, if it can be determined.
    pub fn static_type_of(&self, uri: &str, expr: NodeIndex) -> Option<&str> {
        self.type_of_node(uri, expr, 0)
    }

    /// `start` followed by its superclasses. Stops at unknown classes,
    /// cycles, and `MAX_INHERITANCE_DEPTH`.
    fn class_chain<'s>(&'s self, start: &'s ClassDecl) -> Vec<&'s ClassDecl> {
        let mut chain = Vec::new();
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut current = Some(start);
        while let Some(decl) = current {
            if chain.len() >= MAX_INHERITANCE_DEPTH || !seen.insert(decl.name.as_str()) {
                tracing::warn!(class = %start.name, "inheritance chain cut off");
                break;
            }
            chain.push(decl);
            current = decl
                .super_class
                .as_deref()
                .and_then(|super_name| self.class(super_name));
        }
        chain
    }

    fn type_of_node(&self, uri: &str, expr: NodeIndex, depth: usize) -> Option<&str> {
        if depth >= MAX_SCOPE_CHAIN_DEPTH {
            return None;
        }
        let arena = self.document(uri)?;
        let node = arena.get(expr)?;
        match &node.kind {
            NodeKind::Class(decl) => Some(decl.name.as_str()),
            NodeKind::Identifier { name } => self.type_of_identifier(uri, expr, name),
            NodeKind::MemberAccess { object, property } => {
                let owner = self.receiver_decl(uri, *object, depth + 1)?;
                let name = self.name_text(uri, *property)?;
                let members = self.members_of_decl(owner);
                members
                    .properties
                    .into_iter()
                    .chain(members.fields)
                    .find(|symbol| symbol.name == name)
                    .and_then(|symbol| symbol.type_name.as_deref())
            }
            NodeKind::Call { object, method } => {
                let owner = self.receiver_decl(uri, *object, depth + 1)?;
                let name = self.name_text(uri, *method)?;
                self.members_of_decl(owner)
                    .methods
                    .into_iter()
                    .find(|symbol| symbol.name == name)
                    .and_then(|symbol| symbol.type_name.as_deref())
            }
            NodeKind::Name { .. }
            | NodeKind::Method(_)
            | NodeKind::Block { .. }
            | NodeKind::Statement
            | NodeKind::Other => None,
        }
    }

    fn type_of_identifier(&self, uri: &str, expr: NodeIndex, name: &str) -> Option<&str> {
        let arena = self.document(uri)?;
        match name {
            "this" => return arena.enclosing_class(expr).map(|(_, decl)| decl.name.as_str()),
            "super" => {
                return arena
                    .enclosing_class(expr)
                    .and_then(|(_, decl)| decl.super_class.as_deref());
            }
            _ => {}
        }

        for (_, node) in arena.ancestors(expr) {
            let declared = match &node.kind {
                NodeKind::Method(method) => method.scope.get(name),
                NodeKind::Block { scope } => scope.get(name),
                NodeKind::Class(decl) => {
                    let members = self.members_of_decl(decl);
                    members
                        .properties
                        .into_iter()
                        .chain(members.fields)
                        .find(|symbol| symbol.name == name)
                }
                _ => None,
            };
            if let Some(symbol) = declared {
                return symbol.type_name.as_deref();
            }
        }

        // A bare class name refers to the class itself (static access).
        self.class(name).map(|decl| decl.name.as_str())
    }

    fn name_text(&self, uri: &str, index: NodeIndex) -> Option<&str> {
        match &self.document(uri)?.get(index)?.kind {
            NodeKind::Name { text } => Some(text.as_str()),
            _ => None,
        }
    }
}
