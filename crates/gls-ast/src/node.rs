//! Node kinds and symbol views.
//!
//! `NodeKind` is deliberately closed: every consumer matches it exhaustively,
//! so adding a kind forces each classifier and walker to decide what to do
//! with it.

use crate::base::NodeIndex;
use gls_common::position::Range;
use indexmap::IndexMap;

/// What a symbol declares. Mirrors the declaration sites the indexer reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SymbolKind {
    Property,
    Field,
    Method,
    Variable,
    Class,
}

/// A named declaration. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub range: Range,
    /// Declared type, or the return type for methods. `None` for `def`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind, range: Range) -> Self {
        Self {
            name: name.into(),
            kind,
            range,
            type_name: None,
        }
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }
}

/// Variables declared directly in a method or block, in declaration order.
///
/// Serialized as a plain list of symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct VariableScope {
    declared: IndexMap<String, Symbol>,
}

impl VariableScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variable. A second declaration of the same name is ignored
    /// and returns `false`; the first one keeps its slot in the order.
    pub fn declare(&mut self, symbol: Symbol) -> bool {
        if self.declared.contains_key(&symbol.name) {
            return false;
        }
        self.declared.insert(symbol.name.clone(), symbol);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.declared.get(name)
    }

    /// Declared variables in declaration order.
    pub fn declared_variables(&self) -> impl Iterator<Item = &Symbol> {
        self.declared.values()
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}

impl From<Vec<Symbol>> for VariableScope {
    fn from(symbols: Vec<Symbol>) -> Self {
        symbols.into_iter().collect()
    }
}

impl From<VariableScope> for Vec<Symbol> {
    fn from(scope: VariableScope) -> Self {
        scope.declared.into_values().collect()
    }
}

impl FromIterator<Symbol> for VariableScope {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut scope = VariableScope::new();
        for symbol in iter {
            scope.declare(symbol);
        }
        scope
    }
}

/// A class declaration with its own (not inherited) members.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_class: Option<String>,
    #[serde(default)]
    pub properties: Vec<Symbol>,
    #[serde(default)]
    pub fields: Vec<Symbol>,
    /// Every overload is listed separately.
    #[serde(default)]
    pub methods: Vec<Symbol>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            super_class: None,
            properties: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn extends(mut self, super_class: impl Into<String>) -> Self {
        self.super_class = Some(super_class.into());
        self
    }

    pub fn with_property(mut self, symbol: Symbol) -> Self {
        self.properties.push(symbol);
        self
    }

    pub fn with_field(mut self, symbol: Symbol) -> Self {
        self.fields.push(symbol);
        self
    }

    pub fn with_method(mut self, symbol: Symbol) -> Self {
        self.methods.push(symbol);
        self
    }
}

/// A method declaration. Parameters and top-level locals live in `scope`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    #[serde(default)]
    pub scope: VariableScope,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            scope: VariableScope::new(),
        }
    }

    pub fn with_variable(mut self, symbol: Symbol) -> Self {
        self.scope.declare(symbol);
        self
    }
}

/// The closed set of node shapes the completion core distinguishes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    /// `object.property`
    MemberAccess {
        object: NodeIndex,
        /// A `Name` node, or `NONE` right after the dot.
        #[serde(default)]
        property: NodeIndex,
    },
    /// `object.method(...)`. Implicit-`this` calls carry an `Identifier("this")` object.
    Call {
        object: NodeIndex,
        #[serde(default)]
        method: NodeIndex,
    },
    /// A bare variable reference.
    Identifier { name: String },
    /// The name token of a member access or call.
    Name { text: String },
    /// Method header; also hosts the method's variable scope.
    Method(MethodDecl),
    /// Block statement; also hosts a variable scope.
    Block {
        #[serde(default)]
        scope: VariableScope,
    },
    /// Any other statement.
    Statement,
    Class(ClassDecl),
    Other,
}

impl NodeKind {
    /// Short tag for logs.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::MemberAccess { .. } => "member-access",
            NodeKind::Call { .. } => "call",
            NodeKind::Identifier { .. } => "identifier",
            NodeKind::Name { .. } => "name",
            NodeKind::Method(_) => "method",
            NodeKind::Block { .. } => "block",
            NodeKind::Statement => "statement",
            NodeKind::Class(_) => "class",
            NodeKind::Other => "other",
        }
    }

    /// Child handles this node refers to by index (not its tree children).
    pub fn referenced_nodes(&self) -> [NodeIndex; 2] {
        match self {
            NodeKind::MemberAccess { object, property } => [*object, *property],
            NodeKind::Call { object, method } => [*object, *method],
            NodeKind::Identifier { .. }
            | NodeKind::Name { .. }
            | NodeKind::Method(_)
            | NodeKind::Block { .. }
            | NodeKind::Statement
            | NodeKind::Class(_)
            | NodeKind::Other => [NodeIndex::NONE, NodeIndex::NONE],
        }
    }
}

/// A node: its kind and its source range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub range: Range,
}

impl Node {
    pub fn new(kind: NodeKind, range: Range) -> Self {
        Self { kind, range }
    }
}
