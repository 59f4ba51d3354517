//! Read-only views completion needs from the rest of the server.
//!
//! The indexer owns the trees and the type tables; completion only borrows
//! them for the duration of one request through these traits.

use gls_ast::{Node, NodeIndex, Symbol, Workspace};
use gls_common::position::Position;

/// Node lookup and parent links for indexed documents.
pub trait SyntaxIndex {
    /// Innermost node covering `position`, or `None` when the document is not
    /// indexed or nothing covers the position.
    fn node_at(&self, uri: &str, position: Position) -> Option<NodeIndex>;

    /// Enclosing node, `None` at the root.
    fn parent_of(&self, uri: &str, node: NodeIndex) -> Option<NodeIndex>;

    fn node(&self, uri: &str, node: NodeIndex) -> Option<&Node>;
}

/// Members visible on the static type of an expression.
///
/// Each list is already flattened across the type's inheritance chain, and a
/// class declaration node has its own class as static type.
pub trait TypeResolver {
    fn properties_of(&self, uri: &str, expr: NodeIndex) -> Vec<&Symbol>;
    fn fields_of(&self, uri: &str, expr: NodeIndex) -> Vec<&Symbol>;
    fn methods_of(&self, uri: &str, expr: NodeIndex) -> Vec<&Symbol>;
}

impl SyntaxIndex for Workspace {
    fn node_at(&self, uri: &str, position: Position) -> Option<NodeIndex> {
        self.document(uri)?.find_node_at(position)
    }

    fn parent_of(&self, uri: &str, node: NodeIndex) -> Option<NodeIndex> {
        self.document(uri)?.parent_of(node)
    }

    fn node(&self, uri: &str, node: NodeIndex) -> Option<&Node> {
        self.document(uri)?.get(node)
    }
}

impl TypeResolver for Workspace {
    fn properties_of(&self, uri: &str, expr: NodeIndex) -> Vec<&Symbol> {
        self.members_of_expression(uri, expr).properties
    }

    fn fields_of(&self, uri: &str, expr: NodeIndex) -> Vec<&Symbol> {
        self.members_of_expression(uri, expr).fields
    }

    fn methods_of(&self, uri: &str, expr: NodeIndex) -> Vec<&Symbol> {
        self.members_of_expression(uri, expr).methods
    }
}
