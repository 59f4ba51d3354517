//! Syntactic context classification.
//!
//! Picks one resolution strategy from the anchor node and its parent. The
//! most specific anchor wins: an identifier that is the object of `a.b` or
//! `a.b()` completes members, never bare names.

use super::*;

/// What to resolve for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum CompletionStrategy {
    /// Members of the static type of `object`.
    Members { object: NodeIndex, prefix: String },
    /// Names visible from `anchor` outward.
    ScopeChain { anchor: NodeIndex, prefix: String },
    Nothing,
}

fn is_member_access(node: &Node) -> bool {
    matches!(node.kind, NodeKind::MemberAccess { .. })
}

fn is_call(node: &Node) -> bool {
    matches!(node.kind, NodeKind::Call { .. })
}

/// The member access or call that owns the cursor, in priority order:
/// node access, parent access, node call, parent call.
fn member_anchor<'n>(anchor: &Anchor<'n>) -> Option<&'n Node> {
    if is_member_access(anchor.node) {
        Some(anchor.node)
    } else if anchor.parent.is_some_and(is_member_access) {
        anchor.parent
    } else if is_call(anchor.node) {
        Some(anchor.node)
    } else if anchor.parent.is_some_and(is_call) {
        anchor.parent
    } else {
        None
    }
}

impl<'a> Completions<'a> {
    pub(super) fn classify(
        &self,
        uri: &str,
        anchor: &Anchor<'a>,
        position: Position,
    ) -> CompletionStrategy {
        if let Some(owner) = member_anchor(anchor) {
            return self.member_strategy(uri, owner, position);
        }

        match &anchor.node.kind {
            NodeKind::Identifier { name } => CompletionStrategy::ScopeChain {
                anchor: anchor.index,
                prefix: extract_prefix(name, &anchor.node.range, position),
            },
            NodeKind::Method(_) | NodeKind::Block { .. } | NodeKind::Statement => {
                CompletionStrategy::ScopeChain {
                    anchor: anchor.index,
                    prefix: String::new(),
                }
            }
            NodeKind::MemberAccess { .. }
            | NodeKind::Call { .. }
            | NodeKind::Name { .. }
            | NodeKind::Class(_)
            | NodeKind::Other => CompletionStrategy::Nothing,
        }
    }

    /// Receiver and typed prefix of a member access or call.
    fn member_strategy(&self, uri: &str, owner: &Node, position: Position) -> CompletionStrategy {
        let (object, name_token) = match &owner.kind {
            NodeKind::MemberAccess { object, property } => (*object, *property),
            NodeKind::Call { object, method } => (*object, *method),
            _ => return CompletionStrategy::Nothing,
        };
        let prefix = match self.index.node(uri, name_token) {
            Some(Node {
                kind: NodeKind::Name { text },
                range,
            }) => extract_prefix(text, range, position),
            _ => String::new(),
        };
        CompletionStrategy::Members { object, prefix }
    }
}
