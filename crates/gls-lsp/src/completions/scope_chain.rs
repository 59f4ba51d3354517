//! Scope-chain completions for bare names and statement positions.

use super::*;

impl<'a> Completions<'a> {
    /// Names visible from `anchor`, nearest scope first.
    ///
    /// Each ancestor contributes according to its kind: a class its members
    /// (inherited ones included), a method or block its declared variables.
    /// Because names already emitted are skipped, an inner variable shadows
    /// a field, method or outer variable of the same name.
    pub(super) fn scope_chain_completions(
        &self,
        uri: &str,
        anchor: NodeIndex,
        prefix: &str,
    ) -> Vec<CompletionItem> {
        let mut collector = ItemCollector::new(prefix);
        let mut visited: FxHashSet<NodeIndex> = FxHashSet::default();
        let mut current = Some(anchor);

        while let Some(node_idx) = current {
            if visited.len() >= self.options.max_scope_depth {
                tracing::warn!(uri, depth = visited.len(), "scope chain too deep, stopping");
                break;
            }
            if !visited.insert(node_idx) {
                tracing::warn!(uri, node = %node_idx, "parent cycle in scope chain, stopping");
                break;
            }

            match self.index.node(uri, node_idx).map(|node| &node.kind) {
                Some(NodeKind::Class(_)) => collector.push_members(
                    self.types.properties_of(uri, node_idx),
                    self.types.fields_of(uri, node_idx),
                    self.types.methods_of(uri, node_idx),
                ),
                Some(NodeKind::Method(method)) => {
                    collector.push_symbols(method.scope.declared_variables())
                }
                Some(NodeKind::Block { scope }) => collector.push_symbols(scope.declared_variables()),
                Some(
                    NodeKind::MemberAccess { .. }
                    | NodeKind::Call { .. }
                    | NodeKind::Identifier { .. }
                    | NodeKind::Name { .. }
                    | NodeKind::Statement
                    | NodeKind::Other,
                ) => {}
                None => tracing::debug!(uri, node = %node_idx, "dangling node in scope chain"),
            }

            current = self.index.parent_of(uri, node_idx);
        }

        collector.finish()
    }
}
