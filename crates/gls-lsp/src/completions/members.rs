//! Member completions for `object.name` and `object.name()`.

use super::*;

impl<'a> Completions<'a> {
    /// Members of the static type of `object` whose names start with `prefix`.
    ///
    /// Properties come before fields and both before methods; the seen-set
    /// lives only for this call.
    pub(super) fn member_completions(
        &self,
        uri: &str,
        object: NodeIndex,
        prefix: &str,
    ) -> Vec<CompletionItem> {
        if object.is_none() {
            tracing::trace!("member expression without an object");
            return Vec::new();
        }

        let mut collector = ItemCollector::new(prefix);
        collector.push_members(
            self.types.properties_of(uri, object),
            self.types.fields_of(uri, object),
            self.types.methods_of(uri, object),
        );
        collector.finish()
    }
}
