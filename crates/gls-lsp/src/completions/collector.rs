//! Prefix filtering and first-seen-wins deduplication.

use super::*;

/// Accumulates items for one resolution call.
///
/// A name is emitted at most once; whichever source offers it first keeps
/// it. Callers control precedence through the order they push in.
pub(super) struct ItemCollector<'p> {
    prefix: &'p str,
    seen: FxHashSet<String>,
    items: Vec<CompletionItem>,
}

impl<'p> ItemCollector<'p> {
    pub(super) fn new(prefix: &'p str) -> Self {
        Self {
            prefix,
            seen: FxHashSet::default(),
            items: Vec::new(),
        }
    }

    pub(super) fn push_symbols<'s>(&mut self, symbols: impl IntoIterator<Item = &'s Symbol>) {
        for symbol in symbols {
            if !symbol.name.starts_with(self.prefix) || self.seen.contains(&symbol.name) {
                continue;
            }
            self.seen.insert(symbol.name.clone());
            self.items
                .push(CompletionItem::new(symbol.name.clone(), completion_kind(symbol)));
        }
    }

    /// Properties, then fields, then methods. A field sharing a property's
    /// name and every overload after the first are dropped.
    pub(super) fn push_members<'s>(
        &mut self,
        properties: Vec<&'s Symbol>,
        fields: Vec<&'s Symbol>,
        methods: Vec<&'s Symbol>,
    ) {
        self.push_symbols(properties);
        self.push_symbols(fields);
        self.push_symbols(methods);
    }

    pub(super) fn finish(self) -> Vec<CompletionItem> {
        self.items
    }
}
