//! Completions implementation for LSP.
//!
//! Given a position in a document, finds the node under the cursor, decides
//! whether the user is completing a member (`obj.na|`, `obj.na|()`) or a name
//! visible in scope (`na|`, an empty statement), and lists the matching
//! symbols. Output keeps emission order; each label appears once.

use std::future::Ready;

use rustc_hash::FxHashSet;

use crate::collaborators::{SyntaxIndex, TypeResolver};
use gls_ast::{Node, NodeIndex, NodeKind, Symbol, SymbolKind};
use gls_common::limits::MAX_SCOPE_CHAIN_DEPTH;
use gls_common::position::{Position, Range};

mod collector;
mod context;
mod members;
mod position;
mod prefix;
mod scope_chain;

use collector::ItemCollector;
use context::CompletionStrategy;
use position::Anchor;
pub use prefix::extract_prefix;

/// The kind of completion item, used by the editor to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionItemKind {
    /// A property (generated accessor pair)
    Property,
    /// A field
    Field,
    /// A method
    Method,
    /// A local variable or parameter
    Variable,
    /// A class
    Class,
}

/// Map a resolved symbol to its presentation category.
pub fn completion_kind(symbol: &Symbol) -> CompletionItemKind {
    match symbol.kind {
        SymbolKind::Property => CompletionItemKind::Property,
        SymbolKind::Field => CompletionItemKind::Field,
        SymbolKind::Method => CompletionItemKind::Method,
        SymbolKind::Variable => CompletionItemKind::Variable,
        SymbolKind::Class => CompletionItemKind::Class,
    }
}

/// A completion item to be suggested to the user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompletionItem {
    /// The label to display in the completion list
    pub label: String,
    /// The kind of completion item
    pub kind: CompletionItemKind,
}

impl CompletionItem {
    pub fn new(label: String, kind: CompletionItemKind) -> Self {
        Self { label, kind }
    }
}

/// Result of a completion request.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    /// Whether the entries are members of an object expression.
    pub is_member_completion: bool,
    /// The completion entries, in emission order.
    pub entries: Vec<CompletionItem>,
}

impl CompletionResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|item| item.label.as_str()).collect()
    }
}

/// How the completion request was triggered (LSP `CompletionTriggerKind`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionTriggerKind {
    /// Typing an identifier, or an explicit request (Ctrl+Space).
    #[default]
    Invoked,
    /// A trigger character such as `.`.
    TriggerCharacter,
    /// Re-triggered because the previous list was incomplete.
    TriggerForIncompleteCompletions,
}

/// Additional information about the context in which completion was
/// triggered. Resolution does not depend on it; it is recorded in traces.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionContext {
    #[serde(default)]
    pub trigger_kind: CompletionTriggerKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_character: Option<String>,
}

/// Tunables for completion resolution.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompletionOptions {
    /// Ancestors visited before the scope walk gives up.
    pub max_scope_depth: usize,
    /// Truncate the list after this many entries. `None` keeps everything.
    pub max_items: Option<usize>,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_scope_depth: MAX_SCOPE_CHAIN_DEPTH,
            max_items: None,
        }
    }
}

/// Completions provider.
///
/// This struct provides LSP "Completions" functionality by:
/// 1. Finding the AST node (and its parent) at the cursor
/// 2. Classifying the syntactic context around it
/// 3. Collecting members of the receiver type, or walking the scope chain
/// 4. Returning the filtered, deduplicated items in emission order
pub struct Completions<'a> {
    index: &'a dyn SyntaxIndex,
    types: &'a dyn TypeResolver,
    options: CompletionOptions,
}

impl<'a> Completions<'a> {
    /// Create a new Completions provider with default options.
    pub fn new(index: &'a dyn SyntaxIndex, types: &'a dyn TypeResolver) -> Self {
        Self::with_options(index, types, CompletionOptions::default())
    }

    pub fn with_options(
        index: &'a dyn SyntaxIndex,
        types: &'a dyn TypeResolver,
        options: CompletionOptions,
    ) -> Self {
        Self {
            index,
            types,
            options,
        }
    }

    /// Answer a completion request.
    ///
    /// The work is synchronous; the returned future is already complete and
    /// exists only to fit request/response handlers. Never fails: anything
    /// that cannot be resolved yields an empty result.
    pub fn provide_completion(
        &self,
        uri: &str,
        position: Position,
        context: Option<&CompletionContext>,
    ) -> Ready<CompletionResult> {
        if let Some(context) = context {
            tracing::trace!(
                trigger = ?context.trigger_kind,
                character = ?context.trigger_character,
                "completion triggered"
            );
        }
        std::future::ready(self.get_completions(uri, position))
    }

    /// Get completion suggestions at the given position.
    #[tracing::instrument(
        level = "debug",
        skip(self, position),
        fields(line = position.line, character = position.character)
    )]
    pub fn get_completions(&self, uri: &str, position: Position) -> CompletionResult {
        let Some(anchor) = self.resolve_anchor(uri, position) else {
            tracing::debug!("no node at position");
            return CompletionResult::default();
        };

        let (is_member_completion, mut entries) = match self.classify(uri, &anchor, position) {
            CompletionStrategy::Members { object, prefix } => {
                (true, self.member_completions(uri, object, &prefix))
            }
            CompletionStrategy::ScopeChain { anchor, prefix } => {
                (false, self.scope_chain_completions(uri, anchor, &prefix))
            }
            CompletionStrategy::Nothing => (false, Vec::new()),
        };

        if let Some(max_items) = self.options.max_items {
            entries.truncate(max_items);
        }
        tracing::debug!(count = entries.len(), is_member_completion, "completions resolved");
        CompletionResult {
            is_member_completion,
            entries,
        }
    }
}
