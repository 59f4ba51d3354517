//! Language Server Protocol features for the gls language server.
//!
//! This crate provides:
//! - Completions (member access, calls, identifiers, statement positions)
//! - The collaborator traits completion reads the AST and type information through

pub mod collaborators;
pub use collaborators::{SyntaxIndex, TypeResolver};

pub mod completions;
pub use completions::{
    CompletionContext, CompletionItem, CompletionItemKind, CompletionOptions, CompletionResult,
    CompletionTriggerKind, Completions, completion_kind, extract_prefix,
};
