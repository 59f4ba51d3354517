//! Centralized limits for tree and hierarchy walks.
//!
//! The AST and the class table are built by collaborators this server does not
//! control. Every upward or inheritance walk is bounded by one of these
//! constants so a malformed snapshot cannot hang a request.

/// Maximum number of ancestors visited when walking the scope chain from the
/// cursor node to the tree root.
///
/// Real Groovy sources rarely nest deeper than a few dozen scopes. A chain
/// longer than this is treated as a corrupt parent table and the walk stops.
///
/// # Groovy example
///
/// ```groovy
/// class Outer {          // ClassScope
///   def run() {          // MethodScope
///     if (ready) {       // BlockScope
///       items.each {     // BlockScope (closure body)
///         na|            // cursor: four scopes deep
///       }
///     }
///   }
/// }
/// ```
pub const MAX_SCOPE_CHAIN_DEPTH: usize = 1024;

/// Maximum number of superclasses followed when flattening members.
///
/// Cyclic `extends` clauses are rejected by the compiler, but an index built
/// from broken sources can still contain them.
pub const MAX_INHERITANCE_DEPTH: usize = 64;
