//! Indexed syntax trees for the gls language server.
//!
//! The parser lives elsewhere; this crate only stores what it hands over:
//! - Node storage (`NodeArena`, `NodeIndex`) with parent links
//! - The closed node-kind sum type (`NodeKind`) and symbol views
//! - Snapshot loading and validation (`NodeRecord`, `SnapshotError`)
//! - Open documents plus a class table (`Workspace`)
//! - Static-type member lookup flattened over superclass chains

pub mod base;
pub use base::NodeIndex;

pub mod node;
pub use node::{ClassDecl, MethodDecl, Node, NodeKind, Symbol, SymbolKind, VariableScope};

pub mod arena;
pub use arena::{ExtendedNodeInfo, NodeArena};

pub mod snapshot;
pub use snapshot::{NodeRecord, SnapshotError};

pub mod workspace;
pub use workspace::Workspace;

pub mod types;
pub use types::MemberSet;
