//! Common types and utilities for the gls language server.
//!
//! This crate provides foundational types used across all gls crates:
//! - Position/Range types for line/column source locations
//! - Traversal limits shared by the AST and completion crates

// Centralized limits and thresholds
pub mod limits;

// Position/Range types for line/column source locations
pub mod position;
pub use position::{Position, Range};
