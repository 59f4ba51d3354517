//! gls: a completion server for Groovy sources indexed by an external parser.
//!
//! The workspace crates do the work; this crate wires them into a process:
//! - `config`: server configuration loaded from JSON
//! - `server`: the line-delimited JSON request loop
//! - `tracing_config`: log filter and format selection

pub use gls_ast as ast;
pub use gls_common as common;
pub use gls_lsp as lsp;

pub mod config;
pub mod server;
pub mod tracing_config;
