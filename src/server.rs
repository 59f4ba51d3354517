//! Line-delimited JSON request loop.
//!
//! Protocol:
//! - Input: one JSON request per line on stdin
//! - Output: one JSON response per line on stdout
//!
//! Request types:
//! ```json
//! {"type": "open", "id": 1, "uri": "file:///A.groovy", "nodes": [ ...snapshot records... ]}
//! {"type": "completion", "id": 2, "uri": "file:///A.groovy", "position": {"line": 3, "character": 9}}
//! {"type": "close", "id": 3, "uri": "file:///A.groovy"}
//! {"type": "status", "id": 4}
//! {"type": "shutdown", "id": 5}
//! ```
//!
//! A completion request never produces an error response: anything that
//! cannot be resolved answers with an empty entry list.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;
use gls_ast::{NodeArena, NodeRecord, Workspace};
use gls_common::position::Position;
use gls_lsp::{CompletionContext, CompletionResult, Completions};

/// Request from client
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Request {
    /// Index (or re-index) a document from a snapshot
    Open {
        id: u64,
        uri: String,
        nodes: Vec<NodeRecord>,
    },
    /// Forget a document
    Close { id: u64, uri: String },
    /// Complete at a position
    Completion {
        id: u64,
        uri: String,
        position: Position,
        #[serde(default)]
        context: Option<CompletionContext>,
    },
    /// Report open documents and request counters
    Status { id: u64 },
    /// Graceful shutdown
    Shutdown { id: u64 },
}

/// Response to client
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Completion(CompletionResponse),
    Status(StatusResponse),
    Ok(OkResponse),
    Error(ErrorResponse),
}

#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    pub id: u64,
    #[serde(flatten)]
    pub result: CompletionResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub id: u64,
    pub documents: usize,
    pub classes: usize,
    pub completions_served: u64,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub id: u64,
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub id: u64,
    pub error: String,
}

/// Server state: the indexed documents plus counters.
pub struct Server {
    workspace: Workspace,
    config: ServerConfig,
    completions_served: u64,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            workspace: Workspace::new(),
            config,
            completions_served: 0,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn handle_request(&mut self, request: Request) -> Response {
        match request {
            Request::Open { id, uri, nodes } => self.handle_open(id, uri, nodes),
            Request::Close { id, uri } => {
                let ok = self.workspace.close(&uri);
                Response::Ok(OkResponse { id, ok })
            }
            Request::Completion {
                id,
                uri,
                position,
                context,
            } => self.handle_completion(id, &uri, position, context.as_ref()),
            Request::Status { id } => Response::Status(StatusResponse {
                id,
                documents: self.workspace.document_count(),
                classes: self.workspace.class_count(),
                completions_served: self.completions_served,
            }),
            Request::Shutdown { id } => Response::Ok(OkResponse { id, ok: true }),
        }
    }

    fn handle_open(&mut self, id: u64, uri: String, nodes: Vec<NodeRecord>) -> Response {
        match NodeArena::from_records(nodes) {
            Ok(arena) => {
                self.workspace.open(uri, arena);
                Response::Ok(OkResponse { id, ok: true })
            }
            Err(err) => {
                tracing::warn!(uri = %uri, error = %err, "rejected snapshot");
                Response::Error(ErrorResponse {
                    id,
                    error: format!("invalid snapshot for {}: {}", uri, err),
                })
            }
        }
    }

    fn handle_completion(
        &mut self,
        id: u64,
        uri: &str,
        position: Position,
        context: Option<&CompletionContext>,
    ) -> Response {
        let result = Completions::with_options(
            &self.workspace,
            &self.workspace,
            self.config.completion.clone(),
        )
        .provide_completion(uri, position, context)
        .into_inner();
        self.completions_served += 1;
        Response::Completion(CompletionResponse { id, result })
    }
}

/// Serve requests from `input` until EOF or a shutdown request.
pub fn run<R: BufRead, W: Write>(server: &mut Server, input: R, mut output: W) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read request")?;

        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        let request: Request = match serde_json::from_str(&line) {
            Ok(req) => req,
            Err(e) => {
                let error_response = Response::Error(ErrorResponse {
                    id: 0,
                    error: format!("invalid request: {}", e),
                });
                writeln!(output, "{}", serde_json::to_string(&error_response)?)?;
                output.flush()?;
                continue;
            }
        };

        let is_shutdown = matches!(request, Request::Shutdown { .. });
        let response = server.handle_request(request);

        writeln!(output, "{}", serde_json::to_string(&response)?)?;
        output.flush()?;

        if is_shutdown {
            tracing::debug!("shutdown requested");
            break;
        }
    }
    Ok(())
}
