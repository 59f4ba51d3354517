//! End-to-end tests for the JSON-lines request loop.

use std::io::Cursor;

use gls::config::ServerConfig;
use gls::server::{Server, run};
use gls_ast::{ClassDecl, MethodDecl, NodeArena, NodeIndex, NodeKind, Symbol, SymbolKind};
use gls_common::position::{Position, Range};
use serde_json::{Value, json};

const URI: &str = "file:///src/Kennel.groovy";

fn sym(name: &str, kind: SymbolKind, type_name: &str) -> Symbol {
    Symbol::new(name, kind, Range::on_line(0, 0, name.len() as u32)).with_type(type_name)
}

/// ```groovy
/// class Dog {                 // lines 0-10
///   String name; int age; String bark()
///   void walk(Dog buddy) {    // lines 2-8
///     buddy.na                // line 3
///     b                       // line 4
///   }
/// }
/// ```
fn kennel_arena() -> NodeArena {
    let mut arena = NodeArena::new();
    let root = arena.add_node(
        NodeKind::Other,
        Range::new(Position::new(0, 0), Position::new(20, 0)),
    );
    let dog = ClassDecl::new("Dog")
        .with_property(sym("name", SymbolKind::Property, "String"))
        .with_field(sym("age", SymbolKind::Field, "int"))
        .with_method(sym("bark", SymbolKind::Method, "String"));
    let dog = arena.add_child(
        root,
        NodeKind::Class(dog),
        Range::new(Position::new(0, 0), Position::new(10, 1)),
    );
    let walk = MethodDecl::new("walk").with_variable(sym("buddy", SymbolKind::Variable, "Dog"));
    let walk = arena.add_child(
        dog,
        NodeKind::Method(walk),
        Range::new(Position::new(2, 2), Position::new(8, 3)),
    );

    let access = arena.add_child(
        walk,
        NodeKind::MemberAccess {
            object: NodeIndex::NONE,
            property: NodeIndex::NONE,
        },
        Range::on_line(3, 4, 12),
    );
    let object = arena.add_child(
        access,
        NodeKind::Identifier {
            name: "buddy".to_string(),
        },
        Range::on_line(3, 4, 9),
    );
    let property = arena.add_child(
        access,
        NodeKind::Name {
            text: "na".to_string(),
        },
        Range::on_line(3, 10, 12),
    );
    arena.get_mut(access).unwrap().kind = NodeKind::MemberAccess { object, property };

    arena.add_child(
        walk,
        NodeKind::Identifier {
            name: "b".to_string(),
        },
        Range::on_line(4, 4, 5),
    );
    arena
}

fn open_request(id: u64, uri: &str) -> String {
    json!({
        "type": "open",
        "id": id,
        "uri": uri,
        "nodes": kennel_arena().to_records(),
    })
    .to_string()
}

fn completion_request(id: u64, line: u32, character: u32) -> String {
    json!({
        "type": "completion",
        "id": id,
        "uri": URI,
        "position": { "line": line, "character": character },
    })
    .to_string()
}

/// Helper: run the loop over `requests` and parse every response line.
fn serve(server: &mut Server, requests: &[String]) -> Vec<Value> {
    let input = requests.join("\n");
    let mut output = Vec::new();
    run(server, Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn labels(response: &Value) -> Vec<&str> {
    response["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["label"].as_str().unwrap())
        .collect()
}

#[test]
fn test_member_completion_over_the_wire() {
    let mut server = Server::new(ServerConfig::default());
    let responses = serve(
        &mut server,
        &[open_request(1, URI), completion_request(2, 3, 12)],
    );

    assert_eq!(responses[0], json!({"id": 1, "ok": true}));
    assert_eq!(
        responses[1],
        json!({
            "id": 2,
            "isMemberCompletion": true,
            "entries": [{"label": "name", "kind": "property"}],
        })
    );
}

#[test]
fn test_scope_chain_completion_over_the_wire() {
    let mut server = Server::new(ServerConfig::default());
    let responses = serve(
        &mut server,
        &[open_request(1, URI), completion_request(2, 4, 5)],
    );

    assert_eq!(responses[1]["isMemberCompletion"], json!(false));
    assert_eq!(labels(&responses[1]), vec!["buddy", "bark"]);
}

#[test]
fn test_completion_accepts_trigger_context() {
    let mut server = Server::new(ServerConfig::default());
    let request = json!({
        "type": "completion",
        "id": 2,
        "uri": URI,
        "position": { "line": 3, "character": 12 },
        "context": { "triggerKind": "triggerCharacter", "triggerCharacter": "." },
    })
    .to_string();
    let responses = serve(&mut server, &[open_request(1, URI), request]);

    assert_eq!(labels(&responses[1]), vec!["name"]);
}

#[test]
fn test_unknown_document_answers_empty() {
    let mut server = Server::new(ServerConfig::default());
    let responses = serve(&mut server, &[completion_request(7, 3, 12)]);

    assert_eq!(
        responses[0],
        json!({"id": 7, "isMemberCompletion": false, "entries": []})
    );
}

#[test]
fn test_max_items_from_config() {
    let config = ServerConfig::from_json(r#"{"completion": {"maxItems": 1}}"#).unwrap();
    let mut server = Server::new(config);
    let responses = serve(
        &mut server,
        &[open_request(1, URI), completion_request(2, 4, 5)],
    );

    assert_eq!(labels(&responses[1]), vec!["buddy"]);
}

#[test]
fn test_status_counts_documents_and_completions() {
    let mut server = Server::new(ServerConfig::default());
    let responses = serve(
        &mut server,
        &[
            open_request(1, URI),
            completion_request(2, 3, 12),
            completion_request(3, 4, 5),
            json!({"type": "status", "id": 4}).to_string(),
        ],
    );

    assert_eq!(
        responses[3],
        json!({"id": 4, "documents": 1, "classes": 1, "completionsServed": 2})
    );
}

#[test]
fn test_close_forgets_document() {
    let mut server = Server::new(ServerConfig::default());
    let close = |id: u64| json!({"type": "close", "id": id, "uri": URI}).to_string();
    let responses = serve(
        &mut server,
        &[
            open_request(1, URI),
            close(2),
            completion_request(3, 3, 12),
            close(4),
        ],
    );

    assert_eq!(responses[1], json!({"id": 2, "ok": true}));
    assert_eq!(responses[2]["entries"], json!([]));
    assert_eq!(responses[3], json!({"id": 4, "ok": false}));
    assert_eq!(server.workspace().document_count(), 0);
}

#[test]
fn test_invalid_snapshot_is_rejected() {
    let mut server = Server::new(ServerConfig::default());
    let request = json!({
        "type": "open",
        "id": 5,
        "uri": URI,
        "nodes": [{
            "node": {"type": "other"},
            "range": {
                "start": {"line": 0, "character": 0},
                "end": {"line": 1, "character": 0},
            },
            "parent": 3,
        }],
    })
    .to_string();
    let responses = serve(&mut server, &[request]);

    assert_eq!(responses[0]["id"], json!(5));
    let error = responses[0]["error"].as_str().unwrap();
    assert!(error.contains("parent 3"), "unexpected error: {error}");
    assert_eq!(server.workspace().document_count(), 0);
}

#[test]
fn test_malformed_line_reports_error_and_continues() {
    let mut server = Server::new(ServerConfig::default());
    let responses = serve(
        &mut server,
        &[
            "{not json".to_string(),
            String::new(),
            json!({"type": "status", "id": 1}).to_string(),
        ],
    );

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["id"], json!(0));
    assert!(
        responses[0]["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid request")
    );
    assert_eq!(responses[1]["documents"], json!(0));
}

#[test]
fn test_shutdown_stops_the_loop() {
    let mut server = Server::new(ServerConfig::default());
    let responses = serve(
        &mut server,
        &[
            json!({"type": "shutdown", "id": 1}).to_string(),
            json!({"type": "status", "id": 2}).to_string(),
        ],
    );

    assert_eq!(responses, vec![json!({"id": 1, "ok": true})]);
}
