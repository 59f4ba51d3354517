//! Completion resolution benchmarks.
//!
//! Measures the two walks a request can take: the scope chain from a bare
//! identifier, and member collection over a superclass chain.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gls_ast::{ClassDecl, NodeArena, NodeIndex, NodeKind, Symbol, SymbolKind, Workspace};
use gls_common::position::{Position, Range};
use gls_lsp::Completions;

const URI: &str = "file:///bench/Generated.groovy";

fn sym(name: String, kind: SymbolKind) -> Symbol {
    Symbol::new(name, kind, Range::on_line(0, 0, 1)).with_type("Object")
}

fn span(depth: u32) -> Range {
    Range::new(Position::new(depth, 0), Position::new(10_000 - depth, 0))
}

/// A class body with `depth` nested blocks, each declaring `width` variables,
/// and an identifier `v` in the innermost block.
fn nested_blocks(depth: u32, width: u32) -> (Workspace, Position) {
    let mut arena = NodeArena::new();
    let class = ClassDecl::new("Deep").with_field(sym("value".to_string(), SymbolKind::Field));
    let mut parent = arena.add_node(NodeKind::Class(class), span(0));
    for level in 1..=depth {
        let scope = (0..width)
            .map(|i| sym(format!("v{level}_{i}"), SymbolKind::Variable))
            .collect();
        parent = arena.add_child(parent, NodeKind::Block { scope }, span(level));
    }
    let line = depth + 1;
    arena.add_child(
        parent,
        NodeKind::Identifier {
            name: "v".to_string(),
        },
        Range::on_line(line, 0, 1),
    );

    let mut workspace = Workspace::new();
    workspace.open(URI, arena);
    (workspace, Position::new(line, 1))
}

/// A chain of `levels` classes, each adding `width` members of every kind,
/// with `leaf.` completed against the most derived one.
fn wide_hierarchy(levels: u32, width: u32) -> (Workspace, Position) {
    let mut arena = NodeArena::new();
    let root = arena.add_node(NodeKind::Other, span(0));
    for level in 0..levels {
        let mut class = ClassDecl::new(format!("C{level}"));
        if level > 0 {
            class = class.extends(format!("C{}", level - 1));
        }
        for i in 0..width {
            class = class
                .with_property(sym(format!("p{level}_{i}"), SymbolKind::Property))
                .with_field(sym(format!("f{level}_{i}"), SymbolKind::Field))
                .with_method(sym(format!("m{level}_{i}"), SymbolKind::Method));
        }
        arena.add_child(root, NodeKind::Class(class), Range::on_line(level, 0, 1));
    }

    let line = levels + 1;
    let access = arena.add_child(
        root,
        NodeKind::MemberAccess {
            object: NodeIndex::NONE,
            property: NodeIndex::NONE,
        },
        Range::on_line(line, 0, 5),
    );
    let object = arena.add_child(
        access,
        NodeKind::Identifier {
            name: format!("C{}", levels - 1),
        },
        Range::on_line(line, 0, 4),
    );
    if let Some(node) = arena.get_mut(access) {
        node.kind = NodeKind::MemberAccess {
            object,
            property: NodeIndex::NONE,
        };
    }

    let mut workspace = Workspace::new();
    workspace.open(URI, arena);
    (workspace, Position::new(line, 5))
}

fn bench_scope_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("completion_scope_chain");

    for depth in [4, 32, 256] {
        let (workspace, position) = nested_blocks(depth, 8);
        group.bench_with_input(BenchmarkId::new("depth", depth), &position, |b, position| {
            let completions = Completions::new(&workspace, &workspace);
            b.iter(|| black_box(completions.get_completions(URI, black_box(*position))));
        });
    }

    group.finish();
}

fn bench_members(c: &mut Criterion) {
    let mut group = c.benchmark_group("completion_members");

    for (levels, width) in [(1, 16), (8, 16), (32, 64)] {
        let (workspace, position) = wide_hierarchy(levels, width);
        let id = format!("{levels}x{width}");
        group.bench_with_input(BenchmarkId::new("hierarchy", id), &position, |b, position| {
            let completions = Completions::new(&workspace, &workspace);
            b.iter(|| black_box(completions.get_completions(URI, black_box(*position))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scope_chain, bench_members);
criterion_main!(benches);
