use ticktree_core::{Behavior, Decorate, NodeKind, Status, TickContext};
use ticktree_text::{build, tokenize, BuildOptions, ParseError, Registry};

struct Noop;

impl Behavior<()> for Noop {
    fn tick(&mut self, _ctx: &TickContext, _world: &mut ()) -> Status {
        Status::Success
    }
}

struct Invert;

impl Decorate for Invert {
    fn decorate(&mut self, inner: Status) -> Status {
        match inner {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}

fn registry() -> Registry<()> {
    let mut registry = Registry::new();
    for token in ["a", "b", "c", "d"] {
        registry.register_leaf(token, || Box::new(Noop));
    }
    registry.register_decorator("not(", || Box::new(Invert));
    registry
}

fn strict() -> BuildOptions {
    BuildOptions::default()
}

fn lenient() -> BuildOptions {
    BuildOptions { lenient: true }
}

#[test]
fn builds_nested_control_structure() {
    let tokens = tokenize("s( a f( b c ) d )");
    let tree = build(&tokens, &registry(), strict()).unwrap();

    let root = tree.root();
    assert_eq!(root.kind(), NodeKind::Sequence);
    assert_eq!(root.children().len(), 3);
    assert_eq!(root.children()[0].name(), "a");
    let inner = &root.children()[1];
    assert_eq!(inner.kind(), NodeKind::Fallback);
    assert_eq!(inner.children().len(), 2);
    assert_eq!(root.children()[2].name(), "d");
    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.length(), 5);
}

#[test]
fn decorator_token_collects_its_child() {
    let tokens = tokenize("s( not( a ) b )");
    let tree = build(&tokens, &registry(), strict()).unwrap();

    let root = tree.root();
    assert_eq!(root.children().len(), 2);
    let wrapped = &root.children()[0];
    assert_eq!(wrapped.kind(), NodeKind::Decorator);
    assert_eq!(wrapped.children().len(), 1);
    assert_eq!(wrapped.children()[0].name(), "a");
}

#[test]
fn leaf_root_is_allowed() {
    let tokens = tokenize("a");
    let tree = build(&tokens, &registry(), strict()).unwrap();
    assert_eq!(tree.root().kind(), NodeKind::Leaf);
    assert_eq!(tree.length(), 0);
}

#[test]
fn empty_stream_is_rejected() {
    let tokens: Vec<String> = Vec::new();
    let err = build(&tokens, &registry(), strict()).unwrap_err();
    assert_eq!(err, ParseError::Empty);
}

#[test]
fn close_cannot_open_a_tree() {
    let tokens = tokenize(") a");
    let err = build(&tokens, &registry(), strict()).unwrap_err();
    assert_eq!(err, ParseError::UnexpectedClose { pos: 0 });
}

#[test]
fn unknown_token_is_a_hard_error() {
    let tokens = tokenize("s( a zzz )");
    let err = build(&tokens, &registry(), strict()).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownNode {
            token: "zzz".to_string(),
            pos: 2,
        }
    );
}

#[test]
fn unknown_token_is_a_hard_error_even_when_lenient() {
    let tokens = tokenize("s( a zzz )");
    assert!(build(&tokens, &registry(), lenient()).is_err());
}

#[test]
fn strict_rejects_missing_close() {
    // The fallback's close is missing; the outer sequence ends up
    // consuming the only close and the stream runs dry.
    let tokens = tokenize("s( a f( b c d )");
    let err = build(&tokens, &registry(), strict()).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnclosedScope {
            scope: "s(".to_string(),
        }
    );
}

#[test]
fn strict_rejects_trailing_tokens() {
    let tokens = tokenize("s( a ) )");
    let err = build(&tokens, &registry(), strict()).unwrap_err();
    assert_eq!(err, ParseError::TrailingTokens { pos: 3 });
}

#[test]
fn lenient_missing_close_swallows_the_next_sibling() {
    // With the fallback's close missing, `d` is absorbed into the
    // fallback and the outer sequence loses its last intended child.
    let tokens = tokenize("s( a f( b c d )");
    let tree = build(&tokens, &registry(), lenient()).unwrap();

    let root = tree.root();
    assert_eq!(root.children().len(), 2);
    let inner = &root.children()[1];
    assert_eq!(inner.kind(), NodeKind::Fallback);
    assert_eq!(inner.children().len(), 3);
    assert_eq!(inner.children()[2].name(), "d");
}

#[test]
fn lenient_returns_partial_tree_on_exhaustion() {
    let tokens = tokenize("s( a f( b");
    let tree = build(&tokens, &registry(), lenient()).unwrap();

    let root = tree.root();
    assert_eq!(root.children().len(), 2);
    assert_eq!(root.children()[1].children().len(), 1);
}

#[test]
fn lenient_consumes_surplus_closes() {
    let tokens = tokenize("s( a ) ) )");
    let tree = build(&tokens, &registry(), lenient()).unwrap();
    assert_eq!(tree.root().children().len(), 1);
}
