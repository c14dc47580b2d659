use ticktree_core::{Behavior, Decorate, Node, Status, TickContext};
use ticktree_text::{
    build, bracketize, normalize_close, render, render_plain, serialize, tokenize, BuildOptions,
    Registry,
};

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

fn leaf(name: &str) -> Node<()> {
    Node::leaf(name, Box::new(Noop))
}

/// Kind and children-count structure match; node identity need not.
fn assert_same_shape(left: &Node<()>, right: &Node<()>) {
    assert_eq!(left.kind(), right.kind());
    assert_eq!(left.children().len(), right.children().len());
    for (l, r) in left.children().iter().zip(right.children()) {
        assert_same_shape(l, r);
    }
}

#[test]
fn render_shows_glyphed_nested_text() {
    let mut root = Node::sequence("s(");
    root.add_child(leaf("a"));
    let mut inner = Node::fallback("f(");
    inner.add_child(leaf("b"));
    root.add_child(inner);

    let expected = "\
[-] s(
    --> a
    [o] f(
        --> b
";
    assert_eq!(render(&root), expected);
}

#[test]
fn render_plain_keeps_only_structure_and_indentation() {
    let mut root = Node::sequence("s(");
    root.add_child(leaf("a"));
    let mut inner = Node::fallback("f(");
    inner.add_child(leaf("b"));
    root.add_child(inner);

    assert_eq!(
        render_plain(&root),
        vec!["s(", "    a", "    f(", "        b"]
    );
}

#[test]
fn serialize_emits_balanced_tokens() {
    let mut root = Node::sequence("s(");
    root.add_child(leaf("a"));
    let mut inner = Node::fallback("f(");
    inner.add_child(leaf("b"));
    inner.add_child(leaf("c"));
    root.add_child(inner);
    root.add_child(leaf("d"));

    assert_eq!(
        serialize(&root),
        vec!["s(", "a", "f(", "b", "c", ")", "d", ")"]
    );
}

#[test]
fn serialize_handles_a_single_leaf() {
    assert_eq!(serialize(&leaf("a")), vec!["a"]);
}

#[test]
fn bracketize_inserts_one_close_per_dedent_level() {
    let lines = vec![
        "s(".to_string(),
        "    f(".to_string(),
        "        s(".to_string(),
        "            a".to_string(),
        "    b".to_string(),
    ];
    assert_eq!(
        bracketize(lines),
        vec!["s(", "f(", "s(", "a", ")", ")", "b"]
    );
}

#[test]
fn normalize_close_appends_missing_trailing_closes() {
    let tokens = tokenize("s( a f( b");
    assert_eq!(
        normalize_close(tokens),
        vec!["s(", "a", "f(", "b", ")", ")"]
    );
}

#[test]
fn normalize_close_drops_surplus_closes() {
    let tokens = tokenize("s( a ) )");
    assert_eq!(normalize_close(tokens), vec!["s(", "a", ")"]);
}

#[test]
fn round_trip_preserves_shape() {
    let tokens = tokenize("s( a not( b ) f( c d ) )");
    let tree = build(&tokens, &registry(), BuildOptions::default()).unwrap();

    let reparsed = build(
        &serialize(tree.root()),
        &registry(),
        BuildOptions::default(),
    )
    .unwrap();

    assert_same_shape(tree.root(), reparsed.root());
    assert_eq!(reparsed.depth(), tree.depth());
    assert_eq!(reparsed.length(), tree.length());
}

#[test]
fn externally_built_tree_round_trips() {
    // The tree never saw the builder; serialization is how it first
    // becomes tokens.
    let mut root = Node::fallback("f(");
    let mut seq = Node::sequence("s(");
    seq.add_child(leaf("a"));
    seq.add_child(leaf("b"));
    root.add_child(seq);
    root.add_child(leaf("c"));

    let tokens = serialize(&root);
    assert_eq!(tokens, vec!["f(", "s(", "a", "b", ")", "c", ")"]);

    let tree = build(&tokens, &registry(), BuildOptions::default()).unwrap();
    assert_same_shape(&root, tree.root());
}
