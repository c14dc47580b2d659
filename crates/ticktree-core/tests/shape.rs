use ticktree_core::{Behavior, Node, Status, TickContext, Tree};

struct Noop;

impl Behavior<()> for Noop {
    fn tick(&mut self, _ctx: &TickContext, _world: &mut ()) -> Status {
        Status::Success
    }
}

fn leaf(name: &str) -> Node<()> {
    Node::leaf(name, Box::new(Noop))
}

#[test]
fn depth_and_length_of_nested_tree() {
    let mut root = Node::sequence("s(");
    root.add_child(leaf("a"));
    let mut inner = Node::fallback("f(");
    inner.add_child(leaf("b"));
    inner.add_child(leaf("c"));
    root.add_child(inner);

    let tree = Tree::new(root);
    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.length(), 4);
}

#[test]
fn single_leaf_tree_has_no_edges() {
    let tree = Tree::new(leaf("a"));
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.length(), 0);
}

#[test]
fn depth_follows_the_deepest_branch() {
    let mut root = Node::fallback("f(");
    root.add_child(leaf("a"));
    let mut s = Node::sequence("s(");
    let mut inner = Node::sequence("s(");
    inner.add_child(leaf("b"));
    s.add_child(inner);
    root.add_child(s);

    let tree = Tree::new(root);
    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.length(), 4);
}
