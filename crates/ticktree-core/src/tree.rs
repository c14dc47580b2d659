use crate::{Node, Status, TickContext};

/// A rooted behavior tree with its derived scalar properties.
///
/// `depth` and `length` are computed once at construction; the tree shape
/// never changes after that.
pub struct Tree<W> {
    root: Node<W>,
    depth: usize,
    length: usize,
}

impl<W> Tree<W> {
    pub fn new(root: Node<W>) -> Self {
        let depth = root.depth();
        // Edge count: pairs with `depth`, which also counts edges.
        let length = root.count() - 1;
        Self {
            root,
            depth,
            length,
        }
    }

    pub fn root(&self) -> &Node<W> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node<W> {
        &mut self.root
    }

    pub fn into_root(self) -> Node<W> {
        self.root
    }

    /// Max root-to-leaf edge count.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Total parent-child edge count.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Tick the root once, to completion.
    pub fn tick(&mut self, ctx: &TickContext, world: &mut W) -> Status {
        self.root.tick(ctx, world)
    }
}

impl<W> std::fmt::Debug for Tree<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("depth", &self.depth)
            .field("length", &self.length)
            .field("root", &self.root)
            .finish()
    }
}
