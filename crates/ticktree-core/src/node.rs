#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Status, TickContext};

/// A leaf node's tick implementation.
///
/// The core does not prescribe what a leaf does; actions and condition
/// checks live behind this seam and act on whatever world type `W` the
/// embedding application provides.
pub trait Behavior<W> {
    fn tick(&mut self, ctx: &TickContext, world: &mut W) -> Status;
}

/// A decorator's status transform, applied to its single child's result.
pub trait Decorate {
    fn decorate(&mut self, inner: Status) -> Status;
}

/// Node kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    Sequence,
    Fallback,
    Decorator,
    Leaf,
}

impl NodeKind {
    /// Whether a node of this kind collects children when parsed.
    pub fn has_children(self) -> bool {
        !matches!(self, NodeKind::Leaf)
    }
}

/// What a token resolves to: one of the closed control kinds, or a
/// decorator/leaf payload supplied by the factory.
pub enum NodeSpec<W> {
    Sequence,
    Fallback,
    Decorator(Box<dyn Decorate>),
    Leaf(Box<dyn Behavior<W>>),
}

impl<W> NodeSpec<W> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeSpec::Sequence => NodeKind::Sequence,
            NodeSpec::Fallback => NodeKind::Fallback,
            NodeSpec::Decorator(_) => NodeKind::Decorator,
            NodeSpec::Leaf(_) => NodeKind::Leaf,
        }
    }

    pub fn has_children(&self) -> bool {
        self.kind().has_children()
    }
}

/// One node of a behavior tree: a kind, a display name, the status of its
/// last tick, and its owned, ordered children.
pub struct Node<W> {
    name: String,
    status: Status,
    children: Vec<Node<W>>,
    spec: NodeSpec<W>,
}

impl<W> Node<W> {
    pub fn new(name: impl Into<String>, spec: NodeSpec<W>) -> Self {
        Self {
            name: name.into(),
            // Fresh nodes report Running until first ticked.
            status: Status::Running,
            children: Vec::new(),
            spec,
        }
    }

    pub fn sequence(name: impl Into<String>) -> Self {
        Self::new(name, NodeSpec::Sequence)
    }

    pub fn fallback(name: impl Into<String>) -> Self {
        Self::new(name, NodeSpec::Fallback)
    }

    pub fn decorator(name: impl Into<String>, decorate: Box<dyn Decorate>) -> Self {
        Self::new(name, NodeSpec::Decorator(decorate))
    }

    pub fn leaf(name: impl Into<String>, behavior: Box<dyn Behavior<W>>) -> Self {
        Self::new(name, NodeSpec::Leaf(behavior))
    }

    pub fn add_child(&mut self, child: Node<W>) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.spec.kind()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn children(&self) -> &[Node<W>] {
        &self.children
    }

    /// Advance this subtree by one tick and record the resulting status.
    ///
    /// Control nodes restart from their first child every tick; a Running
    /// child short-circuits the scan exactly like a terminal status.
    pub fn tick(&mut self, ctx: &TickContext, world: &mut W) -> Status {
        let status = match &mut self.spec {
            NodeSpec::Sequence => {
                let mut status = Status::Success;
                for child in &mut self.children {
                    let s = child.tick(ctx, world);
                    if s != Status::Success {
                        status = s;
                        break;
                    }
                }
                status
            }
            NodeSpec::Fallback => {
                let mut status = Status::Failure;
                for child in &mut self.children {
                    let s = child.tick(ctx, world);
                    if s != Status::Failure {
                        status = s;
                        break;
                    }
                }
                status
            }
            NodeSpec::Decorator(decorate) => match self.children.first_mut() {
                Some(child) => {
                    let s = child.tick(ctx, world);
                    decorate.decorate(s)
                }
                // A childless decorator has nothing to transform.
                None => Status::Failure,
            },
            NodeSpec::Leaf(behavior) => behavior.tick(ctx, world),
        };
        self.status = status;
        status
    }

    /// Max edge count from this node down to a leaf.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Total node count of this subtree, self included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}

impl<W> std::fmt::Debug for Node<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("status", &self.status)
            .field("children", &self.children)
            .finish()
    }
}
