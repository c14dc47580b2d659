use ticktree_core::{Node, NodeSpec, Tree};

use crate::error::ParseError;
use crate::registry::NodeFactory;
use crate::token::CLOSE;

/// Build options. Strict validation is the default; `lenient` restores the
/// tolerant handling of scope-mismatched streams (partial trees on early
/// exhaustion, surplus closes consumed as no-ops).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    pub lenient: bool,
}

/// Index cursor into an immutable token slice, shared by the recursive
/// descent. Never reallocates.
struct Cursor<'a, T> {
    tokens: &'a [T],
    pos: usize,
}

impl<'a, T: AsRef<str>> Cursor<'a, T> {
    fn new(tokens: &'a [T]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn pos(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).map(AsRef::as_ref)
    }

    fn bump(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }
}

/// Construct a tree from a token stream. The first token becomes the root.
pub fn build<W, T: AsRef<str>>(
    tokens: &[T],
    factory: &dyn NodeFactory<W>,
    options: BuildOptions,
) -> Result<Tree<W>, ParseError> {
    let mut cursor = Cursor::new(tokens);

    let pos = cursor.pos();
    let token = cursor.bump().ok_or(ParseError::Empty)?;
    if token == CLOSE {
        return Err(ParseError::UnexpectedClose { pos });
    }

    let spec = resolve(factory, token, pos)?;
    let has_children = spec.has_children();
    let mut root = Node::new(token, spec);
    if has_children {
        collect_children(&mut cursor, &mut root, factory, options)?;
    }

    if options.lenient {
        // Surplus closes are no-ops once every scope is closed; anything
        // else trailing is simply never consumed.
        while cursor.peek() == Some(CLOSE) {
            cursor.bump();
        }
        if let Some(token) = cursor.peek() {
            tracing::debug!(token, pos = cursor.pos(), "ignoring trailing tokens");
        }
    } else if cursor.peek().is_some() {
        return Err(ParseError::TrailingTokens { pos: cursor.pos() });
    }

    Ok(Tree::new(root))
}

/// Consume tokens as children of `parent` until the scope's close token.
///
/// A branch-open token recurses first and attaches the fully populated
/// subtree; a leaf attaches directly and the scan continues with its
/// siblings. Cursor exhaustion ends the scope only in lenient mode.
fn collect_children<W, T: AsRef<str>>(
    cursor: &mut Cursor<'_, T>,
    parent: &mut Node<W>,
    factory: &dyn NodeFactory<W>,
    options: BuildOptions,
) -> Result<(), ParseError> {
    loop {
        let pos = cursor.pos();
        let Some(token) = cursor.bump() else {
            if options.lenient {
                tracing::debug!(
                    scope = parent.name(),
                    "token stream exhausted with open scope, keeping partial tree"
                );
                return Ok(());
            }
            return Err(ParseError::UnclosedScope {
                scope: parent.name().to_string(),
            });
        };

        if token == CLOSE {
            return Ok(());
        }

        let spec = resolve(factory, token, pos)?;
        let has_children = spec.has_children();
        let mut node = Node::new(token, spec);
        if has_children {
            collect_children(cursor, &mut node, factory, options)?;
        }
        parent.add_child(node);
    }
}

fn resolve<W>(
    factory: &dyn NodeFactory<W>,
    token: &str,
    pos: usize,
) -> Result<NodeSpec<W>, ParseError> {
    let spec = factory.resolve(token).ok_or_else(|| ParseError::UnknownNode {
        token: token.to_string(),
        pos,
    })?;
    tracing::trace!(token, pos, kind = ?spec.kind(), "resolved token");
    Ok(spec)
}
