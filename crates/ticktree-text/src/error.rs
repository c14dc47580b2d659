use thiserror::Error;

/// Errors raised while building a tree from tokens.
///
/// All of these are hard errors under the default strict mode; lenient
/// mode (see [`crate::BuildOptions`]) downgrades the scope-shape cases to
/// best-effort recovery but never the unknown-token case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty token stream")]
    Empty,

    #[error("unknown node token `{token}` at position {pos}")]
    UnknownNode { token: String, pos: usize },

    #[error("unexpected `)` at position {pos}")]
    UnexpectedClose { pos: usize },

    #[error("scope opened by `{scope}` was never closed")]
    UnclosedScope { scope: String },

    #[error("trailing tokens after the root closed, starting at position {pos}")]
    TrailingTokens { pos: usize },
}
