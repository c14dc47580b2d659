/// Ends the current child-collecting scope.
pub const CLOSE: &str = ")";

/// Branch-open token for a Sequence node.
pub const SEQUENCE: &str = "s(";

/// Branch-open token for a Fallback node.
pub const FALLBACK: &str = "f(";

/// Spaces per nesting level in the rendered form.
pub const INDENT: usize = 4;

/// Branch-open tokens carry a trailing `(`; this is what lets the
/// close-normalization pass recognize registered decorator tokens it has
/// never seen.
pub fn is_branch_open(token: &str) -> bool {
    token != CLOSE && token.ends_with('(')
}

/// Split a hand-authored tree string into tokens, e.g. `"s( a f( b ) )"`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
