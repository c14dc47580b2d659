use ticktree_core::{Node, NodeKind};

use crate::token::{is_branch_open, CLOSE, FALLBACK, INDENT, SEQUENCE};

/// Human-readable nested-text form, one node per line, with the usual
/// display glyphs. This is the display vocabulary the tokenizing pass
/// strips back out.
pub fn render<W>(root: &Node<W>) -> String {
    let mut out = String::new();
    render_node(root, 0, &mut out);
    out
}

fn render_node<W>(node: &Node<W>, level: usize, out: &mut String) {
    for _ in 0..level * INDENT {
        out.push(' ');
    }
    let (glyph, label) = match node.kind() {
        NodeKind::Sequence => ("[-] ", SEQUENCE),
        NodeKind::Fallback => ("[o] ", FALLBACK),
        NodeKind::Decorator => ("[o] ", node.name()),
        NodeKind::Leaf => ("--> ", node.name()),
    };
    out.push_str(glyph);
    out.push_str(label);
    out.push('\n');
    for child in node.children() {
        render_node(child, level + 1, out);
    }
}

/// The rendered form with the cosmetic glyphs stripped, leaving only
/// structural content and indentation. The final blank line produced by
/// rendering is dropped.
pub fn render_plain<W>(root: &Node<W>) -> Vec<String> {
    let text = render(root)
        .replace("[-] ", "")
        .replace("[o] ", "")
        .replace("--> ", "");
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    lines.pop();
    lines
}

/// Convert indentation into explicit close tokens.
///
/// Scans last to first, tracking the previously visited (later) line's
/// leading-space count. Each line is stripped of its indentation; where
/// indentation decreased going forward, one close token per closed
/// nesting level is inserted right after the current line.
pub fn bracketize(lines: Vec<String>) -> Vec<String> {
    let mut out = lines;
    let mut prev_leading: Option<usize> = None;
    for i in (0..out.len()).rev() {
        let stripped = out[i].trim_start_matches(' ').to_string();
        let leading = out[i].len() - stripped.len();
        out[i] = stripped;
        if let Some(prev) = prev_leading {
            if leading > prev {
                // The renderer indents in whole INDENT steps.
                debug_assert_eq!((leading - prev) % INDENT, 0);
                for _ in 0..(leading - prev) / INDENT {
                    out.insert(i + 1, CLOSE.to_string());
                }
            }
        }
        prev_leading = Some(leading);
    }
    out
}

/// Normalize trailing scope closure: append the closes still owed at the
/// end of the stream and drop closes with no open scope left to end.
pub fn normalize_close(tokens: Vec<String>) -> Vec<String> {
    let mut open = 0usize;
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        if is_branch_open(&token) {
            open += 1;
        } else if token == CLOSE {
            if open == 0 {
                continue;
            }
            open -= 1;
        }
        out.push(token);
    }
    for _ in 0..open {
        out.push(CLOSE.to_string());
    }
    out
}

/// Re-express a tree as the flat token sequence the builder consumes.
pub fn serialize<W>(root: &Node<W>) -> Vec<String> {
    normalize_close(bracketize(render_plain(root)))
}
