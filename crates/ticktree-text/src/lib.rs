//! Bidirectional conversion between flat token strings and behavior trees.
//!
//! The forward direction ([`build`]) is a recursive descent over a token
//! cursor, resolving each token through a [`NodeFactory`]. The reverse
//! direction ([`serialize`]) renders the tree as indented text and then
//! compresses indentation deltas back into explicit close tokens.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod build;
pub mod error;
pub mod registry;
pub mod render;
pub mod token;

pub use build::{build, BuildOptions};
pub use error::ParseError;
pub use registry::{NodeFactory, Registry};
pub use render::{bracketize, normalize_close, render, render_plain, serialize};
pub use token::{is_branch_open, tokenize, CLOSE, FALLBACK, INDENT, SEQUENCE};
