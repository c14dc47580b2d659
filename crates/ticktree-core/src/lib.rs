//! Shared behavior tree data model.
//!
//! This crate holds the node/tree types and the narrow collaborator seams
//! (leaf behaviors, decorators, the world interface, visualization sinks).
//! What a leaf actually does is not defined here; leaves reach the core
//! only through the [`Behavior`] trait object.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod node;
pub mod status;
pub mod tick;
pub mod tree;
pub mod world;

pub use node::{Behavior, Decorate, Node, NodeKind, NodeSpec};
pub use status::Status;
pub use tick::TickContext;
pub use tree::Tree;
pub use world::{NullVisualizer, Visualizer, WorldInterface};
