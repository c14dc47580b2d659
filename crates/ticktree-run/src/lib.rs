//! Tick-based execution loop for behavior trees.
//!
//! Repeatedly advances a tree while exchanging state with the world
//! interface, and stops on the configured termination policies: success
//! streak, failure streak, tick budget, time budget, or feedback
//! disconnect.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod runner;
pub mod trace;

pub use config::RunConfig;
pub use runner::{RunReport, TreeRunner};
pub use trace::{NullTraceSink, TickEvent, TraceSink, VecTraceSink};
