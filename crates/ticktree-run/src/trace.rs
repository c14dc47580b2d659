use std::cell::RefCell;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use ticktree_core::Status;

/// One entry of the per-tick event stream: tick index, root display name,
/// and the status that tick produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickEvent {
    pub tick: u64,
    pub root: String,
    pub status: Status,
}

pub trait TraceSink {
    fn emit(&mut self, event: TickEvent);
}

#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TickEvent) {}
}

#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TickEvent>,
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TickEvent) {
        self.events.push(event);
    }
}

impl<S: TraceSink> TraceSink for Rc<RefCell<S>> {
    fn emit(&mut self, event: TickEvent) {
        self.borrow_mut().emit(event);
    }
}
