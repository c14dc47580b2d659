use std::cell::RefCell;
use std::rc::Rc;

use crate::Status;

/// The external feedback/command channel the execution loop talks to.
///
/// One implementation covers the three collaborator roles: the feedback
/// poll (the loop's only blocking point), the command sink, and the
/// read-only state accessor used for visualization.
pub trait WorldInterface {
    type State;

    /// Block until feedback arrives; `false` means the producer is gone.
    fn poll(&mut self) -> bool;

    /// Forward the root's output after a tick.
    fn emit(&mut self, status: Status);

    /// Current external state, read-only.
    fn state(&self) -> &Self::State;
}

/// Observational sink for world state, one `push` per tick.
///
/// Never feeds back into control flow.
pub trait Visualizer<S> {
    fn push(&mut self, state: &S);

    fn finalize(&mut self) {}

    fn persist(&mut self, name: &str) {
        let _ = name;
    }
}

#[derive(Debug, Default)]
pub struct NullVisualizer;

impl<S> Visualizer<S> for NullVisualizer {
    fn push(&mut self, _state: &S) {}
}

impl<S, V: Visualizer<S>> Visualizer<S> for Rc<RefCell<V>> {
    fn push(&mut self, state: &S) {
        self.borrow_mut().push(state);
    }

    fn finalize(&mut self) {
        self.borrow_mut().finalize();
    }

    fn persist(&mut self, name: &str) {
        self.borrow_mut().persist(name);
    }
}
