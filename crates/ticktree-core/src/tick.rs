/// Per-tick context passed down the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickContext {
    /// Index of the current tick, starting at 0.
    pub tick: u64,
}
