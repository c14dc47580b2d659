use std::time::Duration;

/// Termination policy configuration.
///
/// Streak targets left unset resolve to `max_ticks` at loop start, which
/// makes the tick budget the only effective cap by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Hard cap on tick count.
    pub max_ticks: u64,

    /// Wall-clock budget from loop start.
    pub max_time: Duration,

    /// Consecutive failures that force early termination.
    pub failure_streak_target: Option<u64>,

    /// Consecutive successes that force early termination.
    pub success_streak_target: Option<u64>,

    /// Drive the visualization sink each tick.
    pub show_world: bool,

    /// Name handed to `Visualizer::persist` at run end, if any.
    pub persist_name: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_ticks: 200,
            max_time: Duration::from_secs(10_000),
            failure_streak_target: None,
            success_streak_target: None,
            show_world: false,
            persist_name: None,
        }
    }
}

impl RunConfig {
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn with_max_time(mut self, max_time: Duration) -> Self {
        self.max_time = max_time;
        self
    }

    pub fn with_failure_streak_target(mut self, target: u64) -> Self {
        self.failure_streak_target = Some(target);
        self
    }

    pub fn with_success_streak_target(mut self, target: u64) -> Self {
        self.success_streak_target = Some(target);
        self
    }

    pub fn with_show_world(mut self, show_world: bool) -> Self {
        self.show_world = show_world;
        self
    }

    pub fn with_persist_name(mut self, name: impl Into<String>) -> Self {
        self.persist_name = Some(name.into());
        self
    }

    pub(crate) fn failure_target(&self) -> u64 {
        self.failure_streak_target.unwrap_or(self.max_ticks)
    }

    pub(crate) fn success_target(&self) -> u64 {
        self.success_streak_target.unwrap_or(self.max_ticks)
    }
}
