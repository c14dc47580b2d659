use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use ticktree_core::{NullVisualizer, Status, TickContext, Tree, Visualizer, WorldInterface};

use crate::config::RunConfig;
use crate::trace::{NullTraceSink, TickEvent, TraceSink};

/// What a finished run looked like.
///
/// `timed_out` and `failed` are independent; both false means the loop
/// exited on a success streak or a disconnect. `status_ok` is the loop's
/// abort flag: it clears on feedback disconnect and on time-budget
/// expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunReport {
    pub ticks: u64,
    pub status_ok: bool,
    pub timed_out: bool,
    pub failed: bool,
    pub elapsed: Duration,
}

/// Owns a tree for the lifetime of a run and drives it tick by tick.
///
/// Single-threaded and synchronous: one full tick runs to completion
/// between suspension points, and the feedback poll is the only place the
/// loop can stall.
pub struct TreeRunner<W: WorldInterface> {
    tree: Tree<W>,
    config: RunConfig,
    visualizer: Box<dyn Visualizer<W::State>>,
    trace: Box<dyn TraceSink>,
    steps: u64,
}

impl<W: WorldInterface> TreeRunner<W> {
    pub fn new(tree: Tree<W>, config: RunConfig) -> Self {
        Self {
            tree,
            config,
            visualizer: Box::new(NullVisualizer),
            trace: Box::new(NullTraceSink),
            steps: 0,
        }
    }

    pub fn with_visualizer(mut self, visualizer: Box<dyn Visualizer<W::State>>) -> Self {
        self.visualizer = visualizer;
        self
    }

    pub fn with_trace(mut self, trace: Box<dyn TraceSink>) -> Self {
        self.trace = trace;
        self
    }

    pub fn tree(&self) -> &Tree<W> {
        &self.tree
    }

    pub fn into_tree(self) -> Tree<W> {
        self.tree
    }

    /// Run until a termination policy fires.
    pub fn run(&mut self, world: &mut W) -> RunReport {
        let failure_target = self.config.failure_target();
        let success_target = self.config.success_target();
        let mut ticks: u64 = 0;
        let mut successes: u64 = 0;
        let mut failures: u64 = 0;
        let mut status_ok = true;
        let start = Instant::now();

        while (self.tree.root().status() != Status::Failure || failures < failure_target)
            && (self.tree.root().status() != Status::Success || successes < success_target)
            && ticks < self.config.max_ticks
            && status_ok
        {
            // Wait for the producer; a dropped connection ends the run.
            status_ok = world.poll();
            if !status_ok {
                continue;
            }

            let ctx = TickContext { tick: ticks };
            let status = self.tree.tick(&ctx, world);
            world.emit(status);
            if self.config.show_world {
                self.visualizer.push(world.state());
            }

            tracing::debug!(tick = ticks, root = self.tree.root().name(), ?status, "tick");
            self.trace.emit(TickEvent {
                tick: ticks,
                root: self.tree.root().name().to_string(),
                status,
            });

            ticks += 1;
            match status {
                Status::Success => {
                    successes += 1;
                    failures = 0;
                }
                Status::Failure => {
                    failures += 1;
                    successes = 0;
                }
                // Running touches neither streak.
                Status::Running => {}
            }

            if start.elapsed() > self.config.max_time {
                tracing::debug!("time budget expired");
                status_ok = false;
            }
        }

        let timed_out = ticks >= self.config.max_ticks;
        let failed = failures >= failure_target;
        if self.config.show_world {
            self.visualizer.finalize();
            if let Some(name) = &self.config.persist_name {
                self.visualizer.persist(name);
            }
        }
        let elapsed = start.elapsed();
        tracing::info!(ticks, ?elapsed, timed_out, failed, "run finished");

        RunReport {
            ticks,
            status_ok,
            timed_out,
            failed,
            elapsed,
        }
    }

    /// One poll/tick/emit iteration without the surrounding loop, for
    /// externally paced execution. Returns feedback availability.
    pub fn step(&mut self, world: &mut W) -> bool {
        let status_ok = world.poll();
        if status_ok {
            let ctx = TickContext { tick: self.steps };
            let status = self.tree.tick(&ctx, world);
            world.emit(status);
            if self.config.show_world {
                self.visualizer.push(world.state());
            }
            self.trace.emit(TickEvent {
                tick: self.steps,
                root: self.tree.root().name().to_string(),
                status,
            });
            self.steps += 1;
        }
        status_ok
    }
}
