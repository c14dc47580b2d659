//! ticktree CLI - parse and run behavior tree token strings.
//!
//! - `ticktree run "s( ok busy )"` - execute a tree against the demo world
//! - `ticktree show "s( ok busy )"` - print the rendered tree
//! - `ticktree tokens "s( ok busy"` - print the normalized token form
//!
//! The demo leaf set (`ok`, `fail`, `busy`, `work`, `not(`) exists only to
//! make the binary self-contained; real deployments register their own.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use ticktree_core::{Behavior, Decorate, Status, TickContext, Tree, WorldInterface};
use ticktree_run::{RunConfig, RunReport, TreeRunner};
use ticktree_text::{build, render, serialize, tokenize, BuildOptions, Registry};

#[derive(Parser)]
#[command(name = "ticktree")]
#[command(about = "Behavior tree string interpreter", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Tolerate scope-mismatched token streams
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a tree until a termination policy fires
    Run {
        /// Tree in token form, e.g. "s( ok busy )"
        tree: String,

        #[arg(long, default_value_t = 200)]
        max_ticks: u64,

        /// Wall-clock budget in seconds
        #[arg(long)]
        max_time: Option<f64>,

        /// Consecutive failures that stop the run
        #[arg(long)]
        failure_streak: Option<u64>,

        /// Consecutive successes that stop the run
        #[arg(long)]
        success_streak: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the rendered tree
    Show {
        tree: String,
    },

    /// Print the normalized flat token form
    Tokens {
        tree: String,
    },
}

/// Loopback world: always connected, commands are counted and logged.
#[derive(Debug, Default)]
struct DemoWorld {
    commands: u64,
}

impl WorldInterface for DemoWorld {
    type State = u64;

    fn poll(&mut self) -> bool {
        true
    }

    fn emit(&mut self, status: Status) {
        self.commands += 1;
        tracing::debug!(?status, "command");
    }

    fn state(&self) -> &u64 {
        &self.commands
    }
}

struct Always(Status);

impl Behavior<DemoWorld> for Always {
    fn tick(&mut self, _ctx: &TickContext, _world: &mut DemoWorld) -> Status {
        self.0
    }
}

/// Runs for a few ticks, then succeeds.
struct Work {
    left: u32,
}

impl Behavior<DemoWorld> for Work {
    fn tick(&mut self, _ctx: &TickContext, _world: &mut DemoWorld) -> Status {
        if self.left == 0 {
            Status::Success
        } else {
            self.left -= 1;
            Status::Running
        }
    }
}

struct Invert;

impl Decorate for Invert {
    fn decorate(&mut self, inner: Status) -> Status {
        match inner {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}

fn demo_registry() -> Registry<DemoWorld> {
    let mut registry = Registry::new();
    registry.register_leaf("ok", || Box::new(Always(Status::Success)));
    registry.register_leaf("fail", || Box::new(Always(Status::Failure)));
    registry.register_leaf("busy", || Box::new(Always(Status::Running)));
    registry.register_leaf("work", || Box::new(Work { left: 3 }));
    registry.register_decorator("not(", || Box::new(Invert));
    registry
}

fn parse_tree(text: &str, lenient: bool) -> Result<Tree<DemoWorld>> {
    let tokens = tokenize(text);
    build(&tokens, &demo_registry(), BuildOptions { lenient })
        .with_context(|| format!("failed to parse `{text}`"))
}

fn print_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!(
            "ticks: {}  status_ok: {}  timed_out: {}  failed: {}  elapsed: {:.3}s",
            report.ticks,
            report.status_ok,
            report.timed_out,
            report.failed,
            report.elapsed.as_secs_f64(),
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Run {
            tree,
            max_ticks,
            max_time,
            failure_streak,
            success_streak,
            json,
        } => {
            let tree = parse_tree(&tree, cli.lenient)?;
            tracing::info!(depth = tree.depth(), length = tree.length(), "tree built");

            let mut config = RunConfig::default().with_max_ticks(max_ticks);
            if let Some(secs) = max_time {
                config = config.with_max_time(Duration::from_secs_f64(secs));
            }
            if let Some(target) = failure_streak {
                config = config.with_failure_streak_target(target);
            }
            if let Some(target) = success_streak {
                config = config.with_success_streak_target(target);
            }

            let mut world = DemoWorld::default();
            let mut runner = TreeRunner::new(tree, config);
            let report = runner.run(&mut world);
            print_report(&report, json)?;
        }

        Commands::Show { tree } => {
            let tree = parse_tree(&tree, cli.lenient)?;
            print!("{}", render(tree.root()));
        }

        Commands::Tokens { tree } => {
            let tree = parse_tree(&tree, cli.lenient)?;
            println!("{}", serialize(tree.root()).join(" "));
        }
    }

    Ok(())
}
