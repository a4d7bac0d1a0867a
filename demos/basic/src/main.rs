//! `ev-fleet-sim-demo` — smallest example for the `ev-fleet-sim` framework.
//!
//! Runs 8 agents around a depot → loading dock → drop-off → charger loop,
//! the same shape spec.md's own worked scenarios use, and writes one row per
//! tick to `run.csv` in the current directory.

mod scenario;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ev_output::CsvExtractor;
use ev_sim::SimBuilder;

use scenario::build_scenario;

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Drive a small built-in EV fleet scenario through `ev-sim`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the built-in scenario to run.
    #[arg(default_value = "basic")]
    scenario: String,

    /// Simulation horizon, in minutes.
    #[arg(long, default_value_t = 180.0)]
    stop_time: f64,

    /// Fixed tick length, in minutes.
    #[arg(long, default_value_t = 0.25)]
    delta: f64,

    /// Directory the output CSV is written into.
    #[arg(long, default_value = ".")]
    log_dir: String,

    /// Verbose logging (agent-level detail).
    #[arg(short, long)]
    verbose: bool,

    /// Debug logging (full per-tick trace).
    #[arg(long)]
    debug: bool,

    /// Suppress all logging below warnings.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn filter(&self) -> EnvFilter {
        let level = if self.quiet {
            "warn"
        } else if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_env_filter(cli.filter()).init();

    println!("=== {} — ev-fleet-sim demo ===", cli.scenario);
    println!("stop_time: {} min  |  delta: {} min", cli.stop_time, cli.delta);
    println!();

    // 1. Build the built-in graph and agent fleet.
    let (graph, agents, params) = build_scenario(cli.delta);
    println!("Graph: {} vertices, {} edges", graph.vertex_count(), graph.edge_count());
    println!("Fleet: {} agents", agents.len());

    // 2. Wire CSV output.
    std::fs::create_dir_all(&cli.log_dir)?;
    let path = std::path::Path::new(&cli.log_dir).join("run.csv");
    let extractor = CsvExtractor::new(&path)?;

    // 3. Build the simulator.
    let mut sim = SimBuilder::new().graph(graph).agents(agents).params(params).extractor(Box::new(extractor)).build()?;

    // 4. Run.
    let t0 = Instant::now();
    sim.start(cli.stop_time)?;
    sim.run()?;
    let elapsed = t0.elapsed();

    // 5. Summary.
    println!();
    println!("Simulation complete in {:.3} s ({} ticks)", elapsed.as_secs_f64(), sim.control().iteration);
    println!("  {} : {} rows", path.display(), sim.control().iteration + 1);
    println!();

    // 6. Final per-agent state table.
    println!("{:<10} {:<8} {:<12} {:<10}", "Agent", "SoC", "Vertex", "Phase");
    println!("{}", "-".repeat(42));
    for agent in sim.agents() {
        let state = &agent.state;
        println!(
            "{:<10} {:<8} {:<12} {:<10}",
            format!("{:?}", agent.id()),
            format!("{:.1}%", state.soc * 100.0),
            format!("{:?}", agent.current_decision().vertex),
            format!("{:?}", state.phase),
        );
    }

    Ok(())
}
