//! # Stochastic
//!
//! Runs the reference simulations from the command line:
//!
//! ```text
//! aggregate  equal pairs double:      [1,2,2,4,8,8,16] until 50 stable draws
//! merge      equal pairs merge:       50 × 1 for exactly 10 interactions
//! toggle     equal pairs split 1/0:   100 × 1 + 0 until the 70-step window balances
//! ```

use clap::{Parser, Subcommand};
use scenarios::{run_aggregate, run_merge, run_toggle};
use tracing_subscriber::EnvFilter;

pub mod scenarios;

#[derive(Parser)]
#[command(name = "stochastic")]
#[command(about = "Rate-free random-interaction simulation of molecule populations")]
#[command(version)]
struct Cli {
    /// Seed for sampling; drawn at random when omitted
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Give up after this many consecutive attempts without enough molecules
    #[arg(long, global = true)]
    max_stalled: Option<u64>,

    /// Log every interaction (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pairwise-doubling aggregation to a fixed point
    Aggregate,
    /// Counted merges of identical molecules
    Merge,
    /// Birth/death toggling to equilibrium
    Toggle,
    /// Run every scenario
    All,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "trace" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "seeding simulations");

    let outcomes = match cli.command {
        Commands::Aggregate => vec![run_aggregate(seed, cli.max_stalled)],
        Commands::Merge => vec![run_merge(seed, cli.max_stalled)],
        Commands::Toggle => vec![run_toggle(seed, cli.max_stalled)],
        Commands::All => vec![
            run_aggregate(seed, cli.max_stalled),
            run_merge(seed, cli.max_stalled),
            run_toggle(seed, cli.max_stalled),
        ],
    };

    let mut failed = false;
    for outcome in outcomes {
        match outcome {
            Ok(stats) => stats.print(),
            Err(err) => {
                tracing::error!(%err, "scenario failed");
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
    println!("\n✓ All scenarios completed (seed {})", seed);
}
