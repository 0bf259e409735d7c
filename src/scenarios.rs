use std::time::{Duration, Instant};
use stoch_sim::prelude::*;
use stoch_sim::Result;

/// Statistics collected from one scenario run
#[derive(Clone, Debug)]
pub struct ScenarioStats {
    pub name: &'static str,
    pub initial_size: usize,
    pub report: SimulationReport,
    pub final_sum: u64,
    pub final_molecules: String,
    pub total_time: Duration,
}

impl ScenarioStats {
    pub fn print(&self) {
        println!("\n╔════════════════════════════════════════════════════════════╗");
        println!("║  {:<58}║", self.name);
        println!("╠════════════════════════════════════════════════════════════╣");
        println!("║  Initial Size:              {:>30} ║", self.initial_size);
        println!("║  Accounted Interactions:    {:>30} ║", self.report.accounted);
        println!("║  Stable Interactions:       {:>30} ║", self.report.stable);
        println!("║  Skipped Attempts:          {:>30} ║", self.report.skipped);
        println!("║  Final Size:                {:>30} ║", self.report.final_size);
        println!("║  Final Sum:                 {:>30} ║", self.final_sum);
        println!("║  Total Time:                {:>29}s ║", format!("{:.3}", self.total_time.as_secs_f64()));
        println!("╚════════════════════════════════════════════════════════════╝");
        println!("  Final population: {}", self.final_molecules);
    }
}

fn config(seed: u64, max_stalled: Option<u64>) -> SimulationConfig {
    SimulationConfig {
        seed: Some(seed),
        max_stalled_attempts: max_stalled,
    }
}

/// Run one scenario and gather its statistics
fn run<M>(
    name: &'static str,
    molecules: Vec<M>,
    config: SimulationConfig,
    behavior: Behavior<M>,
    detector: Detector<M>,
) -> Result<ScenarioStats>
where
    M: Copy + Ord + Into<u64> + std::fmt::Debug + 'static,
{
    let initial_size = molecules.len();
    let start = Instant::now();

    let mut system = StochasticSystem::with_config(molecules, config);
    let report = system.simulate(behavior, detector)?;

    let mut sorted = system.molecules().to_vec();
    sorted.sort();
    let final_molecules = if sorted.len() <= 12 {
        format!("{:?}", sorted)
    } else {
        format!("{} molecules", sorted.len())
    };

    Ok(ScenarioStats {
        name,
        initial_size,
        report,
        final_sum: sorted.iter().map(|&m| -> u64 { m.into() }).sum(),
        final_molecules,
        total_time: start.elapsed(),
    })
}

/// Equal pairs double until 50 consecutive draws find nothing to merge
pub fn run_aggregate(seed: u64, max_stalled: Option<u64>) -> Result<ScenarioStats> {
    let double = Interaction::binary(|a: u32, b: u32| (a == b).then(|| vec![2 * a]));
    run(
        "Pairwise-Doubling Aggregation",
        vec![1, 2, 2, 4, 8, 8, 16],
        config(seed, max_stalled),
        Behavior::fixed(double),
        Detector::when_stable(50),
    )
}

/// Fifty identical molecules merge pairwise ten times
pub fn run_merge(seed: u64, max_stalled: Option<u64>) -> Result<ScenarioStats> {
    let merge = Interaction::binary(|a: u32, b: u32| (a == b).then(|| vec![a]));
    run(
        "Counted Merges",
        vec![1; 50],
        config(seed, max_stalled),
        Behavior::fixed(merge),
        Detector::after(10),
    )
}

/// Equal pairs become a value and its complement until the counts balance
pub fn run_toggle(seed: u64, max_stalled: Option<u64>) -> Result<ScenarioStats> {
    let toggle = Interaction::binary(|a: u8, b: u8| (a == b).then(|| vec![a, 1 - a]));
    let mut molecules = vec![1u8; 100];
    molecules.push(0);
    run(
        "Birth/Death Toggling",
        molecules,
        config(seed, max_stalled),
        Behavior::fixed(toggle),
        Detector::when_stable_within(70, 2),
    )
}
