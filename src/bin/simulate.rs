//! Game balance simulator CLI.
//!
//! Plays many lives through the real game rules to analyze balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                         # 1000 greedy lives
//!   cargo run --bin simulate -- --runs 100 --policy random
//!   cargo run --bin simulate -- --seed 42            # Reproducible run

use clap::Parser;
use legend_of_xor::simulator::{run_simulation, AttackPolicy, SimConfig};
use std::error::Error;

#[derive(Debug, Parser)]
#[command(name = "simulate", version)]
#[command(about = "Monte Carlo balance simulator for Legend of Xor")]
struct Args {
    /// Number of lives to simulate
    #[arg(short = 'n', long, default_value_t = 1000)]
    runs: u32,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Attack choice: greedy or random
    #[arg(short, long, default_value = "greedy")]
    policy: AttackPolicy,

    /// Stop a life after this many victories
    #[arg(long, default_value_t = 500)]
    max_battles: u32,

    /// Also write the report as JSON
    #[arg(long)]
    json: bool,

    /// Quiet mode (only show summary)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = SimConfig {
        num_runs: args.runs,
        seed: args.seed,
        max_battles_per_run: args.max_battles,
        policy: args.policy,
        ..Default::default()
    };

    if !args.quiet {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              LEGEND OF XOR BALANCE SIMULATOR                  ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Runs:           {}", config.num_runs);
        println!("  Policy:         {}", config.policy);
        println!("  Max Battles:    {}", config.max_battles_per_run);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = run_simulation(&config)?;

    println!("{}", report.to_text());

    if args.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}
