//! Simulation configuration.

use std::fmt;
use std::str::FromStr;

/// How the simulated player picks an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackPolicy {
    /// Always the attack with the highest effective damage.
    Greedy,
    /// Uniformly random button presses.
    Random,
}

impl FromStr for AttackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" => Ok(AttackPolicy::Greedy),
            "random" => Ok(AttackPolicy::Random),
            other => Err(format!("unknown policy '{other}' (expected greedy or random)")),
        }
    }
}

impl fmt::Display for AttackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackPolicy::Greedy => write!(f, "greedy"),
            AttackPolicy::Random => write!(f, "random"),
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of lives to simulate
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Stop a life after this many victories
    pub max_battles_per_run: u32,

    /// Safety cap on attacks in a single life
    pub max_attacks_per_run: u64,

    pub policy: AttackPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_battles_per_run: 500,
            max_attacks_per_run: 100_000,
            policy: AttackPolicy::Greedy,
        }
    }
}
