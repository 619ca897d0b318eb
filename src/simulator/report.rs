//! Simulation report generation.

use super::config::AttackPolicy;
use crate::character::progression::PlayerProgression;
use serde::Serialize;
use std::collections::BTreeMap;

/// Statistics from a single simulated life.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub seed: u64,
    pub victories: u32,
    pub attacks: u64,
    pub travel_samples: u64,
    pub died: bool,
    pub killed_by: Option<&'static str>,
    /// Hit the attack cap without dying or reaching the battle cap.
    pub timed_out: bool,
    /// Stats after the last victory, or just before the fatal attack.
    pub final_player: PlayerProgression,
    pub victories_by_monster: BTreeMap<&'static str, u32>,
}

impl RunStats {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            victories: 0,
            attacks: 0,
            travel_samples: 0,
            died: false,
            killed_by: None,
            timed_out: false,
            final_player: PlayerProgression::new(),
            victories_by_monster: BTreeMap::new(),
        }
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub policy: String,
    pub num_runs: u32,
    pub runs_died: u32,
    pub runs_timed_out: u32,

    pub avg_victories: f64,
    pub avg_attacks: f64,
    pub avg_travel_samples: f64,
    pub avg_final_max_health: f64,
    pub avg_final_best_damage: f64,

    pub deaths_by_monster: BTreeMap<&'static str, u32>,
    pub victories_by_monster: BTreeMap<&'static str, u32>,
    pub victory_distribution: Vec<u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, policy: AttackPolicy) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let runs_died = runs.iter().filter(|r| r.died).count() as u32;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;

        let avg_victories = runs.iter().map(|r| r.victories as f64).sum::<f64>() / divisor;
        let avg_attacks = runs.iter().map(|r| r.attacks as f64).sum::<f64>() / divisor;
        let avg_travel_samples =
            runs.iter().map(|r| r.travel_samples as f64).sum::<f64>() / divisor;
        let avg_final_max_health = runs
            .iter()
            .map(|r| r.final_player.max_health as f64)
            .sum::<f64>()
            / divisor;
        let avg_final_best_damage = runs
            .iter()
            .map(|r| {
                let p = &r.final_player;
                p.sword_damage.max(p.magic_damage).max(p.bow_damage) as f64
            })
            .sum::<f64>()
            / divisor;

        let mut deaths_by_monster = BTreeMap::new();
        let mut victories_by_monster = BTreeMap::new();
        for run in &runs {
            if let Some(name) = run.killed_by {
                *deaths_by_monster.entry(name).or_insert(0) += 1;
            }
            for (name, count) in &run.victories_by_monster {
                *victories_by_monster.entry(*name).or_insert(0) += count;
            }
        }

        let mut victory_distribution: Vec<u32> = runs.iter().map(|r| r.victories).collect();
        victory_distribution.sort_unstable();

        Self {
            policy: policy.to_string(),
            num_runs,
            runs_died,
            runs_timed_out,
            avg_victories,
            avg_attacks,
            avg_travel_samples,
            avg_final_max_health,
            avg_final_best_damage,
            deaths_by_monster,
            victories_by_monster,
            victory_distribution,
            run_stats: runs,
        }
    }

    /// Median number of victories per life.
    pub fn median_victories(&self) -> u32 {
        self.victory_distribution
            .get(self.victory_distribution.len() / 2)
            .copied()
            .unwrap_or(0)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str(&format!(
            "                    (policy: {})\n",
            self.policy
        ));
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} died, {} timed out\n\n",
            self.num_runs, self.runs_died, self.runs_timed_out
        ));

        report.push_str("── SURVIVAL ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Victories:       {:.1}\n",
            self.avg_victories
        ));
        report.push_str(&format!(
            "  Median Victories:    {}\n",
            self.median_victories()
        ));
        report.push_str(&format!(
            "  Min / Max:           {} / {}\n",
            self.victory_distribution.first().copied().unwrap_or(0),
            self.victory_distribution.last().copied().unwrap_or(0)
        ));
        report.push_str(&format!("  Avg Attacks:         {:.0}\n", self.avg_attacks));
        report.push_str(&format!(
            "  Avg Travel Samples:  {:.0}\n\n",
            self.avg_travel_samples
        ));

        report.push_str("── GROWTH ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Max HP:    {:.1}\n",
            self.avg_final_max_health
        ));
        report.push_str(&format!(
            "  Avg Best Damage:     {:.1}\n\n",
            self.avg_final_best_damage
        ));

        report.push_str("── PER-MONSTER BREAKDOWN ────────────────────────────────────────\n");
        report.push_str("  Monster               Wins    Kills   Kills/Fight\n");
        report.push_str("  ───────               ────    ─────   ───────────\n");
        let mut names: Vec<&&'static str> = self
            .victories_by_monster
            .keys()
            .chain(self.deaths_by_monster.keys())
            .collect();
        names.sort();
        names.dedup();
        for name in names {
            let wins = self.victories_by_monster.get(*name).copied().unwrap_or(0);
            let kills = self.deaths_by_monster.get(*name).copied().unwrap_or(0);
            let fights = wins + kills;
            let lethality = if fights > 0 {
                kills as f64 / fights as f64
            } else {
                0.0
            };
            report.push_str(&format!(
                "  {:<20}  {:>5}   {:>5}   {:.3}\n",
                name, wins, kills, lethality
            ));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let rating = if self.avg_victories < 3.0 {
            "TOO HARD - Players die almost immediately"
        } else if self.avg_victories < 15.0 {
            "GOOD - Challenging but fair"
        } else if self.avg_victories < 50.0 {
            "EASY - Long lives are common"
        } else {
            "TOO EASY - Players rarely die"
        };
        report.push_str(&format!("  Survival Rating: {}\n", rating));

        for (name, kills) in &self.deaths_by_monster {
            let share = *kills as f64 / self.runs_died.max(1) as f64;
            if share > 0.3 {
                report.push_str(&format!(
                    "  ⚠️  {} ends {:.0}% of lives\n",
                    name,
                    share * 100.0
                ));
            }
        }
        if self.runs_timed_out > 0 {
            report.push_str("  ⚠️  Some lives hit the attack cap - unwinnable matchup?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(victories: u32, killed_by: Option<&'static str>) -> RunStats {
        let mut stats = RunStats::new(0);
        stats.victories = victories;
        stats.died = killed_by.is_some();
        stats.killed_by = killed_by;
        stats.final_player.max_health = 10 + victories as i32;
        stats
            .victories_by_monster
            .insert("Small Fish", victories);
        stats
    }

    #[test]
    fn test_report_generation() {
        let runs = vec![run(4, Some("Ent")), run(8, Some("Ent")), run(6, None)];

        let report = SimReport::from_runs(runs, AttackPolicy::Greedy);
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.runs_died, 2);
        assert!((report.avg_victories - 6.0).abs() < 1e-9);
        assert_eq!(report.median_victories(), 6);
        assert_eq!(report.deaths_by_monster.get("Ent"), Some(&2));
        assert_eq!(report.victories_by_monster.get("Small Fish"), Some(&18));
        assert!((report.avg_final_max_health - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_text_and_json_output() {
        let report = SimReport::from_runs(vec![run(2, Some("Ent"))], AttackPolicy::Random);

        let text = report.to_text();
        assert!(text.contains("SIMULATION REPORT"));
        assert!(text.contains("policy: random"));
        assert!(text.contains("Ent"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["num_runs"], 1);
        assert!(json.get("run_stats").is_none());
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new(), AttackPolicy::Greedy);
        assert_eq!(report.avg_victories, 0.0);
        assert_eq!(report.median_victories(), 0);
    }
}
