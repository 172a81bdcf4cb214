//! Random results for unattended events
//!
//! Stands in for real result entry when running a whole event from the
//! command line.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use tourney_core::{Match, ScoringMode};

use crate::error::Result;
use crate::event::TournamentEvent;

/// How simulated matches are played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Best-of-N length for head-to-head matches
    pub games_per_match: u32,
    /// Chance that any single game is drawn
    pub draw_chance: f64,
    /// Log every simulated result
    pub verbose: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games_per_match: 3,
            draw_chance: 0.1,
            verbose: false,
        }
    }
}

/// Produces result vectors for unscored matches
pub struct ResultSimulator {
    config: SimulationConfig,
}

impl ResultSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Result vector for one match, shaped for its scoring mode
    pub fn simulate_match<R: Rng + ?Sized>(&self, m: &Match, rng: &mut R) -> Vec<u32> {
        match m.mode() {
            ScoringMode::HeadToHead => self.play_games(rng),
            ScoringMode::PlacementGroup => {
                let mut placements: Vec<u32> = (1..=m.participant_count() as u32).collect();
                placements.shuffle(rng);
                placements
            }
        }
    }

    /// Best-of-N: stop as soon as one side has a majority of the games.
    fn play_games<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u32> {
        let games = self.config.games_per_match.max(1);
        let needed = games / 2 + 1;
        let draw_chance = if self.config.draw_chance.is_finite() {
            self.config.draw_chance.clamp(0.0, 1.0)
        } else {
            0.0
        };

        let (mut first, mut second, mut draws) = (0, 0, 0);
        for _ in 0..games {
            if rng.gen_bool(draw_chance) {
                draws += 1;
            } else if rng.gen_bool(0.5) {
                first += 1;
            } else {
                second += 1;
            }
            if first == needed || second == needed {
                break;
            }
        }
        vec![first, second, draws]
    }

    /// Fill in every unscored match of `round`. Byes and matches that
    /// already have results are left alone.
    ///
    /// Returns how many matches were simulated.
    pub fn play_round<R: Rng + ?Sized>(
        &self,
        event: &mut TournamentEvent,
        round: usize,
        rng: &mut R,
    ) -> Result<usize> {
        let pending: Vec<(usize, Vec<u32>)> = event
            .round(round)?
            .matches()
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_bye() && !m.has_results())
            .map(|(i, m)| (i, self.simulate_match(m, rng)))
            .collect();

        for (index, results) in &pending {
            if self.config.verbose {
                let names: Vec<String> = event.round(round)?.matches()[*index]
                    .participants()
                    .iter()
                    .map(|&p| event.display_name(p))
                    .collect();
                info!(round, "{} => {:?}", names.join(" vs "), results);
            }
            event.submit_results(round, *index, results.clone())?;
        }
        Ok(pending.len())
    }
}

#[cfg(test)]
#[path = "simulator_tests.rs"]
mod simulator_tests;
