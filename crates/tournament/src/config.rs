//! Event configuration loaded from TOML
//!
//! ```toml
//! name = "Friday Night"
//! scoring = "head_to_head"
//! pairing = "swiss"
//! elimination = "none"
//! regulation_rounds = 4
//! seed = 7
//!
//! [[participants]]
//! first_name = "Ada"
//! last_name = "Lovelace"
//!
//! [playoff]
//! cut = 8
//! elimination = "single"
//! pairing = "none"
//!
//! [simulation]
//! games_per_match = 3
//! draw_chance = 0.1
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tourney_core::{EliminationStyle, PairingSystem, Participant, ScoringMode};

use crate::error::EventError;
use crate::event::TournamentEvent;
use crate::simulator::SimulationConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// One enrolled participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantEntry {
    #[serde(default)]
    pub first_name: String,
    pub last_name: String,
}

/// Playoff phase settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayoffConfig {
    /// Seed the top `cut` into a bracket; omit to carry everyone over
    #[serde(default)]
    pub cut: Option<usize>,
    #[serde(default = "default_playoff_elimination")]
    pub elimination: EliminationStyle,
    #[serde(default = "default_playoff_pairing")]
    pub pairing: PairingSystem,
    /// Defaults to the suggested round count
    #[serde(default)]
    pub rounds: Option<usize>,
}

fn default_playoff_elimination() -> EliminationStyle {
    EliminationStyle::Single
}

fn default_playoff_pairing() -> PairingSystem {
    PairingSystem::None
}

impl Default for PlayoffConfig {
    fn default() -> Self {
        Self {
            cut: None,
            elimination: default_playoff_elimination(),
            pairing: default_playoff_pairing(),
            rounds: None,
        }
    }
}

/// Whole-event configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub name: String,
    pub scoring: ScoringMode,
    pub pairing: PairingSystem,
    pub elimination: EliminationStyle,
    pub participants: Vec<ParticipantEntry>,
    /// Defaults to the suggested round count
    pub regulation_rounds: Option<usize>,
    pub playoff: Option<PlayoffConfig>,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
    pub simulation: SimulationConfig,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: "Tournament".to_string(),
            scoring: ScoringMode::HeadToHead,
            pairing: PairingSystem::Swiss,
            elimination: EliminationStyle::None,
            participants: Vec::new(),
            regulation_rounds: None,
            playoff: None,
            seed: None,
            simulation: SimulationConfig::default(),
        }
    }
}

impl TournamentConfig {
    /// Load and validate a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TournamentConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.participants.is_empty() {
            return Err(ConfigError::Invalid("no participants listed".to_string()));
        }
        if let Some(entry) = self
            .participants
            .iter()
            .find(|p| p.first_name.trim().is_empty() && p.last_name.trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!(
                "participant without a name: {entry:?}"
            )));
        }
        let sim = &self.simulation;
        if sim.games_per_match == 0 {
            return Err(ConfigError::Invalid(
                "games_per_match must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&sim.draw_chance) {
            return Err(ConfigError::Invalid(format!(
                "draw_chance must be 0.0-1.0, got {}",
                sim.draw_chance
            )));
        }
        if let Some(cut) = self.playoff.as_ref().and_then(|p| p.cut) {
            if !cut.is_power_of_two() {
                return Err(ConfigError::Invalid(format!(
                    "playoff cut must be a power of two, got {cut}"
                )));
            }
        }
        Ok(())
    }

    /// Enrolled, configured event ready for its regulation segment
    pub fn build_event(&self) -> Result<TournamentEvent, EventError> {
        let mut event = TournamentEvent::new(&self.name);
        event.set_scoring(self.scoring)?;
        event.set_pairing(self.pairing)?;
        event.set_elimination(self.elimination)?;
        for entry in &self.participants {
            event.add_participant(Participant::new(&entry.first_name, &entry.last_name))?;
        }
        Ok(event)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
