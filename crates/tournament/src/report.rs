//! Standings and pairings snapshots for printing and export

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::event::TournamentEvent;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Complete event snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentReport {
    /// Name of the event
    pub name: String,
    pub standings: Vec<StandingRow>,
    pub rounds: Vec<RoundEntry>,
}

/// A single row of the standings table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingRow {
    pub rank: usize,
    pub name: String,
    pub match_points: u32,
    pub opponents_match_win_pct: f64,
    pub game_win_pct: f64,
    pub opponents_game_win_pct: f64,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundEntry {
    pub number: usize,
    pub segment: String,
    pub matches: Vec<MatchEntry>,
}

/// Names in seat order plus the raw result vector (empty while unscored)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub participants: Vec<String>,
    pub results: Vec<u32>,
}

impl TournamentReport {
    pub fn from_event(event: &TournamentEvent) -> Self {
        let active = event.active_participants();
        let standings = event
            .standings()
            .into_iter()
            .map(|s| StandingRow {
                rank: s.rank,
                name: event.display_name(s.participant),
                match_points: s.match_points,
                opponents_match_win_pct: s.opponents_match_win_pct,
                game_win_pct: s.game_win_pct,
                opponents_game_win_pct: s.opponents_game_win_pct,
                active: active.contains(&s.participant),
            })
            .collect();

        let rounds = event
            .segments()
            .iter()
            .flat_map(|segment| {
                segment.rounds().iter().map(move |round| RoundEntry {
                    number: round.number(),
                    segment: segment.kind().to_string(),
                    matches: round
                        .matches()
                        .iter()
                        .map(|m| MatchEntry {
                            participants: m
                                .participants()
                                .iter()
                                .map(|&p| event.display_name(p))
                                .collect(),
                            results: m.results().map(<[u32]>::to_vec).unwrap_or_default(),
                        })
                        .collect(),
                })
            })
            .collect();

        Self {
            name: event.name().to_string(),
            standings,
            rounds,
        }
    }

    /// Save report to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));

        for round in &self.rounds {
            report.push_str(&format!("Round {} ({})\n", round.number, round.segment));
            for entry in &round.matches {
                let results = if entry.results.is_empty() {
                    "pending".to_string()
                } else {
                    entry
                        .results
                        .iter()
                        .map(u32::to_string)
                        .collect::<Vec<_>>()
                        .join("-")
                };
                let seats = if entry.participants.len() == 1 {
                    format!("{} (bye)", entry.participants[0])
                } else {
                    entry.participants.join(" vs ")
                };
                report.push_str(&format!("  {:<50} {}\n", seats, results));
            }
            report.push('\n');
        }

        report.push_str("Standings:\n");
        report.push_str(&format!(
            "{:>4}  {:<24} {:>4} {:>7} {:>7} {:>7}\n",
            "#", "Name", "MP", "OMW%", "GW%", "OGW%"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for row in &self.standings {
            let marker = if row.active { "" } else { " *" };
            report.push_str(&format!(
                "{:>4}  {:<24} {:>4} {:>6.1}% {:>6.1}% {:>6.1}%{}\n",
                row.rank,
                row.name,
                row.match_points,
                row.opponents_match_win_pct * 100.0,
                row.game_win_pct * 100.0,
                row.opponents_game_win_pct * 100.0,
                marker
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
