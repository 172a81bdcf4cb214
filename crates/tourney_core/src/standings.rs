//! Standings and tie-breakers
//!
//! Participants are ordered by four keys, each descending:
//! 1. match points
//! 2. opponents' average match-win percentage
//! 3. own game-win percentage
//! 4. opponents' average game-win percentage
//!
//! Opponent percentages are floored at [`WIN_PERCENTAGE_FLOOR`] per opponent
//! so that a participant who dropped early does not drag down everyone they
//! played. Remaining ties keep the caller's order.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::matchup::Match;
use crate::scoring::score;
use crate::types::ParticipantId;

/// Minimum win percentage credited for any opponent
pub const WIN_PERCENTAGE_FLOOR: f64 = 0.33;

/// Aggregated results for one participant over scored matches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantRecord {
    pub match_points: u32,
    pub game_points: u32,
    pub matches_played: u32,
    pub games_played: u32,
    /// One entry per opponent per match played against them
    pub opponents: Vec<ParticipantId>,
}

impl ParticipantRecord {
    /// Match-win percentage with the floor applied
    pub fn match_win_percentage(&self) -> f64 {
        if self.matches_played == 0 {
            return WIN_PERCENTAGE_FLOOR;
        }
        let pct = f64::from(self.match_points) / (f64::from(self.matches_played) * 3.0);
        pct.max(WIN_PERCENTAGE_FLOOR)
    }

    /// Raw game-win percentage, 0 without games
    pub fn game_win_percentage(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.game_points) / (f64::from(self.games_played) * 3.0)
    }
}

/// One row of the standings table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    /// 1-based position
    pub rank: usize,
    pub participant: ParticipantId,
    pub match_points: u32,
    pub opponents_match_win_pct: f64,
    pub game_win_pct: f64,
    pub opponents_game_win_pct: f64,
}

/// Ranks participants from a match history.
#[derive(Debug, Clone, Default)]
pub struct StandingsRanker {
    records: HashMap<ParticipantId, ParticipantRecord>,
}

impl StandingsRanker {
    /// Walk every match once; unscored matches are ignored.
    pub fn from_matches<'a>(matches: impl IntoIterator<Item = &'a Match>) -> Self {
        let mut records: HashMap<ParticipantId, ParticipantRecord> = HashMap::new();

        for m in matches {
            if !m.has_results() {
                continue;
            }
            for &p in m.participants() {
                let Ok(points) = score(m, p) else {
                    continue;
                };
                let record = records.entry(p).or_default();
                // Result values are unbounded, so totals saturate.
                record.match_points = record.match_points.saturating_add(points.match_points);
                record.game_points = record.game_points.saturating_add(points.game_points);
                record.matches_played = record.matches_played.saturating_add(1);
                record.games_played = record.games_played.saturating_add(m.games_played());
                record
                    .opponents
                    .extend(m.participants().iter().copied().filter(|&o| o != p));
            }
        }

        Self { records }
    }

    pub fn record(&self, participant: ParticipantId) -> Option<&ParticipantRecord> {
        self.records.get(&participant)
    }

    pub fn match_points(&self, participant: ParticipantId) -> u32 {
        self.record(participant).map_or(0, |r| r.match_points)
    }

    pub fn match_win_percentage(&self, participant: ParticipantId) -> f64 {
        self.record(participant)
            .map_or(WIN_PERCENTAGE_FLOOR, ParticipantRecord::match_win_percentage)
    }

    pub fn game_win_percentage(&self, participant: ParticipantId) -> f64 {
        self.record(participant)
            .map_or(0.0, ParticipantRecord::game_win_percentage)
    }

    pub fn opponents_match_win_percentage(&self, participant: ParticipantId) -> f64 {
        self.opponent_average(participant, |o| self.match_win_percentage(o))
    }

    pub fn opponents_game_win_percentage(&self, participant: ParticipantId) -> f64 {
        self.opponent_average(participant, |o| {
            self.game_win_percentage(o).max(WIN_PERCENTAGE_FLOOR)
        })
    }

    fn opponent_average(
        &self,
        participant: ParticipantId,
        metric: impl Fn(ParticipantId) -> f64,
    ) -> f64 {
        let opponents = match self.record(participant) {
            Some(record) if !record.opponents.is_empty() => &record.opponents,
            _ => return 0.0,
        };
        let total: f64 = opponents.iter().map(|&o| metric(o)).sum();
        total / opponents.len() as f64
    }

    /// Full tie-break comparison; `Less` means `a` ranks above `b`.
    pub fn compare(&self, a: ParticipantId, b: ParticipantId) -> Ordering {
        TieBreak::of(self, a).cmp_desc(&TieBreak::of(self, b))
    }

    /// Order `participants` best first.
    pub fn rank(&self, participants: &[ParticipantId]) -> Vec<Standing> {
        let mut keyed: Vec<(ParticipantId, TieBreak)> = participants
            .iter()
            .map(|&p| (p, TieBreak::of(self, p)))
            .collect();
        keyed.sort_by(|(_, a), (_, b)| a.cmp_desc(b));

        keyed
            .into_iter()
            .enumerate()
            .map(|(i, (participant, keys))| Standing {
                rank: i + 1,
                participant,
                match_points: keys.match_points,
                opponents_match_win_pct: keys.opponents_match_win_pct,
                game_win_pct: keys.game_win_pct,
                opponents_game_win_pct: keys.opponents_game_win_pct,
            })
            .collect()
    }

    /// Just the ordering, best first
    pub fn order(&self, participants: &[ParticipantId]) -> Vec<ParticipantId> {
        self.rank(participants)
            .into_iter()
            .map(|s| s.participant)
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct TieBreak {
    match_points: u32,
    opponents_match_win_pct: f64,
    game_win_pct: f64,
    opponents_game_win_pct: f64,
}

impl TieBreak {
    fn of(ranker: &StandingsRanker, p: ParticipantId) -> Self {
        Self {
            match_points: ranker.match_points(p),
            opponents_match_win_pct: ranker.opponents_match_win_percentage(p),
            game_win_pct: ranker.game_win_percentage(p),
            opponents_game_win_pct: ranker.opponents_game_win_percentage(p),
        }
    }

    /// Descending on every key
    fn cmp_desc(&self, other: &Self) -> Ordering {
        other
            .match_points
            .cmp(&self.match_points)
            .then_with(|| other.opponents_match_win_pct.total_cmp(&self.opponents_match_win_pct))
            .then_with(|| other.game_win_pct.total_cmp(&self.game_win_pct))
            .then_with(|| other.opponents_game_win_pct.total_cmp(&self.opponents_game_win_pct))
    }
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
