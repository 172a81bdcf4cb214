//! Participant history queries used while pairing
//!
//! The pairing engine and elimination filter never walk match lists
//! themselves; they ask a [`MatchHistory`]. [`HistoryIndex`] is the stock
//! implementation, filled in by whoever owns the matches.

use std::collections::{HashMap, HashSet};

use crate::matchup::Match;
use crate::scoring::score;
use crate::types::ParticipantId;

/// Read-only view of what has happened so far in an event.
pub trait MatchHistory {
    /// Whether `a` and `b` have been in a match together
    fn have_played(&self, a: ParticipantId, b: ParticipantId) -> bool;

    /// Whether `participant` has been given a bye
    fn has_had_bye(&self, participant: ParticipantId) -> bool;

    /// Losses that count toward elimination in the current segment
    fn loss_count(&self, participant: ParticipantId) -> u32;
}

/// Precomputed pair/bye/loss lookups built from recorded matches
#[derive(Debug, Clone, Default)]
pub struct HistoryIndex {
    played: HashSet<(ParticipantId, ParticipantId)>,
    byes: HashSet<ParticipantId>,
    losses: HashMap<ParticipantId, u32>,
}

impl HistoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index where every match counts toward elimination.
    pub fn from_matches<'a>(matches: impl IntoIterator<Item = &'a Match>) -> Self {
        let mut index = Self::new();
        for m in matches {
            index.record(m, true);
        }
        index
    }

    /// Record one match.
    ///
    /// `counts_losses` marks matches from eliminating rounds of the current
    /// segment; only those contribute to [`MatchHistory::loss_count`].
    pub fn record(&mut self, m: &Match, counts_losses: bool) {
        let participants = m.participants();

        if m.is_bye() {
            self.byes.insert(participants[0]);
        }

        for (i, &a) in participants.iter().enumerate() {
            for &b in &participants[i + 1..] {
                self.played.insert(ordered_pair(a, b));
            }
        }

        if counts_losses && m.has_results() {
            for &p in participants {
                if let Ok(points) = score(m, p) {
                    if points.match_points == 0 {
                        *self.losses.entry(p).or_insert(0) += 1;
                    }
                }
            }
        }
    }
}

impl MatchHistory for HistoryIndex {
    fn have_played(&self, a: ParticipantId, b: ParticipantId) -> bool {
        self.played.contains(&ordered_pair(a, b))
    }

    fn has_had_bye(&self, participant: ParticipantId) -> bool {
        self.byes.contains(&participant)
    }

    fn loss_count(&self, participant: ParticipantId) -> u32 {
        self.losses.get(&participant).copied().unwrap_or(0)
    }
}

fn ordered_pair(a: ParticipantId, b: ParticipantId) -> (ParticipantId, ParticipantId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;
