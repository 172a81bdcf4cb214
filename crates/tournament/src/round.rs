//! A single round of play

use tourney_core::{EliminationStyle, Match, PairingSystem, ParticipantId, ScoringMode};

/// Rules a round was paired under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRules {
    pub pairing: PairingSystem,
    pub elimination: EliminationStyle,
    pub scoring: ScoringMode,
}

/// One round: who was eligible, how they were grouped, and the results.
#[derive(Debug, Clone)]
pub struct Round {
    number: usize,
    rules: RoundRules,
    participants: Vec<ParticipantId>,
    matches: Vec<Match>,
    /// Dropped by the elimination filter when this round was created
    eliminated: Vec<ParticipantId>,
}

impl Round {
    pub(crate) fn new(
        number: usize,
        rules: RoundRules,
        participants: Vec<ParticipantId>,
        matches: Vec<Match>,
        eliminated: Vec<ParticipantId>,
    ) -> Self {
        Self {
            number,
            rules,
            participants,
            matches,
            eliminated,
        }
    }

    /// Event-wide, 1-based round number
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn rules(&self) -> RoundRules {
        self.rules
    }

    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub(crate) fn matches_mut(&mut self) -> &mut [Match] {
        &mut self.matches
    }

    pub fn eliminated(&self) -> &[ParticipantId] {
        &self.eliminated
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn bye_count(&self) -> usize {
        self.matches.iter().filter(|m| m.is_bye()).count()
    }

    /// Matches still waiting for a result
    pub fn outstanding_results(&self) -> usize {
        self.matches.iter().filter(|m| !m.has_results()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.has_matches() && self.outstanding_results() == 0
    }

    pub fn counts_losses(&self) -> bool {
        self.rules.elimination.is_eliminating()
    }

    pub fn match_for(&self, participant: ParticipantId) -> Option<&Match> {
        self.matches.iter().find(|m| m.contains(participant))
    }
}
