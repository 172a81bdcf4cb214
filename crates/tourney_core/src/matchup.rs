//! A single match within a round

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourneyError};
use crate::types::{ParticipantId, ScoringMode};

/// Result recorded for a head-to-head bye: two game wins, no losses, no draws.
pub const BYE_RESULT: [u32; 3] = [2, 0, 0];

/// Participants grouped together for one round, plus their raw result vector.
///
/// The result vector is empty until scored. Head-to-head matches hold
/// `[wins_first, wins_second, draws]`; placement matches hold one placement
/// code per participant, in participant order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    participants: Vec<ParticipantId>,
    results: Vec<u32>,
    mode: ScoringMode,
}

impl Match {
    /// Create a match. A lone head-to-head participant gets a scored bye.
    pub fn new(participants: Vec<ParticipantId>, mode: ScoringMode) -> Self {
        let results = if participants.len() == 1 && mode == ScoringMode::HeadToHead {
            BYE_RESULT.to_vec()
        } else {
            Vec::new()
        };
        Self {
            participants,
            results,
            mode,
        }
    }

    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    pub fn contains(&self, participant: ParticipantId) -> bool {
        self.participants.contains(&participant)
    }

    pub fn is_bye(&self) -> bool {
        self.participants.len() == 1
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn results(&self) -> Option<&[u32]> {
        if self.results.is_empty() {
            None
        } else {
            Some(&self.results)
        }
    }

    /// Position of a participant inside this match
    pub fn index_of(&self, participant: ParticipantId) -> Result<usize> {
        self.participants
            .iter()
            .position(|&p| p == participant)
            .ok_or(TourneyError::NotInMatch(participant))
    }

    /// Everyone else in the match, in match order
    pub fn opponents(&self, participant: ParticipantId) -> Result<Vec<ParticipantId>> {
        self.index_of(participant)?;
        Ok(self
            .participants
            .iter()
            .copied()
            .filter(|&p| p != participant)
            .collect())
    }

    /// Replace the result vector after validating its length.
    ///
    /// An empty vector clears the results. On error the match is untouched.
    pub fn set_results(&mut self, results: Vec<u32>) -> Result<()> {
        if !results.is_empty() {
            let expected = self.expected_result_len();
            if results.len() != expected {
                return Err(TourneyError::ResultSizeMismatch {
                    expected,
                    actual: results.len(),
                });
            }
        }
        self.results = results;
        Ok(())
    }

    pub fn expected_result_len(&self) -> usize {
        match self.mode {
            ScoringMode::HeadToHead => 3,
            ScoringMode::PlacementGroup => self.participants.len(),
        }
    }

    /// Games counted toward game-win percentage
    pub fn games_played(&self) -> u32 {
        if self.results.is_empty() {
            return 0;
        }
        match self.mode {
            ScoringMode::PlacementGroup => 1,
            ScoringMode::HeadToHead => self
                .results
                .iter()
                .fold(0u32, |total, &n| total.saturating_add(n)),
        }
    }

    /// Draw count of a head-to-head result (0 otherwise)
    pub fn draws(&self) -> u32 {
        match self.mode {
            ScoringMode::HeadToHead => self.results.get(2).copied().unwrap_or(0),
            ScoringMode::PlacementGroup => 0,
        }
    }
}

#[cfg(test)]
#[path = "matchup_tests.rs"]
mod matchup_tests;
