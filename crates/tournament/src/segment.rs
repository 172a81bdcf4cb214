//! Segments: the regulation and playoff phases of an event

use std::collections::HashMap;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use tourney_core::{eligible, pair, EliminationStyle, HistoryIndex, ParticipantId};

use crate::error::{EventError, Result};
use crate::round::{Round, RoundRules};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Regulation,
    Playoff,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Regulation => write!(f, "Regulation"),
            SegmentKind::Playoff => write!(f, "Playoff"),
        }
    }
}

/// One phase of an event with its own rounds and active field.
///
/// Seeded segments keep their participant order (bracket order) for every
/// round; unseeded segments are re-ordered before each round is paired.
#[derive(Debug, Clone)]
pub struct Segment {
    kind: SegmentKind,
    rules: RoundRules,
    rounds: Vec<Round>,
    participants: Vec<ParticipantId>,
    active: Vec<ParticipantId>,
    seeded: bool,
}

impl Segment {
    pub(crate) fn new(
        kind: SegmentKind,
        rules: RoundRules,
        participants: Vec<ParticipantId>,
        seeded: bool,
    ) -> Self {
        Self {
            kind,
            rules,
            rounds: Vec::new(),
            active: participants.clone(),
            participants,
            seeded,
        }
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn rules(&self) -> RoundRules {
        self.rules
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub(crate) fn rounds_mut(&mut self) -> &mut [Round] {
        &mut self.rounds
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// Everyone admitted to this segment
    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    /// Admitted participants still playing, in pairing order
    pub fn active(&self) -> &[ParticipantId] {
        &self.active
    }

    pub fn is_active(&self, participant: ParticipantId) -> bool {
        self.active.contains(&participant)
    }

    pub(crate) fn admit(&mut self, participant: ParticipantId) {
        self.participants.push(participant);
        self.active.push(participant);
    }

    /// Order, filter and pair the next round.
    ///
    /// `standings` is the current event ranking, best first. `history` must
    /// count losses from this segment's eliminating rounds only.
    pub(crate) fn create_round<R: Rng + ?Sized>(
        &mut self,
        number: usize,
        standings: &[ParticipantId],
        history: &HistoryIndex,
        rng: &mut R,
    ) -> &Round {
        if !self.seeded {
            self.order_for_pairing(standings, rng);
        }

        let still_in = eligible(&self.active, self.rules.elimination, history);
        let eliminated: Vec<ParticipantId> = self
            .active
            .iter()
            .copied()
            .filter(|p| !still_in.contains(p))
            .collect();
        self.active = still_in;

        let matches = pair(
            &self.active,
            self.rules.pairing,
            self.rules.scoring.group_bounds(),
            self.rules.elimination,
            self.rules.scoring,
            history,
            rng,
        );
        info!(
            round = number,
            segment = %self.kind,
            participants = self.active.len(),
            matches = matches.len(),
            eliminated = eliminated.len(),
            "round paired"
        );

        let round = Round::new(number, self.rules, self.active.clone(), matches, eliminated);
        self.rounds.push(round);
        &self.rounds[self.rounds.len() - 1]
    }

    /// First round: random order (then standings when eliminating).
    /// Later rounds: standings order, or unchanged when eliminating.
    fn order_for_pairing<R: Rng + ?Sized>(&mut self, standings: &[ParticipantId], rng: &mut R) {
        let first_round = self.rounds.is_empty();
        match (self.rules.elimination, first_round) {
            (EliminationStyle::None, true) => self.active.shuffle(rng),
            (EliminationStyle::None, false) => self.sort_by_standings(standings),
            (_, true) => {
                self.active.shuffle(rng);
                self.sort_by_standings(standings);
            }
            (_, false) => {}
        }
    }

    fn sort_by_standings(&mut self, standings: &[ParticipantId]) {
        let position: HashMap<ParticipantId, usize> = standings
            .iter()
            .enumerate()
            .map(|(i, &p)| (p, i))
            .collect();
        self.active
            .sort_by_key(|p| position.get(p).copied().unwrap_or(usize::MAX));
    }

    /// Drop the latest round, putting back anyone it eliminated.
    pub(crate) fn remove_current_round(&mut self) -> Result<Round> {
        let round = self.rounds.pop().ok_or(EventError::NoRoundsInSegment)?;

        let mut restored: Vec<ParticipantId> = round
            .participants()
            .iter()
            .chain(round.eliminated())
            .copied()
            .filter(|p| self.active.contains(p) || round.eliminated().contains(p))
            .collect();
        let late: Vec<ParticipantId> = self
            .active
            .iter()
            .copied()
            .filter(|p| !restored.contains(p))
            .collect();
        restored.extend(late);
        self.active = restored;

        debug!(round = round.number(), restored = round.eliminated().len(), "round removed");
        Ok(round)
    }

    pub(crate) fn deactivate(&mut self, participant: ParticipantId) -> Result<()> {
        if !self.participants.contains(&participant) {
            return Err(EventError::NotInSegment(participant));
        }
        let position = self
            .active
            .iter()
            .position(|&p| p == participant)
            .ok_or(EventError::AlreadyInactive(participant))?;
        self.active.remove(position);
        Ok(())
    }

    pub(crate) fn reactivate(&mut self, participant: ParticipantId) -> Result<()> {
        if self.active.contains(&participant) {
            return Err(EventError::AlreadyActive(participant));
        }
        if !self.participants.contains(&participant) {
            return Err(EventError::NotInSegment(participant));
        }
        self.active.push(participant);
        Ok(())
    }
}
