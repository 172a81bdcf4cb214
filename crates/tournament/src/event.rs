//! The event coordinator
//!
//! [`TournamentEvent`] owns the roster and every segment, round and match.
//! Nothing points back at it: standings, history and loss counts are
//! recomputed from the match list whenever they are asked for.

use std::fmt;

use rand::Rng;
use tracing::{debug, info};

use tourney_core::{
    eligible, score, seed_participants, EliminationStyle, HistoryIndex, Match, MatchHistory,
    PairingSystem, Participant, ParticipantId, ScoringMode, Standing, StandingsRanker,
    TourneyError,
};

use crate::error::{EventError, Result};
use crate::round::{Round, RoundRules};
use crate::segment::{Segment, SegmentKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantStatus {
    Active,
    Inactive,
}

impl fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantStatus::Active => write!(f, "active"),
            ParticipantStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// A whole event: roster, settings, and a regulation segment optionally
/// followed by a playoff segment.
#[derive(Debug, Clone)]
pub struct TournamentEvent {
    name: String,
    scoring: ScoringMode,
    pairing: PairingSystem,
    elimination: EliminationStyle,
    /// Kept sorted by last name, then first name
    roster: Vec<Participant>,
    segments: Vec<Segment>,
}

impl TournamentEvent {
    /// Head-to-head Swiss with no elimination until changed.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            scoring: ScoringMode::HeadToHead,
            pairing: PairingSystem::Swiss,
            elimination: EliminationStyle::None,
            roster: Vec::new(),
            segments: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_started(&self) -> bool {
        !self.segments.is_empty()
    }

    // =========================================================================
    // Settings
    // =========================================================================

    pub fn scoring(&self) -> ScoringMode {
        self.scoring
    }

    pub fn pairing(&self) -> PairingSystem {
        self.pairing
    }

    pub fn elimination(&self) -> EliminationStyle {
        self.elimination
    }

    pub fn set_scoring(&mut self, scoring: ScoringMode) -> Result<()> {
        self.ensure_not_started("scoring mode")?;
        self.scoring = scoring;
        Ok(())
    }

    pub fn set_pairing(&mut self, pairing: PairingSystem) -> Result<()> {
        self.ensure_not_started("pairing system")?;
        self.pairing = pairing;
        Ok(())
    }

    pub fn set_elimination(&mut self, elimination: EliminationStyle) -> Result<()> {
        self.ensure_not_started("elimination style")?;
        self.elimination = elimination;
        Ok(())
    }

    fn ensure_not_started(&self, setting: &'static str) -> Result<()> {
        if self.is_started() {
            return Err(EventError::SettingsLocked(setting));
        }
        Ok(())
    }

    // =========================================================================
    // Roster
    // =========================================================================

    pub fn participants(&self) -> &[Participant] {
        &self.roster
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.roster.iter().find(|p| p.id == id)
    }

    pub fn display_name(&self, id: ParticipantId) -> String {
        self.participant(id)
            .map_or_else(|| id.to_string(), Participant::display_name)
    }

    /// Enroll a participant. After the event starts they join the
    /// regulation segment as an active player.
    pub fn add_participant(&mut self, participant: Participant) -> Result<()> {
        if self.participant(participant.id).is_some() {
            return Err(EventError::DuplicateParticipant(participant.id));
        }

        let id = participant.id;
        let key = roster_key(&participant);
        let at = self.roster.partition_point(|p| roster_key(p) <= key);
        self.roster.insert(at, participant);

        if let Some(regulation) = self.segments.first_mut() {
            regulation.admit(id);
            info!(participant = %id, "late entrant admitted");
        } else {
            debug!(participant = %id, "participant enrolled");
        }
        Ok(())
    }

    /// Withdraw an enrollment. Only allowed before play begins; afterwards
    /// use [`TournamentEvent::deactivate`].
    pub fn remove_participant(&mut self, id: ParticipantId) -> Result<Participant> {
        self.ensure_not_started("roster")?;
        let position = self
            .roster
            .iter()
            .position(|p| p.id == id)
            .ok_or(EventError::UnknownParticipant(id))?;
        Ok(self.roster.remove(position))
    }

    fn check_known(&self, id: ParticipantId) -> Result<()> {
        if self.participant(id).is_none() {
            return Err(EventError::UnknownParticipant(id));
        }
        Ok(())
    }

    fn roster_ids(&self) -> Vec<ParticipantId> {
        self.roster.iter().map(|p| p.id).collect()
    }

    // =========================================================================
    // Segments
    // =========================================================================

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn current_segment(&self) -> Result<&Segment> {
        self.segments.last().ok_or(EventError::NotStarted)
    }

    pub fn in_playoffs(&self) -> bool {
        self.segments
            .last()
            .is_some_and(|s| s.kind() == SegmentKind::Playoff)
    }

    /// Start the event with every enrolled participant.
    pub fn create_regulation_segment(&mut self) -> Result<()> {
        if self.is_started() {
            return Err(EventError::RegulationAlreadyStarted);
        }
        let rules = RoundRules {
            pairing: self.pairing,
            elimination: self.elimination,
            scoring: self.scoring,
        };
        self.segments.push(Segment::new(
            SegmentKind::Regulation,
            rules,
            self.roster_ids(),
            false,
        ));
        info!(
            event = %self.name,
            participants = self.roster.len(),
            pairing = %self.pairing,
            elimination = %self.elimination,
            scoring = %self.scoring,
            "regulation started"
        );
        Ok(())
    }

    /// Move to playoffs.
    ///
    /// Without a cut everyone still active carries over unseeded. With a cut
    /// of `k` (a power of two) the top `k` by current standings are placed
    /// in bracket seed order.
    pub fn create_playoff_segment(
        &mut self,
        cut: Option<usize>,
        elimination: EliminationStyle,
        pairing: PairingSystem,
    ) -> Result<()> {
        let regulation = self
            .segments
            .first()
            .ok_or(EventError::RegulationNotStarted)?;
        if self.segments.len() > 1 {
            return Err(EventError::PlayoffAlreadyStarted);
        }

        let active = regulation.active().to_vec();
        let (participants, seeded) = match cut {
            None => (active, false),
            Some(k) => {
                if !k.is_power_of_two() {
                    return Err(TourneyError::CutNotPowerOfTwo(k).into());
                }
                if k > active.len() {
                    return Err(EventError::CutTooLarge {
                        cut: k,
                        available: active.len(),
                    });
                }
                let mut ranked = self.ranker().order(&active);
                ranked.truncate(k);
                (seed_participants(&ranked)?, true)
            }
        };

        let rules = RoundRules {
            pairing,
            elimination,
            scoring: self.scoring,
        };
        info!(
            participants = participants.len(),
            seeded,
            pairing = %pairing,
            elimination = %elimination,
            "playoffs started"
        );
        self.segments.push(Segment::new(
            SegmentKind::Playoff,
            rules,
            participants,
            seeded,
        ));
        Ok(())
    }

    // =========================================================================
    // Rounds
    // =========================================================================

    /// Pair the next round of the current segment.
    pub fn create_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Round> {
        let active = self.current_segment()?.active().to_vec();
        let number = self.round_count() + 1;
        let history = self.history();
        let order = self.ranker().order(&active);

        let segment = self.segments.last_mut().ok_or(EventError::NotStarted)?;
        Ok(segment.create_round(number, &order, &history, rng))
    }

    /// Undo the latest round of the current segment. A segment left with no
    /// rounds is removed as well.
    pub fn remove_current_round(&mut self) -> Result<Round> {
        let segment = self.segments.last_mut().ok_or(EventError::NotStarted)?;
        let round = segment.remove_current_round()?;
        if segment.round_count() == 0 {
            let kind = segment.kind();
            self.segments.pop();
            info!(segment = %kind, "segment removed with its last round");
        }
        info!(round = round.number(), "round removed");
        Ok(round)
    }

    /// Record results for match `match_index` (0-based) of round `round`
    /// (1-based).
    pub fn submit_results(
        &mut self,
        round: usize,
        match_index: usize,
        results: Vec<u32>,
    ) -> Result<()> {
        let target = self
            .segments
            .iter_mut()
            .flat_map(|s| s.rounds_mut().iter_mut())
            .nth(round.wrapping_sub(1))
            .ok_or(EventError::RoundOutOfRange(round))?;
        let m = target
            .matches_mut()
            .get_mut(match_index)
            .ok_or(EventError::MatchOutOfRange {
                round,
                index: match_index,
            })?;
        m.set_results(results)?;
        debug!(round, match_index, "results recorded");
        Ok(())
    }

    pub fn rounds(&self) -> Vec<&Round> {
        self.segments.iter().flat_map(|s| s.rounds()).collect()
    }

    pub fn round_count(&self) -> usize {
        self.segments.iter().map(Segment::round_count).sum()
    }

    /// Round `number`, counted from 1 across the whole event
    pub fn round(&self, number: usize) -> Result<&Round> {
        self.segments
            .iter()
            .flat_map(|s| s.rounds())
            .nth(number.wrapping_sub(1))
            .ok_or(EventError::RoundOutOfRange(number))
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.segments.iter().flat_map(|s| s.rounds()).last()
    }

    pub fn matches_for_round(&self, number: usize) -> Result<&[Match]> {
        let round = self.round(number)?;
        if !round.has_matches() {
            return Err(EventError::RoundHasNoMatches(number));
        }
        Ok(round.matches())
    }

    pub fn participant_match(&self, id: ParticipantId, round: usize) -> Result<&Match> {
        self.check_known(id)?;
        self.round(round)?
            .match_for(id)
            .ok_or(EventError::NotInRound {
                participant: id,
                round,
            })
    }

    /// Every match `id` has been placed in, in round order
    pub fn participant_matches(&self, id: ParticipantId) -> Result<Vec<&Match>> {
        self.check_known(id)?;
        Ok(self.all_matches().filter(|m| m.contains(id)).collect())
    }

    fn all_matches(&self) -> impl Iterator<Item = &Match> {
        self.segments
            .iter()
            .flat_map(|s| s.rounds())
            .flat_map(|r| r.matches())
    }

    // =========================================================================
    // Standings and history
    // =========================================================================

    fn ranker(&self) -> StandingsRanker {
        StandingsRanker::from_matches(self.all_matches())
    }

    /// Pair and bye lookups over the whole event; losses only from
    /// eliminating rounds of the current segment.
    fn history(&self) -> HistoryIndex {
        let mut history = HistoryIndex::new();
        let current = self.segments.len().saturating_sub(1);
        for (i, segment) in self.segments.iter().enumerate() {
            for round in segment.rounds() {
                let counts_losses = i == current && round.counts_losses();
                for m in round.matches() {
                    history.record(m, counts_losses);
                }
            }
        }
        history
    }

    /// Every enrolled participant, best first
    pub fn standings(&self) -> Vec<Standing> {
        self.ranker().rank(&self.roster_ids())
    }

    pub fn standing_of(&self, id: ParticipantId) -> Result<Standing> {
        self.check_known(id)?;
        self.standings()
            .into_iter()
            .find(|s| s.participant == id)
            .ok_or(EventError::UnknownParticipant(id))
    }

    pub fn match_points(&self, id: ParticipantId) -> Result<u32> {
        self.check_known(id)?;
        Ok(self.ranker().match_points(id))
    }

    /// Match points earned in rounds 1 through `round`
    pub fn match_points_at_round(&self, id: ParticipantId, round: usize) -> Result<u32> {
        self.check_known(id)?;
        if round == 0 || round > self.round_count() {
            return Err(EventError::RoundOutOfRange(round));
        }
        let total = self
            .rounds()
            .into_iter()
            .take(round)
            .filter_map(|r| r.match_for(id))
            .filter(|m| m.has_results())
            .filter_map(|m| score(m, id).ok())
            .map(|s| s.match_points)
            .sum();
        Ok(total)
    }

    pub fn game_points(&self, id: ParticipantId) -> Result<u32> {
        self.check_known(id)?;
        Ok(self.ranker().record(id).map_or(0, |r| r.game_points))
    }

    pub fn games_played(&self, id: ParticipantId) -> Result<u32> {
        self.check_known(id)?;
        Ok(self.ranker().record(id).map_or(0, |r| r.games_played))
    }

    /// Losses counting toward elimination in the current segment
    pub fn loss_count(&self, id: ParticipantId) -> Result<u32> {
        self.check_known(id)?;
        Ok(self.history().loss_count(id))
    }

    pub fn have_played(&self, a: ParticipantId, b: ParticipantId) -> Result<bool> {
        self.check_known(a)?;
        self.check_known(b)?;
        Ok(self.history().have_played(a, b))
    }

    pub fn has_had_bye(&self, id: ParticipantId) -> Result<bool> {
        self.check_known(id)?;
        Ok(self.history().has_had_bye(id))
    }

    /// Everyone `id` has shared a match with, once per match
    pub fn opponents(&self, id: ParticipantId) -> Result<Vec<ParticipantId>> {
        self.check_known(id)?;
        Ok(self
            .all_matches()
            .filter(|m| m.contains(id))
            .flat_map(|m| m.participants().iter().copied().filter(move |&o| o != id))
            .collect())
    }

    // =========================================================================
    // Activity
    // =========================================================================

    pub fn status(&self, id: ParticipantId) -> Result<ParticipantStatus> {
        self.check_known(id)?;
        let active = match self.segments.last() {
            Some(segment) => segment.is_active(id),
            None => true,
        };
        Ok(if active {
            ParticipantStatus::Active
        } else {
            ParticipantStatus::Inactive
        })
    }

    /// Still playing in the current segment (everyone before the start)
    pub fn active_participants(&self) -> Vec<ParticipantId> {
        match self.segments.last() {
            Some(segment) => segment.active().to_vec(),
            None => self.roster_ids(),
        }
    }

    pub fn inactive_participants(&self) -> Vec<ParticipantId> {
        let active = self.active_participants();
        self.roster
            .iter()
            .map(|p| p.id)
            .filter(|id| !active.contains(id))
            .collect()
    }

    /// Withdraw a participant from future rounds of the current segment.
    pub fn deactivate(&mut self, id: ParticipantId) -> Result<()> {
        self.check_known(id)?;
        let segment = self.segments.last_mut().ok_or(EventError::NotStarted)?;
        segment.deactivate(id)?;
        info!(participant = %id, "participant deactivated");
        Ok(())
    }

    pub fn reactivate(&mut self, id: ParticipantId) -> Result<()> {
        self.check_known(id)?;
        let segment = self.segments.last_mut().ok_or(EventError::NotStarted)?;
        segment.reactivate(id)?;
        info!(participant = %id, "participant reactivated");
        Ok(())
    }

    // =========================================================================
    // Progress
    // =========================================================================

    /// Rounds needed to settle the current field: ceil(log2 n), doubled
    /// under double elimination, plus regulation rounds once in playoffs.
    pub fn suggested_round_count(&self) -> usize {
        let (field, elimination) = match self.segments.last() {
            Some(segment) if segment.kind() == SegmentKind::Playoff => {
                (segment.participants().len(), segment.rules().elimination)
            }
            Some(segment) => (segment.active().len(), segment.rules().elimination),
            None => (self.roster.len(), self.elimination),
        };

        let mut rounds = ceil_log2(field);
        if elimination == EliminationStyle::Double {
            rounds *= 2;
        }
        if self.in_playoffs() {
            rounds += self.segments.first().map_or(0, Segment::round_count);
        }
        rounds
    }

    /// Unscored matches in the current round
    pub fn outstanding_result_count(&self) -> usize {
        self.current_round().map_or(0, Round::outstanding_results)
    }

    pub fn completed_round_count(&self) -> usize {
        self.rounds().into_iter().filter(|r| r.is_complete()).count()
    }

    /// How many participants the next round would pair
    pub fn contender_count(&self) -> usize {
        match self.segments.last() {
            Some(segment) => {
                eligible(segment.active(), segment.rules().elimination, &self.history()).len()
            }
            None => self.roster.len(),
        }
    }
}

/// Last name, then first name, compared as written
fn roster_key(p: &Participant) -> (&str, &str) {
    (&p.last_name, &p.first_name)
}

fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    n.next_power_of_two().trailing_zeros() as usize
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod event_tests;
