//! Event lifecycle errors

use thiserror::Error;
use tourney_core::{ParticipantId, TourneyError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("event has not begun yet")]
    NotStarted,
    #[error("event has begun; cannot change {0}")]
    SettingsLocked(&'static str),
    #[error("event has begun; cannot start regulation play a second time")]
    RegulationAlreadyStarted,
    #[error("event has not begun; cannot start playoffs")]
    RegulationNotStarted,
    #[error("playoff play has begun; cannot start playoff play a second time")]
    PlayoffAlreadyStarted,
    #[error("round {0} is outside the acceptable range")]
    RoundOutOfRange(usize),
    #[error("round {0} does not have matches")]
    RoundHasNoMatches(usize),
    #[error("current segment has no rounds")]
    NoRoundsInSegment,
    #[error("round {round} has no match {index}")]
    MatchOutOfRange { round: usize, index: usize },
    #[error("participant {participant} was not in round {round}")]
    NotInRound {
        participant: ParticipantId,
        round: usize,
    },
    #[error("no such participant: {0}")]
    UnknownParticipant(ParticipantId),
    #[error("participant already in event: {0}")]
    DuplicateParticipant(ParticipantId),
    #[error("participant {0} is already active")]
    AlreadyActive(ParticipantId),
    #[error("participant {0} is already inactive")]
    AlreadyInactive(ParticipantId),
    #[error("participant {0} is not involved in this segment")]
    NotInSegment(ParticipantId),
    #[error("cut of {cut} exceeds the {available} active participants")]
    CutTooLarge { cut: usize, available: usize },
    #[error(transparent)]
    Core(#[from] TourneyError),
}

pub type Result<T> = std::result::Result<T, EventError>;
