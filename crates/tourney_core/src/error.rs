//! Errors raised by the core algorithms

use thiserror::Error;

use crate::types::ParticipantId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourneyError {
    #[error("participant {0} was not in this match")]
    NotInMatch(ParticipantId),
    #[error("match does not have results")]
    NoResults,
    #[error("result size mismatch: expected {expected} values, got {actual}")]
    ResultSizeMismatch { expected: usize, actual: usize },
    #[error("cut size must be a power of two, got {0}")]
    CutNotPowerOfTwo(usize),
}

pub type Result<T> = std::result::Result<T, TourneyError>;
