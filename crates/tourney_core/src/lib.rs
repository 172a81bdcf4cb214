//! Tournament pairing core
//!
//! Pure, synchronous algorithms for running a multi-round competition:
//! - Scoring raw match results into match and game points
//! - Filtering participants by elimination rule
//! - Grouping participants into matches (Swiss, Danish, straight order)
//! - Seeding a power-of-two cut into a single-elimination bracket
//! - Ranking participants by the match-point tie-break cascade
//!
//! Lifecycle (segments, rounds, enrollment) lives in the `tournament` crate.

pub mod elimination;
pub mod error;
pub mod history;
pub mod matchup;
pub mod pairing;
pub mod scoring;
pub mod seeding;
pub mod standings;
pub mod types;

pub use elimination::eligible;
pub use error::{Result, TourneyError};
pub use history::{HistoryIndex, MatchHistory};
pub use matchup::Match;
pub use pairing::{pair, PairingEngine};
pub use scoring::{score, MatchScore};
pub use seeding::{seed_order, seed_participants};
pub use standings::{ParticipantRecord, Standing, StandingsRanker, WIN_PERCENTAGE_FLOOR};
pub use types::*;
