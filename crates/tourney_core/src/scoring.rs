//! Match and game point accounting

use crate::error::{Result, TourneyError};
use crate::matchup::Match;
use crate::types::{ParticipantId, ScoringMode};

/// Match points for winning a head-to-head match
pub const WIN_POINTS: u32 = 3;
/// Match points for a drawn head-to-head match
pub const DRAW_POINTS: u32 = 1;
/// Game points per game won
pub const GAME_WIN_POINTS: u32 = 3;

/// Points one participant earned from a single match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub match_points: u32,
    pub game_points: u32,
}

/// Score `participant` in `m`.
///
/// Fails if the match has no results or the participant was not in it.
pub fn score(m: &Match, participant: ParticipantId) -> Result<MatchScore> {
    let index = m.index_of(participant)?;
    let results = m.results().ok_or(TourneyError::NoResults)?;

    match m.mode() {
        ScoringMode::HeadToHead => Ok(head_to_head(m, results, index)),
        ScoringMode::PlacementGroup => {
            let points = placement_points(results.get(index).copied().unwrap_or(0));
            Ok(MatchScore {
                match_points: points,
                game_points: points,
            })
        }
    }
}

fn head_to_head(m: &Match, results: &[u32], index: usize) -> MatchScore {
    let wins = results.get(index).copied().unwrap_or(0);

    if m.is_bye() {
        let match_points = if wins == 2 { WIN_POINTS } else { 0 };
        return MatchScore {
            match_points,
            game_points: 6,
        };
    }

    let losses = results.get((index + 1) % 2).copied().unwrap_or(0);
    let match_points = match wins.cmp(&losses) {
        std::cmp::Ordering::Greater => WIN_POINTS,
        std::cmp::Ordering::Equal => DRAW_POINTS,
        std::cmp::Ordering::Less => 0,
    };

    MatchScore {
        match_points,
        game_points: wins
            .saturating_mul(GAME_WIN_POINTS)
            .saturating_add(m.draws()),
    }
}

/// Placement code to points: 1st 6, 2nd 3, 3rd 1, anything else 0
pub fn placement_points(placement: u32) -> u32 {
    match placement {
        1 => 6,
        2 => 3,
        3 => 1,
        _ => 0,
    }
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod scoring_tests;
