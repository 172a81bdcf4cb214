//! Elimination filter applied before each round is paired

use tracing::debug;

use crate::history::MatchHistory;
use crate::types::{EliminationStyle, ParticipantId};

/// Participants from `active` still allowed to play, in their original order.
pub fn eligible<H: MatchHistory + ?Sized>(
    active: &[ParticipantId],
    style: EliminationStyle,
    history: &H,
) -> Vec<ParticipantId> {
    let Some(threshold) = style.loss_threshold() else {
        return active.to_vec();
    };

    active
        .iter()
        .copied()
        .filter(|&p| {
            let losses = history.loss_count(p);
            let keep = losses < threshold;
            if !keep {
                debug!(participant = %p, losses, %style, "eliminated");
            }
            keep
        })
        .collect()
}

#[cfg(test)]
#[path = "elimination_tests.rs"]
mod elimination_tests;
