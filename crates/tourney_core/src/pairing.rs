//! Round pairing engine
//!
//! Participants arrive already ordered (seeded, by standings, or shuffled)
//! and are poured into a chain of groups. Each group holds between
//! `bounds.min` and `bounds.max` participants. Under the Swiss discipline a
//! participant skips past any group containing someone they have already
//! played.
//!
//! Once everyone is placed, the chain is cleaned up from the tail:
//! - placement groups borrow members from their predecessor until they
//!   reach the minimum size
//! - head-to-head byes are handed to someone else when the bye holder
//!   already had one, or when two byes would sit next to each other
//!
//! The chain is an index-addressed arena: node `i`'s predecessor is `i - 1`
//! and its successor is `i + 1`.

use rand::Rng;
use tracing::{debug, trace};

use crate::history::MatchHistory;
use crate::matchup::Match;
use crate::types::{EliminationStyle, GroupBounds, PairingSystem, ParticipantId, ScoringMode};

/// Pair one round.
///
/// Under double elimination with placement scoring, participants without a
/// loss and participants with one are grouped separately and the winners'
/// matches come first. Every other combination is paired as a single pool.
pub fn pair<H, R>(
    ordered: &[ParticipantId],
    system: PairingSystem,
    bounds: GroupBounds,
    elimination: EliminationStyle,
    mode: ScoringMode,
    history: &H,
    rng: &mut R,
) -> Vec<Match>
where
    H: MatchHistory + ?Sized,
    R: Rng + ?Sized,
{
    let mut engine = PairingEngine::new(system, bounds, mode, history, rng);

    if elimination != EliminationStyle::Double || mode == ScoringMode::HeadToHead {
        return engine.pair_pool(ordered);
    }

    let (winners, losers): (Vec<ParticipantId>, Vec<ParticipantId>) = ordered
        .iter()
        .copied()
        .partition(|&p| history.loss_count(p) == 0);
    debug!(
        winners = winners.len(),
        losers = losers.len(),
        "split double elimination brackets"
    );

    let mut matches = engine.pair_pool(&winners);
    matches.extend(engine.pair_pool(&losers));
    matches
}

/// Groups one pool of participants into matches.
pub struct PairingEngine<'a, H: ?Sized, R: ?Sized> {
    system: PairingSystem,
    bounds: GroupBounds,
    mode: ScoringMode,
    history: &'a H,
    rng: &'a mut R,
}

impl<'a, H, R> PairingEngine<'a, H, R>
where
    H: MatchHistory + ?Sized,
    R: Rng + ?Sized,
{
    pub fn new(
        system: PairingSystem,
        bounds: GroupBounds,
        mode: ScoringMode,
        history: &'a H,
        rng: &'a mut R,
    ) -> Self {
        Self {
            system,
            bounds,
            mode,
            history,
            rng,
        }
    }

    /// Pair a single pool. An empty pool yields no matches.
    pub fn pair_pool(&mut self, ordered: &[ParticipantId]) -> Vec<Match> {
        if ordered.is_empty() {
            return Vec::new();
        }

        let mut chain = PairingChain {
            nodes: vec![Vec::new()],
            bounds: self.bounds,
            avoid_rematches: self.system.avoids_rematches(),
            history: self.history,
        };
        for &p in ordered {
            chain.insert_from(0, p);
        }
        trace!(groups = chain.nodes.len(), "participants placed");

        chain.cleanup(&mut *self.rng, ordered.len());

        chain
            .nodes
            .into_iter()
            .map(|group| Match::new(group, self.mode))
            .collect()
    }
}

// =============================================================================
// Group chain
// =============================================================================

struct PairingChain<'a, H: ?Sized> {
    nodes: Vec<Vec<ParticipantId>>,
    bounds: GroupBounds,
    avoid_rematches: bool,
    history: &'a H,
}

impl<H: MatchHistory + ?Sized> PairingChain<'_, H> {
    /// Place `p` in the first node at or after `start` that will take it,
    /// growing the chain if nothing will.
    fn insert_from(&mut self, start: usize, p: ParticipantId) {
        let mut index = start;
        loop {
            if index == self.nodes.len() {
                self.nodes.push(Vec::new());
            }
            let node = &self.nodes[index];
            let has_room = node.len() < self.bounds.max;
            let clashes = self.avoid_rematches
                && node.iter().any(|&other| self.history.have_played(p, other));

            if has_room && !clashes {
                self.nodes[index].push(p);
                return;
            }
            index += 1;
        }
    }

    fn cleanup<R: Rng + ?Sized>(&mut self, rng: &mut R, pool_size: usize) {
        // Nodes appended while cleaning up are not revisited.
        let placed = self.nodes.len();
        for index in (0..placed).rev() {
            if self.bounds.max > 2 {
                self.fill_from_previous(index);
            } else if self.nodes[index].len() == 1 {
                self.resolve_bye(index, rng, pool_size);
            }
        }
        self.nodes.retain(|node| !node.is_empty());
    }

    /// Keep trailing placement groups viable by borrowing from the predecessor.
    fn fill_from_previous(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let min = self.bounds.min;
        while self.nodes[index].len() < min && self.nodes[index - 1].len() > min {
            if let Some(moved) = self.nodes[index - 1].pop() {
                self.nodes[index].push(moved);
            }
        }
    }

    /// Try to hand a lone participant's bye to someone better suited.
    fn resolve_bye<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R, pool_size: usize) {
        if index == 0 {
            return;
        }

        for _ in 0..pool_size {
            let Some(&candidate) = self.nodes[index].first() else {
                return;
            };
            let previous_is_single = self.nodes[index - 1].len() == 1;
            if !self.history.has_had_bye(candidate) && !previous_is_single {
                return;
            }

            self.nodes[index].retain(|&p| p != candidate);
            if self.find_new_opponent(index - 1, candidate, rng) {
                debug!(participant = %candidate, "bye reassigned");
                continue;
            }

            if self.nodes[index - 1].len() == 1 {
                // Two byes in a row are worse than a rematch.
                debug!(participant = %candidate, "accepting unavoidable rematch");
                self.nodes[index - 1].push(candidate);
            } else {
                debug!(participant = %candidate, "accepting unavoidable bye");
                self.nodes[index].push(candidate);
            }
            return;
        }

        // Out of attempts with swaps still bouncing someone back into the
        // bye slot: never leave two byes side by side.
        if self.nodes[index].len() == 1 && self.nodes[index - 1].len() == 1 {
            if let Some(candidate) = self.nodes[index].pop() {
                debug!(participant = %candidate, "accepting rematch after repeated swaps");
                self.nodes[index - 1].push(candidate);
            }
        }
    }

    /// Walk back from `start` looking for a node that can absorb `candidate`.
    fn find_new_opponent<R: Rng + ?Sized>(
        &mut self,
        start: usize,
        candidate: ParticipantId,
        rng: &mut R,
    ) -> bool {
        let min = self.bounds.min;
        for index in (0..=start).rev() {
            let node_len = self.nodes[index].len();

            if node_len > min && node_len >= 2 {
                let first = self.nodes[index][0];
                let second = self.nodes[index][1];
                let order = if rng.gen_bool(0.5) {
                    [(first, second), (second, first)]
                } else {
                    [(second, first), (first, second)]
                };

                for (stays, displaced) in order {
                    if !self.history.have_played(candidate, stays) {
                        trace!(%candidate, %stays, %displaced, "swapping into group");
                        self.nodes[index].retain(|&p| p != displaced);
                        self.nodes[index].push(candidate);
                        self.insert_from(index, displaced);
                        return true;
                    }
                }
            } else if node_len == min && node_len > 0 {
                let sole = self.nodes[index][0];
                if !self.history.have_played(candidate, sole) {
                    self.nodes[index].push(candidate);
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
