//! Whole-field pairing properties
//!
//! These run the engine the way an event does: pair a round, fill in
//! results, fold the round into history, re-rank, repeat.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tourney_core::{
    eligible, pair, EliminationStyle, HistoryIndex, Match, MatchHistory, PairingSystem,
    ParticipantId, ScoringMode, StandingsRanker,
};

fn field(n: u128) -> Vec<ParticipantId> {
    (1..=n).map(ParticipantId::from_u128).collect()
}

fn assert_partition(matches: &[Match], input: &[ParticipantId]) {
    let mut seen: Vec<ParticipantId> = matches
        .iter()
        .flat_map(|m| m.participants().iter().copied())
        .collect();
    let mut expected = input.to_vec();
    seen.sort();
    expected.sort();
    assert_eq!(seen, expected);
}

fn random_result(m: &Match, rng: &mut StdRng) -> Vec<u32> {
    match m.mode() {
        ScoringMode::HeadToHead => {
            if rng.gen_bool(0.5) {
                vec![2, rng.gen_range(0..2), 0]
            } else {
                vec![rng.gen_range(0..2), 2, 0]
            }
        }
        ScoringMode::PlacementGroup => {
            let mut ranks: Vec<u32> = (1..=m.participant_count() as u32).collect();
            ranks.shuffle(rng);
            ranks
        }
    }
}

// =============================================================================
// Fresh fields
// =============================================================================

#[test]
fn fresh_head_to_head_fields_pair_completely() {
    let history = HistoryIndex::new();
    for n in 1..=21u128 {
        let players = field(n);
        let mut rng = StdRng::seed_from_u64(n as u64);
        let matches = pair(
            &players,
            PairingSystem::Swiss,
            ScoringMode::HeadToHead.group_bounds(),
            EliminationStyle::None,
            ScoringMode::HeadToHead,
            &history,
            &mut rng,
        );

        let pairs = matches.iter().filter(|m| m.participant_count() == 2).count();
        let byes = matches.iter().filter(|m| m.is_bye()).count();
        assert_eq!(pairs as u128, n / 2, "field of {n}");
        assert_eq!(byes as u128, n % 2, "field of {n}");
        assert_partition(&matches, &players);
    }
}

#[test]
fn placement_groups_stay_within_bounds_when_possible() {
    let history = HistoryIndex::new();
    for n in [6u128, 7, 8, 10, 11, 12, 15, 16] {
        let players = field(n);
        let mut rng = StdRng::seed_from_u64(7);
        let matches = pair(
            &players,
            PairingSystem::None,
            ScoringMode::PlacementGroup.group_bounds(),
            EliminationStyle::None,
            ScoringMode::PlacementGroup,
            &history,
            &mut rng,
        );
        assert_partition(&matches, &players);
        for m in &matches {
            assert!((3..=4).contains(&m.participant_count()), "field of {n}");
        }
    }
}

// =============================================================================
// Multi-round Swiss
// =============================================================================

#[test]
fn swiss_rounds_always_partition_the_field() {
    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let players = field(9);
        let mut played: Vec<Match> = Vec::new();

        for _ in 0..5 {
            let history = HistoryIndex::from_matches(&played);
            let order = StandingsRanker::from_matches(&played).order(&players);
            let mut matches = pair(
                &order,
                PairingSystem::Swiss,
                ScoringMode::HeadToHead.group_bounds(),
                EliminationStyle::None,
                ScoringMode::HeadToHead,
                &history,
                &mut rng,
            );
            assert_partition(&matches, &players);

            for m in matches.iter_mut().filter(|m| !m.has_results()) {
                let results = random_result(m, &mut rng);
                m.set_results(results).unwrap();
            }
            played.extend(matches);
        }
    }
}

#[test]
fn first_swiss_rounds_avoid_rematches_in_a_large_field() {
    let mut rng = StdRng::seed_from_u64(99);
    let players = field(16);
    let mut played: Vec<Match> = Vec::new();

    for round in 0..3 {
        let history = HistoryIndex::from_matches(&played);
        let order = StandingsRanker::from_matches(&played).order(&players);
        let mut matches = pair(
            &order,
            PairingSystem::Swiss,
            ScoringMode::HeadToHead.group_bounds(),
            EliminationStyle::None,
            ScoringMode::HeadToHead,
            &history,
            &mut rng,
        );

        for m in &matches {
            if let [a, b] = m.participants() {
                if round < 2 {
                    assert!(!history.have_played(*a, *b), "round {round} rematch");
                }
            }
        }
        assert_partition(&matches, &players);

        for m in matches.iter_mut().filter(|m| !m.has_results()) {
            let results = random_result(m, &mut rng);
            m.set_results(results).unwrap();
        }
        played.extend(matches);
    }
}

#[test]
fn single_elimination_halves_the_field_each_round() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut active = field(8);
    let mut played: Vec<Match> = Vec::new();

    for expected in [8usize, 4, 2, 1] {
        let history = HistoryIndex::from_matches(&played);
        active = eligible(&active, EliminationStyle::Single, &history);
        assert_eq!(active.len(), expected);
        if active.len() == 1 {
            break;
        }

        let mut matches = pair(
            &active,
            PairingSystem::None,
            ScoringMode::HeadToHead.group_bounds(),
            EliminationStyle::Single,
            ScoringMode::HeadToHead,
            &history,
            &mut rng,
        );
        for m in matches.iter_mut() {
            let results = random_result(m, &mut rng);
            m.set_results(results).unwrap();
        }
        played.extend(matches);
    }
}
