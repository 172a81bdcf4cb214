use super::*;
use crate::types::ScoringMode;

fn id(n: u128) -> ParticipantId {
    ParticipantId::from_u128(n)
}

fn played(a: u128, b: u128, results: Vec<u32>) -> Match {
    let mut m = Match::new(vec![id(a), id(b)], ScoringMode::HeadToHead);
    m.set_results(results).unwrap();
    m
}

#[test]
fn pairs_are_symmetric() {
    let index = HistoryIndex::from_matches(&[played(1, 2, vec![2, 0, 0])]);
    assert!(index.have_played(id(1), id(2)));
    assert!(index.have_played(id(2), id(1)));
    assert!(!index.have_played(id(1), id(3)));
}

#[test]
fn byes_are_tracked() {
    let bye = Match::new(vec![id(5)], ScoringMode::HeadToHead);
    let index = HistoryIndex::from_matches([&bye]);
    assert!(index.has_had_bye(id(5)));
    assert!(!index.has_had_bye(id(6)));
    // a bye is a win, never a loss
    assert_eq!(index.loss_count(id(5)), 0);
}

#[test]
fn losses_only_count_when_flagged() {
    let mut index = HistoryIndex::new();
    index.record(&played(1, 2, vec![2, 1, 0]), true);
    index.record(&played(1, 3, vec![0, 2, 0]), false);
    index.record(&played(2, 3, vec![1, 1, 0]), true);

    assert_eq!(index.loss_count(id(1)), 0);
    assert_eq!(index.loss_count(id(2)), 1);
    assert_eq!(index.loss_count(id(3)), 0);
    assert!(index.have_played(id(1), id(3)));
}

#[test]
fn unscored_matches_register_pairings_but_no_losses() {
    let pending = Match::new(vec![id(1), id(2)], ScoringMode::HeadToHead);
    let index = HistoryIndex::from_matches([&pending]);
    assert!(index.have_played(id(1), id(2)));
    assert_eq!(index.loss_count(id(1)), 0);
}
