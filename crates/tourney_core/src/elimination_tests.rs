use super::*;
use crate::history::HistoryIndex;
use crate::matchup::Match;
use crate::types::ScoringMode;

fn id(n: u128) -> ParticipantId {
    ParticipantId::from_u128(n)
}

/// 1 beats 2, then 1 beats 3, then 3 beats 2: 2 has two losses, 3 has one.
fn history() -> HistoryIndex {
    let mut index = HistoryIndex::new();
    for (a, b) in [(1, 2), (1, 3), (3, 2)] {
        let mut m = Match::new(vec![id(a), id(b)], ScoringMode::HeadToHead);
        m.set_results(vec![2, 0, 0]).unwrap();
        index.record(&m, true);
    }
    index
}

#[test]
fn none_keeps_everyone() {
    let active = vec![id(3), id(1), id(2)];
    assert_eq!(eligible(&active, EliminationStyle::None, &history()), active);
}

#[test]
fn single_drops_any_loss() {
    let active = vec![id(1), id(2), id(3)];
    assert_eq!(
        eligible(&active, EliminationStyle::Single, &history()),
        vec![id(1)]
    );
}

#[test]
fn double_keeps_one_loss() {
    let active = vec![id(3), id(2), id(1)];
    assert_eq!(
        eligible(&active, EliminationStyle::Double, &history()),
        vec![id(3), id(1)]
    );
}
