use super::*;

fn id(n: u128) -> ParticipantId {
    ParticipantId::from_u128(n)
}

#[test]
fn head_to_head_bye_is_scored_on_creation() {
    let bye = Match::new(vec![id(1)], ScoringMode::HeadToHead);
    assert!(bye.is_bye());
    assert_eq!(bye.results(), Some(&BYE_RESULT[..]));
    assert_eq!(bye.games_played(), 2);
}

#[test]
fn placement_singleton_is_not_auto_scored() {
    let single = Match::new(vec![id(1)], ScoringMode::PlacementGroup);
    assert!(!single.has_results());
}

#[test]
fn rejects_wrong_result_length() {
    let mut m = Match::new(vec![id(1), id(2)], ScoringMode::HeadToHead);
    let err = m.set_results(vec![2, 1]).unwrap_err();
    assert_eq!(
        err,
        TourneyError::ResultSizeMismatch {
            expected: 3,
            actual: 2
        }
    );
    assert!(!m.has_results());

    let mut group = Match::new(vec![id(1), id(2), id(3)], ScoringMode::PlacementGroup);
    assert!(group.set_results(vec![1, 2, 3, 4]).is_err());
    assert!(group.set_results(vec![2, 1, 3]).is_ok());
    assert_eq!(group.games_played(), 1);
}

#[test]
fn empty_results_clear_the_match() {
    let mut m = Match::new(vec![id(1), id(2)], ScoringMode::HeadToHead);
    m.set_results(vec![2, 1, 1]).unwrap();
    assert_eq!(m.games_played(), 4);
    assert_eq!(m.draws(), 1);

    m.set_results(Vec::new()).unwrap();
    assert!(!m.has_results());
    assert_eq!(m.games_played(), 0);
}

#[test]
fn opponents_excludes_self() {
    let m = Match::new(vec![id(1), id(2), id(3)], ScoringMode::PlacementGroup);
    assert_eq!(m.opponents(id(2)).unwrap(), vec![id(1), id(3)]);
    assert_eq!(m.opponents(id(9)), Err(TourneyError::NotInMatch(id(9))));
}
