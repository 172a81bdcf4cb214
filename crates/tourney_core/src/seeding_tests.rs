use super::*;

#[test]
fn standard_bracket_orders() {
    assert_eq!(seed_order(1).unwrap(), vec![1]);
    assert_eq!(seed_order(2).unwrap(), vec![1, 2]);
    assert_eq!(seed_order(4).unwrap(), vec![1, 4, 2, 3]);
    assert_eq!(seed_order(8).unwrap(), vec![1, 8, 4, 5, 2, 7, 3, 6]);
}

#[test]
fn sixteen_is_a_permutation_with_mirrored_pairs() {
    let order = seed_order(16).unwrap();
    let mut sorted = order.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (1..=16).collect::<Vec<_>>());

    for pair in order.chunks(2) {
        assert_eq!(pair[0] + pair[1], 17);
    }
}

#[test]
fn rejects_non_powers_of_two() {
    for count in [0, 3, 6, 12] {
        assert_eq!(seed_order(count), Err(TourneyError::CutNotPowerOfTwo(count)));
    }
}

#[test]
fn seeds_a_ranked_list() {
    let ranked = ["first", "second", "third", "fourth"];
    assert_eq!(
        seed_participants(&ranked).unwrap(),
        vec!["first", "fourth", "second", "third"]
    );
}
