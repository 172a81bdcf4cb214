//! Single-elimination bracket seeding

use crate::error::{Result, TourneyError};

/// Canonical seed order for a bracket of `count` slots.
///
/// Seeds are 1-based; adjacent pairs meet in the first round, and seed 1
/// can only meet the lowest surviving seed at every depth. `count` must be
/// a power of two.
///
/// ```
/// use tourney_core::seed_order;
/// assert_eq!(seed_order(8).unwrap(), vec![1, 8, 4, 5, 2, 7, 3, 6]);
/// ```
pub fn seed_order(count: usize) -> Result<Vec<usize>> {
    if !count.is_power_of_two() {
        return Err(TourneyError::CutNotPowerOfTwo(count));
    }
    if count == 1 {
        return Ok(vec![1]);
    }

    let mut order = vec![1, 2];
    while order.len() < count {
        order = next_layer(&order);
    }
    Ok(order)
}

fn next_layer(order: &[usize]) -> Vec<usize> {
    let mirror = order.len() * 2 + 1;
    order.iter().flat_map(|&seed| [seed, mirror - seed]).collect()
}

/// Arrange a ranked list (best first) into bracket order.
pub fn seed_participants<T: Clone>(ranked: &[T]) -> Result<Vec<T>> {
    Ok(seed_order(ranked.len())?
        .into_iter()
        .map(|seed| ranked[seed - 1].clone())
        .collect())
}

#[cfg(test)]
#[path = "seeding_tests.rs"]
mod seeding_tests;
