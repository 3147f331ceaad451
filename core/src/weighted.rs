//! Weighted random selection, the leaf primitive every generator uses.

use crate::{
    error::{GenError, GenResult},
    rng::GenRng,
};
use serde::{Deserialize, Serialize};

/// A value with a relative sampling weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedItem<T> {
    pub value: T,
    pub weight: f64,
}

impl<T> WeightedItem<T> {
    pub const fn new(value: T, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// Draw one value with probability proportional to its weight.
///
/// Fails with `InvalidInput` on an empty list, a negative or non-finite
/// weight, or a list whose weights sum to zero or overflow.
pub fn weighted_random<'a, T>(items: &'a [WeightedItem<T>], rng: &mut GenRng) -> GenResult<&'a T> {
    let total = total_weight(items)?;

    let mut remaining = rng.next_f64() * total;
    for item in items {
        if item.weight <= 0.0 {
            continue;
        }
        remaining -= item.weight;
        if remaining <= 0.0 {
            return Ok(&item.value);
        }
    }

    // Float drift only: total > 0 guarantees a positive-weight entry exists.
    items
        .iter()
        .rev()
        .find(|item| item.weight > 0.0)
        .map(|item| &item.value)
        .ok_or_else(|| GenError::invalid("weighted list has no positive weight"))
}

/// Validate a weighted list and return its total weight.
pub fn total_weight<T>(items: &[WeightedItem<T>]) -> GenResult<f64> {
    if items.is_empty() {
        return Err(GenError::invalid("weighted list is empty"));
    }
    let mut total = 0.0;
    for (i, item) in items.iter().enumerate() {
        if !item.weight.is_finite() || item.weight < 0.0 {
            return Err(GenError::invalid(format!(
                "weight at index {i} must be finite and non-negative, got {}",
                item.weight
            )));
        }
        total += item.weight;
    }
    if !total.is_finite() {
        return Err(GenError::invalid("weighted list total overflows"));
    }
    if total <= 0.0 {
        return Err(GenError::invalid("weighted list has no positive weight"));
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_invalid_input() {
        let mut rng = GenRng::from_seed(1);
        let items: Vec<WeightedItem<&str>> = Vec::new();
        assert!(matches!(
            weighted_random(&items, &mut rng),
            Err(GenError::InvalidInput(_))
        ));
    }

    #[test]
    fn negative_and_all_zero_weights_are_rejected() {
        let mut rng = GenRng::from_seed(1);
        let negative = [WeightedItem::new("a", 1.0), WeightedItem::new("b", -0.5)];
        assert!(weighted_random(&negative, &mut rng).is_err());

        let zero = [WeightedItem::new("a", 0.0), WeightedItem::new("b", 0.0)];
        assert!(weighted_random(&zero, &mut rng).is_err());

        let nan = [WeightedItem::new("a", f64::NAN)];
        assert!(weighted_random(&nan, &mut rng).is_err());
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let mut rng = GenRng::from_seed(1);
        let huge = [WeightedItem::new("a", f64::MAX), WeightedItem::new("b", f64::MAX)];
        assert!(matches!(
            weighted_random(&huge, &mut rng),
            Err(GenError::InvalidInput(_))
        ));
    }

    #[test]
    fn zero_weight_items_are_never_drawn() {
        let mut rng = GenRng::from_seed(5);
        let items = [
            WeightedItem::new("never", 0.0),
            WeightedItem::new("always", 1.0),
            WeightedItem::new("never-either", 0.0),
        ];
        for _ in 0..1_000 {
            assert_eq!(*weighted_random(&items, &mut rng).unwrap(), "always");
        }
    }

    #[test]
    fn proportions_pass_chi_square() {
        let mut rng = GenRng::from_seed(0xC0FFEE);
        let items = [
            WeightedItem::new(0usize, 0.5),
            WeightedItem::new(1usize, 0.3),
            WeightedItem::new(2usize, 0.2),
        ];
        const N: usize = 30_000;
        let mut counts = [0usize; 3];
        for _ in 0..N {
            counts[*weighted_random(&items, &mut rng).unwrap()] += 1;
        }

        let chi_square: f64 = items
            .iter()
            .zip(counts.iter())
            .map(|(item, &observed)| {
                let expected = item.weight * N as f64;
                (observed as f64 - expected).powi(2) / expected
            })
            .sum();

        // df = 2, p = 0.001 critical value.
        assert!(
            chi_square < 13.82,
            "chi-square {chi_square:.2} too large, counts {counts:?}"
        );
    }

    #[test]
    fn unnormalised_weights_work() {
        let mut rng = GenRng::from_seed(9);
        let items = [WeightedItem::new('a', 3.0), WeightedItem::new('b', 1.0)];
        let a_count = (0..4_000)
            .filter(|_| *weighted_random(&items, &mut rng).unwrap() == 'a')
            .count();
        let share = a_count as f64 / 4_000.0;
        assert!((share - 0.75).abs() < 0.03, "share of 'a' was {share}");
    }
}
