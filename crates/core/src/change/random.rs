//! Randomized "decoy" change.
//!
//! Produces an exact decomposition with deliberately varied counts:
//!
//! 1. Shuffle the denominations.
//! 2. For every denomination but the last, draw a count uniformly from
//!    `0..=remaining / value`.
//! 3. The last denomination takes `remaining / value`.
//! 4. Anything still left is added to the smallest denomination, provided it
//!    divides evenly.
//!
//! The distribution is NOT uniform over all valid decompositions: whichever
//! denomination is shuffled last absorbs most of the amount. Outputs depend on
//! this bias, so keep it.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::currency::Denomination;

use super::breakdown::Breakdown;
use super::error::ChangeError;

/// Decomposes `cents` with randomized counts from the thread-local generator.
pub fn random_change(cents: u64, denominations: &[Denomination]) -> Result<Breakdown, ChangeError> {
    random_change_with_rng(cents, denominations, &mut rand::rng())
}

/// Decomposes `cents` with randomized counts drawn from `rng`.
pub fn random_change_with_rng<R: Rng + ?Sized>(
    cents: u64,
    denominations: &[Denomination],
    rng: &mut R,
) -> Result<Breakdown, ChangeError> {
    super::ensure_positive_values(denominations)?;

    let mut order: Vec<usize> = (0..denominations.len()).collect();
    order.shuffle(rng);

    let mut counts = vec![0u64; denominations.len()];
    let mut remaining = cents;
    if let Some((&last, rest)) = order.split_last() {
        for &index in rest {
            let value = denominations[index].value;
            let count = rng.random_range(0..=remaining / value);
            counts[index] = count;
            remaining -= count * value;
        }
        let value = denominations[last].value;
        counts[last] = remaining / value;
        remaining %= value;
    }

    if remaining > 0 {
        let smallest = denominations
            .iter()
            .enumerate()
            .min_by_key(|(_, denomination)| denomination.value)
            .map(|(index, _)| index);
        match smallest {
            Some(index) if remaining % denominations[index].value == 0 => {
                counts[index] += remaining / denominations[index].value;
            }
            _ => return Err(ChangeError::UnrepresentableChange { cents, remaining }),
        }
    }

    Ok(Breakdown::from_counts(denominations, &counts))
}
