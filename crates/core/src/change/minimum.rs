//! Greedy minimum-count change.
//!
//! Greedy is optimal for canonical coin systems, which every real currency
//! uses. For arbitrary sets (e.g. 25/10 with 30 owed) it can fail or use more
//! pieces than necessary; that is accepted.

use crate::currency::Denomination;

use super::breakdown::Breakdown;
use super::error::ChangeError;

/// Decomposes `cents` taking as many of each denomination as fit, largest
/// first.
pub fn minimum_change(cents: u64, denominations: &[Denomination]) -> Result<Breakdown, ChangeError> {
    super::ensure_positive_values(denominations)?;

    let mut order: Vec<usize> = (0..denominations.len()).collect();
    order.sort_by(|a, b| denominations[*b].value.cmp(&denominations[*a].value));

    let mut counts = vec![0u64; denominations.len()];
    let mut remaining = cents;
    for index in order {
        if remaining == 0 {
            break;
        }
        let value = denominations[index].value;
        counts[index] = remaining / value;
        remaining %= value;
    }

    if remaining > 0 {
        return Err(ChangeError::UnrepresentableChange { cents, remaining });
    }
    Ok(Breakdown::from_counts(denominations, &counts))
}
