//! Choice between minimum and randomized change.

use serde::Serialize;

use crate::currency::Denomination;

use super::breakdown::Breakdown;
use super::error::ChangeError;
use super::minimum::minimum_change;
use super::random::random_change;

/// Algorithm used to decompose one transaction's change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangePolicy {
    /// Greedy fewest-pieces change.
    Minimum,
    /// Randomized decoy change.
    Random,
}

impl ChangePolicy {
    /// Selects the policy for a transaction.
    ///
    /// Randomized when the owed whole units are positive and divisible by
    /// `divisor`; a `divisor` of zero never randomizes.
    ///
    /// ```
    /// use changemaker_core::change::ChangePolicy;
    ///
    /// assert_eq!(ChangePolicy::select(999, 3), ChangePolicy::Random);
    /// assert_eq!(ChangePolicy::select(450, 3), ChangePolicy::Minimum);
    /// ```
    #[must_use]
    pub fn select(owed_cents: u64, divisor: u32) -> Self {
        let owed_units = owed_cents / 100;
        if divisor > 0 && owed_units > 0 && owed_units % u64::from(divisor) == 0 {
            Self::Random
        } else {
            Self::Minimum
        }
    }

    /// Whether this is the randomized policy.
    pub fn is_random(self) -> bool {
        self == Self::Random
    }

    /// Decomposes `cents` with this policy.
    pub fn make_change(
        self,
        cents: u64,
        denominations: &[Denomination],
    ) -> Result<Breakdown, ChangeError> {
        match self {
            Self::Minimum => minimum_change(cents, denominations),
            Self::Random => random_change(cents, denominations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(999, 3, ChangePolicy::Random)]
    #[case(450, 3, ChangePolicy::Minimum)]
    #[case(213, 3, ChangePolicy::Minimum)]
    #[case(300, 3, ChangePolicy::Random)]
    #[case(99, 3, ChangePolicy::Minimum)]
    #[case(0, 3, ChangePolicy::Minimum)]
    #[case(1000, 5, ChangePolicy::Random)]
    #[case(1000, 3, ChangePolicy::Minimum)]
    #[case(123, 1, ChangePolicy::Random)]
    #[case(600, 0, ChangePolicy::Minimum)]
    fn test_select(#[case] owed: u64, #[case] divisor: u32, #[case] expected: ChangePolicy) {
        assert_eq!(ChangePolicy::select(owed, divisor), expected);
    }

    #[test]
    fn test_make_change_dispatch() {
        let coins = vec![
            Denomination::new("quarter", "quarters", 25),
            Denomination::new("penny", "pennies", 1),
        ];
        let minimum = ChangePolicy::Minimum.make_change(53, &coins).unwrap();
        assert_eq!(minimum.to_string(), "2 quarters, 3 pennies");

        let random = ChangePolicy::Random.make_change(53, &coins).unwrap();
        assert_eq!(random.total(), 53);
    }
}
