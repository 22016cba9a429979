//! Property-based tests for change computation.
//!
//! - Sum invariant: every breakdown adds up to the requested amount
//! - Presentation: descending values, no zero counts
//! - Nickel rounding: idempotent, multiple of 5, off by at most 2

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::breakdown::Breakdown;
use super::minimum::minimum_change;
use super::random::random_change_with_rng;
use super::rounding::round_to_nickel;
use crate::currency::Denomination;

/// Canonical coin and bill set with a unit coin, optionally with a half dollar.
fn arb_denominations() -> impl Strategy<Value = Vec<Denomination>> {
    any::<bool>().prop_map(|half_dollars| {
        let mut denominations = vec![
            Denomination::new("twenty", "twenties", 2000),
            Denomination::new("five", "fives", 500),
            Denomination::new("dollar", "dollars", 100),
        ];
        if half_dollars {
            denominations.push(Denomination::new("half dollar", "half dollars", 50));
        }
        denominations.extend([
            Denomination::new("quarter", "quarters", 25),
            Denomination::new("dime", "dimes", 10),
            Denomination::new("nickel", "nickels", 5),
            Denomination::new("penny", "pennies", 1),
        ]);
        denominations
    })
}

/// Strategy for change amounts (0.00 to 999.99).
fn arb_cents() -> impl Strategy<Value = u64> {
    0u64..100_000
}

fn is_presentable(breakdown: &Breakdown) -> bool {
    let items = breakdown.items();
    items.iter().all(|item| item.count > 0)
        && items
            .windows(2)
            .all(|pair| pair[0].denomination.value > pair[1].denomination.value)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Minimum change adds up to the requested amount.
    #[test]
    fn prop_minimum_change_sums_exactly(
        cents in arb_cents(),
        denominations in arb_denominations(),
    ) {
        let breakdown = minimum_change(cents, &denominations).unwrap();
        prop_assert_eq!(breakdown.total(), cents);
    }

    /// Minimum change is strictly descending with no zero counts.
    #[test]
    fn prop_minimum_change_is_presentable(
        cents in arb_cents(),
        denominations in arb_denominations(),
    ) {
        let breakdown = minimum_change(cents, &denominations).unwrap();
        prop_assert!(is_presentable(&breakdown), "bad ordering: {}", breakdown);
    }

    /// Randomized change satisfies the same sum invariant as minimum change.
    #[test]
    fn prop_random_change_sums_exactly(
        cents in arb_cents(),
        denominations in arb_denominations(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let random = random_change_with_rng(cents, &denominations, &mut rng).unwrap();
        let minimum = minimum_change(cents, &denominations).unwrap();
        prop_assert_eq!(random.total(), minimum.total());
        prop_assert_eq!(random.total(), cents);
        prop_assert!(is_presentable(&random), "bad ordering: {}", random);
    }

    /// Randomized change never uses fewer pieces than greedy on a canonical set.
    #[test]
    fn prop_random_change_never_beats_minimum(
        cents in arb_cents(),
        denominations in arb_denominations(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let random = random_change_with_rng(cents, &denominations, &mut rng).unwrap();
        let minimum = minimum_change(cents, &denominations).unwrap();
        prop_assert!(random.piece_count() >= minimum.piece_count());
    }

    /// Nickel rounding is idempotent and lands on a multiple of 5.
    #[test]
    fn prop_round_to_nickel_idempotent(cents in 0u64..1_000_000_000) {
        let once = round_to_nickel(cents);
        prop_assert_eq!(round_to_nickel(once), once);
        prop_assert_eq!(once % 5, 0);
        prop_assert!(once.abs_diff(cents) <= 2);
    }
}
