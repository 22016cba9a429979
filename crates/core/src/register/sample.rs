//! Sample transaction file generation.
//!
//! Owed amounts are drawn uniformly from `0.01..=max_value`. The customer pays
//! with one randomly chosen payment denomination, as many of it as needed to
//! cover the amount owed; with no payment denominations configured they pay
//! the next whole unit.

use changemaker_shared::types::format_amount;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::currency::CurrencyConfig;

/// One generated `(owed, paid)` pair in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleTransaction {
    /// Amount owed.
    pub owed_cents: u64,
    /// Amount tendered, never less than owed.
    pub paid_cents: u64,
}

/// Generates `count` transactions for `config`.
pub fn generate_transactions<R: Rng + ?Sized>(
    config: &CurrencyConfig,
    count: usize,
    rng: &mut R,
) -> Vec<SampleTransaction> {
    let max_cents = config.max_value.max(1) * 100;
    (0..count)
        .map(|_| {
            let owed_cents = rng.random_range(1..=max_cents);
            let unit = config
                .payment_denominations
                .choose(rng)
                .copied()
                .filter(|value| *value > 0)
                .unwrap_or(100);
            SampleTransaction {
                owed_cents,
                paid_cents: owed_cents.div_ceil(unit) * unit,
            }
        })
        .collect()
}

/// Renders transactions as a transaction file with a currency header.
pub fn render_sample_file(config: &CurrencyConfig, transactions: &[SampleTransaction]) -> String {
    let mut out = format!("CURRENCY:{}\n", config.code);
    for transaction in transactions {
        out.push_str(&format_amount(transaction.owed_cents));
        out.push(',');
        out.push_str(&format_amount(transaction.paid_cents));
        out.push('\n');
    }
    out
}
