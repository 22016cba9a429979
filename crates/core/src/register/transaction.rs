//! Per-transaction processing.

use changemaker_shared::types::{format_amount, parse_amount};
use tracing::{debug, warn};

use crate::change::{ChangePolicy, round_to_nickel};
use crate::currency::{CurrencyConfig, Denomination};

use super::error::{RegisterError, TransactionError};
use super::types::{ChangeLine, FileEntry, FileResult, RejectedLine};

/// Computes change for transactions in one currency.
///
/// Holds the resolved configuration and its active denominations so a whole
/// file is processed against one consistent view.
#[derive(Debug, Clone)]
pub struct CashRegister {
    config: CurrencyConfig,
    active: Vec<Denomination>,
}

impl CashRegister {
    /// Creates a register for a resolved configuration.
    pub fn new(config: CurrencyConfig) -> Self {
        let active = config.active_denominations();
        Self { config, active }
    }

    /// The configuration in use.
    pub fn config(&self) -> &CurrencyConfig {
        &self.config
    }

    /// Denominations handed out, largest first.
    pub fn active_denominations(&self) -> &[Denomination] {
        &self.active
    }

    /// Processes one transaction given as decimal text.
    pub fn process(&self, owed: &str, paid: &str) -> Result<ChangeLine, RegisterError> {
        let owed = parse_amount(owed)
            .map_err(|source| TransactionError::InvalidAmount { field: "owed", source })?;
        let paid = parse_amount(paid)
            .map_err(|source| TransactionError::InvalidAmount { field: "paid", source })?;
        self.process_cents(owed, paid)
    }

    /// Processes one transaction given in minor units.
    ///
    /// Change that rounds to zero without pennies is reported as no change.
    pub fn process_cents(&self, owed_cents: u64, paid_cents: u64) -> Result<ChangeLine, RegisterError> {
        let Some(exact) = paid_cents.checked_sub(owed_cents) else {
            return Err(TransactionError::InsufficientPayment {
                owed: format_amount(owed_cents),
                paid: format_amount(paid_cents),
            }
            .into());
        };

        let change_cents = if self.config.rounds_to_nickel() {
            round_to_nickel(exact)
        } else {
            exact
        };
        if change_cents == 0 {
            return Ok(ChangeLine::no_change(owed_cents, paid_cents));
        }

        let policy = ChangePolicy::select(owed_cents, self.config.random_divisor);
        let breakdown = policy.make_change(change_cents, &self.active)?;
        debug!(
            owed_cents,
            paid_cents,
            change_cents,
            ?policy,
            "Computed change"
        );

        Ok(ChangeLine {
            owed_cents,
            paid_cents,
            change_cents,
            policy,
            breakdown,
        })
    }

    /// Processes `(line_number, text)` transaction lines in order.
    ///
    /// Blank lines are skipped. A failing line becomes a rejected entry and
    /// processing continues with the next one.
    pub fn process_lines<'a, I>(&self, lines: I) -> FileResult
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let mut entries = Vec::new();
        for (line_number, text) in lines {
            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            let outcome = match text.split_once(',') {
                Some((owed, paid)) => self.process(owed, paid),
                None => Err(TransactionError::MalformedLine(text.to_string()).into()),
            };
            let entry = match outcome {
                Ok(line) => FileEntry::Processed(line),
                Err(err) => {
                    warn!(line_number, input = text, error = %err, "Rejected transaction");
                    FileEntry::Rejected(RejectedLine {
                        line_number,
                        input: text.to_string(),
                        error: err.to_string(),
                    })
                }
            };
            entries.push(entry);
        }

        FileResult {
            currency: self.config.code.clone(),
            divisor: self.config.random_divisor,
            has_random: entries.iter().any(FileEntry::used_random),
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::ChangeError;
    use crate::currency::{USE_HALF_DOLLARS, USE_PENNIES};
    use changemaker_shared::AmountError;

    fn usd() -> CurrencyConfig {
        CurrencyConfig::new(
            "USD".parse().unwrap(),
            "US Dollar",
            vec![
                Denomination::new("twenty", "twenties", 2000),
                Denomination::new("ten", "tens", 1000),
                Denomination::new("five", "fives", 500),
                Denomination::new("dollar", "dollars", 100),
                Denomination::new("half dollar", "half dollars", 50).with_flag(USE_HALF_DOLLARS),
                Denomination::new("quarter", "quarters", 25),
                Denomination::new("dime", "dimes", 10),
                Denomination::new("nickel", "nickels", 5),
                Denomination::new("penny", "pennies", 1).with_flag(USE_PENNIES),
            ],
        )
    }

    #[test]
    fn test_process_minimum_change() {
        let register = CashRegister::new(usd());
        let line = register.process("2.13", "3.00").unwrap();

        assert_eq!(line.change_cents, 87);
        assert_eq!(line.policy, ChangePolicy::Minimum);
        assert_eq!(
            line.to_string(),
            "2.13, 3.00, 0.87: 3 quarters, 1 dime, 2 pennies"
        );
    }

    #[test]
    fn test_process_randomized_when_divisible() {
        let register = CashRegister::new(usd());
        let line = register.process("3.33", "5.00").unwrap();

        assert!(line.used_random());
        assert_eq!(line.change_cents, 167);
        assert_eq!(line.breakdown.total(), 167);
        assert!(line.to_string().starts_with("*3.33, 5.00, 1.67: "));
    }

    #[test]
    fn test_process_without_pennies_rounds_change() {
        let mut config = usd();
        config.use_pennies = false;
        let register = CashRegister::new(config);
        let line = register.process("2.13", "3.00").unwrap();

        assert_eq!(line.change_cents, 85);
        assert_eq!(line.to_string(), "2.13, 3.00, 0.85: 3 quarters, 1 dime");
    }

    #[test]
    fn test_process_with_half_dollars() {
        let mut config = usd();
        config.use_half_dollars = true;
        let register = CashRegister::new(config);
        let line = register.process("1.25", "2.00").unwrap();

        assert_eq!(line.to_string(), "1.25, 2.00, 0.75: 1 half dollar, 1 quarter");
    }

    #[test]
    fn test_process_exact_payment() {
        let register = CashRegister::new(usd());
        let line = register.process("3.00", "3.00").unwrap();

        assert_eq!(line, ChangeLine::no_change(300, 300));
        assert_eq!(line.to_string(), "3.00, 3.00, 0.00: no change");
    }

    #[test]
    fn test_process_change_rounded_to_zero() {
        let mut config = usd();
        config.use_pennies = false;
        let register = CashRegister::new(config);
        // 3 owed whole units would randomize, but there is nothing to hand out
        let line = register.process("3.00", "3.02").unwrap();

        assert!(!line.used_random());
        assert_eq!(line.to_string(), "3.00, 3.02, 0.00: no change");
    }

    #[test]
    fn test_process_insufficient_payment() {
        let register = CashRegister::new(usd());
        let err = register.process("5.00", "4.99").unwrap_err();

        assert!(matches!(
            err,
            RegisterError::InvalidTransaction(TransactionError::InsufficientPayment { .. })
        ));
    }

    #[test]
    fn test_process_invalid_amount() {
        let register = CashRegister::new(usd());
        let err = register.process("abc", "4.99").unwrap_err();

        assert!(matches!(
            err,
            RegisterError::InvalidTransaction(TransactionError::InvalidAmount {
                field: "owed",
                source: AmountError::Malformed(_),
            })
        ));
    }

    #[test]
    fn test_process_unrepresentable() {
        let config = CurrencyConfig::new(
            "GAP".parse().unwrap(),
            "Gapped",
            vec![
                Denomination::new("quarter", "quarters", 25),
                Denomination::new("dime", "dimes", 10),
            ],
        );
        let register = CashRegister::new(config);
        let err = register.process("1.70", "2.00").unwrap_err();

        assert!(matches!(
            err,
            RegisterError::Unrepresentable(ChangeError::UnrepresentableChange { cents: 30, .. })
        ));
    }

    #[test]
    fn test_process_lines_keeps_order_and_rejects_in_place() {
        let register = CashRegister::new(usd());
        let result = register.process_lines([
            (2, "2.13,3.00"),
            (3, "5.00,1.00"),
            (4, ""),
            (5, "not a line"),
            (6, "1.97, 2.00"),
        ]);

        assert_eq!(result.currency.as_str(), "USD");
        assert_eq!(result.divisor, 3);
        assert!(!result.has_random);
        assert_eq!(
            result.result_lines(),
            vec![
                "2.13, 3.00, 0.87: 3 quarters, 1 dime, 2 pennies".to_string(),
                "! line 3: 5.00,1.00: Invalid transaction: amount paid (1.00) is less than amount owed (5.00)".to_string(),
                "! line 5: not a line: Invalid transaction: expected '<owed>,<paid>', got 'not a line'".to_string(),
                "1.97, 2.00, 0.03: 3 pennies".to_string(),
            ]
        );
    }

    #[test]
    fn test_process_lines_flags_randomization() {
        let register = CashRegister::new(usd());
        let result = register.process_lines([(1, "2.13,3.00"), (2, "9.99,20.00")]);

        assert!(result.has_random);
        assert!(!result.entries[0].used_random());
        assert!(result.entries[1].used_random());
    }
}
