//! Change computation error types.

use thiserror::Error;

/// Errors raised while decomposing an amount into denominations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangeError {
    /// The active denominations cannot express the amount exactly.
    #[error("Cannot make change for {cents} minor units: {remaining} left over")]
    UnrepresentableChange {
        /// Amount requested.
        cents: u64,
        /// Part of it no denomination could cover.
        remaining: u64,
    },

    /// A denomination with zero value was supplied.
    #[error("Denomination '{0}' has zero value")]
    ZeroValueDenomination(String),
}
