//! Change computation: rounding, the two decomposition algorithms, and the
//! policy that picks between them.

pub mod breakdown;
pub mod error;
pub mod minimum;
pub mod policy;
pub mod random;
pub mod rounding;

#[cfg(test)]
mod props;

pub use breakdown::{Breakdown, ChangeItem};
pub use error::ChangeError;
pub use minimum::minimum_change;
pub use policy::ChangePolicy;
pub use random::{random_change, random_change_with_rng};
pub use rounding::round_to_nickel;

use crate::currency::Denomination;

fn ensure_positive_values(denominations: &[Denomination]) -> Result<(), ChangeError> {
    match denominations.iter().find(|d| d.value == 0) {
        Some(d) => Err(ChangeError::ZeroValueDenomination(d.name.clone())),
        None => Ok(()),
    }
}
