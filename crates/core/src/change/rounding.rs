//! Nearest-five rounding, used when the smallest unit is withdrawn from
//! circulation (sometimes called Swedish rounding).

/// Rounds minor units to the nearest multiple of 5.
///
/// Remainders of 1 and 2 round down, 3 and 4 round up. Apply to the change
/// amount only, never to the owed or paid amounts.
///
/// ```
/// use changemaker_core::change::round_to_nickel;
///
/// assert_eq!(round_to_nickel(87), 85);
/// assert_eq!(round_to_nickel(88), 90);
/// ```
#[must_use]
pub const fn round_to_nickel(cents: u64) -> u64 {
    match cents % 5 {
        0 => cents,
        r @ (1 | 2) => cents - r,
        r => cents + (5 - r),
    }
}
