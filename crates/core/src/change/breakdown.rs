//! The result of a change computation: how many of each denomination.

use serde::Serialize;

use crate::currency::Denomination;

/// One denomination and how many units of it to hand out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeItem {
    /// The coin or bill.
    pub denomination: Denomination,
    /// Number of units, always at least 1.
    pub count: u64,
}

impl ChangeItem {
    /// Total value of this item in minor units.
    pub fn subtotal(&self) -> u64 {
        self.count * self.denomination.value
    }
}

impl std::fmt::Display for ChangeItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.count, self.denomination.label(self.count))
    }
}

/// Denominations and counts, descending by value, without zero counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Breakdown(Vec<ChangeItem>);

impl Breakdown {
    /// Builds a breakdown from per-denomination counts.
    ///
    /// `counts[i]` belongs to `denominations[i]`. Zero counts are dropped and
    /// the items are ordered by descending value; equal values keep their
    /// relative order.
    pub(crate) fn from_counts(denominations: &[Denomination], counts: &[u64]) -> Self {
        let mut items: Vec<ChangeItem> = denominations
            .iter()
            .zip(counts)
            .filter(|(_, count)| **count > 0)
            .map(|(denomination, count)| ChangeItem {
                denomination: denomination.clone(),
                count: *count,
            })
            .collect();
        items.sort_by(|a, b| b.denomination.value.cmp(&a.denomination.value));
        Self(items)
    }

    /// The items, largest denomination first.
    pub fn items(&self) -> &[ChangeItem] {
        &self.0
    }

    /// Whether no change is handed out.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of every item's value in minor units.
    pub fn total(&self) -> u64 {
        self.0.iter().map(ChangeItem::subtotal).sum()
    }

    /// Total number of coins and bills.
    pub fn piece_count(&self) -> u64 {
        self.0.iter().map(|item| item.count).sum()
    }
}

impl std::fmt::Display for Breakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("no change");
        }
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
