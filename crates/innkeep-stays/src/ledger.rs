//! Billing ledger: what each guest name owes.
//!
//! Keyed by name string, not by booking, so totals survive checkout and
//! repeat stays under one name add up. Entries are never removed.

use std::collections::BTreeMap;

use innkeep_types::LedgerEntry;

/// Running totals per guest name, listed in name order.
#[derive(Debug, Default, Clone)]
pub struct BillingLedger {
    bills: BTreeMap<String, f64>,
}

impl BillingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `name`'s total, opening the entry on first charge.
    /// Returns the new total.
    ///
    /// The amount is not checked. The hotel only ever posts room prices,
    /// which are non-negative.
    pub fn add_charge(&mut self, name: &str, amount: f64) -> f64 {
        let total = match self.bills.get_mut(name) {
            Some(total) => {
                *total += amount;
                *total
            }
            None => {
                self.bills.insert(name.to_string(), amount);
                amount
            }
        };
        tracing::debug!(guest = name, amount, total, "charge posted");
        total
    }

    /// Every entry, sorted by guest name.
    pub fn list(&self) -> Vec<LedgerEntry> {
        self.bills
            .iter()
            .map(|(name, total)| LedgerEntry {
                name: name.clone(),
                total: *total,
            })
            .collect()
    }

    pub fn total_for(&self, name: &str) -> Option<f64> {
        self.bills.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.bills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }
}

/// Collecting entries posts each as a charge, so repeated names sum.
impl FromIterator<LedgerEntry> for BillingLedger {
    fn from_iter<I: IntoIterator<Item = LedgerEntry>>(entries: I) -> Self {
        let mut ledger = Self::new();
        for entry in entries {
            ledger.add_charge(&entry.name, entry.total);
        }
        ledger
    }
}
