//! # Token Ledger
//!
//! Per-participant token balances. This is a closed economy: the only credit
//! is the one-time registration grant, and the only debit is an accepted
//! pledge. Balances are `u64`, so a negative balance is unrepresentable; a
//! debit that cannot be covered is rejected whole.

use serde::{Deserialize, Serialize};
use shared_types::errors::SparkError;
use shared_types::ParticipantId;
use std::collections::HashMap;

/// Per-participant token balances.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    balances: HashMap<ParticipantId, u64>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants the one-time starting allocation.
    ///
    /// Called exactly once per identity, at first registration.
    pub fn grant(&mut self, identity: &str, amount: u64) {
        *self.balances.entry(identity.to_owned()).or_insert(0) += amount;
    }

    /// Current balance, 0 for identities that never received a grant.
    #[must_use]
    pub fn balance_of(&self, identity: &str) -> u64 {
        self.balances.get(identity).copied().unwrap_or(0)
    }

    /// Atomically subtracts `amount`, or leaves the balance untouched.
    ///
    /// # Errors
    ///
    /// `InsufficientFunds` if the balance does not cover the full amount.
    pub fn debit(&mut self, identity: &str, amount: u64) -> Result<(), SparkError> {
        let available = self.balance_of(identity);
        let Some(remaining) = available.checked_sub(amount) else {
            return Err(SparkError::InsufficientFunds {
                required: amount,
                available,
            });
        };
        self.balances.insert(identity.to_owned(), remaining);
        Ok(())
    }

    /// Sum of all balances, for conservation checks.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.balances.values().sum()
    }
}
