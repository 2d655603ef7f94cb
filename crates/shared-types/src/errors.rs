//! # Error Types
//!
//! Defines the domain error taxonomy used across subsystems.
//!
//! Every mutating operation returns these as typed results; they are never
//! panicked across the public boundary, and a failed validation leaves the
//! Ledger, Campaign Store, Feed, and Broadcaster entirely untouched.

use crate::entities::{ParticipantId, SparkId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur in the crowdfunding core.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum SparkError {
    /// Actor unknown to the Identity Registry.
    #[error("Participant not registered: {0}")]
    NotRegistered(ParticipantId),

    /// Title below the minimum length.
    #[error("Title too short: {len} chars, minimum {min}")]
    TitleTooShort { len: usize, min: usize },

    /// Description below the minimum length.
    #[error("Description too short: {len} chars, minimum {min}")]
    DescriptionTooShort { len: usize, min: usize },

    /// Funding goal outside the policy range.
    #[error("Goal {goal} outside allowed range {min}-{max} tokens")]
    GoalOutOfRange { goal: u64, min: u64, max: u64 },

    /// Pledge amount outside the policy range.
    #[error("Amount {amount} outside allowed range {min}-{max} tokens")]
    AmountOutOfRange { amount: u64, min: u64, max: u64 },

    /// Spark does not exist.
    #[error("Spark not found: {0}")]
    SparkNotFound(SparkId),

    /// Pledge against a spark that already ignited.
    #[error("Spark {0} is no longer active")]
    SparkNotActive(SparkId),

    /// Creator pledging to their own spark.
    #[error("Creators cannot back their own spark")]
    SelfBackingForbidden,

    /// Ledger debit would drive the balance negative.
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: u64, available: u64 },
}
