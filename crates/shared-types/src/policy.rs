//! # Core Policy Configuration
//!
//! Tunable bounds for the crowdfunding core. All limits are inclusive.
//!
//! Defaults mirror the token economy the service launched with: a 10-token
//! starting grant, 5-100 token goals, 1-10 token pledges, and a 3-backer
//! ignition quorum.

use serde::{Deserialize, Serialize};

/// Policy bounds for the crowdfunding core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorePolicy {
    /// Tokens granted once at registration.
    pub starting_balance: u64,
    /// Minimum funding goal (inclusive).
    pub goal_min: u64,
    /// Maximum funding goal (inclusive).
    pub goal_max: u64,
    /// Minimum per-pledge amount (inclusive).
    pub pledge_min: u64,
    /// Maximum per-pledge amount (inclusive).
    pub pledge_max: u64,
    /// Distinct backers required to ignite.
    pub ignition_quorum: usize,
    /// Minimum title length in characters.
    pub title_min_len: usize,
    /// Minimum description length in characters.
    pub description_min_len: usize,
    /// Fixed weight for creator-to-spark graph links.
    pub creator_link_weight: u64,
}

impl Default for CorePolicy {
    fn default() -> Self {
        Self {
            starting_balance: 10,
            goal_min: 5,
            goal_max: 100,
            pledge_min: 1,
            pledge_max: 10,
            ignition_quorum: 3,
            title_min_len: 3,
            description_min_len: 10,
            creator_link_weight: 2,
        }
    }
}

impl CorePolicy {
    /// Creates a config with a larger starting grant for testing, so
    /// multi-pledge scenarios do not run dry.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            starting_balance: 100,
            ..Default::default()
        }
    }
}
