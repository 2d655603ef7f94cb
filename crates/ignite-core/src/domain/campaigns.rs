//! # Campaign Store & Ignition Rule Engine
//!
//! The set of sparks, their funding progress, and the append-only backing
//! ledger, plus the rule that flips a spark to `Ignited` once its quorum of
//! distinct backers is reached.
//!
//! ## Invariants Enforced
//!
//! - `backer_ids` contains no duplicates, and never the creator
//! - `raised` equals the sum of accepted pledge amounts until ignition, at
//!   which point it is force-set to `goal`
//! - ignition is monotonic: `Active -> Ignited`, never back
//! - quorum is evaluated on unique backer count only, never on amount raised

use serde::{Deserialize, Serialize};
use shared_types::entities::{Backing, Spark, SparkFilter, SparkId, SparkStatus, Timestamp};
use shared_types::errors::SparkError;
use shared_types::policy::CorePolicy;
use std::collections::HashMap;

/// Sparks and their backing audit trail.
///
/// `Spark::raised` and `Spark::backer_ids` are caches maintained
/// incrementally inside the same critical section as each pledge; the
/// backing list is the source of truth they are derivable from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignStore {
    /// Sparks indexed by id.
    by_id: HashMap<SparkId, Spark>,
    /// Creation order, for newest-first listings.
    order: Vec<SparkId>,
    /// Append-only pledge ledger across all sparks.
    backings: Vec<Backing>,
}

impl CampaignStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a spark by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Spark> {
        self.by_id.get(id)
    }

    /// Gets a mutable spark by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Spark> {
        self.by_id.get_mut(id)
    }

    /// Number of sparks in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store holds no sparks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Inserts a freshly created spark.
    pub fn insert(&mut self, spark: Spark) {
        self.order.push(spark.id.clone());
        self.by_id.insert(spark.id.clone(), spark);
    }

    /// Appends an accepted backing to the audit trail.
    pub fn push_backing(&mut self, backing: Backing) {
        self.backings.push(backing);
    }

    /// The full backing history, oldest first.
    #[must_use]
    pub fn backings(&self) -> &[Backing] {
        &self.backings
    }

    /// Lists sparks matching the filter, newest-created-first.
    #[must_use]
    pub fn list(&self, filter: SparkFilter) -> Vec<Spark> {
        self.iter_newest_first()
            .filter(|s| match filter {
                SparkFilter::All => true,
                SparkFilter::Active => s.is_active(),
                SparkFilter::Ignited => s.status == SparkStatus::Ignited,
            })
            .cloned()
            .collect()
    }

    /// Iterates sparks newest-created-first.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &Spark> {
        self.order.iter().rev().filter_map(|id| self.by_id.get(id))
    }

    /// Iterates sparks in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Spark> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }
}

/// Validates the inputs of a new spark against policy, in order,
/// short-circuiting on the first failure.
///
/// # Errors
///
/// `TitleTooShort`, `DescriptionTooShort`, or `GoalOutOfRange`.
pub fn validate_spark_inputs(
    policy: &CorePolicy,
    title: &str,
    description: &str,
    goal: u64,
) -> Result<(), SparkError> {
    let title_len = title.chars().count();
    if title_len < policy.title_min_len {
        return Err(SparkError::TitleTooShort {
            len: title_len,
            min: policy.title_min_len,
        });
    }

    let description_len = description.chars().count();
    if description_len < policy.description_min_len {
        return Err(SparkError::DescriptionTooShort {
            len: description_len,
            min: policy.description_min_len,
        });
    }

    if goal < policy.goal_min || goal > policy.goal_max {
        return Err(SparkError::GoalOutOfRange {
            goal,
            min: policy.goal_min,
            max: policy.goal_max,
        });
    }

    Ok(())
}

/// Validates a pledge against the spark's state and policy bounds.
///
/// Ordering matters and is part of the contract: liveness before ownership
/// before amount. Registration and balance are checked by the caller (the
/// registry and ledger own those).
///
/// # Errors
///
/// `SparkNotActive`, `SelfBackingForbidden`, or `AmountOutOfRange`.
pub fn validate_backing(
    policy: &CorePolicy,
    spark: &Spark,
    backer_id: &str,
    amount: u64,
) -> Result<(), SparkError> {
    if !spark.is_active() {
        return Err(SparkError::SparkNotActive(spark.id.clone()));
    }

    if spark.creator_id == backer_id {
        return Err(SparkError::SelfBackingForbidden);
    }

    if amount < policy.pledge_min || amount > policy.pledge_max {
        return Err(SparkError::AmountOutOfRange {
            amount,
            min: policy.pledge_min,
            max: policy.pledge_max,
        });
    }

    Ok(())
}

/// Applies an accepted pledge to the spark's cached aggregates.
///
/// Repeat pledges from the same backer increase `raised` but never add a
/// duplicate backer entry.
pub fn record_backing(spark: &mut Spark, backer_id: &str, amount: u64) {
    spark.raised += amount;
    if !spark.backer_ids.iter().any(|id| id == backer_id) {
        spark.backer_ids.push(backer_id.to_owned());
    }
}

/// Evaluates the ignition rule after an accepted pledge.
///
/// If the distinct backer count has reached the quorum and the spark is
/// still active, transitions it: `status = Ignited`, ignition timestamp
/// recorded, and `raised` forced to `goal` to normalize the displayed
/// figure (a spark can ignite under-goal, or cross its goal unignited).
///
/// Returns true if the spark ignited on this evaluation.
pub fn evaluate_ignition(spark: &mut Spark, quorum: usize, now: Timestamp) -> bool {
    if spark.backer_ids.len() >= quorum && spark.is_active() {
        spark.status = SparkStatus::Ignited;
        spark.ignited_at = Some(now);
        spark.raised = spark.goal;
        return true;
    }
    false
}
