//! Primary API for the crowdfunding core.
//!
//! The whole operation surface of the service: three mutating operations
//! (register, create, back) and the pure read derivations. Hosts consume the
//! core exclusively through this trait; state is never exposed as a mutable
//! collection.

use shared_types::entities::{
    Backing, FeedItem, GraphData, InsightReport, Participant, ParticipantStats, Spark,
    SparkFilter,
};
use shared_types::errors::SparkError;

/// The crowdfunding core operation surface.
pub trait IgniteApi: Send + Sync {
    // === Identity ===

    /// Register an identity, idempotently. First registration grants the
    /// starting balance and emits `ParticipantJoined`.
    fn register(&self, identity: &str, display_name: &str) -> Participant;

    /// Look up a registered participant.
    fn lookup(&self, identity: &str) -> Option<Participant>;

    /// Current token balance; 0 for unknown identities.
    fn balance_of(&self, identity: &str) -> u64;

    /// Derived per-participant summary.
    fn participant_stats(&self, identity: &str) -> ParticipantStats;

    // === Campaigns ===

    /// Create a spark.
    fn create_spark(
        &self,
        creator_id: &str,
        title: &str,
        description: &str,
        goal: u64,
        category: &str,
    ) -> Result<Spark, SparkError>;

    /// Back a spark. On success the ledger debit, campaign cache update,
    /// ignition evaluation, feed append, and event publish all happen as one
    /// logical transaction.
    fn back_spark(
        &self,
        spark_id: &str,
        backer_id: &str,
        amount: u64,
        note: Option<String>,
        payment_ref: Option<String>,
    ) -> Result<Backing, SparkError>;

    /// List sparks matching the filter, newest-created-first.
    fn list_sparks(&self, filter: SparkFilter) -> Vec<Spark>;

    /// Fetch a single spark.
    fn get_spark(&self, spark_id: &str) -> Option<Spark>;

    // === Derived Views ===

    /// At most `limit` most recent feed items, newest first.
    fn get_feed(&self, limit: usize) -> Vec<FeedItem>;

    /// Full recompute of the relationship graph.
    fn build_graph(&self) -> GraphData;

    /// Recomputed-on-read heuristic insights.
    fn get_insights(&self) -> InsightReport;
}
