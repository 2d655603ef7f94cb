//! # Core Domain Entities
//!
//! Defines the core crowdfunding entities.
//!
//! ## Clusters
//!
//! - **Identity**: Participant, `ParticipantStats`
//! - **Campaigns**: Spark, Backing, `SparkCategory`, `SparkStatus`
//! - **Derived Views**: `FeedItem`, `GraphData`, `Insight`, `InsightReport`

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

// =============================================================================
// IDENTIFIERS & TIME
// =============================================================================

/// Externally issued, stable participant identity.
pub type ParticipantId = String;

/// Unique spark (campaign) identifier.
pub type SparkId = String;

/// Unique backing (pledge) identifier.
pub type BackingId = String;

/// Unix timestamp in milliseconds.
pub type Timestamp = u64;

/// Current wall-clock time in Unix milliseconds.
///
/// Clock regressions before the epoch collapse to 0 rather than panicking.
#[must_use]
pub fn now_millis() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Mint a fresh spark id (`spark_<uuid>`).
#[must_use]
pub fn new_spark_id() -> SparkId {
    format!("spark_{}", Uuid::new_v4().simple())
}

/// Mint a fresh backing id (`back_<uuid>`).
#[must_use]
pub fn new_backing_id() -> BackingId {
    format!("back_{}", Uuid::new_v4().simple())
}

/// Mint a fresh feed item id (`feed_<uuid>`).
#[must_use]
pub fn new_feed_id() -> String {
    format!("feed_{}", Uuid::new_v4().simple())
}

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// A registered participant.
///
/// Created on first registration; identity is immutable and the record is
/// never deleted. Re-registering an existing identity returns the existing
/// record unchanged, including the original display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Externally issued identity (proof-of-humanity network).
    pub id: ParticipantId,
    /// Display name captured at first registration.
    pub display_name: String,
    /// Always true for registered participants; registration implies
    /// verification upstream.
    pub verified: bool,
    /// Registration timestamp.
    pub created_at: Timestamp,
}

/// Derived per-participant summary, recomputed on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantStats {
    /// Current token balance.
    pub balance: u64,
    /// Number of sparks this participant created.
    pub sparks_created: usize,
    /// Number of distinct sparks this participant backed.
    pub sparks_backed: usize,
    /// Total tokens contributed across all backings.
    pub total_contributed: u64,
}

// =============================================================================
// CLUSTER B: CAMPAIGNS
// =============================================================================

/// Spark category.
///
/// Unrecognized labels coerce to `Other` rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SparkCategory {
    /// Social or environmental cause.
    Cause,
    /// Art and creative work.
    Art,
    /// Technology projects.
    Tech,
    /// Local community initiatives.
    Community,
    /// Everything else.
    Other,
}

impl SparkCategory {
    /// Parse a free-form label, coercing unknown values to `Other`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "cause" => Self::Cause,
            "art" => Self::Art,
            "tech" => Self::Tech,
            "community" => Self::Community,
            _ => Self::Other,
        }
    }
}

/// Spark lifecycle status.
///
/// The only defined transition is `Active -> Ignited`, evaluated after every
/// accepted backing. `Completed` is declared for future use; no operation
/// transitions into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SparkStatus {
    /// Accepting backings.
    Active,
    /// Quorum of distinct backers reached; terminal for this core.
    Ignited,
    /// Reserved for future extension; unreachable via current operations.
    Completed,
}

/// A funding campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spark {
    /// Unique spark id.
    pub id: SparkId,
    /// Owning participant id.
    pub creator_id: ParticipantId,
    /// Creator display name, snapshotted at creation.
    pub creator_name: String,
    /// Campaign title.
    pub title: String,
    /// Campaign description.
    pub description: String,
    /// Category (coerced, never invalid).
    pub category: SparkCategory,
    /// Funding goal in tokens.
    pub goal: u64,
    /// Cumulative accepted pledge amount; forced to `goal` at ignition.
    pub raised: u64,
    /// Ordered set of distinct backer ids. Never contains the creator.
    pub backer_ids: Vec<ParticipantId>,
    /// Lifecycle status.
    pub status: SparkStatus,
    /// Creation timestamp.
    pub created_at: Timestamp,
    /// Ignition timestamp, set exactly once.
    pub ignited_at: Option<Timestamp>,
}

impl Spark {
    /// Whether the spark still accepts backings.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SparkStatus::Active
    }

    /// Number of distinct backers.
    #[must_use]
    pub fn backer_count(&self) -> usize {
        self.backer_ids.len()
    }
}

/// An accepted pledge against a spark.
///
/// Immutable once created. The backing list is the append-only audit trail;
/// `Spark::raised` and `Spark::backer_ids` are caches derivable from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backing {
    /// Unique backing id.
    pub id: BackingId,
    /// Target spark.
    pub spark_id: SparkId,
    /// Spark title, snapshotted at pledge time.
    pub spark_title: String,
    /// Backing participant.
    pub backer_id: ParticipantId,
    /// Backer display name, snapshotted at pledge time.
    pub backer_name: String,
    /// Pledge amount in tokens.
    pub amount: u64,
    /// Optional free-text note.
    pub note: Option<String>,
    /// Pledge timestamp.
    pub created_at: Timestamp,
    /// Opaque external payment reference, if the bridge supplied one.
    pub payment_ref: Option<String>,
}

/// Filter for listing sparks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SparkFilter {
    /// All sparks regardless of status.
    #[default]
    All,
    /// Only sparks still accepting backings.
    Active,
    /// Only ignited sparks.
    Ignited,
}

// =============================================================================
// CLUSTER C: DERIVED VIEWS
// =============================================================================

/// Kind of activity feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    /// A spark was created.
    SparkCreated,
    /// A backing was accepted.
    BackingMade,
    /// A spark reached its ignition quorum.
    SparkIgnited,
}

/// An append-only activity feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Unique feed item id.
    pub id: String,
    /// Event kind.
    pub kind: FeedKind,
    /// Related spark.
    pub spark_id: SparkId,
    /// Spark title snapshot.
    pub spark_title: String,
    /// Display name of the acting participant ("Community" for ignitions).
    pub actor_name: String,
    /// Pledge amount for `BackingMade` items.
    pub amount: Option<u64>,
    /// Pledge note for `BackingMade` items.
    pub note: Option<String>,
    /// Event timestamp.
    pub created_at: Timestamp,
}

/// Node kind in the relationship graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphNodeKind {
    /// A participant who created or backed at least one spark.
    Participant,
    /// A spark.
    Spark,
}

/// A node in the derived relationship graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Participant or spark id.
    pub id: String,
    /// Display label (spark titles are ellipsized past 18 chars).
    pub name: String,
    /// Node kind.
    pub kind: GraphNodeKind,
    /// Activity weight: backers + raised for sparks; backings + created
    /// sparks for participants.
    pub activity: u64,
    /// Raised amount (sparks only).
    pub raised: Option<u64>,
    /// Funding goal (sparks only).
    pub goal: Option<u64>,
    /// Lifecycle status (sparks only).
    pub status: Option<SparkStatus>,
    /// Verified flag (participants only).
    pub verified: Option<bool>,
}

/// A directed funding edge in the relationship graph.
///
/// One link per backing; multiple pledges from the same backer yield multiple
/// parallel links, preserving per-pledge provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    /// Source node id (participant).
    pub source: String,
    /// Target node id (spark).
    pub target: String,
    /// Edge weight: pledge amount, or the fixed creator-link weight.
    pub amount: u64,
    /// When the underlying relationship was formed.
    pub created_at: Timestamp,
}

/// The full derived relationship graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    /// All nodes with nonzero activity.
    pub nodes: Vec<GraphNode>,
    /// All funding edges.
    pub links: Vec<GraphLink>,
}

/// Kind of heuristic insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Active spark exactly one backer short of quorum.
    AlmostIgnited,
    /// Active spark with zero backers.
    NewSpark,
}

/// A single advisory insight. Display content, not a correctness channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Unique insight id (stable per spark per kind).
    pub id: String,
    /// Insight kind.
    pub kind: InsightKind,
    /// Human-readable message.
    pub message: String,
    /// Heuristic confidence in [0, 1].
    pub confidence: f32,
    /// Related spark, if any.
    pub spark_id: Option<SparkId>,
    /// When the insight was derived.
    pub created_at: Timestamp,
}

/// Coarse trend bucket over total historical backing count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// More than 5 total backings.
    Rising,
    /// More than 2 total backings.
    Stable,
    /// 2 or fewer total backings.
    Falling,
}

/// Recomputed-on-read insight summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    /// Top insights, capped at 5, insertion-ordered.
    pub insights: Vec<Insight>,
    /// When this report was derived.
    pub last_analysis: Timestamp,
    /// Bounded 0-100 community momentum score.
    pub momentum_score: u8,
    /// Coarse trend direction.
    pub trend: TrendDirection,
}
