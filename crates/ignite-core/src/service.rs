//! # Ignite Service
//!
//! The single stateful service object. All entities live in one
//! process-wide store; every mutation is funneled through the operation set
//! here, inside one write-locked critical section, so the ledger debit, the
//! campaign cache update, the ignition check-and-transition, the feed
//! append, and the event publish can never interleave with another mutation.
//!
//! Read operations take the lock briefly and clone snapshots out; they are
//! tolerant of running between any two mutations.

use crate::domain::campaigns::{
    evaluate_ignition, record_backing, validate_backing, validate_spark_inputs,
};
use crate::domain::{graph, insights};
use crate::domain::{feed, ActivityFeed, CampaignStore, IdentityRegistry, Ledger};
use crate::ports::api::IgniteApi;
use serde::{Deserialize, Serialize};
use shared_bus::{EventFilter, EventStream, InMemoryEventBus, SparkEvent, Subscription};
use shared_types::entities::{
    new_backing_id, new_spark_id, now_millis, Backing, FeedItem, GraphData, InsightReport,
    Participant, ParticipantStats, Spark, SparkCategory, SparkFilter, SparkStatus,
};
use shared_types::errors::SparkError;
use shared_types::policy::CorePolicy;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

/// Snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The complete core state behind the service lock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CoreState {
    registry: IdentityRegistry,
    ledger: Ledger,
    campaigns: CampaignStore,
    feed: ActivityFeed,
}

/// A best-effort serializable snapshot of core state.
///
/// Written at shutdown and reloaded at startup by the host; losing one is
/// acceptable (durability beyond best effort is out of scope).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreSnapshot {
    /// Format version for forward compatibility.
    pub version: u32,
    state: CoreState,
}

/// The crowdfunding core service.
pub struct IgniteService {
    policy: CorePolicy,
    state: RwLock<CoreState>,
    bus: Arc<InMemoryEventBus>,
}

impl IgniteService {
    /// Creates a service with the given policy and a fresh event bus.
    #[must_use]
    pub fn new(policy: CorePolicy) -> Self {
        Self::with_bus(policy, Arc::new(InMemoryEventBus::new()))
    }

    /// Creates a service publishing to an existing bus.
    #[must_use]
    pub fn with_bus(policy: CorePolicy, bus: Arc<InMemoryEventBus>) -> Self {
        Self {
            policy,
            state: RwLock::new(CoreState::default()),
            bus,
        }
    }

    /// The active policy bounds.
    #[must_use]
    pub fn policy(&self) -> &CorePolicy {
        &self.policy
    }

    /// The event bus this service publishes to.
    #[must_use]
    pub fn bus(&self) -> &Arc<InMemoryEventBus> {
        &self.bus
    }

    /// Subscribe to domain notifications.
    #[must_use]
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        self.bus.subscribe(filter)
    }

    /// Stream of domain notifications, for SSE-style consumers.
    #[must_use]
    pub fn event_stream(&self, filter: EventFilter) -> EventStream {
        self.bus.event_stream(filter)
    }

    /// Whether the service holds no state at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let state = self.read();
        state.registry.is_empty() && state.campaigns.is_empty() && state.feed.is_empty()
    }

    /// Exports a snapshot of the full core state.
    #[must_use]
    pub fn export_snapshot(&self) -> CoreSnapshot {
        CoreSnapshot {
            version: SNAPSHOT_VERSION,
            state: self.read().clone(),
        }
    }

    /// Restores a snapshot into an empty service.
    ///
    /// Returns false (and leaves state untouched) if the service already
    /// holds state or the snapshot version is unknown.
    pub fn restore_snapshot(&self, snapshot: CoreSnapshot) -> bool {
        if snapshot.version != SNAPSHOT_VERSION {
            debug!(version = snapshot.version, "Rejected snapshot with unknown version");
            return false;
        }
        let mut state = self.write();
        if !(state.registry.is_empty() && state.campaigns.is_empty() && state.feed.is_empty()) {
            return false;
        }
        *state = snapshot.state;
        info!(
            participants = state.registry.len(),
            sparks = state.campaigns.len(),
            "Core state restored from snapshot"
        );
        true
    }

    // A poisoned lock only means a reader panicked while holding the guard;
    // mutations never panic mid-update, so the inner data stays consistent.
    fn read(&self) -> RwLockReadGuard<'_, CoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl IgniteApi for IgniteService {
    fn register(&self, identity: &str, display_name: &str) -> Participant {
        let mut state = self.write();
        let now = now_millis();
        let (participant, created) = state.registry.register(identity, display_name, now);

        if created {
            state.ledger.grant(identity, self.policy.starting_balance);
            info!(
                identity,
                display_name,
                grant = self.policy.starting_balance,
                "Participant registered"
            );
            self.bus
                .publish_sync(SparkEvent::ParticipantJoined(participant.clone()));
        }

        participant
    }

    fn lookup(&self, identity: &str) -> Option<Participant> {
        self.read().registry.lookup(identity).cloned()
    }

    fn balance_of(&self, identity: &str) -> u64 {
        self.read().ledger.balance_of(identity)
    }

    fn participant_stats(&self, identity: &str) -> ParticipantStats {
        let state = self.read();
        let backings: Vec<_> = state
            .campaigns
            .backings()
            .iter()
            .filter(|b| b.backer_id == identity)
            .collect();

        let mut backed: Vec<&str> = backings.iter().map(|b| b.spark_id.as_str()).collect();
        backed.sort_unstable();
        backed.dedup();

        ParticipantStats {
            balance: state.ledger.balance_of(identity),
            sparks_created: state
                .campaigns
                .iter()
                .filter(|s| s.creator_id == identity)
                .count(),
            sparks_backed: backed.len(),
            total_contributed: backings.iter().map(|b| b.amount).sum(),
        }
    }

    fn create_spark(
        &self,
        creator_id: &str,
        title: &str,
        description: &str,
        goal: u64,
        category: &str,
    ) -> Result<Spark, SparkError> {
        let mut state = self.write();

        let creator = state
            .registry
            .lookup(creator_id)
            .ok_or_else(|| SparkError::NotRegistered(creator_id.to_owned()))?;
        let creator_name = creator.display_name.clone();

        validate_spark_inputs(&self.policy, title, description, goal)?;

        let now = now_millis();
        let spark = Spark {
            id: new_spark_id(),
            creator_id: creator_id.to_owned(),
            creator_name,
            title: title.to_owned(),
            description: description.to_owned(),
            category: SparkCategory::from_label(category),
            goal,
            raised: 0,
            backer_ids: Vec::new(),
            status: SparkStatus::Active,
            created_at: now,
            ignited_at: None,
        };

        state.campaigns.insert(spark.clone());
        state.feed.push(feed::spark_created_item(&spark, now));
        info!(spark_id = %spark.id, creator_id, goal, "Spark created");
        self.bus.publish_sync(SparkEvent::SparkCreated(spark.clone()));

        Ok(spark)
    }

    fn back_spark(
        &self,
        spark_id: &str,
        backer_id: &str,
        amount: u64,
        note: Option<String>,
        payment_ref: Option<String>,
    ) -> Result<Backing, SparkError> {
        let mut state = self.write();

        let backer = state
            .registry
            .lookup(backer_id)
            .ok_or_else(|| SparkError::NotRegistered(backer_id.to_owned()))?;
        let backer_name = backer.display_name.clone();

        {
            let spark = state
                .campaigns
                .get(spark_id)
                .ok_or_else(|| SparkError::SparkNotFound(spark_id.to_owned()))?;
            validate_backing(&self.policy, spark, backer_id, amount)?;
        }

        // Last validation: the debit itself. Everything before this point
        // left state untouched, and the debit is all-or-nothing.
        state.ledger.debit(backer_id, amount)?;

        let now = now_millis();
        let quorum = self.policy.ignition_quorum;

        // The spark was checked above; it cannot have vanished under the
        // same write guard.
        let Some(spark) = state.campaigns.get_mut(spark_id) else {
            return Err(SparkError::SparkNotFound(spark_id.to_owned()));
        };
        record_backing(spark, backer_id, amount);

        let backing = Backing {
            id: new_backing_id(),
            spark_id: spark_id.to_owned(),
            spark_title: spark.title.clone(),
            backer_id: backer_id.to_owned(),
            backer_name,
            amount,
            note,
            created_at: now,
            payment_ref,
        };

        let ignited = evaluate_ignition(spark, quorum, now);
        let spark_snapshot = spark.clone();

        state.campaigns.push_backing(backing.clone());
        state.feed.push(feed::backing_item(&backing));
        debug!(spark_id, backer_id, amount, "Backing accepted");
        self.bus.publish_sync(SparkEvent::BackingMade(backing.clone()));

        if ignited {
            state
                .feed
                .push(feed::spark_ignited_item(&spark_snapshot, now));
            info!(
                spark_id,
                backers = spark_snapshot.backer_ids.len(),
                raised = spark_snapshot.raised,
                "Spark ignited"
            );
            self.bus.publish_sync(SparkEvent::SparkIgnited(spark_snapshot));
        }

        Ok(backing)
    }

    fn list_sparks(&self, filter: SparkFilter) -> Vec<Spark> {
        self.read().campaigns.list(filter)
    }

    fn get_spark(&self, spark_id: &str) -> Option<Spark> {
        self.read().campaigns.get(spark_id).cloned()
    }

    fn get_feed(&self, limit: usize) -> Vec<FeedItem> {
        self.read().feed.recent(limit)
    }

    fn build_graph(&self) -> GraphData {
        let state = self.read();
        graph::build_graph(&state.registry, &state.campaigns, &self.policy)
    }

    fn get_insights(&self) -> InsightReport {
        let state = self.read();
        insights::derive_insights(&state.campaigns, self.policy.ignition_quorum, now_millis())
    }
}
