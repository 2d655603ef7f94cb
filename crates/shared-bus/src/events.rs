//! # Domain Events
//!
//! Defines all event types that flow through the shared bus, one per domain
//! notification plus the keep-alive heartbeat for long-lived consumers.

use serde::{Deserialize, Serialize};
use shared_types::entities::{Backing, Participant, Spark, Timestamp};

/// All events that can be published to the event bus.
///
/// Payloads are full entity snapshots taken inside the mutating operation's
/// critical section, so a listener never observes a half-applied state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum SparkEvent {
    /// A participant registered for the first time.
    ParticipantJoined(Participant),

    /// A spark was created and entered the `Active` state.
    SparkCreated(Spark),

    /// A backing was accepted: ledger debited, spark caches updated.
    BackingMade(Backing),

    /// A spark reached its ignition quorum. The payload carries the
    /// post-transition snapshot (`status = Ignited`, `raised = goal`).
    SparkIgnited(Spark),

    /// Periodic no-op keeping long-lived stream consumers alive.
    Heartbeat { timestamp: Timestamp },
}

impl SparkEvent {
    /// The topic this event belongs to.
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::ParticipantJoined(_) => EventTopic::Identity,
            Self::SparkCreated(_) | Self::SparkIgnited(_) => EventTopic::Campaigns,
            Self::BackingMade(_) => EventTopic::Pledges,
            Self::Heartbeat { .. } => EventTopic::Heartbeat,
        }
    }

    /// Stable wire label for the event kind.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ParticipantJoined(_) => "participant_joined",
            Self::SparkCreated(_) => "spark_created",
            Self::BackingMade(_) => "backing_made",
            Self::SparkIgnited(_) => "spark_ignited",
            Self::Heartbeat { .. } => "heartbeat",
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTopic {
    /// Registration events.
    Identity,
    /// Spark lifecycle events (created, ignited).
    Campaigns,
    /// Backing events.
    Pledges,
    /// Keep-alive signals.
    Heartbeat,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self { topics }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &SparkEvent) -> bool {
        self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic())
    }
}
