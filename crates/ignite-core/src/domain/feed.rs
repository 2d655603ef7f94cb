//! # Activity Feed
//!
//! An append-ordered derived log of domain events for display. Items are
//! never mutated or removed once appended; retrieval is newest-first with a
//! caller-specified limit.

use serde::{Deserialize, Serialize};
use shared_types::entities::{new_feed_id, Backing, FeedItem, FeedKind, Spark, Timestamp};

/// Actor name shown on ignition feed items: the quorum ignites a spark,
/// not any single participant.
pub const IGNITION_ACTOR: &str = "Community";

/// The append-only activity feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityFeed {
    /// Items in append order (oldest first); reads reverse.
    items: Vec<FeedItem>,
}

impl ActivityFeed {
    /// Creates an empty feed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item.
    pub fn push(&mut self, item: FeedItem) {
        self.items.push(item);
    }

    /// Returns at most `limit` most recent items, newest first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<FeedItem> {
        self.items.iter().rev().take(limit).cloned().collect()
    }

    /// Total number of items ever appended.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the feed is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Builds the feed item for a spark creation.
#[must_use]
pub fn spark_created_item(spark: &Spark, now: Timestamp) -> FeedItem {
    FeedItem {
        id: new_feed_id(),
        kind: FeedKind::SparkCreated,
        spark_id: spark.id.clone(),
        spark_title: spark.title.clone(),
        actor_name: spark.creator_name.clone(),
        amount: None,
        note: None,
        created_at: now,
    }
}

/// Builds the feed item for an accepted backing.
#[must_use]
pub fn backing_item(backing: &Backing) -> FeedItem {
    FeedItem {
        id: new_feed_id(),
        kind: FeedKind::BackingMade,
        spark_id: backing.spark_id.clone(),
        spark_title: backing.spark_title.clone(),
        actor_name: backing.backer_name.clone(),
        amount: Some(backing.amount),
        note: backing.note.clone(),
        created_at: backing.created_at,
    }
}

/// Builds the feed item for an ignition.
#[must_use]
pub fn spark_ignited_item(spark: &Spark, now: Timestamp) -> FeedItem {
    FeedItem {
        id: new_feed_id(),
        kind: FeedKind::SparkIgnited,
        spark_id: spark.id.clone(),
        spark_title: spark.title.clone(),
        actor_name: IGNITION_ACTOR.to_owned(),
        amount: None,
        note: None,
        created_at: now,
    }
}
