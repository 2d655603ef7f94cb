//! # Shared Bus - Event Fan-Out for State Changes
//!
//! Publish/subscribe fan-out notifying listeners of crowdfunding state
//! changes. All domain notifications (`participant_joined`, `spark_created`,
//! `backing_made`, `spark_ignited`) flow through this bus; external
//! consumers attach as subscriptions or streams.
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │ Core Service │                    │  Listener    │
//! │              │    publish()       │              │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```
//!
//! ## Delivery Semantics
//!
//! - Each listener sees events in publish order.
//! - A slow listener lags and skips missed events; a dropped listener is
//!   removed automatically. Neither disturbs delivery to other listeners.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, SparkEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, EventSubscriber, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before backpressure.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
