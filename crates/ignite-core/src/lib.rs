//! # Ignite Core - Crowdfunding Coordination Subsystem
//!
//! The in-memory ledger and event-propagation core: verified participants
//! propose funding campaigns ("sparks"), others back them with tokens, and a
//! spark automatically ignites once a quorum of distinct backers is reached.
//!
//! ## Components
//!
//! - `domain/registry` - Identity Registry (idempotent registration)
//! - `domain/ledger` - per-participant token balances, debit-on-pledge
//! - `domain/campaigns` - Campaign Store and Ignition Rule Engine
//! - `domain/feed` - append-only Activity Feed
//! - `domain/graph` - on-demand Relationship Graph Builder
//! - `domain/insights` - recomputed-on-read Insight Summarizer
//! - `service` - the single stateful service funneling every mutation
//!   through one critical section and publishing to the shared bus
//! - `ports/api` - the public operation surface
//!
//! ## Concurrency Model
//!
//! All state lives behind one `RwLock`. Every mutating operation (register,
//! create, back) runs as an indivisible critical section: ledger debit,
//! campaign cache update, ignition check-and-transition, feed append, and
//! event publish all happen under the same write guard, so no two mutations
//! interleave and listeners observe events in mutation order. Reads take the
//! lock briefly and clone snapshots out.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod domain;
pub mod fixtures;
pub mod ports;
pub mod service;

pub use ports::api::IgniteApi;
pub use service::{CoreSnapshot, IgniteService};
