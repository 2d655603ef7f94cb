//! # Ignite Test Suite
//!
//! Unified test crate exercising the service core across crate boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs       # End-to-end operation flows and scenarios
//!     ├── properties.rs  # State invariants under operation sequences
//!     ├── events.rs      # Bus fan-out, filtering, and streaming
//!     └── views.rs       # Derived views: feed, graph, insights
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ignite-tests
//!
//! # By category
//! cargo test -p ignite-tests integration::flows
//! cargo test -p ignite-tests integration::properties
//! ```

#![allow(dead_code)]
