//! # Shared Types Crate
//!
//! This crate contains all domain entities, the policy configuration, and the
//! error taxonomy shared across subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Closed Ledger**: Token quantities are `u64`; a negative balance is not
//!   representable and all arithmetic is checked at the operation boundary.
//! - **Snapshot Denormalization**: Display names and titles are captured at
//!   the moment of action, never live-updated.

pub mod entities;
pub mod errors;
pub mod policy;

pub use entities::*;
pub use errors::SparkError;
pub use policy::CorePolicy;
