//! # Identity Registry
//!
//! Tracks registered participants. Identities are externally issued (the
//! proof-of-humanity bridge verifies them before they reach this core), so
//! registration here is pure bookkeeping: idempotent, never errors, never
//! deletes.

use serde::{Deserialize, Serialize};
use shared_types::entities::{Participant, ParticipantId, Timestamp};
use std::collections::HashMap;

/// Registered participants, iterable in registration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityRegistry {
    /// Participants indexed by identity.
    by_id: HashMap<ParticipantId, Participant>,
    /// Registration order, for deterministic iteration.
    order: Vec<ParticipantId>,
}

impl IdentityRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an identity, or returns the existing record unchanged.
    ///
    /// Returns the participant and whether it was newly created. Re-registering
    /// with a different display name does NOT update the stored name; display
    /// names are fixed at first registration for denormalization elsewhere.
    pub fn register(
        &mut self,
        identity: &str,
        display_name: &str,
        now: Timestamp,
    ) -> (Participant, bool) {
        if let Some(existing) = self.by_id.get(identity) {
            return (existing.clone(), false);
        }

        let participant = Participant {
            id: identity.to_owned(),
            display_name: display_name.to_owned(),
            verified: true,
            created_at: now,
        };
        self.by_id
            .insert(participant.id.clone(), participant.clone());
        self.order.push(participant.id.clone());
        (participant, true)
    }

    /// Looks up a participant by identity.
    #[must_use]
    pub fn lookup(&self, identity: &str) -> Option<&Participant> {
        self.by_id.get(identity)
    }

    /// Number of registered participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates participants in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }
}
