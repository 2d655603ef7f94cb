//! # Relationship Graph Builder
//!
//! Derives the funding-relationship graph on demand: nodes are sparks plus
//! every participant who created or backed at least one spark; edges run
//! creator-to-spark (fixed weight) and backer-to-spark (one edge per
//! backing, weighted by that backing's amount). Fully recomputed on every
//! call; nothing here is cached or persisted.

use super::campaigns::CampaignStore;
use super::registry::IdentityRegistry;
use shared_types::entities::{GraphData, GraphLink, GraphNode, GraphNodeKind};
use shared_types::policy::CorePolicy;
use std::collections::HashSet;

/// Maximum label length before spark titles are ellipsized.
const LABEL_MAX_CHARS: usize = 18;

/// Builds the full relationship graph from current state.
///
/// Registered-but-idle participants are omitted; a backing or a created
/// spark is what earns a node. Parallel backer edges are intentional: each
/// pledge keeps its own provenance for visualization.
#[must_use]
pub fn build_graph(
    registry: &IdentityRegistry,
    store: &CampaignStore,
    policy: &CorePolicy,
) -> GraphData {
    let mut nodes = Vec::new();
    let mut links = Vec::new();
    let mut node_ids: HashSet<String> = HashSet::new();

    for spark in store.iter() {
        nodes.push(GraphNode {
            id: spark.id.clone(),
            name: ellipsize(&spark.title),
            kind: GraphNodeKind::Spark,
            activity: spark.backer_ids.len() as u64 + spark.raised,
            raised: Some(spark.raised),
            goal: Some(spark.goal),
            status: Some(spark.status),
            verified: None,
        });
        node_ids.insert(spark.id.clone());
    }

    for participant in registry.iter() {
        let backing_count = store
            .backings()
            .iter()
            .filter(|b| b.backer_id == participant.id)
            .count();
        let created_count = store.iter().filter(|s| s.creator_id == participant.id).count();

        if backing_count > 0 || created_count > 0 {
            nodes.push(GraphNode {
                id: participant.id.clone(),
                name: participant.display_name.clone(),
                kind: GraphNodeKind::Participant,
                activity: (backing_count + created_count) as u64,
                raised: None,
                goal: None,
                status: None,
                verified: Some(participant.verified),
            });
            node_ids.insert(participant.id.clone());
        }
    }

    for spark in store.iter() {
        if node_ids.contains(&spark.creator_id) {
            links.push(GraphLink {
                source: spark.creator_id.clone(),
                target: spark.id.clone(),
                amount: policy.creator_link_weight,
                created_at: spark.created_at,
            });
        }
    }

    for backing in store.backings() {
        if node_ids.contains(&backing.backer_id) && node_ids.contains(&backing.spark_id) {
            links.push(GraphLink {
                source: backing.backer_id.clone(),
                target: backing.spark_id.clone(),
                amount: backing.amount,
                created_at: backing.created_at,
            });
        }
    }

    GraphData { nodes, links }
}

fn ellipsize(title: &str) -> String {
    if title.chars().count() > LABEL_MAX_CHARS {
        let truncated: String = title.chars().take(LABEL_MAX_CHARS).collect();
        format!("{truncated}…")
    } else {
        title.to_owned()
    }
}
