//! # Insight Summarizer
//!
//! Lightweight heuristic signals derived from current state, recomputed on
//! every read. Advisory display content only: nothing in the core depends on
//! these thresholds or scores.

use super::campaigns::CampaignStore;
use shared_types::entities::{
    Insight, InsightKind, InsightReport, SparkStatus, Timestamp, TrendDirection,
};

/// Maximum insights returned per report.
const MAX_INSIGHTS: usize = 5;

/// Confidence for near-ignition insights.
const NEAR_IGNITION_CONFIDENCE: f32 = 0.95;

/// Confidence for new-spark insights.
const NEW_SPARK_CONFIDENCE: f32 = 0.7;

/// Momentum bonus per active spark.
const ACTIVE_SPARK_BONUS: u64 = 10;

/// Backing counts above these bucket the trend as rising / stable.
const RISING_BACKINGS: usize = 5;
const STABLE_BACKINGS: usize = 2;

/// Derives the insight report from current state.
///
/// Near-ignition sparks are flagged first, then zero-backer sparks, in
/// creation order; the list is capped at 5.
#[must_use]
pub fn derive_insights(store: &CampaignStore, quorum: usize, now: Timestamp) -> InsightReport {
    let mut insights = Vec::new();

    for spark in store.iter() {
        if !spark.is_active() {
            continue;
        }
        if quorum.saturating_sub(spark.backer_ids.len()) == 1 {
            let percent = if spark.goal > 0 {
                (spark.raised * 100 + spark.goal / 2) / spark.goal
            } else {
                0
            };
            insights.push(Insight {
                id: format!("near_{}", spark.id),
                kind: InsightKind::AlmostIgnited,
                message: format!(
                    "\"{}\" needs just 1 more backer to ignite! {}% funded.",
                    spark.title, percent
                ),
                confidence: NEAR_IGNITION_CONFIDENCE,
                spark_id: Some(spark.id.clone()),
                created_at: now,
            });
        }
    }

    for spark in store.iter() {
        if spark.is_active() && spark.backer_ids.is_empty() {
            insights.push(Insight {
                id: format!("new_{}", spark.id),
                kind: InsightKind::NewSpark,
                message: format!("\"{}\" just launched! Be the first to back it.", spark.title),
                confidence: NEW_SPARK_CONFIDENCE,
                spark_id: Some(spark.id.clone()),
                created_at: now,
            });
        }
    }
    insights.truncate(MAX_INSIGHTS);

    let total = store.len();
    let ignited = store
        .iter()
        .filter(|s| s.status == SparkStatus::Ignited)
        .count();
    let active = store.iter().filter(|s| s.is_active()).count();

    let ignited_ratio = if total == 0 {
        0
    } else {
        // Rounded percentage, half up
        (ignited as u64 * 100 + total as u64 / 2) / total as u64
    };
    let momentum_score = (ignited_ratio + active as u64 * ACTIVE_SPARK_BONUS).min(100) as u8;

    let backings = store.backings().len();
    let trend = if backings > RISING_BACKINGS {
        TrendDirection::Rising
    } else if backings > STABLE_BACKINGS {
        TrendDirection::Stable
    } else {
        TrendDirection::Falling
    };

    InsightReport {
        insights,
        last_analysis: now,
        momentum_score,
        trend,
    }
}
