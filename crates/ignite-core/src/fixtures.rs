//! # Demo Fixtures
//!
//! Seeds a small believable community into an empty service by replaying
//! ordinary operations, so every derived view (balances, feed, graph,
//! insights) stays consistent with the ledger instead of being injected
//! behind its back.

use crate::ports::api::IgniteApi;
use crate::service::IgniteService;
use shared_types::errors::SparkError;
use tracing::info;

/// Seeds the demo participants, sparks, and backings.
///
/// No-op when the service already holds state, so a restored snapshot is
/// never polluted. The pledge sequence is chosen so the garden spark
/// ignites on its third distinct backer.
///
/// # Errors
///
/// Propagates any rejected operation; with an empty service and the default
/// policy the replay always succeeds.
pub fn seed_demo_data(service: &IgniteService) -> Result<(), SparkError> {
    if !service.is_empty() {
        return Ok(());
    }

    for (id, name) in [
        ("alien_s01", "Nova"),
        ("alien_s02", "Kai"),
        ("alien_s03", "Sage"),
        ("alien_s04", "River"),
        ("alien_s05", "Ember"),
        ("alien_s06", "Atlas"),
    ] {
        service.register(id, name);
    }

    let music = service.create_spark(
        "alien_s01",
        "AI Music Video for Indie Artists",
        "Fund AI-generated music videos for 3 independent musicians who can't afford \
         traditional production. Verified humans vote on which artists get selected.",
        25,
        "art",
    )?;
    let garden = service.create_spark(
        "alien_s03",
        "Community Garden Drone Mapping",
        "Use AI + drone footage to map and optimize 5 community gardens in SF. All \
         participants verified, no corporate astroturfing.",
        15,
        "cause",
    )?;
    let tutor = service.create_spark(
        "alien_s05",
        "Open-Source AI Tutor for Kids",
        "Build a free AI tutoring app for underserved schools. Needs funding for API \
         costs. Every backer is a verified human who believes in education equity.",
        30,
        "tech",
    )?;
    let skillshare = service.create_spark(
        "alien_s04",
        "Neighborhood Skill-Share Platform",
        "Create a hyper-local platform where verified neighbors teach each other \
         skills: cooking, coding, carpentry. Trust starts with real identity.",
        20,
        "community",
    )?;

    let pledges = [
        (&music, "alien_s02", 5, Some("Art needs to be accessible")),
        (&music, "alien_s03", 8, Some("Love this idea!")),
        (&garden, "alien_s01", 5, None),
        (&garden, "alien_s02", 5, None),
        // Third distinct backer, ignites the garden spark
        (&garden, "alien_s04", 5, None),
        (&tutor, "alien_s06", 8, Some("Education is everything")),
        (&skillshare, "alien_s01", 5, None),
    ];
    for (spark, backer, amount, note) in pledges {
        service.back_spark(&spark.id, backer, amount, note.map(str::to_owned), None)?;
    }

    info!(
        participants = 6,
        sparks = 4,
        backings = pledges.len(),
        "Demo data seeded"
    );
    Ok(())
}
