//! # End-to-End Operation Flows
//!
//! Exercises the full operation surface through `IgniteApi`, the way a host
//! runtime drives it: registration, campaign creation, pledging, ignition,
//! and the rejection paths, each asserting the state the next caller would
//! observe.

#[cfg(test)]
mod tests {
    use ignite_core::{IgniteApi, IgniteService};
    use shared_types::entities::{SparkFilter, SparkStatus};
    use shared_types::errors::SparkError;
    use shared_types::policy::CorePolicy;

    fn service() -> IgniteService {
        IgniteService::new(CorePolicy::default())
    }

    fn register_all(svc: &IgniteService, names: &[(&str, &str)]) {
        for (id, name) in names {
            svc.register(id, name);
        }
    }

    #[test]
    fn test_single_pledge_flow() {
        let svc = service();
        register_all(&svc, &[("alice", "Alice"), ("bob", "Bob")]);

        let spark = svc
            .create_spark("alice", "Solar Oven Kits", "Build solar ovens for the block", 20, "cause")
            .unwrap();

        let backing = svc.back_spark(&spark.id, "bob", 5, None, None).unwrap();
        assert_eq!(backing.amount, 5);

        let spark = svc.get_spark(&spark.id).unwrap();
        assert_eq!(spark.raised, 5);
        assert_eq!(spark.backer_ids, vec!["bob".to_owned()]);
        assert_eq!(spark.status, SparkStatus::Active);
        assert_eq!(svc.balance_of("bob"), 5);
    }

    #[test]
    fn test_quorum_ignition_flow() {
        let svc = service();
        register_all(
            &svc,
            &[
                ("alice", "Alice"),
                ("bob", "Bob"),
                ("carol", "Carol"),
                ("dave", "Dave"),
            ],
        );
        let spark = svc
            .create_spark("alice", "Solar Oven Kits", "Build solar ovens for the block", 20, "cause")
            .unwrap();

        svc.back_spark(&spark.id, "bob", 1, None, None).unwrap();
        svc.back_spark(&spark.id, "carol", 1, None, None).unwrap();
        assert_eq!(svc.get_spark(&spark.id).unwrap().status, SparkStatus::Active);

        svc.back_spark(&spark.id, "dave", 1, None, None).unwrap();

        let ignited = svc.get_spark(&spark.id).unwrap();
        assert_eq!(ignited.status, SparkStatus::Ignited);
        assert!(ignited.ignited_at.is_some());
        // Displayed figure normalized to the goal at ignition
        assert_eq!(ignited.raised, 20);
    }

    #[test]
    fn test_insufficient_funds_leaves_state_untouched() {
        let svc = service();
        register_all(&svc, &[("alice", "Alice"), ("bob", "Bob")]);
        let spark = svc
            .create_spark("alice", "Solar Oven Kits", "Build solar ovens for the block", 20, "cause")
            .unwrap();

        svc.back_spark(&spark.id, "bob", 7, None, None).unwrap();
        let before = svc.get_spark(&spark.id).unwrap();

        let err = svc.back_spark(&spark.id, "bob", 5, None, None).unwrap_err();
        assert_eq!(
            err,
            SparkError::InsufficientFunds {
                required: 5,
                available: 3
            }
        );

        let after = svc.get_spark(&spark.id).unwrap();
        assert_eq!(after.raised, before.raised);
        assert_eq!(after.backer_ids, before.backer_ids);
        assert_eq!(svc.balance_of("bob"), 3);
    }

    #[test]
    fn test_creator_cannot_back_own_spark() {
        let svc = service();
        svc.register("alice", "Alice");
        let spark = svc
            .create_spark("alice", "Solar Oven Kits", "Build solar ovens for the block", 20, "cause")
            .unwrap();

        let err = svc.back_spark(&spark.id, "alice", 5, None, None).unwrap_err();
        assert_eq!(err, SparkError::SelfBackingForbidden);
        assert_eq!(svc.balance_of("alice"), 10);
        assert_eq!(svc.get_spark(&spark.id).unwrap().raised, 0);
    }

    #[test]
    fn test_pledge_against_ignited_spark_rejected() {
        let svc = service();
        register_all(
            &svc,
            &[
                ("alice", "Alice"),
                ("bob", "Bob"),
                ("carol", "Carol"),
                ("dave", "Dave"),
                ("erin", "Erin"),
            ],
        );
        let spark = svc
            .create_spark("alice", "Solar Oven Kits", "Build solar ovens for the block", 20, "cause")
            .unwrap();
        for backer in ["bob", "carol", "dave"] {
            svc.back_spark(&spark.id, backer, 2, None, None).unwrap();
        }

        let raised_before = svc.get_spark(&spark.id).unwrap().raised;
        let err = svc.back_spark(&spark.id, "erin", 2, None, None).unwrap_err();
        assert!(matches!(err, SparkError::SparkNotActive(_)));
        assert_eq!(svc.balance_of("erin"), 10);
        assert_eq!(svc.get_spark(&spark.id).unwrap().raised, raised_before);
    }

    #[test]
    fn test_unregistered_callers_rejected() {
        let svc = service();
        svc.register("alice", "Alice");
        let spark = svc
            .create_spark("alice", "Solar Oven Kits", "Build solar ovens for the block", 20, "cause")
            .unwrap();

        let err = svc
            .create_spark("ghost", "Phantom", "A spark from nowhere at all", 20, "other")
            .unwrap_err();
        assert_eq!(err, SparkError::NotRegistered("ghost".into()));

        let err = svc.back_spark(&spark.id, "ghost", 5, None, None).unwrap_err();
        assert_eq!(err, SparkError::NotRegistered("ghost".into()));
    }

    #[test]
    fn test_validation_rejections_on_create() {
        let svc = service();
        svc.register("alice", "Alice");

        assert!(matches!(
            svc.create_spark("alice", "ab", "A long enough description", 20, "tech"),
            Err(SparkError::TitleTooShort { .. })
        ));
        assert!(matches!(
            svc.create_spark("alice", "Fine Title", "short", 20, "tech"),
            Err(SparkError::DescriptionTooShort { .. })
        ));
        assert!(matches!(
            svc.create_spark("alice", "Fine Title", "A long enough description", 101, "tech"),
            Err(SparkError::GoalOutOfRange { goal: 101, .. })
        ));
        assert!(matches!(
            svc.create_spark("alice", "Fine Title", "A long enough description", 4, "tech"),
            Err(SparkError::GoalOutOfRange { goal: 4, .. })
        ));
    }

    #[test]
    fn test_pledge_amount_bounds() {
        let svc = service();
        register_all(&svc, &[("alice", "Alice"), ("bob", "Bob")]);
        let spark = svc
            .create_spark("alice", "Solar Oven Kits", "Build solar ovens for the block", 20, "cause")
            .unwrap();

        assert!(matches!(
            svc.back_spark(&spark.id, "bob", 0, None, None),
            Err(SparkError::AmountOutOfRange { amount: 0, .. })
        ));
        assert!(matches!(
            svc.back_spark(&spark.id, "bob", 11, None, None),
            Err(SparkError::AmountOutOfRange { amount: 11, .. })
        ));
        // Bounds are inclusive
        svc.back_spark(&spark.id, "bob", 1, None, None).unwrap();
    }

    #[test]
    fn test_listing_filters() {
        let svc = service();
        register_all(
            &svc,
            &[
                ("alice", "Alice"),
                ("bob", "Bob"),
                ("carol", "Carol"),
                ("dave", "Dave"),
            ],
        );
        let first = svc
            .create_spark("alice", "Solar Oven Kits", "Build solar ovens for the block", 20, "cause")
            .unwrap();
        let second = svc
            .create_spark("bob", "Mural Restoration", "Restore the harbor mural downtown", 15, "art")
            .unwrap();
        for backer in ["bob", "carol", "dave"] {
            svc.back_spark(&first.id, backer, 1, None, None).unwrap();
        }

        let all = svc.list_sparks(SparkFilter::All);
        let ids: Vec<_> = all.iter().map(|s| s.id.as_str()).collect();
        // Newest first
        assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);

        let active = svc.list_sparks(SparkFilter::Active);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, second.id);

        let ignited = svc.list_sparks(SparkFilter::Ignited);
        assert_eq!(ignited.len(), 1);
        assert_eq!(ignited[0].id, first.id);
    }

    #[test]
    fn test_participant_stats_across_operations() {
        let svc = service();
        register_all(&svc, &[("alice", "Alice"), ("bob", "Bob")]);
        let first = svc
            .create_spark("alice", "Solar Oven Kits", "Build solar ovens for the block", 20, "cause")
            .unwrap();
        let second = svc
            .create_spark("alice", "Mural Restoration", "Restore the harbor mural downtown", 15, "art")
            .unwrap();

        svc.back_spark(&first.id, "bob", 3, None, None).unwrap();
        svc.back_spark(&first.id, "bob", 2, None, None).unwrap();
        svc.back_spark(&second.id, "bob", 1, None, None).unwrap();

        let stats = svc.participant_stats("bob");
        assert_eq!(stats.balance, 4);
        assert_eq!(stats.sparks_created, 0);
        // Two distinct sparks backed across three pledges
        assert_eq!(stats.sparks_backed, 2);
        assert_eq!(stats.total_contributed, 6);
    }

    #[tokio::test]
    async fn test_runtime_hosts_seeded_service() {
        let runtime = node_runtime::NodeRuntime::new(node_runtime::NodeConfig::default());
        runtime.start().await.unwrap();

        let svc = runtime.service();
        let sparks = svc.list_sparks(SparkFilter::All);
        assert_eq!(sparks.len(), 4);
        assert!(sparks.iter().any(|s| s.status == SparkStatus::Ignited));

        runtime.shutdown().await;
    }
}
