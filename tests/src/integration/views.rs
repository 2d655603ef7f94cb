//! # Derived Views
//!
//! The read-side projections over live state: activity feed ordering and
//! pagination, relationship graph shape, and the insight report.

#[cfg(test)]
mod tests {
    use ignite_core::{IgniteApi, IgniteService};
    use shared_types::entities::{FeedKind, GraphNodeKind, InsightKind, TrendDirection};
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
    fn test_feed_is_newest_first_and_paginated() {
        let svc = service();
        register_all(&svc, &[("p01", "Nova"), ("p02", "Kai")]);
        let spark = svc
            .create_spark("p01", "Tool Library", "Shared workshop tools for the street", 20, "community")
            .unwrap();
        for _ in 0..4 {
            svc.back_spark(&spark.id, "p02", 1, None, None).unwrap();
        }

        let full = svc.get_feed(100);
        assert_eq!(full.len(), 5);
        assert_eq!(full.last().unwrap().kind, FeedKind::SparkCreated);
        assert!(full[..4].iter().all(|i| i.kind == FeedKind::BackingMade));

        let page = svc.get_feed(2);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, full[0].id);
    }

    #[test]
    fn test_feed_ignition_entry_attributed_to_community() {
        let svc = service();
        register_all(
            &svc,
            &[("p01", "Nova"), ("p02", "Kai"), ("p03", "Sage"), ("p04", "River")],
        );
        let spark = svc
            .create_spark("p01", "Tool Library", "Shared workshop tools for the street", 20, "community")
            .unwrap();
        for backer in ["p02", "p03", "p04"] {
            svc.back_spark(&spark.id, backer, 1, None, None).unwrap();
        }

        let feed = svc.get_feed(10);
        assert_eq!(feed[0].kind, FeedKind::SparkIgnited);
        assert_eq!(feed[0].actor_name, "Community");
        assert!(feed[0].amount.is_none());
    }

    #[test]
    fn test_graph_shape_with_repeat_backer() {
        let svc = service();
        register_all(
            &svc,
            &[("p01", "Nova"), ("p02", "Kai"), ("p03", "Sage"), ("idle", "River")],
        );
        let spark = svc
            .create_spark("p01", "Tool Library", "Shared workshop tools for the street", 20, "community")
            .unwrap();
        svc.back_spark(&spark.id, "p02", 3, None, None).unwrap();
        svc.back_spark(&spark.id, "p02", 4, None, None).unwrap();
        svc.back_spark(&spark.id, "p03", 2, None, None).unwrap();

        let graph = svc.build_graph();

        // Spark + creator + two backers; the idle participant has no node
        assert_eq!(graph.nodes.len(), 4);
        assert!(!graph.nodes.iter().any(|n| n.id == "idle"));
        assert_eq!(
            graph.nodes.iter().filter(|n| n.kind == GraphNodeKind::Spark).count(),
            1
        );

        // One creator edge plus one edge per pledge, repeat backer included
        assert_eq!(graph.links.len(), 4);
        let repeat_amounts: Vec<_> = graph
            .links
            .iter()
            .filter(|l| l.source == "p02")
            .map(|l| l.amount)
            .collect();
        assert_eq!(repeat_amounts, vec![3, 4]);

        let creator_edge = graph.links.iter().find(|l| l.source == "p01").unwrap();
        assert_eq!(creator_edge.amount, svc.policy().creator_link_weight);
    }

    #[test]
    fn test_insights_flag_near_quorum_and_fresh_sparks() {
        let svc = service();
        register_all(
            &svc,
            &[("p01", "Nova"), ("p02", "Kai"), ("p03", "Sage")],
        );
        let near = svc
            .create_spark("p01", "Tool Library", "Shared workshop tools for the street", 20, "community")
            .unwrap();
        svc.back_spark(&near.id, "p02", 5, None, None).unwrap();
        svc.back_spark(&near.id, "p03", 5, None, None).unwrap();

        let fresh = svc
            .create_spark("p02", "Creek Cleanup", "Gloves, bags, and a skip for the creek", 10, "cause")
            .unwrap();

        let report = svc.get_insights();
        assert_eq!(report.insights.len(), 2);

        let near_insight = report
            .insights
            .iter()
            .find(|i| i.spark_id.as_deref() == Some(near.id.as_str()))
            .unwrap();
        assert_eq!(near_insight.kind, InsightKind::AlmostIgnited);
        assert!(near_insight.message.contains("1 more backer"));
        assert!(near_insight.message.contains("50% funded"));

        let fresh_insight = report
            .insights
            .iter()
            .find(|i| i.spark_id.as_deref() == Some(fresh.id.as_str()))
            .unwrap();
        assert_eq!(fresh_insight.kind, InsightKind::NewSpark);
        assert!(fresh_insight.confidence < near_insight.confidence);
    }

    #[test]
    fn test_insight_report_momentum_and_trend() {
        let svc = service();
        register_all(
            &svc,
            &[("p01", "Nova"), ("p02", "Kai"), ("p03", "Sage"), ("p04", "River")],
        );
        let spark = svc
            .create_spark("p01", "Tool Library", "Shared workshop tools for the street", 20, "community")
            .unwrap();

        // Two backings: stable territory
        svc.back_spark(&spark.id, "p02", 1, None, None).unwrap();
        svc.back_spark(&spark.id, "p03", 1, None, None).unwrap();
        assert_eq!(svc.get_insights().trend, TrendDirection::Falling);

        svc.back_spark(&spark.id, "p02", 1, None, None).unwrap();
        assert_eq!(svc.get_insights().trend, TrendDirection::Stable);

        let report = svc.get_insights();
        assert!(report.momentum_score > 0);
        assert!(report.momentum_score <= 100);
    }

    #[test]
    fn test_trend_rises_under_heavy_backing() {
        let svc = IgniteService::new(CorePolicy::for_testing());
        register_all(&svc, &[("p01", "Nova"), ("p02", "Kai"), ("p03", "Sage")]);
        let spark = svc
            .create_spark("p01", "Tool Library", "Shared workshop tools for the street", 20, "community")
            .unwrap();

        // Six pledges from two backers: plenty of activity, no quorum
        for _ in 0..3 {
            svc.back_spark(&spark.id, "p02", 2, None, None).unwrap();
            svc.back_spark(&spark.id, "p03", 2, None, None).unwrap();
        }

        let report = svc.get_insights();
        assert_eq!(report.trend, TrendDirection::Rising);
        assert_eq!(svc.get_spark(&spark.id).unwrap().backer_count(), 2);
    }
}
