//! Unit tests for courier-core.

// ── Geometry ──────────────────────────────────────────────────────────────────

mod geometry {
    use crate::point::{normalize_angle, path_length};
    use crate::Point;

    #[test]
    fn euclidean_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn manhattan_distance() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, -2.0);
        assert_eq!(a.manhattan_distance(b), 7.0);
    }

    #[test]
    fn angle_to_cardinal_directions() {
        let o = Point::new(0.0, 0.0);
        assert_eq!(o.angle_to(Point::new(1.0, 0.0)), 0.0);
        assert!((o.angle_to(Point::new(0.0, 1.0)) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn normalize_angle_wraps_into_range() {
        use std::f64::consts::PI;
        let a = normalize_angle(3.0 * PI);
        assert!((-PI..=PI).contains(&a));
        assert!((a.abs() - PI).abs() < 1e-12);
        assert_eq!(normalize_angle(0.5), 0.5);
    }

    #[test]
    fn approx_eq_uses_per_axis_tolerance() {
        let a = Point::new(10.0, 10.0);
        assert!(a.approx_eq(Point::new(10.05, 9.95)));
        // One axis out of tolerance is enough to distinguish the points.
        assert!(!a.approx_eq(Point::new(10.05, 10.2)));
    }

    #[test]
    fn path_length_sums_segments() {
        let path = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 10.0),
        ];
        assert_eq!(path_length(&path), 11.0);
        assert_eq!(path_length(&path[..1]), 0.0);
        assert_eq!(path_length(&[]), 0.0);
    }
}

// ── Ids ───────────────────────────────────────────────────────────────────────

mod ids {
    use crate::{NodeId, PackageId};

    #[test]
    fn index_and_sentinel() {
        assert_eq!(NodeId(7).index(), 7);
        assert_eq!(NodeId::INVALID, NodeId(u32::MAX));
        assert_ne!(PackageId::INVALID, PackageId(0));
    }

    #[test]
    fn ordering_follows_inner_value() {
        assert!(PackageId(1) < PackageId(2));
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

mod config {
    use crate::{Algorithm, PlannerConfig, SelectionStrategy};

    #[test]
    fn defaults_match_competition_tuning() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.reward_weight, 1.0);
        assert_eq!(cfg.distance_weight, 0.1);
        assert_eq!(cfg.max_packages_per_trip, 3);
        assert_eq!(cfg.algorithm, Algorithm::AStar);
        assert_eq!(cfg.strategy, SelectionStrategy::Greedy);
        assert_eq!(cfg.exact_order_threshold, 3);
    }

    #[test]
    fn partial_json_overrides_defaults() {
        let cfg: PlannerConfig =
            serde_json::from_str(r#"{"distance_weight": 0.5, "strategy": "Density"}"#).unwrap();
        assert_eq!(cfg.distance_weight, 0.5);
        assert_eq!(cfg.strategy, SelectionStrategy::Density);
        assert_eq!(cfg.reward_weight, 1.0);
    }
}

// ── Snapshots ─────────────────────────────────────────────────────────────────

mod snapshots {
    use crate::snapshot::parse_packages;
    use crate::{PackageId, Point, RoadSnapshot, SnapshotError, VehicleSnapshot};

    #[test]
    fn road_snapshot_parses() {
        let body = r#"{
            "points": [[0.0, 0.0], [10.0, 0.0]],
            "streets": [{"start": [0.0, 0.0], "end": [10.0, 0.0]}]
        }"#;
        let snap = RoadSnapshot::from_json(body).unwrap();
        assert_eq!(snap.points.len(), 2);
        assert_eq!(snap.streets.len(), 1);
        assert_eq!(snap.streets[0].end_point(), Point::new(10.0, 0.0));
    }

    #[test]
    fn road_snapshot_fields_default_to_empty() {
        let snap = RoadSnapshot::from_json("{}").unwrap();
        assert!(snap.points.is_empty());
        assert!(snap.streets.is_empty());
    }

    #[test]
    fn packages_parse_with_optional_fields() {
        let body = r#"{
            "3": {"position": [1.0, 2.0], "dropoff": [5.0, 6.0], "reward": 250.0},
            "7": {"position": [9.0, 9.0]}
        }"#;
        let pkgs = parse_packages(body).unwrap();
        assert_eq!(pkgs.len(), 2);
        assert_eq!(pkgs[0].0, PackageId(3));
        assert_eq!(pkgs[0].1.reward, Some(250.0));
        assert!(pkgs[1].1.dropoff.is_none());
        assert!(pkgs[1].1.reward.is_none());
    }

    #[test]
    fn non_numeric_package_id_is_rejected() {
        let body = r#"{"abc": {"position": [0.0, 0.0]}}"#;
        let err = parse_packages(body).unwrap_err();
        assert!(matches!(err, SnapshotError::InvalidPackageId(_)));
    }

    #[test]
    fn vehicle_state_gates_on_stop_only() {
        let stopped =
            VehicleSnapshot::from_json(r#"{"position": [1.0, 1.0], "state": "STOP"}"#).unwrap();
        assert!(stopped.is_stopped());
        assert_eq!(stopped.position_point(), Point::new(1.0, 1.0));

        // Any other tag counts as running.
        let moving =
            VehicleSnapshot::from_json(r#"{"position": [1.0, 1.0], "state": "RUNNING_FAST"}"#)
                .unwrap();
        assert!(!moving.is_stopped());
    }
}
