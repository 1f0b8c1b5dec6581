//! Unit tests for courier-graph.
//!
//! All graphs are hand-crafted snapshots; no network data is required.

mod helpers {
    use courier_core::{RoadSnapshot, Street};

    use crate::RoadGraph;

    pub fn snapshot(points: &[[f64; 2]], streets: &[([f64; 2], [f64; 2])]) -> RoadSnapshot {
        RoadSnapshot {
            points: points.to_vec(),
            streets: streets
                .iter()
                .map(|&(start, end)| Street { start, end })
                .collect(),
        }
    }

    /// Triangle map: three points with streets connecting all pairs.
    ///
    /// Nodes: 0:(0,0)  1:(10,0)  2:(0,10)
    pub fn triangle() -> RoadGraph {
        RoadGraph::build(&snapshot(
            &[[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]],
            &[
                ([0.0, 0.0], [10.0, 0.0]),
                ([10.0, 0.0], [0.0, 10.0]),
                ([0.0, 10.0], [0.0, 0.0]),
            ],
        ))
    }

    /// Corridor with a long detour:
    ///
    /// ```text
    ///   3:(0,15)────────4:(20,10)
    ///   │                 │
    ///   0:(0,0)─1:(10,0)─2:(20,0)
    /// ```
    ///
    /// Shortest 0→4 is 0→1→2→4 (30.0); the 0→3→4 detour costs ~35.6.
    pub fn corridor() -> RoadGraph {
        RoadGraph::build(&snapshot(
            &[
                [0.0, 0.0],
                [10.0, 0.0],
                [20.0, 0.0],
                [0.0, 15.0],
                [20.0, 10.0],
            ],
            &[
                ([0.0, 0.0], [10.0, 0.0]),
                ([10.0, 0.0], [20.0, 0.0]),
                ([20.0, 0.0], [20.0, 10.0]),
                ([0.0, 0.0], [0.0, 15.0]),
                ([0.0, 15.0], [20.0, 10.0]),
            ],
        ))
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

mod build {
    use courier_core::{NodeId, Point};

    use super::helpers::{snapshot, triangle};
    use crate::RoadGraph;

    #[test]
    fn empty_snapshot_builds_empty_graph() {
        let graph = RoadGraph::build(&snapshot(&[], &[]));
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn one_node_per_input_point_at_its_index() {
        let graph = triangle();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.node_pos(NodeId(1)).unwrap(), Point::new(10.0, 0.0));
        // Each street contributes a symmetric arc pair.
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn street_endpoint_within_tolerance_dedups_to_existing_node() {
        // Endpoint (10.05, 0.02) is within 0.1 per axis of node 1 (10, 0).
        let graph = RoadGraph::build(&snapshot(
            &[[0.0, 0.0], [10.0, 0.0]],
            &[([0.0, 0.0], [10.05, 0.02])],
        ));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn unknown_street_endpoint_appends_node() {
        let graph = RoadGraph::build(&snapshot(
            &[[0.0, 0.0]],
            &[([0.0, 0.0], [50.0, 50.0])],
        ));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node_pos(NodeId(1)).unwrap(), Point::new(50.0, 50.0));
    }

    #[test]
    fn adjacency_is_symmetric_with_equal_weights() {
        // Duplicate one street to also cover parallel arcs.
        let graph = RoadGraph::build(&snapshot(
            &[[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]],
            &[
                ([0.0, 0.0], [10.0, 0.0]),
                ([0.0, 0.0], [10.0, 0.0]),
                ([10.0, 0.0], [0.0, 10.0]),
            ],
        ));
        for u in 0..graph.node_count() {
            for &(v, w) in graph.neighbors(NodeId(u as u32)) {
                let back = graph
                    .neighbors(v)
                    .iter()
                    .any(|&(n, bw)| n == NodeId(u as u32) && bw == w);
                assert!(back, "arc {u}→{v} has no mirror");
            }
        }
    }

    #[test]
    fn duplicate_streets_do_not_change_shortest_distance() {
        let plain = RoadGraph::build(&snapshot(
            &[[0.0, 0.0], [10.0, 0.0]],
            &[([0.0, 0.0], [10.0, 0.0])],
        ));
        let doubled = RoadGraph::build(&snapshot(
            &[[0.0, 0.0], [10.0, 0.0]],
            &[([0.0, 0.0], [10.0, 0.0]), ([0.0, 0.0], [10.0, 0.0])],
        ));
        let algorithm = courier_core::Algorithm::AStar;
        let a = plain.shortest_path(NodeId(0), NodeId(1), algorithm).unwrap();
        let b = doubled.shortest_path(NodeId(0), NodeId(1), algorithm).unwrap();
        assert_eq!(a.distance, b.distance);
    }
}

// ── Nearest node ──────────────────────────────────────────────────────────────

mod nearest {
    use courier_core::{NodeId, Point};

    use super::helpers::{snapshot, triangle};
    use crate::{GraphError, RoadGraph};

    #[test]
    fn exact_position_wins() {
        let graph = triangle();
        assert_eq!(graph.nearest_node(Point::new(0.0, 0.0)).unwrap(), NodeId(0));
    }

    #[test]
    fn nearest_by_euclidean_distance() {
        let graph = triangle();
        assert_eq!(graph.nearest_node(Point::new(8.0, 1.0)).unwrap(), NodeId(1));
        assert_eq!(graph.nearest_node(Point::new(1.0, 9.0)).unwrap(), NodeId(2));
    }

    #[test]
    fn ties_break_to_lowest_id() {
        // Nodes 1 and 2 are equidistant from (6, 6); node 1 has the lower id.
        let graph = triangle();
        assert_eq!(graph.nearest_node(Point::new(6.0, 6.0)).unwrap(), NodeId(1));
    }

    #[test]
    fn empty_graph_is_reported() {
        let graph = RoadGraph::build(&snapshot(&[], &[]));
        assert!(matches!(
            graph.nearest_node(Point::new(0.0, 0.0)),
            Err(GraphError::EmptyGraph)
        ));
    }
}

// ── Node-level search ─────────────────────────────────────────────────────────

mod search {
    use courier_core::{Algorithm, NodeId};

    use super::helpers::{corridor, snapshot};
    use crate::{GraphError, RoadGraph};

    #[test]
    fn same_node_is_trivial_without_search() {
        let graph = corridor();
        let path = graph
            .shortest_path(NodeId(3), NodeId(3), Algorithm::AStar)
            .unwrap();
        assert!(path.is_trivial());
        assert_eq!(path.nodes, vec![NodeId(3)]);
        assert_eq!(path.distance, 0.0);
    }

    #[test]
    fn astar_picks_the_short_side() {
        let graph = corridor();
        let path = graph
            .shortest_path(NodeId(0), NodeId(4), Algorithm::AStar)
            .unwrap();
        assert_eq!(
            path.nodes,
            vec![NodeId(0), NodeId(1), NodeId(2), NodeId(4)]
        );
        assert!((path.distance - 30.0).abs() < 1e-9);
    }

    #[test]
    fn astar_and_dijkstra_distances_agree() {
        // The A* heuristic is admissible, so both must be optimal.
        let graph = corridor();
        for from in 0..graph.node_count() as u32 {
            for to in 0..graph.node_count() as u32 {
                let a = graph
                    .shortest_path(NodeId(from), NodeId(to), Algorithm::AStar)
                    .unwrap();
                let d = graph
                    .shortest_path(NodeId(from), NodeId(to), Algorithm::Dijkstra)
                    .unwrap();
                assert!(
                    (a.distance - d.distance).abs() < 1e-9,
                    "distance mismatch for {from}→{to}"
                );
            }
        }
    }

    #[test]
    fn unreachable_goal_is_no_route_not_fatal() {
        // Two islands with no street between them.
        let graph = RoadGraph::build(&snapshot(
            &[[0.0, 0.0], [10.0, 0.0], [100.0, 100.0], [110.0, 100.0]],
            &[
                ([0.0, 0.0], [10.0, 0.0]),
                ([100.0, 100.0], [110.0, 100.0]),
            ],
        ));
        let result = graph.shortest_path(NodeId(0), NodeId(2), Algorithm::Dijkstra);
        assert!(matches!(result, Err(GraphError::NoRoute { .. })));
    }

    #[test]
    fn out_of_range_node_is_rejected() {
        let graph = corridor();
        let result = graph.shortest_path(NodeId(0), NodeId(99), Algorithm::AStar);
        assert!(matches!(result, Err(GraphError::NodeNotFound(_))));
    }
}

// ── Point-level paths ─────────────────────────────────────────────────────────

mod paths {
    use courier_core::{Algorithm, Point};

    use super::helpers::{corridor, snapshot, triangle};
    use crate::RoadGraph;

    #[test]
    fn same_point_is_a_zero_distance_single_point_path() {
        // Holds for any point, even one far from every node.
        let graph = triangle();
        for p in [Point::new(0.0, 0.0), Point::new(500.0, -3.0)] {
            let path = graph.find_path(p, p, Algorithm::AStar).unwrap();
            assert_eq!(path.points, vec![p]);
            assert_eq!(path.distance, 0.0);
        }
    }

    #[test]
    fn endpoints_on_nodes_are_not_spliced() {
        let graph = corridor();
        let path = graph
            .find_path(Point::new(0.0, 0.0), Point::new(20.0, 0.0), Algorithm::AStar)
            .unwrap();
        assert_eq!(
            path.points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(20.0, 0.0)
            ]
        );
        assert!((path.distance - 20.0).abs() < 1e-9);
    }

    #[test]
    fn off_node_endpoints_are_spliced_back_in() {
        let graph = corridor();
        let start = Point::new(0.0, -5.0); // 5 below node 0
        let goal = Point::new(25.0, 0.0); //  5 right of node 2
        let path = graph.find_path(start, goal, Algorithm::AStar).unwrap();

        // Path starts and ends at the literal coordinates.
        assert_eq!(path.points.first(), Some(&start));
        assert_eq!(path.points.last(), Some(&goal));
        // Snap legs are added to the distance: 5 + 20 + 5.
        assert!((path.distance - 30.0).abs() < 1e-9);
    }

    #[test]
    fn route_distance_sums_legs() {
        let graph = corridor();
        let waypoints = [
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(20.0, 10.0),
        ];
        let total = graph.route_distance(&waypoints, Algorithm::AStar);
        assert!((total - 30.0).abs() < 1e-9);
    }

    #[test]
    fn disconnected_leg_degrades_to_straight_line() {
        let graph = RoadGraph::build(&snapshot(
            &[[0.0, 0.0], [10.0, 0.0], [100.0, 0.0], [110.0, 0.0]],
            &[
                ([0.0, 0.0], [10.0, 0.0]),
                ([100.0, 0.0], [110.0, 0.0]),
            ],
        ));
        // Leg 1 has a graph path (10); leg 2 crosses the gap and falls back
        // to the straight line (90).  The route never aborts.
        let total = graph.route_distance(
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(100.0, 0.0),
            ],
            Algorithm::AStar,
        );
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn leg_distance_on_empty_graph_is_straight_line() {
        let graph = RoadGraph::empty();
        let d = graph.leg_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0), Algorithm::AStar);
        assert_eq!(d, 5.0);
    }
}
